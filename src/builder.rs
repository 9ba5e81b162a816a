//! Builder operations.
//!
//! Every operation takes the current [`Outcome`] plus its own arguments and
//! returns a new [`Outcome`]. The precedence is the same everywhere:
//!
//! 1. arguments are validated in a fixed order, even when `document` (or a
//!    nested `inner`) already holds an error;
//! 2. an error already in `document` is forwarded unchanged;
//! 3. the new markup is placed *before* the accumulated text, so siblings
//!    come out in reverse call order.

mod block;
mod comment;
mod tag;

pub use self::{
    block::{block_tag, option_block_tag},
    comment::{block_comment, comment},
    tag::{cdata_tag, option_content_tag, option_tag, tag},
};

use tracing::trace;

use crate::attribute::Opt;
use crate::document;
use crate::error::{BuilderError, Result};
use crate::fragment::{Fragment, Outcome};

/// Prepends `markup` to the fragment in `document`, forwarding any error.
fn emit(document: Outcome, markup: &str) -> Outcome {
    let fragment = document?;
    trace!(bytes = markup.len(), "prepending markup");
    Ok(fragment.prepend(markup))
}

/// Unwraps a nested fragment that must carry text.
///
/// An errored `inner` has no text to embed and is reported as `InnerEmpty`,
/// like an empty one.
fn nested(inner: Outcome) -> Result<Fragment> {
    match inner {
        Ok(fragment) if !fragment.is_empty() => Ok(fragment),
        _ => Err(BuilderError::InnerEmpty),
    }
}

fn require_options(options: &[Opt]) -> Result<()> {
    if options.is_empty() {
        return Err(BuilderError::OptionsEmpty);
    }
    Ok(())
}

/// Method-call spelling of the builder operations, for chaining.
///
/// ```
/// use xmlb::{new, Builder, Opt};
///
/// let xml = new()
///     .tag("title", "Hello")
///     .option_tag("link", &[Opt::new("href", "https://example.com")])
///     .end_xml();
/// assert_eq!(
///     xml.as_deref(),
///     Ok("<link href=\"https://example.com\"/>\n<title>Hello</title>\n")
/// );
/// ```
pub trait Builder: Sized {
    fn tag(self, label: &str, contents: &str) -> Outcome;
    fn cdata_tag(self, label: &str, contents: &str) -> Outcome;
    fn option_content_tag(self, label: &str, contents: &str, options: &[Opt]) -> Outcome;
    fn option_tag(self, label: &str, options: &[Opt]) -> Outcome;
    fn block_tag(self, label: &str, inner: Outcome) -> Outcome;
    fn option_block_tag(self, label: &str, inner: Outcome, options: &[Opt]) -> Outcome;
    fn comment(self, text: &str) -> Outcome;
    fn block_comment(self, inner: Outcome) -> Outcome;
    fn end_xml(self) -> Result<String>;
}

impl Builder for Outcome {
    fn tag(self, label: &str, contents: &str) -> Outcome {
        tag(self, label, contents)
    }

    fn cdata_tag(self, label: &str, contents: &str) -> Outcome {
        cdata_tag(self, label, contents)
    }

    fn option_content_tag(self, label: &str, contents: &str, options: &[Opt]) -> Outcome {
        option_content_tag(self, label, contents, options)
    }

    fn option_tag(self, label: &str, options: &[Opt]) -> Outcome {
        option_tag(self, label, options)
    }

    fn block_tag(self, label: &str, inner: Outcome) -> Outcome {
        block_tag(self, label, inner)
    }

    fn option_block_tag(self, label: &str, inner: Outcome, options: &[Opt]) -> Outcome {
        option_block_tag(self, label, inner, options)
    }

    fn comment(self, text: &str) -> Outcome {
        comment(self, text)
    }

    fn block_comment(self, inner: Outcome) -> Outcome {
        block_comment(self, inner)
    }

    fn end_xml(self) -> Result<String> {
        document::end_xml(self)
    }
}
