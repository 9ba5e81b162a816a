//! Tags wrapping a nested fragment.
//!
//! The nested fragment is checked before the outer document, so an errored
//! or empty `inner` is always reported as `InnerEmpty`, whatever the state of
//! `document`.

use super::{emit, nested, require_options};
use crate::attribute::{render_options, Opt};
use crate::error::{require, BuilderError};
use crate::fragment::Outcome;

/// `<label>` on its own line, then `inner`, then `</label>`.
pub fn block_tag(document: Outcome, label: &str, inner: Outcome) -> Outcome {
    require(label, BuilderError::LabelEmpty)?;
    let inner = nested(inner)?;
    emit(document, &format!("<{label}>\n{inner}</{label}>\n"))
}

/// Like [`block_tag`] with attributes on the opening tag.
pub fn option_block_tag(
    document: Outcome,
    label: &str,
    inner: Outcome,
    options: &[Opt],
) -> Outcome {
    require(label, BuilderError::LabelEmpty)?;
    let inner = nested(inner)?;
    require_options(options)?;
    let attributes = render_options(options);
    emit(
        document,
        &format!("<{label}{attributes}>\n{inner}</{label}>\n"),
    )
}
