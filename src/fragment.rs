use std::fmt;
use std::sync::Arc;

use crate::error::BuilderError;

/// Accumulated XML markup that is not yet guaranteed to be a complete
/// document.
///
/// The text lives behind an `Arc<str>`, so cloning a fragment shares the
/// buffer instead of copying it. Fragments are never mutated; every builder
/// call produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment {
    text: Arc<str>,
}

/// The value threaded through every builder call.
pub type Outcome = Result<Fragment, BuilderError>;

impl Fragment {
    pub(crate) fn from_text(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Places `markup` before everything accumulated so far.
    pub(crate) fn prepend(&self, markup: &str) -> Self {
        let mut text = String::with_capacity(markup.len() + self.text.len());
        text.push_str(markup);
        text.push_str(&self.text);
        Self::from_text(text)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
