//! Fragment constructors and the finalizer.
//!
//! A pipeline starts from [`new`], [`new_document`] or
//! [`new_advanced_document`] and ends with exactly one call to [`end_xml`].

use tracing::debug;

use crate::error::{require, BuilderError, Result};
use crate::fragment::{Fragment, Outcome};

pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Values interpolated into the leading `<?xml ... ?>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub version: String,
    pub encoding: String,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl Declaration {
    pub fn new(version: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            encoding: encoding.into(),
        }
    }

    /// Checks version first, then encoding.
    pub fn validate(&self) -> Result<()> {
        require(&self.version, BuilderError::VersionEmpty)?;
        require(&self.encoding, BuilderError::EncodingEmpty)
    }

    pub fn render(&self) -> String {
        format!(
            "<?xml version=\"{}\" encoding=\"{}\"?>\n",
            self.version, self.encoding
        )
    }
}

/// An empty fragment. Never fails.
pub fn new() -> Outcome {
    Ok(Fragment::default())
}

/// A fragment seeded with `<?xml version="1.0" encoding="UTF-8"?>`.
pub fn new_document() -> Outcome {
    Ok(Fragment::from_text(Declaration::default().render()))
}

/// A fragment seeded with a declaration carrying `version` and `encoding`.
///
/// # Errors
/// `VersionEmpty` if `version` is empty, otherwise `EncodingEmpty` if
/// `encoding` is empty.
pub fn new_advanced_document(version: &str, encoding: &str) -> Outcome {
    let declaration = Declaration::new(version, encoding);
    declaration.validate()?;
    Ok(Fragment::from_text(declaration.render()))
}

/// Turns a fragment outcome into the final document text.
///
/// # Errors
/// Forwards an existing error, or returns `EmptyDocument` when the fragment
/// holds no text.
pub fn end_xml(document: Outcome) -> Result<String> {
    let fragment = document?;
    if fragment.is_empty() {
        debug!("refusing to finalize an empty document");
        return Err(BuilderError::EmptyDocument);
    }
    debug!(bytes = fragment.len(), "document finalized");
    Ok(fragment.as_str().to_string())
}
