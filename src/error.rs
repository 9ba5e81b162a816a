//! Error types for xmlb

use thiserror::Error;

/// Which precondition of a builder call failed.
///
/// Errors carry no payload. Once one enters a pipeline every later builder
/// call forwards it unchanged, so the kind a caller sees is always the first
/// failure.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuilderError {
    #[error("label is empty")]
    LabelEmpty,
    #[error("contents are empty")]
    ContentsEmpty,
    #[error("options are empty")]
    OptionsEmpty,
    #[error("inner fragment is empty")]
    InnerEmpty,
    #[error("declaration version is empty")]
    VersionEmpty,
    #[error("declaration encoding is empty")]
    EncodingEmpty,
    #[error("document is empty")]
    EmptyDocument,
    /// Reserved. No builder operation produces it.
    #[error("tag placed before document was created")]
    TagPlacedBeforeNew,
}

/// Result type alias for xmlb
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Fails with `kind` when `value` is empty.
pub(crate) fn require(value: &str, kind: BuilderError) -> Result<()> {
    if value.is_empty() {
        return Err(kind);
    }
    Ok(())
}
