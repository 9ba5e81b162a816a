//! Single-line and self-closing tags.

use super::{emit, require_options};
use crate::attribute::{render_options, Opt};
use crate::error::{require, BuilderError};
use crate::fragment::Outcome;

/// `<label>contents</label>`
pub fn tag(document: Outcome, label: &str, contents: &str) -> Outcome {
    require(label, BuilderError::LabelEmpty)?;
    require(contents, BuilderError::ContentsEmpty)?;
    emit(document, &format!("<{label}>{contents}</{label}>\n"))
}

/// `contents` wrapped in a CDATA section inside `<label>`.
pub fn cdata_tag(document: Outcome, label: &str, contents: &str) -> Outcome {
    require(label, BuilderError::LabelEmpty)?;
    require(contents, BuilderError::ContentsEmpty)?;
    emit(
        document,
        &format!("<{label}>\n<![CDATA[\n \t{contents}\n]]>\n</{label}>\n"),
    )
}

/// `<label attr="v"...>contents</label>`
pub fn option_content_tag(
    document: Outcome,
    label: &str,
    contents: &str,
    options: &[Opt],
) -> Outcome {
    require(label, BuilderError::LabelEmpty)?;
    require(contents, BuilderError::ContentsEmpty)?;
    require_options(options)?;
    let attributes = render_options(options);
    emit(
        document,
        &format!("<{label}{attributes}>{contents}</{label}>\n"),
    )
}

/// Self-closing `<label attr="v".../>`
pub fn option_tag(document: Outcome, label: &str, options: &[Opt]) -> Outcome {
    require(label, BuilderError::LabelEmpty)?;
    require_options(options)?;
    let attributes = render_options(options);
    emit(document, &format!("<{label}{attributes}/>\n"))
}
