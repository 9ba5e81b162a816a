use super::{emit, nested};
use crate::error::{require, BuilderError};
use crate::fragment::Outcome;

/// `<!-- text -->` followed by a space and a newline.
pub fn comment(document: Outcome, text: &str) -> Outcome {
    require(text, BuilderError::ContentsEmpty)?;
    emit(document, &format!("<!-- {text} --> \n"))
}

/// Comments out a whole nested fragment.
pub fn block_comment(document: Outcome, inner: Outcome) -> Outcome {
    let inner = nested(inner)?;
    emit(document, &format!("<!--\n{inner}-->\n"))
}
