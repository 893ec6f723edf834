use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FenceError {
    #[error("Position ({row}, {col}) is outside the garden map")]
    #[diagnostic(code(day12::out_of_range))]
    OutOfRange { row: usize, col: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] GridParseError),
}

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse garden map")]
#[diagnostic(
    code(day12::parse_error),
    help("Each line must hold printable, non-whitespace ASCII plot labels")
)]
pub struct GridParseError {
    #[source_code]
    pub src: String,
    #[label("Parse error occurred here")]
    pub span: SourceSpan,
}

impl GridParseError {
    pub(crate) fn at(src: &str, offset: usize) -> Self {
        let len = src
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        Self {
            src: src.to_string(),
            span: (offset, len).into(),
        }
    }
}
