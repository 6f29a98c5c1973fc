use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("empty input: expected 'Tree()' or an indented value listing")]
    EmptyInput,

    #[error("line {line}: indentation does not match any open node")]
    BadIndent { line: usize },

    #[error("line {line}: invalid node value: {source}")]
    InvalidValue {
        line: usize,
        source: ParseIntError,
    },
}

pub type TreeResult<T> = Result<T, TreeError>;
