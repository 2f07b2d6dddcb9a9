use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioError {
    #[error("input sequence is empty; sign ratios are undefined")]
    EmptyInput,

    #[error("element at index {index} is not an ordered number (NaN)")]
    InvalidElement { index: usize },
}
