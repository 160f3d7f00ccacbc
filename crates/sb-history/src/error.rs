use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history is empty")]
    Empty,

    #[error("history index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type HistoryResult<T> = Result<T, HistoryError>;
