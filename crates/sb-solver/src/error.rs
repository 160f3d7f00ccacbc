use sb_history::HistoryError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// An operation that needs a seeded history (or route) ran without one.
    #[error("invalid route state: {0}")]
    InvalidRouteState(&'static str),

    #[error("history error: {0}")]
    History(#[from] HistoryError),
}

pub type SolverResult<T> = Result<T, SolverError>;
