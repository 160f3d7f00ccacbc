use sb_route::RouteError;
use sb_solver::SolverError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BotError {
    /// Solve, record or playback requested before a start was seeded.
    #[error("invalid route state: {0}")]
    InvalidRouteState(&'static str),

    #[error("malformed argument {arg:?} for {name}")]
    MalformedOperatorInput { name: &'static str, arg: String },

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("route error: {0}")]
    Route(#[from] RouteError),

    #[error("solver error: {0}")]
    Solver(SolverError),
}

impl From<SolverError> for BotError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidRouteState(why) => BotError::InvalidRouteState(why),
            other => BotError::Solver(other),
        }
    }
}

pub type BotResult<T> = Result<T, BotError>;
