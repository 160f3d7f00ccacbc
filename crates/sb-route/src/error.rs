use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("waypoint name {0:?} is already used on this route")]
    DuplicateName(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
