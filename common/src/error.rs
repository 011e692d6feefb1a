//! Routing errors

use thiserror::Error;

/// Malformed route pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid segment `{0}`")]
    InvalidSegment(String),

    #[error("wildcard must be the last segment")]
    WildcardNotLast,

    #[error("parameter `{0}` is bound twice")]
    DuplicateParam(String),
}

/// Route table misconfiguration, fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("route table is empty")]
    Empty,

    #[error("route `{name}` has invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        name: String,
        pattern: String,
        source: PatternError,
    },

    #[error("route name `{0}` is used more than once")]
    DuplicateName(String),

    /// Last route does not match every path
    #[error("last route `{0}` is not a catch-all")]
    MissingCatchAll(String),

    /// Catch-all placed before other routes, making them unreachable
    #[error("catch-all route `{0}` must be the last one")]
    CatchAllNotLast(String),
}

/// Navigation target can not be turned into a path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam {
        route: String,
        param: String,
    },
}
