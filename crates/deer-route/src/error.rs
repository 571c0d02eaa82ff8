//! Routing error type.
//!
//! `AlreadyClaimed` and `Exhausted` signal scheduling bugs in the driver and
//! are meant to be surfaced, not recovered from.

use thiserror::Error;

use deer_core::RouteId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("{0} is already claimed")]
    AlreadyClaimed(RouteId),

    #[error("{0} has no undelivered destination left")]
    Exhausted(RouteId),

    #[error("{0} not found")]
    RouteNotFound(RouteId),

    #[error("route capacity must be at least 1")]
    ZeroCapacity,
}

pub type RouteResult<T> = Result<T, RouteError>;
