//! World-subsystem error type.

use thiserror::Error;

/// Errors produced by `deer-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("could not place {what} after {attempts} attempts")]
    PlacementFailed { what: &'static str, attempts: u32 },

    #[error("invalid world parameter: {0}")]
    InvalidParameter(String),
}

pub type WorldResult<T> = Result<T, WorldError>;
