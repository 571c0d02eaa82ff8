//! Framework error type.
//!
//! Sub-crates define their own error enums (`WorldError`, `RouteError`,
//! `SimError`) and wrap `DeerError` where they need to surface a core
//! failure.

use thiserror::Error;

use crate::{AgentId, LocationId, ResourceId};

/// The top-level error type for `deer-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DeerError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("resource location {0} not found")]
    LocationNotFound(LocationId),

    #[error("resource {0} not found")]
    ResourceNotFound(ResourceId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `deer-*` crates.
pub type DeerResult<T> = Result<T, DeerError>;
