use deer_core::DeerError;
use deer_route::RouteError;
use deer_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("route error: {0}")]
    Route(#[from] RouteError),

    #[error("world generation failed: {0}")]
    World(#[from] WorldError),

    #[error(transparent)]
    Deer(#[from] DeerError),
}

pub type SimResult<T> = Result<T, SimError>;
