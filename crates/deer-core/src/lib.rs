//! `deer-core` — foundational types for the `santa_hunt` swarm simulation.
//!
//! This crate is a dependency of every other `deer-*` crate.  It has no
//! `deer-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `LocationId`, `MarkerId`, `ResourceId`, `DestinationId`, `RouteId` |
//! | [`point`]       | `Point` — planar vector with distance/clamp/normalize |
//! | [`geom`]        | collision, overlap and segment-intersection tests     |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `ForageConfig`, `ExitPolicy`                          |
//! | [`error`]       | `DeerError`, `DeerResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ExitPolicy, ForageConfig};
pub use error::{DeerError, DeerResult};
pub use geom::{Intersection, segment_intersect};
pub use ids::{AgentId, DestinationId, LocationId, MarkerId, ResourceId, RouteId};
pub use point::Point;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
