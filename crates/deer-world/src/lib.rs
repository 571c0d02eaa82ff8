//! `deer-world` — the static and depletable parts of the world.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`hub`]      | `Hub` — the square deer return to ("Santa's house")       |
//! | [`resource`] | `Resource`, `ResourceLedger` — cumulative collected counters |
//! | [`location`] | `ResourceLocation` — a shrinking circle of one resource   |
//! | [`pool`]     | `LocationPool` — live locations, pruned on exhaustion      |
//! | [`generate`] | `WorldSpec`, `World`, `generate_world` (rejection sampling) |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod generate;
pub mod hub;
pub mod location;
pub mod pool;
pub mod resource;


pub use error::{WorldError, WorldResult};
pub use generate::{House, World, WorldSpec, generate_world};
pub use hub::Hub;
pub use location::ResourceLocation;
pub use pool::LocationPool;
pub use resource::{Resource, ResourceLedger};
