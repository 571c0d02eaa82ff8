//! `deer-sim` — tick loop driver for the santa_hunt swarm.
//!
//! # Two phases
//!
//! ```text
//! foraging, per tick:
//!   for deer in id order:
//!     forage_step      — move, paint / erase / follow markers, deposit
//!     collect          — extract from the first location underfoot
//!     prune exhausted  — visible to later deer of the same tick
//!   prune disabled markers
//!   stop at forage_ticks (or earlier under ExitPolicy::UntilDepleted)
//!
//! assign_routes        — nearest-neighbor chunks of route_capacity
//!
//! distribution, per tick:
//!   for deer in id order:  recall if the budget is short, claim a route
//!   for every deer:        traverse one step (parallel with `parallel`)
//!   back at the hub:       drop the walked route, claim again next tick
//!   stop when every route is delivered and everybody is home,
//!   or when distribution_ticks is spent
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs route traversal on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use deer_core::ForageConfig;
//! use deer_sim::{NoopObserver, SimBuilder};
//! use deer_world::WorldSpec;
//!
//! let config = ForageConfig::default();
//! let (builder, houses) = SimBuilder::generated(config, &WorldSpec::default())?;
//! let mut sim = builder.agents(20).build()?;
//! sim.run_forage(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, SimPhase};
pub use sim::Sim;
