//! `deer-agent` — the deer and its movement state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`deer`]       | `Deer`, `Cargo`, `TrailRole`, `DeerMode`, `DeerStatus`, `Stride` |
//! | [`forage`]     | foraging tick (`forage_step`) and extraction (`collect`)  |
//! | [`distribute`] | route claiming, traversal, recall                         |
//! | [`event`]      | `DeerEvent` — what a deer did this tick                   |
//! | [`herd`]       | `Herd`, `HerdRngs`, `HerdBuilder`                         |
//!
//! # Foraging priority
//!
//! ```text
//! resting?   → count down, maybe attach a finalized marker
//! carrying?  → straight line home, paint / erase own marker, deposit on arrival
//! following? → towards the marker endpoint while it still lies ahead
//! otherwise  → attach the first marker crossed last tick, else random walk
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public state types.     |

pub mod deer;
pub mod distribute;
pub mod event;
pub mod forage;
pub mod herd;


pub use deer::{Cargo, Deer, DeerMode, DeerStatus, Stride, TrailRole};
pub use event::DeerEvent;
pub use herd::{Herd, HerdBuilder, HerdRngs};
