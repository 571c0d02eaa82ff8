//! `deer-trail` — marker trails deer leave between the hub and a location.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`marker`] | `Marker`, `MarkerPhase` — one directed trail segment        |
//! | [`list`]   | `MarkerList` — the shared, ordered collection of markers    |
//!
//! # Lifecycle
//!
//! ```text
//! Growing ──(painter reaches hub)──► Finalized
//!    │                                  │
//!    └──────(location exhausted)────────┴──► Erasing ──(eraser reaches hub)──► Disabled
//! ```
//!
//! A marker runs from its `startpoint` (hub side) to its `endpoint`
//! (location side).  The painting deer drags the startpoint towards the hub;
//! the erasing deer drags the endpoint after it.  Disabled markers keep an
//! out-of-bounds sentinel geometry and are dropped by the next
//! [`MarkerList::prune_disabled`] pass.

pub mod list;
pub mod marker;

#[cfg(test)]
mod tests;

pub use list::MarkerList;
pub use marker::{DISABLED_SENTINEL, Marker, MarkerPhase};
