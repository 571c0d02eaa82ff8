//! `deer-route` — delivery routes for the distribution phase.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`destination`] | `Destination` — a kid's house with a delivered flag    |
//! | [`route`]       | `Route` — ordered stops, pick-once claim               |
//! | [`book`]        | `RouteBook` — all routes of a run                      |
//! | [`build`]       | `build_routes` — greedy nearest-neighbor chunking      |
//! | [`error`]       | `RouteError`, `RouteResult<T>`                         |

pub mod book;
pub mod build;
pub mod destination;
pub mod error;
pub mod route;


pub use book::RouteBook;
pub use build::build_routes;
pub use destination::Destination;
pub use error::{RouteError, RouteResult};
pub use route::Route;
