//! Greedy nearest-neighbor route building.

use deer_core::RouteId;
use tracing::debug;

use crate::{Destination, Route, RouteError, RouteResult};

/// Chunk `destinations` into routes of at most `capacity` stops.
///
/// Each route is seeded with the first destination still unassigned, then
/// repeatedly extended with the unassigned destination nearest (Euclidean)
/// to the stop added last.  Distance ties go to the destination that comes
/// first in the remaining input order.  There is no backtracking; the result
/// is a cheap chaining, not a shortest tour.
pub fn build_routes(destinations: Vec<Destination>, capacity: usize) -> RouteResult<Vec<Route>> {
    if capacity == 0 {
        return Err(RouteError::ZeroCapacity);
    }

    let mut remaining = destinations;
    let mut routes = Vec::with_capacity(remaining.len().div_ceil(capacity));

    while !remaining.is_empty() {
        let mut stops = Vec::with_capacity(capacity);
        stops.push(remaining.remove(0));

        while stops.len() < capacity && !remaining.is_empty() {
            let last = stops[stops.len() - 1].center;
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (i, d) in remaining.iter().enumerate() {
                let dist = last.distance(d.center);
                if dist < best_dist {
                    best = i;
                    best_dist = dist;
                }
            }
            stops.push(remaining.remove(best));
        }

        routes.push(Route::new(RouteId(routes.len() as u32), stops));
    }

    debug!(routes = routes.len(), capacity, "built delivery routes");
    Ok(routes)
}
