//! Rejection-sampled world generation.
//!
//! Placement order is hub → locations (resource by resource) → houses.  Each
//! candidate shape is drawn uniformly inside the world and rejected if it
//! collides with anything placed before it.  Collisions are only checked
//! here; at runtime deer walk over every shape freely.

use deer_core::geom::{circle_overlaps_circle, circle_overlaps_square, square_overlaps_square};
use deer_core::{DestinationId, Point, ResourceId, SimRng};
use tracing::debug;

use crate::{Hub, LocationPool, ResourceLedger, WorldError, WorldResult};

/// Generation parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldSpec {
    /// One resource kind per name.
    pub resources:              Vec<String>,
    pub locations_per_resource: u32,
    pub min_radius:             f64,
    pub max_radius:             f64,
    /// Number of kids' houses (delivery destinations).
    pub house_count:            u32,
    /// Edge length of a house square.
    pub house_size:             f64,
    /// Candidates drawn per shape before giving up.
    pub max_attempts:           u32,
}

impl Default for WorldSpec {
    fn default() -> Self {
        Self {
            resources:              vec!["wood".into(), "iron".into(), "wool".into()],
            locations_per_resource: 2,
            min_radius:             2.0,
            max_radius:             5.0,
            house_count:            12,
            house_size:             2.0,
            max_attempts:           1_000,
        }
    }
}

/// A kid's house: a delivery destination square.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct House {
    pub id:     DestinationId,
    pub center: Point,
    pub size:   f64,
}

/// Everything `generate_world` produces.
pub struct World {
    pub hub:    Hub,
    pub ledger: ResourceLedger,
    pub pool:   LocationPool,
    pub houses: Vec<House>,
}

/// Generate a world of edge length `world_size` from `spec`.
///
/// # Errors
///
/// [`WorldError::InvalidParameter`] for radii or sizes that cannot fit, and
/// [`WorldError::PlacementFailed`] when `max_attempts` candidates in a row
/// collide.
pub fn generate_world(spec: &WorldSpec, world_size: f64, rng: &mut SimRng) -> WorldResult<World> {
    validate(spec, world_size)?;

    let hub_size = world_size / 20.0;
    let hub = Hub::new(
        Point::new(
            rng.gen_range(hub_size..=world_size - hub_size),
            rng.gen_range(hub_size..=world_size - hub_size),
        ),
        hub_size,
    );
    debug!(center = %hub.center, size = hub.size, "placed hub");

    let ledger = ResourceLedger::new(spec.resources.iter().cloned());
    let mut pool = LocationPool::new();
    let mut circles: Vec<(Point, f64)> = Vec::new();

    for kind in 0..spec.resources.len() {
        for _ in 0..spec.locations_per_resource {
            let (center, radius) = place(spec.max_attempts, "resource location", || {
                let radius = rng.gen_range(spec.min_radius..=spec.max_radius);
                let center = Point::new(
                    rng.gen_range(radius..=world_size - radius),
                    rng.gen_range(radius..=world_size - radius),
                );
                let free = !circle_overlaps_square(center, radius, hub.center, hub.half_size())
                    && !circles
                        .iter()
                        .any(|&(c, r)| circle_overlaps_circle(center, radius, c, r));
                free.then_some((center, radius))
            })?;
            circles.push((center, radius));
            pool.add(ResourceId(kind as u16), center, radius);
        }
    }

    let half = spec.house_size / 2.0;
    let mut houses: Vec<House> = Vec::with_capacity(spec.house_count as usize);
    for i in 0..spec.house_count {
        let center = place(spec.max_attempts, "house", || {
            let center = Point::new(
                rng.gen_range(half..=world_size - half),
                rng.gen_range(half..=world_size - half),
            );
            let free = !square_overlaps_square(center, half, hub.center, hub.half_size())
                && !circles
                    .iter()
                    .any(|&(c, r)| circle_overlaps_square(c, r, center, half))
                && !houses
                    .iter()
                    .any(|h| square_overlaps_square(center, half, h.center, h.size / 2.0));
            free.then_some(center)
        })?;
        houses.push(House { id: DestinationId(i), center, size: spec.house_size });
    }

    debug!(locations = pool.len(), houses = houses.len(), "world generated");
    Ok(World { hub, ledger, pool, houses })
}

/// Draw candidates until `try_once` accepts one or `attempts` run out.
fn place<T>(
    attempts: u32,
    what:     &'static str,
    mut try_once: impl FnMut() -> Option<T>,
) -> WorldResult<T> {
    (0..attempts)
        .find_map(|_| try_once())
        .ok_or(WorldError::PlacementFailed { what, attempts })
}

fn validate(spec: &WorldSpec, world_size: f64) -> WorldResult<()> {
    if !(world_size.is_finite() && world_size > 0.0) {
        return Err(WorldError::InvalidParameter(format!(
            "world size must be positive, got {world_size}"
        )));
    }
    if !(spec.min_radius > 0.0 && spec.min_radius <= spec.max_radius) {
        return Err(WorldError::InvalidParameter(format!(
            "radius range [{}, {}] is empty or non-positive",
            spec.min_radius, spec.max_radius
        )));
    }
    if 2.0 * spec.max_radius >= world_size {
        return Err(WorldError::InvalidParameter(format!(
            "max radius {} does not fit a world of size {world_size}",
            spec.max_radius
        )));
    }
    if !(spec.house_size > 0.0 && spec.house_size < world_size) {
        return Err(WorldError::InvalidParameter(format!(
            "house size {} must be in (0, {world_size})",
            spec.house_size
        )));
    }
    if spec.resources.len() > u16::MAX as usize {
        return Err(WorldError::InvalidParameter("too many resource kinds".into()));
    }
    Ok(())
}
