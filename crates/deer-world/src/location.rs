//! A depletable circular resource location.

use std::f64::consts::PI;

use deer_core::geom::point_in_circle;
use deer_core::{LocationId, Point, ResourceId};

/// A circle holding `amount` units of one resource.
///
/// The geometric size always tracks the remaining quantity: a fresh location
/// holds `floor(π·r²)` units and after every extraction the radius is reset
/// to `sqrt(amount / π)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceLocation {
    pub id:       LocationId,
    pub resource: ResourceId,
    pub center:   Point,
    radius:       f64,
    amount:       u32,
}

impl ResourceLocation {
    pub fn new(id: LocationId, resource: ResourceId, center: Point, radius: f64) -> Self {
        let amount = (PI * radius * radius).floor() as u32;
        Self { id, resource, center, radius, amount }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Units left.
    #[inline]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.amount == 0
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point_in_circle(point, self.center, self.radius)
    }

    /// Take up to `cap` units, never more than what remains, and shrink.
    ///
    /// Returns the number of units actually taken.
    pub fn extract(&mut self, cap: u32) -> u32 {
        let taken = cap.min(self.amount);
        self.amount -= taken;
        self.radius = (self.amount as f64 / PI).sqrt();
        taken
    }
}
