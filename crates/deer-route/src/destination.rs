//! Delivery destinations.

use deer_core::geom::point_in_square;
use deer_core::{DestinationId, Point};

/// A kid's house: a square the delivering deer has to enter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub id:        DestinationId,
    pub center:    Point,
    /// Full edge length of the bounding square.
    pub size:      f64,
    pub delivered: bool,
}

impl Destination {
    pub fn new(id: DestinationId, center: Point, size: f64) -> Self {
        Self { id, center, size, delivered: false }
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point_in_square(point, self.center, self.size / 2.0)
    }
}
