//! The hub square.

use deer_core::Point;
use deer_core::geom::point_in_square;

/// The fixed square every deer starts from and returns to.
///
/// `size` is the full edge length; containment uses half of it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hub {
    pub center: Point,
    pub size:   f64,
}

impl Hub {
    pub fn new(center: Point, size: f64) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn half_size(&self) -> f64 {
        self.size / 2.0
    }

    /// `true` once `point` is inside the hub square (boundary inclusive).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point_in_square(point, self.center, self.half_size())
    }
}
