//! Planar coordinate type and vector helpers.
//!
//! The world is a square `[0, N] × [0, N]`; `Point` doubles as a position and
//! as a displacement vector.  Double precision keeps the segment-intersection
//! determinant tolerance (`1e-8`) meaningful.

use std::ops::{Add, Mul, Sub};

/// A position or displacement in the simulated plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit-length-times-`len` vector pointing at `angle_rad`.
    #[inline]
    pub fn from_polar(angle_rad: f64, len: f64) -> Self {
        Self::new(len * angle_rad.cos(), len * angle_rad.sin())
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).norm()
    }

    /// Max-norm (Chebyshev) distance to `other`.
    #[inline]
    pub fn max_norm_distance(self, other: Point) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Point> {
        let n = self.norm();
        if n == 0.0 {
            None
        } else {
            Some(Point::new(self.x / n, self.y / n))
        }
    }

    /// Clamp both coordinates into `[0, world_size]`.
    #[inline]
    pub fn clamp_to_world(self, world_size: f64) -> Point {
        Point::new(self.x.clamp(0.0, world_size), self.y.clamp(0.0, world_size))
    }

    /// The point reached by moving at most `step` from `self` towards `dest`.
    ///
    /// Never overshoots: if `dest` is within `step`, returns `dest` exactly.
    /// A zero-length displacement short-circuits to `self`.
    pub fn step_towards(self, dest: Point, step: f64) -> Point {
        let delta = dest - self;
        if delta.norm() <= step {
            return dest;
        }
        match delta.normalized() {
            Some(unit) => self + unit * step,
            None => self,
        }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
