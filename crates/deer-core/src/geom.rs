//! Collision, overlap and segment-intersection tests.
//!
//! Squares are axis-aligned and described by their center and *half* edge
//! length.  Touching shapes count as overlapping, so placement rejection
//! never produces shapes that share a boundary point.

use crate::Point;

/// Determinant magnitude below which two segments are treated as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-8;

/// `true` iff `point` lies within Euclidean distance `radius` of `center`.
#[inline]
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    point.distance(center) <= radius
}

/// `true` iff both axis deltas between `point` and `center` are at most
/// `half_size`.
#[inline]
pub fn point_in_square(point: Point, center: Point, half_size: f64) -> bool {
    point.max_norm_distance(center) <= half_size
}

/// `true` if the circle reaches the axis-aligned square.
pub fn circle_overlaps_square(
    center:      Point,
    radius:      f64,
    sq_center:   Point,
    sq_half:     f64,
) -> bool {
    // Closest point of the square to the circle's center.
    let closest = Point::new(
        center.x.clamp(sq_center.x - sq_half, sq_center.x + sq_half),
        center.y.clamp(sq_center.y - sq_half, sq_center.y + sq_half),
    );
    closest.distance(center) <= radius
}

#[inline]
pub fn circle_overlaps_circle(a: Point, ra: f64, b: Point, rb: f64) -> bool {
    a.distance(b) <= ra + rb
}

#[inline]
pub fn square_overlaps_square(a: Point, half_a: f64, b: Point, half_b: f64) -> bool {
    a.max_norm_distance(b) <= half_a + half_b
}

// ── Segment intersection ──────────────────────────────────────────────────────

/// Result of [`segment_intersect`].
///
/// `r` and `s` are the parameters of the intersection point along the first
/// (`p1 → p2`) and second (`p3 → p4`) segment.  `valid` is `false` when the
/// segments are parallel or when the lines cross outside either segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub point: Point,
    pub valid: bool,
    pub r:     f64,
    pub s:     f64,
}

impl Intersection {
    const NONE: Intersection = Intersection {
        point: Point::ORIGIN,
        valid: false,
        r:     0.0,
        s:     0.0,
    };
}

/// Intersect segment `p1 → p2` with segment `p3 → p4`.
///
/// Solves
///
/// ```text
/// p1 + r·(p2 − p1) = p3 + s·(p4 − p3)
/// ```
///
/// for `(r, s)` by Cramer's rule.  The reported point is the average of the
/// two parametric descriptions, which absorbs rounding on either line.
pub fn segment_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> Intersection {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let det = -d1.x * d2.y + d1.y * d2.x;
    if det.abs() < PARALLEL_TOLERANCE {
        return Intersection::NONE;
    }
    let inv = 1.0 / det;

    let off = p3 - p1;
    let r = inv * (-d2.y * off.x + d2.x * off.y);
    let s = inv * (-d1.y * off.x + d1.x * off.y);

    let on_first  = p1 + d1 * r;
    let on_second = p3 + d2 * s;
    let point = Point::new(
        (on_first.x + on_second.x) / 2.0,
        (on_first.y + on_second.y) / 2.0,
    );

    let valid = (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s);
    Intersection { point, valid, r, s }
}
