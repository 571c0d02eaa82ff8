//! A single marker trail.

use deer_core::{LocationId, MarkerId, Point, segment_intersect};

/// Geometry a disabled marker is parked at: outside `[0, N]²` and of zero
/// length, so no displacement segment can ever touch it.
pub const DISABLED_SENTINEL: Point = Point::new(-1.0, -1.0);

/// Where a marker is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerPhase {
    /// Being painted: the startpoint follows the discovering deer home.
    Growing,
    /// Startpoint locked to the hub center.
    Finalized,
    /// The location is exhausted; the endpoint follows the erasing deer home.
    Erasing,
    /// Superseded.  Excluded from every query, removed on the next prune.
    Disabled,
}

/// A directed trail segment from `startpoint` (hub side) to `endpoint`
/// (location side).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub id:     MarkerId,
    /// Lookup key of the location the trail leads to.  `None` once disabled.
    location:   Option<LocationId>,
    startpoint: Point,
    endpoint:   Point,
    /// Hub → location vector, fixed at creation.
    direction:  Point,
    phase:      MarkerPhase,
}

impl Marker {
    /// A fresh, zero-length marker at the location center.
    pub fn new(id: MarkerId, location: LocationId, location_center: Point, hub_center: Point) -> Self {
        Self {
            id,
            location:   Some(location),
            startpoint: location_center,
            endpoint:   location_center,
            direction:  location_center - hub_center,
            phase:      MarkerPhase::Growing,
        }
    }

    #[inline]
    pub fn location(&self) -> Option<LocationId> {
        self.location
    }

    #[inline]
    pub fn startpoint(&self) -> Point {
        self.startpoint
    }

    #[inline]
    pub fn endpoint(&self) -> Point {
        self.endpoint
    }

    #[inline]
    pub fn direction(&self) -> Point {
        self.direction
    }

    #[inline]
    pub fn phase(&self) -> MarkerPhase {
        self.phase
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.phase == MarkerPhase::Disabled || self.location.is_none()
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.phase == MarkerPhase::Finalized
    }

    /// `true` if the displacement `from → to` crosses this trail.
    pub fn is_touched_by(&self, from: Point, to: Point) -> bool {
        !self.is_disabled() && segment_intersect(from, to, self.startpoint, self.endpoint).valid
    }

    /// `true` while the endpoint still lies ahead of `position` on both axes
    /// relative to the trail's direction.
    pub fn leads_from(&self, position: Point) -> bool {
        let planned = self.endpoint - position;
        planned.x * self.direction.x >= 0.0 && planned.y * self.direction.y >= 0.0
    }

    /// Stretch the startpoint to the painting deer's position.
    pub fn paint_to(&mut self, position: Point) {
        if matches!(self.phase, MarkerPhase::Growing | MarkerPhase::Erasing) {
            self.startpoint = position;
        }
    }

    /// Lock the startpoint to the hub.  A marker that started erasing while
    /// still being painted keeps erasing.
    ///
    /// Returns `true` only for the `Growing → Finalized` transition.
    pub fn finalize(&mut self, hub_center: Point) -> bool {
        match self.phase {
            MarkerPhase::Growing => {
                self.startpoint = hub_center;
                self.phase = MarkerPhase::Finalized;
                true
            }
            MarkerPhase::Finalized | MarkerPhase::Erasing => {
                self.startpoint = hub_center;
                false
            }
            MarkerPhase::Disabled => false,
        }
    }

    /// Switch to erasing.  Returns `false` for a disabled marker.
    pub fn begin_erasing(&mut self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.phase = MarkerPhase::Erasing;
        true
    }

    /// Drag the endpoint to the erasing deer's position.
    pub fn erase_to(&mut self, position: Point) {
        if self.phase == MarkerPhase::Erasing {
            self.endpoint = position;
        }
    }

    /// Park the marker at the sentinel and drop its location reference.
    /// Idempotent.
    pub fn disable(&mut self) {
        self.phase = MarkerPhase::Disabled;
        self.location = None;
        self.startpoint = DISABLED_SENTINEL;
        self.endpoint = DISABLED_SENTINEL;
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} {} -> {}",
            self.id, self.phase, self.startpoint, self.endpoint
        )
    }
}
