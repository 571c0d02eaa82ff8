//! The shared marker collection.

use deer_core::{LocationId, MarkerId, Point};
use tracing::debug;

use crate::Marker;

/// Every marker in creation order.
///
/// The list is shared by all deer of a tick and mutated in agent order, so
/// iteration order is part of the simulation's observable behavior: touch
/// detection picks the *first* touched marker.  Ids are never reused.
#[derive(Clone, Debug, Default)]
pub struct MarkerList {
    markers: Vec<Marker>,
    next_id: u32,
}

impl MarkerList {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a growing marker for `location`.
    pub fn create(&mut self, location: LocationId, location_center: Point, hub_center: Point) -> MarkerId {
        let id = self.next_id();
        self.markers.push(Marker::new(id, location, location_center, hub_center));
        id
    }

    /// Append a marker for a location exhausted by the very extraction that
    /// discovered it.  It starts out disabled and is gone after the next prune.
    pub fn create_spent(&mut self, location: LocationId, location_center: Point, hub_center: Point) -> MarkerId {
        let id = self.next_id();
        let mut marker = Marker::new(id, location, location_center, hub_center);
        marker.disable();
        self.markers.push(marker);
        id
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|m| m.id == id)
    }

    /// The live marker leading to `location`, if any.
    pub fn find_by_location(&self, location: LocationId) -> Option<MarkerId> {
        self.markers
            .iter()
            .find(|m| !m.is_disabled() && m.location() == Some(location))
            .map(|m| m.id)
    }

    /// First marker in list order crossed by the displacement `from → to`.
    pub fn first_touched(&self, from: Point, to: Point) -> Option<MarkerId> {
        self.markers
            .iter()
            .find(|m| m.is_touched_by(from, to))
            .map(|m| m.id)
    }

    /// Ids of all finalized markers, in list order.
    pub fn finalized(&self) -> Vec<MarkerId> {
        self.markers
            .iter()
            .filter(|m| m.is_finalized())
            .map(|m| m.id)
            .collect()
    }

    /// Cleanup pass: drop every disabled marker.  Returns how many were
    /// removed.
    pub fn prune_disabled(&mut self) -> usize {
        let before = self.markers.len();
        self.markers.retain(|m| !m.is_disabled());
        let removed = before - self.markers.len();
        if removed > 0 {
            debug!(removed, remaining = self.markers.len(), "pruned disabled markers");
        }
        removed
    }
}
