//! The pool of live resource locations.

use deer_core::{LocationId, Point, ResourceId};

use crate::ResourceLocation;

/// All locations that still hold resources, in placement order.
///
/// Ids are handed out sequentially and never reused, so a `LocationId` held
/// by a marker either resolves to the same location or to nothing.
#[derive(Clone, Debug, Default)]
pub struct LocationPool {
    locations: Vec<ResourceLocation>,
    next_id:   u32,
}

impl LocationPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fresh location and return its id.
    pub fn add(&mut self, resource: ResourceId, center: Point, radius: f64) -> LocationId {
        let id = LocationId(self.next_id);
        self.next_id += 1;
        self.locations.push(ResourceLocation::new(id, resource, center, radius));
        id
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceLocation> {
        self.locations.iter()
    }

    pub fn get(&self, id: LocationId) -> Option<&ResourceLocation> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn get_mut(&mut self, id: LocationId) -> Option<&mut ResourceLocation> {
        self.locations.iter_mut().find(|l| l.id == id)
    }

    /// First location (in pool order) whose circle contains `point`.
    pub fn first_containing(&self, point: Point) -> Option<LocationId> {
        self.locations.iter().find(|l| l.contains(point)).map(|l| l.id)
    }

    /// Remove `id` from the pool.
    pub fn remove(&mut self, id: LocationId) -> Option<ResourceLocation> {
        let idx = self.locations.iter().position(|l| l.id == id)?;
        Some(self.locations.remove(idx))
    }

    /// Drop every exhausted location, returning their ids.
    pub fn prune_exhausted(&mut self) -> Vec<LocationId> {
        let mut removed = Vec::new();
        self.locations.retain(|l| {
            if l.is_exhausted() {
                removed.push(l.id);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Units left across all locations.
    pub fn total_remaining(&self) -> u64 {
        self.locations.iter().map(|l| l.amount() as u64).sum()
    }
}
