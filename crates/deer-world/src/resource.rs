//! Resource kinds and their cumulative collected counters.

use deer_core::{DeerError, DeerResult, ResourceId};
use tracing::debug;

/// One kind of resource (wood, iron, …) and how much of it reached the hub.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    pub id:        ResourceId,
    pub name:      String,
    /// Units deposited at the hub so far.
    pub collected: u64,
}

/// All resource kinds of a run, indexed by `ResourceId`.
#[derive(Clone, Debug, Default)]
pub struct ResourceLedger {
    resources: Vec<Resource>,
}

impl ResourceLedger {
    /// One zero-collected entry per name; ids follow the order of `names`.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let resources = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Resource {
                id:        ResourceId(i as u16),
                name:      name.into(),
                collected: 0,
            })
            .collect();
        Self { resources }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// Add `amount` to the collected counter of `id`.
    pub fn deposit(&mut self, id: ResourceId, amount: u32) -> DeerResult<()> {
        let resource = self
            .resources
            .get_mut(id.index())
            .ok_or(DeerError::ResourceNotFound(id))?;
        resource.collected += amount as u64;
        debug!(resource = %resource.name, amount, total = resource.collected, "deposit");
        Ok(())
    }

    /// Sum of all collected counters.
    pub fn total_collected(&self) -> u64 {
        self.resources.iter().map(|r| r.collected).sum()
    }
}
