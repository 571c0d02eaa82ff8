//! Herd storage: `Herd` (deer state) and `HerdRngs` (per-deer RNG).
//!
//! # Why two structs?
//!
//! A foraging tick needs `&mut Deer` and that deer's `&mut AgentRng` at the
//! same time, while the distribution tick hands every deer out mutably in
//! one go.  Keeping the RNGs in a separate `HerdRngs` lets the driver borrow
//! both without fighting the borrow checker:
//!
//! ```ignore
//! for (deer, rng) in herd.iter_mut().zip(rngs.iter_mut()) {
//!     deer.forage_step(&stride, &hub, &mut markers, &mut ledger, rng)?;
//! }
//! ```

use deer_core::{AgentId, AgentRng, DeerError, DeerResult, Point};

use crate::Deer;

// ── HerdRngs ──────────────────────────────────────────────────────────────────

/// Per-deer deterministic RNG state, indexed by `AgentId`.
pub struct HerdRngs {
    inner: Vec<AgentRng>,
}

impl HerdRngs {
    /// Allocate and seed `count` per-deer RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut AgentRng> {
        self.inner.get_mut(agent.index())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AgentRng> {
        self.inner.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Herd ──────────────────────────────────────────────────────────────────────

/// Every deer of the run; `AgentId` is the index.
#[derive(Clone, Debug, Default)]
pub struct Herd {
    deer: Vec<Deer>,
}

impl Herd {
    pub fn len(&self) -> usize {
        self.deer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deer.is_empty()
    }

    pub fn get(&self, agent: AgentId) -> DeerResult<&Deer> {
        self.deer.get(agent.index()).ok_or(DeerError::AgentNotFound(agent))
    }

    pub fn get_mut(&mut self, agent: AgentId) -> DeerResult<&mut Deer> {
        self.deer.get_mut(agent.index()).ok_or(DeerError::AgentNotFound(agent))
    }

    /// Deer in ascending id order, the order every tick processes them in.
    pub fn iter(&self) -> impl Iterator<Item = &Deer> {
        self.deer.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Deer> {
        self.deer.iter_mut()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Deer] {
        &mut self.deer
    }

    pub fn all_finished(&self) -> bool {
        self.deer.iter().all(Deer::is_finished)
    }

    /// `true` if any deer still has cargo on its back.
    pub fn any_carrying(&self) -> bool {
        self.deer.iter().any(Deer::is_carrying)
    }
}

// ── HerdBuilder ───────────────────────────────────────────────────────────────

/// Fluent builder for [`Herd`] + [`HerdRngs`].
///
/// ```rust
/// use deer_agent::HerdBuilder;
/// use deer_core::Point;
///
/// let (herd, rngs) = HerdBuilder::new(5, /*seed=*/ 42)
///     .at(Point::new(90.0, 90.0))
///     .build();
/// assert_eq!(herd.len(), 5);
/// assert_eq!(rngs.len(), 5);
/// ```
pub struct HerdBuilder {
    count: usize,
    seed:  u64,
    start: Point,
}

impl HerdBuilder {
    /// `count` deer seeded from `seed`, starting at the origin unless
    /// [`at`](Self::at) is called.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed, start: Point::ORIGIN }
    }

    /// Starting position of every deer (normally the hub center).
    pub fn at(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn build(self) -> (Herd, HerdRngs) {
        let deer = (0..self.count as u32)
            .map(|i| Deer::new(AgentId(i), self.start))
            .collect();
        (Herd { deer }, HerdRngs::new(self.count, self.seed))
    }
}
