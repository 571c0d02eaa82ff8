//! The `Sim` struct and its two tick loops.

use deer_agent::{Deer, DeerEvent, DeerMode, Herd, HerdRngs, Stride};
use deer_core::{ExitPolicy, ForageConfig, Tick};
use deer_route::{Destination, Route, RouteBook, RouteResult, build_routes};
use deer_trail::MarkerList;
use deer_world::{Hub, LocationPool, ResourceLedger};
use tracing::{debug, info, warn};

use crate::{SimObserver, SimPhase, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds the shared world state (marker list, location pool, ledger, route
/// book) next to the herd and drives both phases:
///
/// 1. **Foraging** ([`run_forage`](Self::run_forage)): strictly sequential
///    in ascending `AgentId`; every mutation a deer makes to markers or
///    locations is visible to the deer after it in the same tick.
/// 2. **Distribution** ([`run_distribution`](Self::run_distribution)): route
///    recalls and claims are sequential, traversal may run in parallel.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: ForageConfig,

    /// The next tick to run.  Keeps counting across both phases.
    pub tick: Tick,

    pub hub: Hub,

    /// Cumulative collected counters per resource kind.
    pub ledger: ResourceLedger,

    /// Locations that still hold resources.
    pub pool: LocationPool,

    /// Shared trail markers, in creation order.
    pub markers: MarkerList,

    pub herd: Herd,

    /// Per-deer RNGs, separated for the split-borrow pattern.
    pub rngs: HerdRngs,

    /// Empty until [`assign_routes`](Self::assign_routes).
    pub routes: RouteBook,
}

impl Sim {
    // ── Foraging ──────────────────────────────────────────────────────────

    /// Run the foraging phase until its budget is spent or, under
    /// [`ExitPolicy::UntilDepleted`], the world is picked clean.
    ///
    /// Returns the number of ticks run.
    pub fn run_forage<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<u64> {
        let stride = Stride::from(&self.config);
        let mut ticks = 0;
        while ticks < self.config.forage_ticks {
            if self.config.exit_policy == ExitPolicy::UntilDepleted && self.is_depleted() {
                break;
            }
            self.forage_tick(&stride, observer)?;
            ticks += 1;
        }
        info!(
            ticks,
            collected = self.ledger.total_collected(),
            remaining = self.pool.total_remaining(),
            markers = self.markers.len(),
            "foraging finished"
        );
        observer.on_phase_end(SimPhase::Foraging, self.tick);
        Ok(ticks)
    }

    /// Run exactly one foraging tick.
    pub fn forage_tick<O: SimObserver>(&mut self, stride: &Stride, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);

        for (deer, rng) in self.herd.iter_mut().zip(self.rngs.iter_mut()) {
            let mut events = deer.forage_step(stride, &self.hub, &mut self.markers, &mut self.ledger, rng)?;
            let picked = deer.collect(stride, &self.hub, &mut self.pool, &mut self.markers)?;
            if picked.iter().any(|e| matches!(e, DeerEvent::PickedUp { exhausted: true, .. })) {
                for id in self.pool.prune_exhausted() {
                    debug!(location = %id, "location exhausted");
                }
            }
            events.extend(picked);
            for event in &events {
                observer.on_event(now, deer.id, event);
            }
        }
        self.markers.prune_disabled();

        observer.on_tick_end(now);
        self.tick = now.next();
        Ok(())
    }

    /// `true` once no location is left and nobody is still carrying.
    pub fn is_depleted(&self) -> bool {
        self.pool.is_empty() && !self.herd.any_carrying()
    }

    /// Cumulative collected counters.
    pub fn collected(&self) -> &ResourceLedger {
        &self.ledger
    }

    // ── Distribution ──────────────────────────────────────────────────────

    /// Build the route book from `eligible` destinations and switch every
    /// deer to distribution.  Returns the number of routes.
    pub fn assign_routes(&mut self, eligible: Vec<Destination>) -> SimResult<usize> {
        let stops = eligible.len();
        let routes = build_routes(eligible, self.config.route_capacity)?;
        info!(stops, routes = routes.len(), capacity = self.config.route_capacity, "routes built");
        self.routes = RouteBook::new(routes);
        for deer in self.herd.iter_mut() {
            deer.begin_distribution();
        }
        Ok(self.routes.len())
    }

    /// Run the distribution phase until every route is delivered and every
    /// deer is home, or `distribution_ticks` is spent.  Deer come back to
    /// the hub after each route and claim the next unclaimed one.  Returns
    /// the number of ticks run.
    pub fn run_distribution<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<u64> {
        let budget = self.config.distribution_ticks;
        let mut ticks = 0;
        while ticks < budget && !(self.routes.all_finished() && self.herd.all_finished()) {
            self.distribution_tick(budget - ticks, observer)?;
            ticks += 1;
        }
        info!(
            ticks,
            delivered = self.routes.delivered_count(),
            unclaimed = self.routes.unclaimed_count(),
            "distribution finished"
        );
        observer.on_phase_end(SimPhase::Distribution, self.tick);
        Ok(ticks)
    }

    /// Run one distribution tick with `remaining` ticks left in the budget
    /// (this one included).
    ///
    /// Recalls run before claims, so a deer too close to the deadline never
    /// takes a route it cannot walk.
    pub fn distribution_tick<O: SimObserver>(&mut self, remaining: u64, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        let step = self.config.step;
        observer.on_tick_start(now);

        for deer in self.herd.iter_mut() {
            if deer.mode() == DeerMode::Distributing {
                // One tick for this tick's step, one for being seen in the hub.
                let home = deer.steps_home(&self.hub, step);
                if home + 2 >= remaining && deer.recall() {
                    warn!(agent = %deer.id, steps_home = home, remaining, "recalled");
                    observer.on_event(now, deer.id, &DeerEvent::Recalled);
                }
            }
            if let Some(event) = deer.pick_route(&mut self.routes, &self.hub)? {
                observer.on_event(now, deer.id, &event);
            }
        }

        let results = traverse_all(self.herd.as_mut_slice(), &mut self.routes, step, &self.hub);
        for (deer, result) in self.herd.iter().zip(results) {
            for event in result? {
                observer.on_event(now, deer.id, &event);
            }
        }

        observer.on_tick_end(now);
        self.tick = now.next();
        Ok(())
    }

    /// Destinations delivered so far.
    pub fn delivered_count(&self) -> usize {
        self.routes.delivered_count()
    }
}

// ── Traversal ─────────────────────────────────────────────────────────────────

/// Move every deer one step along its own route.
///
/// Each claimed route is handed to its single owner as a disjoint `&mut`,
/// so the deer can be processed independently.  Results come back in agent
/// order.
fn traverse_all(
    deer:  &mut [Deer],
    book:  &mut RouteBook,
    step:  f64,
    hub:   &Hub,
) -> Vec<RouteResult<Vec<DeerEvent>>> {
    let mut owner: Vec<Option<usize>> = vec![None; book.len()];
    for (i, d) in deer.iter().enumerate() {
        let Some(route) = d.route() else { continue };
        if let Some(slot) = owner.get_mut(route.index()) {
            *slot = Some(i);
        }
    }
    let mut slots: Vec<Option<&mut Route>> = deer.iter().map(|_| None).collect();
    for (route, owner) in book.iter_mut().zip(&owner) {
        if let Some(i) = *owner {
            slots[i] = Some(route);
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        deer.iter_mut()
            .zip(slots)
            .map(|(d, route)| d.traverse(step, hub, route))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        deer.par_iter_mut()
            .zip(slots.into_par_iter())
            .map(|(d, route)| d.traverse(step, hub, route))
            .collect()
    }
}
