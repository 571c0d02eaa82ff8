//! The foraging tick: movement, marker bookkeeping and extraction.

use deer_core::{AgentRng, DeerError, DeerResult, Point};
use deer_trail::MarkerList;
use deer_world::{Hub, LocationPool, ResourceLedger};
use tracing::debug;

use crate::{Cargo, Deer, DeerEvent, DeerMode, Stride, TrailRole};

impl Deer {
    /// Advance one foraging tick.
    ///
    /// Earlier deer of the same tick may already have mutated `markers`; this
    /// deer sees those mutations.
    pub fn forage_step(
        &mut self,
        stride:  &Stride,
        hub:     &Hub,
        markers: &mut MarkerList,
        ledger:  &mut ResourceLedger,
        rng:     &mut AgentRng,
    ) -> DeerResult<Vec<DeerEvent>> {
        let mut events = Vec::new();

        // Displacement of the previous tick, tested for marker crossings.
        let (came_from, now_at) = (self.previous, self.position);
        self.previous = self.position;

        if self.rest_remaining > 0 {
            self.rest_remaining -= 1;
            let held_is_live = self
                .marker
                .and_then(|id| markers.get(id))
                .is_some_and(|m| !m.is_disabled());
            if !held_is_live {
                self.detach();
                let finalized = markers.finalized();
                if let Some(&id) = rng.choose(&finalized) {
                    self.marker = Some(id);
                    self.trail = TrailRole::None;
                    events.push(DeerEvent::MarkerAttached(id));
                }
            }
            return Ok(events);
        }

        if self.cargo.is_some() {
            self.return_home(stride, hub, markers, ledger, &mut events)?;
            return Ok(events);
        }

        if self.marker.is_none() {
            if let Some(id) = markers.first_touched(came_from, now_at) {
                debug!(agent = %self.id, marker = %id, "crossed marker");
                self.marker = Some(id);
                events.push(DeerEvent::MarkerAttached(id));
            }
        }

        if self.marker.is_some() {
            self.follow_marker(stride, markers, rng, &mut events);
        } else {
            self.random_walk(stride, rng);
        }
        Ok(events)
    }

    /// Extraction side effect, run after movement.
    ///
    /// A deer that is not carrying and stands inside a location takes up to
    /// `stride.pickup_cap` units from the first such location and snaps to
    /// its center.  The location is left in the pool even when exhausted;
    /// removing it is the caller's job.
    pub fn collect(
        &mut self,
        stride:  &Stride,
        hub:     &Hub,
        pool:    &mut LocationPool,
        markers: &mut MarkerList,
    ) -> DeerResult<Vec<DeerEvent>> {
        let mut events = Vec::new();
        if self.cargo.is_some() || self.mode != DeerMode::Foraging {
            return Ok(events);
        }
        let Some(location_id) = pool.first_containing(self.position) else {
            return Ok(events);
        };
        let location = pool
            .get_mut(location_id)
            .ok_or(DeerError::LocationNotFound(location_id))?;

        let amount = location.extract(stride.pickup_cap);
        if amount == 0 {
            return Ok(events);
        }
        let exhausted = location.is_exhausted();
        let center = location.center;
        let resource = location.resource;

        self.cargo = Some(Cargo { resource, amount });
        self.position = center;
        debug!(agent = %self.id, location = %location_id, amount, exhausted, "picked up");
        events.push(DeerEvent::PickedUp { location: location_id, resource, amount, exhausted });

        match (markers.find_by_location(location_id), exhausted) {
            (Some(id), true) => {
                if let Some(marker) = markers.get_mut(id) {
                    marker.begin_erasing();
                }
                debug!(agent = %self.id, marker = %id, "erasing");
                self.marker = Some(id);
                self.trail = TrailRole::Erasing;
                events.push(DeerEvent::ErasingStarted(id));
            }
            (Some(id), false) => {
                if self.marker != Some(id) {
                    events.push(DeerEvent::MarkerAttached(id));
                }
                self.marker = Some(id);
                self.trail = TrailRole::None;
            }
            (None, true) => {
                let id = markers.create_spent(location_id, center, hub.center);
                debug!(agent = %self.id, marker = %id, "location spent on discovery");
                self.detach();
            }
            (None, false) => {
                let id = markers.create(location_id, center, hub.center);
                debug!(agent = %self.id, marker = %id, "painting");
                self.marker = Some(id);
                self.trail = TrailRole::Painting;
                events.push(DeerEvent::MarkerCreated(id));
            }
        }
        Ok(events)
    }

    // ── Movement rules ────────────────────────────────────────────────────

    fn return_home(
        &mut self,
        stride:  &Stride,
        hub:     &Hub,
        markers: &mut MarkerList,
        ledger:  &mut ResourceLedger,
        events:  &mut Vec<DeerEvent>,
    ) -> DeerResult<()> {
        if hub.contains(self.position) {
            return self.arrive(stride, hub, markers, ledger, events);
        }

        self.position = self
            .position
            .step_towards(hub.center, stride.step)
            .clamp_to_world(stride.world_size);

        if let Some(marker) = self.marker.and_then(|id| markers.get_mut(id)) {
            match self.trail {
                TrailRole::Painting => marker.paint_to(self.position),
                TrailRole::Erasing  => marker.erase_to(self.position),
                TrailRole::None     => {}
            }
        }
        Ok(())
    }

    /// Deposit, settle the held marker and start resting.
    fn arrive(
        &mut self,
        stride:  &Stride,
        hub:     &Hub,
        markers: &mut MarkerList,
        ledger:  &mut ResourceLedger,
        events:  &mut Vec<DeerEvent>,
    ) -> DeerResult<()> {
        let Some(cargo) = self.cargo.take() else {
            return Ok(());
        };
        ledger.deposit(cargo.resource, cargo.amount)?;
        events.push(DeerEvent::Deposited { resource: cargo.resource, amount: cargo.amount });
        self.rest_remaining = stride.rest_ticks;

        let Some(id) = self.marker else {
            return Ok(());
        };
        match self.trail {
            TrailRole::Painting => {
                if let Some(marker) = markers.get_mut(id) {
                    if marker.finalize(hub.center) {
                        debug!(agent = %self.id, %marker, "finalized");
                        events.push(DeerEvent::MarkerFinalized(id));
                    }
                }
                self.detach();
            }
            TrailRole::Erasing => {
                if let Some(marker) = markers.get_mut(id) {
                    marker.disable();
                    debug!(agent = %self.id, marker = %id, "removed");
                    events.push(DeerEvent::MarkerDisabled(id));
                }
                self.detach();
            }
            // A follower keeps its marker and walks it again after resting.
            TrailRole::None => {}
        }
        Ok(())
    }

    fn follow_marker(
        &mut self,
        stride:  &Stride,
        markers: &MarkerList,
        rng:     &mut AgentRng,
        events:  &mut Vec<DeerEvent>,
    ) {
        let target = self
            .marker
            .and_then(|id| markers.get(id))
            .filter(|m| !m.is_disabled() && m.endpoint() != self.position && m.leads_from(self.position))
            .map(|m| m.endpoint());

        match target {
            Some(endpoint) => {
                self.position = self
                    .position
                    .step_towards(endpoint, stride.step)
                    .clamp_to_world(stride.world_size);
            }
            None => {
                if let Some(id) = self.marker {
                    events.push(DeerEvent::MarkerDetached(id));
                }
                self.detach();
                self.random_walk(stride, rng);
            }
        }
    }

    fn random_walk(&mut self, stride: &Stride, rng: &mut AgentRng) {
        let heading = rng.heading();
        self.position = (self.position + Point::from_polar(heading, stride.step))
            .clamp_to_world(stride.world_size);
    }
}
