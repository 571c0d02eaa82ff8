//! The distribution phase: claim a route, walk it, come back for the next.

use deer_route::{Route, RouteBook, RouteResult};
use deer_world::Hub;
use tracing::debug;

use crate::{Deer, DeerEvent, DeerMode, TrailRole};

impl Deer {
    /// Leave the foraging phase.  Cargo still held is dropped and markers
    /// are let go.
    pub fn begin_distribution(&mut self) {
        self.cargo = None;
        self.rest_remaining = 0;
        self.marker = None;
        self.trail = TrailRole::None;
        self.route = None;
        self.previous = self.position;
        self.mode = DeerMode::Distributing;
    }

    /// Claim the first unclaimed route of `book` if this deer has none yet.
    ///
    /// With nothing left to claim the deer is done: it finishes on the spot
    /// when standing in the hub and heads home otherwise.
    pub fn pick_route(&mut self, book: &mut RouteBook, hub: &Hub) -> RouteResult<Option<DeerEvent>> {
        if self.mode != DeerMode::Distributing || self.route.is_some() {
            return Ok(None);
        }
        match book.claim_next()? {
            Some(id) => {
                debug!(agent = %self.id, route = %id, "claimed route");
                self.route = Some(id);
                Ok(Some(DeerEvent::RouteClaimed(id)))
            }
            None if hub.contains(self.position) => {
                self.mode = DeerMode::Finished;
                Ok(Some(DeerEvent::Finished))
            }
            None => {
                self.mode = DeerMode::ReturningHome;
                Ok(None)
            }
        }
    }

    /// Straight-line ticks back to the hub center.
    #[inline]
    pub fn steps_home(&self, hub: &Hub, step: f64) -> u64 {
        self.steps_to(hub.center, step)
    }

    /// Abandon the rest of the route and head home for good.  Returns
    /// `false` if the deer was not distributing.
    pub fn recall(&mut self) -> bool {
        if self.mode != DeerMode::Distributing {
            return false;
        }
        self.mode = DeerMode::Recalled;
        true
    }

    /// Advance one distribution tick.
    ///
    /// `route` must be the route this deer claimed (`None` if it has none).
    /// Each deer only ever touches its own route, so the traversal of
    /// different deer is independent.  A deer that gets back to the hub
    /// after a route drops it and is ready to claim again next tick.
    pub fn traverse(&mut self, step: f64, hub: &Hub, route: Option<&mut Route>) -> RouteResult<Vec<DeerEvent>> {
        let mut events = Vec::new();
        self.previous = self.position;

        if self.mode == DeerMode::Distributing {
            match route.filter(|r| !r.is_finished()) {
                Some(route) => {
                    let target = *route.next_destination()?;
                    self.position = self.position.step_towards(target.center, step);
                    if target.contains(self.position) {
                        let destination = route.deliver_next()?;
                        debug!(agent = %self.id, route = %route.id, %destination, "delivered");
                        events.push(DeerEvent::Delivered { route: route.id, destination });
                    }
                    return Ok(events);
                }
                None if self.route.is_none() => return Ok(events),
                None => self.mode = DeerMode::ReturningHome,
            }
        }

        match self.mode {
            DeerMode::ReturningHome | DeerMode::Recalled if !hub.contains(self.position) => {
                self.position = self.position.step_towards(hub.center, step);
            }
            DeerMode::ReturningHome => {
                self.route = None;
                self.mode = DeerMode::Distributing;
            }
            DeerMode::Recalled => {
                self.mode = DeerMode::Finished;
                events.push(DeerEvent::Finished);
            }
            _ => {}
        }
        Ok(events)
    }
}
