//! A capacity-bounded delivery route.

use deer_core::{DestinationId, RouteId};

use crate::{Destination, RouteError, RouteResult};

/// Ordered stops one deer delivers to, in visiting order.
///
/// A route is claimed at most once; claiming again is a driver bug and
/// returns [`RouteError::AlreadyClaimed`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id:  RouteId,
    stops:   Vec<Destination>,
    claimed: bool,
}

impl Route {
    pub fn new(id: RouteId, stops: Vec<Destination>) -> Self {
        Self { id, stops, claimed: false }
    }

    pub fn stops(&self) -> &[Destination] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Pick-once claim.
    pub fn claim(&mut self) -> RouteResult<()> {
        if self.claimed {
            return Err(RouteError::AlreadyClaimed(self.id));
        }
        self.claimed = true;
        Ok(())
    }

    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// `true` once every stop is delivered.
    pub fn is_finished(&self) -> bool {
        self.stops.iter().all(|d| d.delivered)
    }

    pub fn remaining_count(&self) -> usize {
        self.stops.iter().filter(|d| !d.delivered).count()
    }

    /// First undelivered stop.
    pub fn next_destination(&self) -> RouteResult<&Destination> {
        self.stops
            .iter()
            .find(|d| !d.delivered)
            .ok_or(RouteError::Exhausted(self.id))
    }

    /// Mark the first undelivered stop delivered and return its id.
    pub fn deliver_next(&mut self) -> RouteResult<DestinationId> {
        let id = self.id;
        let stop = self
            .stops
            .iter_mut()
            .find(|d| !d.delivered)
            .ok_or(RouteError::Exhausted(id))?;
        stop.delivered = true;
        Ok(stop.id)
    }
}
