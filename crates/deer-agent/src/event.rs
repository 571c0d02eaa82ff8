//! Per-tick deer events, reported to the simulation observer.

use deer_core::{DestinationId, LocationId, MarkerId, ResourceId, RouteId};

/// Something a deer did during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeerEvent {
    PickedUp {
        location:  LocationId,
        resource:  ResourceId,
        amount:    u32,
        /// The extraction took the last unit.
        exhausted: bool,
    },
    Deposited {
        resource: ResourceId,
        amount:   u32,
    },
    /// Started painting a new marker.
    MarkerCreated(MarkerId),
    /// Began following a marker (crossed it, picked it at rest, or found it
    /// at the location).
    MarkerAttached(MarkerId),
    /// Let go of a marker that no longer leads anywhere.
    MarkerDetached(MarkerId),
    MarkerFinalized(MarkerId),
    ErasingStarted(MarkerId),
    MarkerDisabled(MarkerId),
    RouteClaimed(RouteId),
    Delivered {
        route:       RouteId,
        destination: DestinationId,
    },
    /// Sent home before the distribution budget runs out.
    Recalled,
    Finished,
}
