//! Per-deer state.

use deer_core::{AgentId, ForageConfig, MarkerId, Point, ResourceId, RouteId};

// ── Stride ────────────────────────────────────────────────────────────────────

/// The movement-model scalars a deer needs for one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stride {
    /// Distance covered per tick (`dx`).
    pub step:       f64,
    /// Edge length of the world; positions are clamped to `[0, world_size]`.
    pub world_size: f64,
    /// Maximum units taken from a location in one trip.
    pub pickup_cap: u32,
    /// Ticks spent resting at the hub after a deposit.
    pub rest_ticks: u32,
}

impl From<&ForageConfig> for Stride {
    fn from(config: &ForageConfig) -> Self {
        Self {
            step:       config.step,
            world_size: config.world_size,
            pickup_cap: config.pickup_cap,
            rest_ticks: config.rest_ticks,
        }
    }
}

// ── State enums ───────────────────────────────────────────────────────────────

/// What a deer is carrying home.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cargo {
    pub resource: ResourceId,
    pub amount:   u32,
}

/// How the deer relates to the marker it holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrailRole {
    /// Following it (or holding nothing).
    #[default]
    None,
    /// Stretching its startpoint home.
    Painting,
    /// Dragging its endpoint home.
    Erasing,
}

/// Simulation phase of one deer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeerMode {
    #[default]
    Foraging,
    /// Walking a claimed route (or about to claim one).
    Distributing,
    /// Route done or nothing to claim; heads for the hub and claims again
    /// there.
    ReturningHome,
    /// Recalled by the time budget; finishes on reaching the hub.
    Recalled,
    Finished,
}

/// Single human-readable state derived from the deer's flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeerStatus {
    Resting,
    Searching,
    FollowingMarker,
    CarryingHome,
    PaintingMarker,
    ErasingMarker,
    TraversingRoute,
    ReturningHome,
    Finished,
}

impl std::fmt::Display for DeerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeerStatus::Resting         => "resting",
            DeerStatus::Searching       => "random search",
            DeerStatus::FollowingMarker => "following marker",
            DeerStatus::CarryingHome    => "returning with cargo",
            DeerStatus::PaintingMarker  => "painting marker",
            DeerStatus::ErasingMarker   => "erasing marker",
            DeerStatus::TraversingRoute => "traversing route",
            DeerStatus::ReturningHome   => "returning home",
            DeerStatus::Finished        => "finished",
        };
        f.write_str(s)
    }
}

// ── Deer ──────────────────────────────────────────────────────────────────────

/// One agent of the herd.
///
/// Created at the hub center and kept for the whole run.  All references to
/// shared state (markers, routes) are ids, resolved against the shared
/// collections each tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deer {
    pub id:                    AgentId,
    pub(crate) position:       Point,
    /// Position at the start of the previous tick; `previous → position` is
    /// the displacement tested for marker crossings.
    pub(crate) previous:       Point,
    pub(crate) cargo:          Option<Cargo>,
    pub(crate) rest_remaining: u32,
    pub(crate) marker:         Option<MarkerId>,
    pub(crate) trail:          TrailRole,
    pub(crate) mode:           DeerMode,
    pub(crate) route:          Option<RouteId>,
}

impl Deer {
    pub fn new(id: AgentId, position: Point) -> Self {
        Self {
            id,
            position,
            previous:       position,
            cargo:          None,
            rest_remaining: 0,
            marker:         None,
            trail:          TrailRole::None,
            mode:           DeerMode::Foraging,
            route:          None,
        }
    }

    /// Teleport to `position`, discarding the last displacement.
    pub fn place(&mut self, position: Point) {
        self.position = position;
        self.previous = position;
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn previous_position(&self) -> Point {
        self.previous
    }

    #[inline]
    pub fn cargo(&self) -> Option<Cargo> {
        self.cargo
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.cargo.is_some()
    }

    #[inline]
    pub fn is_resting(&self) -> bool {
        self.rest_remaining > 0
    }

    #[inline]
    pub fn marker(&self) -> Option<MarkerId> {
        self.marker
    }

    #[inline]
    pub fn trail(&self) -> TrailRole {
        self.trail
    }

    #[inline]
    pub fn mode(&self) -> DeerMode {
        self.mode
    }

    #[inline]
    pub fn route(&self) -> Option<RouteId> {
        self.route
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.mode == DeerMode::Finished
    }

    /// Straight-line ticks to reach `target` (`ceil(distance / step)`).
    ///
    /// A lower bound whenever the deer is actually following a detour.
    pub fn steps_to(&self, target: Point, step: f64) -> u64 {
        (self.position.distance(target) / step).ceil() as u64
    }

    pub fn status(&self) -> DeerStatus {
        match self.mode {
            DeerMode::Finished => return DeerStatus::Finished,
            DeerMode::ReturningHome | DeerMode::Recalled => return DeerStatus::ReturningHome,
            DeerMode::Distributing => return DeerStatus::TraversingRoute,
            DeerMode::Foraging => {}
        }
        if self.is_carrying() {
            match self.trail {
                TrailRole::Painting => DeerStatus::PaintingMarker,
                TrailRole::Erasing  => DeerStatus::ErasingMarker,
                TrailRole::None     => DeerStatus::CarryingHome,
            }
        } else if self.is_resting() {
            DeerStatus::Resting
        } else if self.marker.is_some() {
            DeerStatus::FollowingMarker
        } else {
            DeerStatus::Searching
        }
    }

    pub(crate) fn detach(&mut self) {
        self.marker = None;
        self.trail = TrailRole::None;
    }
}

impl std::fmt::Display for Deer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | at {}", self.id, self.status(), self.position)?;
        if let Some(cargo) = self.cargo {
            write!(f, " | carrying {} of {}", cargo.amount, cargo.resource)?;
        }
        Ok(())
    }
}
