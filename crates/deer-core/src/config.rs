//! Run configuration.
//!
//! Typically loaded from a JSON file by the application crate and passed to
//! the simulation builder.  Every field has a default, so a config file only
//! needs to name what it overrides.

use crate::{DeerError, DeerResult};

/// When the foraging phase ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExitPolicy {
    /// Run for exactly `forage_ticks` ticks.
    #[default]
    FixedBudget,
    /// Stop early once every location is exhausted and no deer is still
    /// carrying; `forage_ticks` remains the upper bound.
    UntilDepleted,
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForageConfig {
    /// Edge length `N` of the square world `[0, N] × [0, N]`.
    pub world_size: f64,

    /// Distance a deer covers per tick (`dx`).
    pub step: f64,

    /// Maximum units a deer extracts from a location in one trip.
    pub pickup_cap: u32,

    /// Ticks a deer rests at the hub after depositing.
    pub rest_ticks: u32,

    /// Time budget of the foraging phase.
    pub forage_ticks: u64,

    pub exit_policy: ExitPolicy,

    /// Maximum destinations per delivery route.
    pub route_capacity: usize,

    /// Time budget of the distribution phase.
    pub distribution_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for ForageConfig {
    fn default() -> Self {
        Self {
            world_size:         100.0,
            step:               5.0,
            pickup_cap:         10,
            rest_ticks:         1,
            forage_ticks:       2_000,
            exit_policy:        ExitPolicy::FixedBudget,
            route_capacity:     3,
            distribution_ticks: 2_000,
            seed:               42,
        }
    }
}

impl ForageConfig {
    /// Reject values the movement model cannot work with.
    pub fn validate(&self) -> DeerResult<()> {
        if !(self.world_size.is_finite() && self.world_size > 0.0) {
            return Err(DeerError::Config(format!(
                "world_size must be positive, got {}",
                self.world_size
            )));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(DeerError::Config(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.pickup_cap == 0 {
            return Err(DeerError::Config("pickup_cap must be at least 1".into()));
        }
        if self.route_capacity == 0 {
            return Err(DeerError::Config("route_capacity must be at least 1".into()));
        }
        Ok(())
    }
}
