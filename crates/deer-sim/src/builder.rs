//! Fluent builder for constructing a [`Sim`].

use deer_agent::HerdBuilder;
use deer_core::{ForageConfig, Point, SimRng, Tick};
use deer_route::RouteBook;
use deer_trail::MarkerList;
use deer_world::{House, Hub, LocationPool, ResourceLedger, WorldSpec, generate_world};
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`ForageConfig`]: step, pickup cap, time budgets, seed, …
/// - [`Hub`], [`ResourceLedger`], [`LocationPool`]: the world, either hand
///   built or from [`generated`](Self::generated)
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                     |
/// |--------------------------|-----------------------------|
/// | `.agents(n)`             | 1 deer                      |
/// | `.markers(list)`         | empty marker list           |
/// | `.initial_positions(v)`  | every deer at the hub center |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, hub, ledger, pool)
///     .agents(10)
///     .build()?;
/// sim.run_forage(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    ForageConfig,
    hub:       Hub,
    ledger:    ResourceLedger,
    pool:      LocationPool,
    agents:    usize,
    markers:   Option<MarkerList>,
    positions: Option<Vec<Point>>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: ForageConfig, hub: Hub, ledger: ResourceLedger, pool: LocationPool) -> Self {
        Self {
            config,
            hub,
            ledger,
            pool,
            agents:    1,
            markers:   None,
            positions: None,
        }
    }

    /// Generate a world from `spec` with a [`SimRng`] seeded from
    /// `config.seed` and return the builder plus the kids' houses.
    pub fn generated(config: ForageConfig, spec: &WorldSpec) -> SimResult<(Self, Vec<House>)> {
        let mut rng = SimRng::new(config.seed);
        let world = generate_world(spec, config.world_size, &mut rng)?;
        info!(
            hub = %world.hub.center,
            locations = world.pool.len(),
            houses = world.houses.len(),
            "world generated"
        );
        Ok((Self::new(config, world.hub, world.ledger, world.pool), world.houses))
    }

    /// Number of deer in the herd.
    pub fn agents(mut self, count: usize) -> Self {
        self.agents = count;
        self
    }

    /// Start from an existing marker list instead of an empty one.
    pub fn markers(mut self, markers: MarkerList) -> Self {
        self.markers = Some(markers);
        self
    }

    /// Supply the starting position of each deer (must be length `agents`).
    pub fn initial_positions(mut self, positions: Vec<Point>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, spawn the herd and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;
        if self.agents == 0 {
            return Err(SimError::Config("herd must have at least one deer".into()));
        }

        let (mut herd, rngs) = HerdBuilder::new(self.agents, self.config.seed)
            .at(self.hub.center)
            .build();

        if let Some(positions) = self.positions {
            if positions.len() != self.agents {
                return Err(SimError::AgentCountMismatch {
                    expected: self.agents,
                    got:      positions.len(),
                    what:     "initial positions",
                });
            }
            for (deer, pos) in herd.iter_mut().zip(positions) {
                deer.place(pos.clamp_to_world(self.config.world_size));
            }
        }

        Ok(Sim {
            config:  self.config,
            tick:    Tick::ZERO,
            hub:     self.hub,
            ledger:  self.ledger,
            pool:    self.pool,
            markers: self.markers.unwrap_or_default(),
            herd,
            rngs,
            routes:  RouteBook::default(),
        })
    }
}
