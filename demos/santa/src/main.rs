//! santa — a full santa_hunt run from the command line.
//!
//! A herd of deer forages a generated world, paints shortcut trails between
//! the hub and the resource sites, and then delivers gifts to kids' houses
//! along nearest-neighbor routes.
//!
//! ```text
//! santa [config.json]
//! RUST_LOG=deer_agent=debug santa        # per-deer trail events
//! ```
//!
//! Every field of the JSON file is optional; see `RunConfig`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use deer_agent::DeerEvent;
use deer_core::{AgentId, ForageConfig, Tick};
use deer_route::Destination;
use deer_sim::{SimBuilder, SimObserver, SimPhase};
use deer_world::WorldSpec;

// ── Run configuration ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunConfig {
    forage:         ForageConfig,
    world:          WorldSpec,
    agents:         usize,
    /// Collected units needed to make one gift.
    units_per_gift: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            forage:         ForageConfig::default(),
            world:          WorldSpec::default(),
            agents:         10,
            units_per_gift: 15,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    pickups:    usize,
    deposits:   usize,
    trails:     usize,
    erased:     usize,
    deliveries: usize,
    recalls:    usize,
}

impl SimObserver for Tally {
    fn on_event(&mut self, _tick: Tick, _agent: AgentId, event: &DeerEvent) {
        match event {
            DeerEvent::PickedUp { .. }        => self.pickups += 1,
            DeerEvent::Deposited { .. }       => self.deposits += 1,
            DeerEvent::MarkerFinalized(_)     => self.trails += 1,
            DeerEvent::MarkerDisabled(_)      => self.erased += 1,
            DeerEvent::Delivered { .. }       => self.deliveries += 1,
            DeerEvent::Recalled               => self.recalls += 1,
            _ => {}
        }
    }

    fn on_phase_end(&mut self, phase: SimPhase, tick: Tick) {
        info!(?phase, %tick, "phase complete");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let arg = std::env::args().nth(1);
    let run = load_config(arg.as_deref().map(Path::new))?;
    println!("=== santa_hunt ===");
    println!(
        "Deer: {}  |  World: {}  |  Seed: {}",
        run.agents, run.forage.world_size, run.forage.seed
    );

    // 1. World and herd.
    let (builder, houses) = SimBuilder::generated(run.forage.clone(), &run.world)?;
    let mut sim = builder.agents(run.agents).build()?;
    let mut tally = Tally::default();

    // 2. Foraging.
    let t0 = Instant::now();
    let forage_ticks = sim.run_forage(&mut tally)?;
    println!();
    println!("Foraging: {forage_ticks} ticks");
    for resource in sim.collected().iter() {
        println!("  {:<8} {:>6}", resource.name, resource.collected);
    }
    println!(
        "  pickups {}  deposits {}  trails painted {}  trails erased {}",
        tally.pickups, tally.deposits, tally.trails, tally.erased
    );

    // 3. Gifts: one per `units_per_gift` collected units, at most one per house.
    let gifts = (sim.collected().total_collected() / run.units_per_gift.max(1)) as usize;
    let eligible: Vec<Destination> = houses
        .iter()
        .take(gifts)
        .map(|h| Destination::new(h.id, h.center, h.size))
        .collect();
    println!("Gifts: {} for {} houses", eligible.len(), houses.len());

    // 4. Distribution.
    let routes = sim.assign_routes(eligible)?;
    let distribution_ticks = sim.run_distribution(&mut tally)?;
    println!();
    println!("Distribution: {distribution_ticks} ticks over {routes} routes");
    println!(
        "  delivered {}  recalled {}",
        sim.delivered_count(),
        tally.recalls
    );
    println!("Run complete in {:.3} s", t0.elapsed().as_secs_f64());

    println!();
    println!("{:<8} {:<22} {:<18}", "Deer", "Status", "Position");
    println!("{}", "-".repeat(48));
    for deer in sim.herd.iter() {
        println!(
            "{:<8} {:<22} {:<18}",
            deer.id.0,
            deer.status().to_string(),
            deer.position().to_string()
        );
    }
    Ok(())
}
