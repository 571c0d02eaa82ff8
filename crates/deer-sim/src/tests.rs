//! Integration tests for deer-sim.

use deer_agent::{DeerEvent, Stride};
use deer_core::{AgentId, DestinationId, ExitPolicy, ForageConfig, Point, ResourceId, Tick};
use deer_route::Destination;
use deer_trail::MarkerPhase;
use deer_world::{Hub, LocationPool, ResourceLedger};

use crate::{SimBuilder, SimObserver, SimPhase};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HUB: Point = Point::new(90.0, 90.0);
const SITE: Point = Point::new(10.0, 10.0);

fn test_config(forage_ticks: u64) -> ForageConfig {
    ForageConfig { forage_ticks, ..ForageConfig::default() }
}

/// World size 100, hub at (90, 90) of size 10, one location at (10, 10).
fn one_site_builder(config: ForageConfig, radius: f64) -> SimBuilder {
    let mut pool = LocationPool::new();
    pool.add(ResourceId(0), SITE, radius);
    SimBuilder::new(config, Hub::new(HUB, 10.0), ResourceLedger::new(["wood"]), pool)
}

fn empty_builder(config: ForageConfig) -> SimBuilder {
    SimBuilder::new(config, Hub::new(HUB, 10.0), ResourceLedger::new(["wood"]), LocationPool::new())
}

fn houses(points: &[(f64, f64)]) -> Vec<Destination> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Destination::new(DestinationId(i as u32), Point::new(x, y), 2.0))
        .collect()
}

#[derive(Default)]
struct Recorder {
    events:      Vec<(Tick, AgentId, DeerEvent)>,
    tick_starts: u64,
    tick_ends:   u64,
    phases:      Vec<(SimPhase, Tick)>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.tick_starts += 1;
    }

    fn on_event(&mut self, tick: Tick, agent: AgentId, event: &DeerEvent) {
        self.events.push((tick, agent, *event));
    }

    fn on_tick_end(&mut self, _tick: Tick) {
        self.tick_ends += 1;
    }

    fn on_phase_end(&mut self, phase: SimPhase, tick: Tick) {
        self.phases.push((phase, tick));
    }
}

impl Recorder {
    fn count(&self, pred: impl Fn(&DeerEvent) -> bool) -> usize {
        self.events.iter().filter(|(_, _, e)| pred(e)).count()
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let sim = empty_builder(test_config(10)).agents(3).build().unwrap();
        assert_eq!(sim.herd.len(), 3);
        assert_eq!(sim.rngs.len(), 3);
        assert_eq!(sim.tick, Tick::ZERO);
        assert!(sim.herd.iter().all(|d| d.position() == HUB));
    }

    #[test]
    fn invalid_config_errors() {
        let config = ForageConfig { step: 0.0, ..ForageConfig::default() };
        assert!(matches!(empty_builder(config).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn empty_herd_errors() {
        assert!(matches!(
            empty_builder(test_config(10)).agents(0).build(),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = empty_builder(test_config(10))
            .agents(3)
            .initial_positions(vec![HUB; 2])
            .build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch { expected: 3, got: 2, .. })
        ));
    }

    #[test]
    fn initial_positions_are_clamped_into_the_world() {
        let sim = empty_builder(test_config(10))
            .agents(2)
            .initial_positions(vec![Point::new(5.0, 5.0), Point::new(-3.0, 140.0)])
            .build()
            .unwrap();
        let got: Vec<_> = sim.herd.iter().map(|d| d.position()).collect();
        assert_eq!(got, vec![Point::new(5.0, 5.0), Point::new(0.0, 100.0)]);
    }

    #[test]
    fn generated_world_builds() {
        let (builder, houses) =
            SimBuilder::generated(ForageConfig::default(), &deer_world::WorldSpec::default()).unwrap();
        let sim = builder.agents(4).build().unwrap();
        assert_eq!(houses.len(), 12);
        assert_eq!(sim.pool.len(), 6);
        assert_eq!(sim.ledger.len(), 3);
        assert!(sim.herd.iter().all(|d| sim.hub.contains(d.position())));
    }
}

// ── Foraging ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod forage_tests {
    use super::*;

    #[test]
    fn single_deer_finds_site_and_brings_back_one_load() {
        let mut sim = one_site_builder(test_config(200_000), 5.0).build().unwrap();
        assert_eq!(sim.pool.total_remaining(), 78);
        let stride = Stride::from(&sim.config);
        let mut rec = Recorder::default();

        for _ in 0..200_000 {
            sim.forage_tick(&stride, &mut rec).unwrap();
            if sim.collected().total_collected() > 0 {
                break;
            }
        }

        assert_eq!(sim.collected().get(ResourceId(0)).unwrap().collected, 10);
        let site = sim.pool.iter().next().unwrap();
        assert_eq!(site.amount(), 68);
        assert!((site.radius() - 4.65).abs() < 0.01);
        assert_eq!(rec.count(|e| matches!(e, DeerEvent::PickedUp { amount: 10, .. })), 1);
        assert_eq!(rec.count(|e| matches!(e, DeerEvent::MarkerFinalized(_))), 1);
        assert!(sim.markers.iter().any(|m| m.is_finalized() && m.startpoint() == HUB));
        assert_eq!(rec.tick_starts, rec.tick_ends);
    }

    #[test]
    fn spent_locations_and_markers_are_cleaned_up() {
        let mut sim = one_site_builder(test_config(200_000), 1.0).build().unwrap();
        let stride = Stride::from(&sim.config);
        let mut rec = Recorder::default();

        for _ in 0..200_000 {
            sim.forage_tick(&stride, &mut rec).unwrap();
            assert!(sim.markers.iter().all(|m| !m.is_disabled()));
            if !rec.events.is_empty() && sim.pool.is_empty() {
                break;
            }
        }
        assert!(sim.pool.is_empty());
        assert!(sim.markers.is_empty());
        assert_eq!(rec.count(|e| matches!(e, DeerEvent::PickedUp { exhausted: true, .. })), 1);
    }

    #[test]
    fn until_depleted_stops_once_everything_is_home() {
        let config = ForageConfig {
            exit_policy: ExitPolicy::UntilDepleted,
            ..test_config(200_000)
        };
        let mut sim = one_site_builder(config, 1.0).agents(3).build().unwrap();
        let ticks = sim.run_forage(&mut crate::NoopObserver).unwrap();

        assert!(ticks < 200_000);
        assert!(sim.is_depleted());
        assert_eq!(sim.collected().total_collected(), 3);
        assert_eq!(sim.tick, Tick(ticks));
    }

    #[test]
    fn until_depleted_with_empty_world_runs_nothing() {
        let config = ForageConfig { exit_policy: ExitPolicy::UntilDepleted, ..test_config(50) };
        let mut sim = empty_builder(config).build().unwrap();
        assert_eq!(sim.run_forage(&mut crate::NoopObserver).unwrap(), 0);
    }

    #[test]
    fn fixed_budget_runs_exactly_the_budget() {
        let mut sim = empty_builder(test_config(50)).agents(2).build().unwrap();
        let mut rec = Recorder::default();
        assert_eq!(sim.run_forage(&mut rec).unwrap(), 50);
        assert_eq!(sim.tick, Tick(50));
        assert_eq!(rec.tick_starts, 50);
        assert_eq!(rec.phases, vec![(SimPhase::Foraging, Tick(50))]);
    }

    #[test]
    fn later_deer_see_earlier_mutations_within_a_tick() {
        // 78 units, 50 per trip: deer 0 paints, deer 1 empties, deer 2 finds nothing.
        let config = ForageConfig { step: 0.5, pickup_cap: 50, ..test_config(10) };
        let mut sim = one_site_builder(config, 5.0)
            .agents(3)
            .initial_positions(vec![SITE; 3])
            .build()
            .unwrap();
        let stride = Stride::from(&sim.config);
        let mut rec = Recorder::default();
        sim.forage_tick(&stride, &mut rec).unwrap();

        let by = |agent: u32| -> Vec<DeerEvent> {
            rec.events
                .iter()
                .filter(|(t, a, _)| *t == Tick::ZERO && *a == AgentId(agent))
                .map(|(_, _, e)| *e)
                .collect()
        };
        let first = by(0);
        assert!(matches!(first[0], DeerEvent::PickedUp { amount: 50, exhausted: false, .. }));
        let DeerEvent::MarkerCreated(marker) = first[1] else {
            panic!("deer 0 should paint a marker, got {first:?}");
        };

        let second = by(1);
        assert!(matches!(second[0], DeerEvent::PickedUp { amount: 28, exhausted: true, .. }));
        assert_eq!(second[1], DeerEvent::ErasingStarted(marker));

        assert!(by(2).is_empty());
        assert!(sim.pool.is_empty());
        assert_eq!(sim.markers.get(marker).unwrap().phase(), MarkerPhase::Erasing);
        assert_eq!(sim.herd.get(AgentId(1)).unwrap().marker(), Some(marker));
        assert!(!sim.herd.get(AgentId(2)).unwrap().is_carrying());
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed: u64| {
            let config = ForageConfig { seed, ..test_config(400) };
            let (builder, _) = SimBuilder::generated(config, &deer_world::WorldSpec::default()).unwrap();
            let mut sim = builder.agents(8).build().unwrap();
            sim.run_forage(&mut crate::NoopObserver).unwrap();
            let positions: Vec<Point> = sim.herd.iter().map(|d| d.position()).collect();
            (positions, sim.collected().total_collected(), sim.markers.len())
        };
        assert_eq!(run(7), run(7));
        assert_ne!(run(7).0, run(8).0);
    }
}

// ── Distribution ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod distribution_tests {
    use deer_agent::DeerMode;

    use super::*;

    #[test]
    fn every_stop_is_delivered_and_everybody_comes_home() {
        let mut sim = empty_builder(test_config(0)).agents(2).build().unwrap();
        let routes = sim
            .assign_routes(houses(&[(20.0, 20.0), (25.0, 20.0), (80.0, 20.0), (20.0, 80.0)]))
            .unwrap();
        assert_eq!(routes, 2);

        let mut rec = Recorder::default();
        let ticks = sim.run_distribution(&mut rec).unwrap();

        assert!(ticks < sim.config.distribution_ticks);
        assert_eq!(sim.delivered_count(), 4);
        assert!(sim.routes.all_finished());
        assert!(sim.herd.all_finished());
        assert_eq!(rec.count(|e| matches!(e, DeerEvent::Delivered { .. })), 4);
        assert_eq!(rec.count(|e| matches!(e, DeerEvent::RouteClaimed(_))), 2);
        assert_eq!(rec.count(|e| *e == DeerEvent::Finished), 2);
        assert_eq!(rec.phases.last().map(|p| p.0), Some(SimPhase::Distribution));
    }

    #[test]
    fn spare_deer_finish_without_a_route() {
        let mut sim = empty_builder(test_config(0)).agents(3).build().unwrap();
        sim.assign_routes(houses(&[(60.0, 60.0)])).unwrap();
        let mut rec = Recorder::default();
        sim.distribution_tick(100, &mut rec).unwrap();

        for id in [AgentId(1), AgentId(2)] {
            assert!(sim.herd.get(id).unwrap().is_finished());
        }
        assert_eq!(sim.herd.get(AgentId(0)).unwrap().mode(), DeerMode::Distributing);
    }

    #[test]
    fn one_deer_walks_every_route_in_turn() {
        let mut sim = empty_builder(test_config(0)).build().unwrap();
        let routes = sim
            .assign_routes(houses(&[
                (20.0, 20.0),
                (25.0, 20.0),
                (30.0, 20.0),
                (20.0, 80.0),
                (25.0, 80.0),
                (30.0, 80.0),
            ]))
            .unwrap();
        assert_eq!(routes, 2);

        let mut rec = Recorder::default();
        let ticks = sim.run_distribution(&mut rec).unwrap();

        assert!(ticks < sim.config.distribution_ticks);
        assert!(sim.routes.all_finished());
        assert_eq!(sim.routes.unclaimed_count(), 0);
        assert_eq!(sim.delivered_count(), 6);
        assert_eq!(rec.count(|e| matches!(e, DeerEvent::RouteClaimed(_))), 2);
        assert_eq!(rec.count(|e| *e == DeerEvent::Finished), 1);
        let deer = sim.herd.get(AgentId(0)).unwrap();
        assert!(deer.is_finished());
        assert!(sim.hub.contains(deer.position()));
    }

    #[test]
    fn short_budget_recalls_the_deer_in_time() {
        let config = ForageConfig { distribution_ticks: 5, ..test_config(0) };
        let mut sim = empty_builder(config).build().unwrap();
        // Due west of the hub, so every step is exactly 5 long.
        sim.assign_routes(houses(&[(10.0, 90.0)])).unwrap();
        let mut rec = Recorder::default();

        assert_eq!(sim.run_distribution(&mut rec).unwrap(), 5);
        assert_eq!(sim.delivered_count(), 0);
        let recalls: Vec<_> = rec
            .events
            .iter()
            .filter(|(_, _, e)| *e == DeerEvent::Recalled)
            .map(|(t, _, _)| *t)
            .collect();
        assert_eq!(recalls, vec![Tick(2)]);
        let deer = sim.herd.get(AgentId(0)).unwrap();
        assert_eq!(deer.mode(), DeerMode::Finished);
        assert!(sim.hub.contains(deer.position()));
    }

    #[test]
    fn deer_at_the_hub_skips_a_claim_it_cannot_walk() {
        let config = ForageConfig { distribution_ticks: 2, ..test_config(0) };
        let mut sim = empty_builder(config).build().unwrap();
        sim.assign_routes(houses(&[(10.0, 90.0)])).unwrap();
        let mut rec = Recorder::default();

        sim.run_distribution(&mut rec).unwrap();
        assert_eq!(rec.count(|e| matches!(e, DeerEvent::RouteClaimed(_))), 0);
        assert_eq!(sim.routes.unclaimed_count(), 1);
        assert!(sim.herd.all_finished());
    }

    #[test]
    fn leftover_cargo_is_dropped_when_distribution_starts() {
        let mut sim = one_site_builder(test_config(0), 5.0)
            .initial_positions(vec![SITE])
            .build()
            .unwrap();
        let stride = Stride::from(&sim.config);
        let mut pool = std::mem::take(&mut sim.pool);
        let deer = sim.herd.get_mut(AgentId(0)).unwrap();
        deer.collect(&stride, &sim.hub, &mut pool, &mut sim.markers).unwrap();
        assert!(sim.herd.any_carrying());

        sim.assign_routes(vec![]).unwrap();
        assert!(!sim.herd.any_carrying());
        assert!(sim.routes.is_empty());
    }
}
