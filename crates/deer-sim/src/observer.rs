//! Simulation observer trait for progress reporting and data collection.

use deer_agent::DeerEvent;
use deer_core::{AgentId, Tick};

/// Which of the two phases just ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimPhase {
    Foraging,
    Distribution,
}

/// Callbacks invoked by the [`Sim`][crate::Sim] run loops.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(usize);
///
/// impl SimObserver for Deliveries {
///     fn on_event(&mut self, _tick: Tick, _agent: AgentId, event: &DeerEvent) {
///         if matches!(event, DeerEvent::Delivered { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any deer moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every event, in agent order, as soon as the deer that
    /// produced it has been processed.
    fn on_event(&mut self, _tick: Tick, _agent: AgentId, _event: &DeerEvent) {}

    /// Called at the end of each tick, after the marker cleanup pass.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once when a phase's loop exits.  `tick` is the first tick not
    /// run.
    fn on_phase_end(&mut self, _phase: SimPhase, _tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
