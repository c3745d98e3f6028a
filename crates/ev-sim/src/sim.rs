//! The `Sim` struct and its tick loop.

use ev_core::{NodeId, SimClock, SimConfig, Tick, TrafficSampler};
use ev_graph::{refresh_all, report, PathEngine, RoadNetwork, StationSet};

use crate::{SimObserver, SimResult};

/// The main monitor runner.
///
/// `Sim<S, E>` owns all run state and drives the three-phase tick loop:
///
/// 1. **Refresh**: every road record gets a fresh traffic draw from `S`.
/// 2. **Compute**: `E` recomputes distances and predecessors from the
///    fixed origin over the network's current state.
/// 3. **Report**: per-station statuses are extracted and handed to the
///    observer, in ascending station order.
///
/// A failure in compute or report aborts the run with that tick's error —
/// no partial report is ever delivered.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: TrafficSampler, E: PathEngine> {
    /// Run configuration (total ticks, seed, tick duration).
    pub config: SimConfig,

    /// Monitor clock — tracks the current tick and elapsed seconds.
    pub clock: SimClock,

    /// The road network.  Topology is frozen; traffic conditions mutate
    /// each tick.
    pub network: RoadNetwork,

    /// Flagged destination vertices, fixed for the run.
    pub stations: StationSet,

    /// Fixed origin all distances are measured from.
    pub source: NodeId,

    /// Traffic condition source, drawn from on every refresh.
    pub sampler: S,

    /// Shortest-path engine.
    pub engine: E,
}

impl<S: TrafficSampler, E: PathEngine> Sim<S, E> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.process_tick(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and for drivers that pause between ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer)?;
        }
        Ok(())
    }

    /// The tick the next call to `run`/`run_ticks` would process.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: traffic refresh ──────────────────────────────────────
        refresh_all(&mut self.network, &mut self.sampler);

        // ── Phase 2: shortest-path recomputation ──────────────────────────
        //
        // The previous tick's solution is never reused; each tick owns a
        // fresh one.
        let solution = self.engine.shortest_paths(&self.network, self.source)?;

        // ── Phase 3: station report extraction ────────────────────────────
        let statuses = report::extract(&self.network, &self.stations, &solution, self.source)?;
        observer.on_report(now, &statuses);

        self.clock.advance();
        Ok(())
    }
}
