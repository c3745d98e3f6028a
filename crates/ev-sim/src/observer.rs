//! Monitor observer trait for progress reporting and report rendering.

use ev_core::Tick;
use ev_graph::StationStatus;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Rendering station reports for display
/// is exactly an observer implementation — the core defines no output
/// format.
///
/// # Example — report printer
///
/// ```rust,ignore
/// struct ReportPrinter;
///
/// impl SimObserver for ReportPrinter {
///     fn on_report(&mut self, tick: Tick, statuses: &[StationStatus]) {
///         println!("tick {tick}: {} stations", statuses.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the traffic refresh.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick with the freshly extracted station statuses,
    /// in ascending station order.
    fn on_report(&mut self, _tick: Tick, _statuses: &[StationStatus]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
