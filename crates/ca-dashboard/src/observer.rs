//! Observer trait for rendering and exporting dashboard refreshes.

use ca_core::Tick;

use crate::Refresh;

/// Callbacks invoked by [`Dashboard::run_ticks`][crate::Dashboard::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — status printer
///
/// ```rust,ignore
/// struct StatusPrinter;
///
/// impl DashboardObserver for StatusPrinter {
///     fn on_phase_change(&mut self, refresh: &Refresh) {
///         println!("{}: {}", refresh.tick, refresh.cycle.phase);
///     }
/// }
/// ```
pub trait DashboardObserver {
    /// Called once per refresh with the freshly computed state.
    fn on_refresh(&mut self, _refresh: &Refresh) {}

    /// Called after `on_refresh` when the active phase differs from the one
    /// seen at the previous refresh, and on the very first refresh.
    fn on_phase_change(&mut self, _refresh: &Refresh) {}

    /// Called once when `run_ticks` returns, with the tick it stopped at.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`DashboardObserver`] that does nothing.
pub struct NoopObserver;

impl DashboardObserver for NoopObserver {}
