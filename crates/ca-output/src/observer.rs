//! `PlanObserver<W>` — bridges `DashboardObserver` to a `PlanWriter`.

use ca_core::Tick;
use ca_dashboard::{DashboardObserver, Refresh};
use tracing::{info, warn};

use crate::writer::PlanWriter;
use crate::{OutputError, OutputResult};

/// A [`DashboardObserver`] that writes a plan every time the dashboard
/// enters an ALERT phase.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `run_ticks` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct PlanObserver<W: PlanWriter> {
    writer:     W,
    plans:      usize,
    last_error: Option<OutputError>,
}

impl<W: PlanWriter> PlanObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, plans: 0, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of ALERT entries a plan was written for.  An ALERT with no
    /// shelters to list writes nothing and is not counted.
    pub fn plans_written(&self) -> usize {
        self.plans
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "plan write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: PlanWriter> DashboardObserver for PlanObserver<W> {
    fn on_phase_change(&mut self, refresh: &Refresh) {
        if !refresh.is_alert() {
            return;
        }
        info!(tick = refresh.tick.0, shelters = refresh.nearest.len(), "ALERT: writing shelter plan");
        let result = self.writer.write_plan(refresh);
        if result.is_ok() && !refresh.nearest.is_empty() {
            self.plans += 1;
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
