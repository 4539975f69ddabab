//! The `Dashboard` state struct and its refresh loop.

use ca_core::{Location, Tick};
use ca_cycle::{CycleClock, CycleState};
use ca_shelter::{RankedShelter, Shelter, ShelterRanker};
use tracing::{debug, info};

use crate::config::clamp_radius;
use crate::{DashboardConfig, DashboardObserver, DashboardResult};

// ── Refresh ───────────────────────────────────────────────────────────────────

/// Everything a presentation layer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Refresh {
    pub tick:      Tick,
    pub cycle:     CycleState,
    pub home:      Location,
    pub radius_km: f64,
    /// Shelters to head to, nearest first.  Empty only when the dashboard
    /// has no shelters at all.
    pub nearest:   Vec<RankedShelter>,
}

impl Refresh {
    #[inline]
    pub fn is_alert(&self) -> bool {
        self.cycle.is_alert()
    }
}

// ── Dashboard ─────────────────────────────────────────────────────────────────

/// Caller-owned dashboard state.
///
/// The clock and ranker are immutable; every other field is mutated only by
/// the control methods below.  Create via
/// [`DashboardBuilder`][crate::DashboardBuilder].
#[derive(Clone, Debug)]
pub struct Dashboard {
    /// Startup configuration, kept for `reset_home`.
    pub config: DashboardConfig,

    pub(crate) clock:      CycleClock,
    pub(crate) ranker:     ShelterRanker,
    pub(crate) tick:       Tick,
    pub(crate) running:    bool,
    pub(crate) home:       Location,
    pub(crate) shelters:   Vec<Shelter>,
    pub(crate) radius_km:  f64,
    /// `(cycle index, phase index)` seen at the previous `run_ticks` refresh.
    pub(crate) last_phase: Option<(u64, usize)>,
}

impl Dashboard {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn home(&self) -> Location {
        self.home
    }

    pub fn shelters(&self) -> &[Shelter] {
        &self.shelters
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn clock(&self) -> &CycleClock {
        &self.clock
    }

    pub fn ranker(&self) -> &ShelterRanker {
        &self.ranker
    }

    // ── Controls ──────────────────────────────────────────────────────────

    pub fn start(&mut self) {
        info!(tick = self.tick.0, "clock started");
        self.running = true;
    }

    pub fn stop(&mut self) {
        info!(tick = self.tick.0, "clock stopped");
        self.running = false;
    }

    /// Stop the clock and rewind to tick 0.
    pub fn reset(&mut self) {
        info!(tick = self.tick.0, "clock reset");
        self.running = false;
        self.tick = Tick::ZERO;
        self.last_phase = None;
    }

    /// Jump ahead `secs` seconds, running or not (+30 s, +2 min, +5 min).
    pub fn fast_forward(&mut self, secs: u64) {
        self.tick += secs;
        info!(secs, tick = self.tick.0, "fast-forwarded");
    }

    /// Advance one second if the clock is running.  Returns whether it moved.
    pub fn step(&mut self) -> bool {
        if self.running {
            self.tick += 1;
        }
        self.running
    }

    /// Move home.  Out-of-range coordinates are rejected, never clamped.
    pub fn set_home(&mut self, lat: f64, lon: f64) -> DashboardResult<()> {
        self.home = Location::new(lat, lon)?;
        info!(home = %self.home, "home location changed");
        Ok(())
    }

    /// Return home to the configured starting location.
    pub fn reset_home(&mut self) {
        self.home = self.config.home;
        info!(home = %self.home, "home location reset");
    }

    /// Swap the whole shelter set, e.g. after a new CSV upload.
    pub fn replace_shelters(&mut self, shelters: Vec<Shelter>) {
        info!(count = shelters.len(), "shelter set replaced");
        self.shelters = shelters;
    }

    /// Set the focus radius, clamped into the accepted range.  Returns the
    /// radius actually applied.
    pub fn set_radius_km(&mut self, radius_km: f64) -> f64 {
        self.radius_km = clamp_radius(radius_km);
        self.radius_km
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Compute the current frame.  Pure: calling it twice without a control
    /// call in between yields equal results.
    pub fn refresh(&self) -> Refresh {
        let cycle = self.clock.evaluate(self.tick);
        let nearest = self.ranker.rank(self.home, &self.shelters, self.radius_km);
        debug!(
            tick = self.tick.0,
            phase = %cycle.phase,
            remaining = cycle.remaining_secs,
            nearest = nearest.len(),
            "refresh"
        );
        Refresh {
            tick: self.tick,
            cycle,
            home: self.home,
            radius_km: self.radius_km,
            nearest,
        }
    }

    /// Every shelter with distance and ETA, in table order (for map layers).
    pub fn all_distances(&self) -> Vec<RankedShelter> {
        self.ranker.rank_all(self.home, &self.shelters)
    }

    /// Refresh, notify, and step up to `n` times.  Stops early if the clock
    /// is stopped; a stopped dashboard produces no refreshes.
    ///
    /// Returns the number of refreshes produced.
    pub fn run_ticks<O: DashboardObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut produced = 0;
        while produced < n && self.running {
            let frame = self.refresh();
            observer.on_refresh(&frame);
            // Landing on the same phase one or more cycles later is a new phase.
            let phase = (self.clock.cycle_index(frame.tick), frame.cycle.phase_index);
            if self.last_phase != Some(phase) {
                observer.on_phase_change(&frame);
                self.last_phase = Some(phase);
            }
            produced += 1;
            self.step();
        }
        observer.on_run_end(self.tick);
        produced
    }
}
