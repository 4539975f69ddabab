//! Fluent builder for constructing a [`Dashboard`].

use ca_core::Tick;
use ca_cycle::{CycleClock, PhaseSchedule};
use ca_shelter::{Shelter, ShelterRanker, builtin_shelters};

use crate::config::clamp_radius;
use crate::{Dashboard, DashboardConfig, DashboardError, DashboardResult};

/// Fluent builder for [`Dashboard`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `.schedule(s)`  | `PhaseSchedule::default()` (315 s cycle)  |
/// | `.shelters(v)`  | `builtin_shelters()`                      |
/// | `.start_at(t)`  | `Tick::ZERO`                              |
///
/// # Example
///
/// ```rust,ignore
/// let dash = DashboardBuilder::new(DashboardConfig::default())
///     .shelters(load_shelters_csv(path)?)
///     .build()?;
/// ```
pub struct DashboardBuilder {
    config:   DashboardConfig,
    schedule: Option<PhaseSchedule>,
    shelters: Option<Vec<Shelter>>,
    start_at: Tick,
}

impl DashboardBuilder {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            schedule: None,
            shelters: None,
            start_at: Tick::ZERO,
        }
    }

    /// Use a custom phase schedule (already validated by construction).
    pub fn schedule(mut self, schedule: PhaseSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Use these shelters instead of the built-in table.  An empty set is
    /// allowed; refreshes then report no nearest shelters.
    pub fn shelters(mut self, shelters: Vec<Shelter>) -> Self {
        self.shelters = Some(shelters);
        self
    }

    /// Start the tick counter somewhere other than zero.
    pub fn start_at(mut self, tick: Tick) -> Self {
        self.start_at = tick;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Dashboard`].
    pub fn build(self) -> DashboardResult<Dashboard> {
        let cfg = &self.config;

        if cfg.tick_interval.is_zero() {
            return Err(DashboardError::Config("tick_interval must be non-zero".into()));
        }
        if cfg.top_n == 0 {
            return Err(DashboardError::Config("top_n must be at least 1".into()));
        }
        if !cfg.radius_km.is_finite() {
            return Err(DashboardError::Config(format!(
                "radius_km must be finite, got {}",
                cfg.radius_km
            )));
        }

        let ranker = ShelterRanker::new()
            .with_walking_speed_kmh(cfg.walking_speed_kmh)?
            .with_top_n(cfg.top_n);
        let clock = CycleClock::new(self.schedule.unwrap_or_default());

        Ok(Dashboard {
            clock,
            ranker,
            tick:       self.start_at,
            running:    cfg.start_running,
            home:       cfg.home,
            shelters:   self.shelters.unwrap_or_else(builtin_shelters),
            radius_km:  clamp_radius(cfg.radius_km),
            last_phase: None,
            config:     self.config,
        })
    }
}
