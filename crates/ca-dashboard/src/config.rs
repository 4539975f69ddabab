//! Dashboard configuration.

use std::time::Duration;

use ca_core::Location;
use ca_shelter::{DEFAULT_TOP_N, DEFAULT_WALKING_SPEED_KMH, default_home};

/// Smallest focus radius the dashboard accepts, in kilometres.
pub const MIN_RADIUS_KM: f64 = 1.0;
/// Largest focus radius the dashboard accepts, in kilometres.
pub const MAX_RADIUS_KM: f64 = 10.0;

/// Startup settings for a [`Dashboard`][crate::Dashboard].
///
/// Typically built from defaults and a few overrides by the application, or
/// deserialized with the `serde` feature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DashboardConfig {
    /// Initial home location; also where `reset_home` returns to.
    /// Default: Vyshhorod centre (50.583, 30.486).
    pub home: Location,

    /// Initial focus radius in km.  Clamped into
    /// [`MIN_RADIUS_KM`]..=[`MAX_RADIUS_KM`].  Default: 3.
    pub radius_km: f64,

    /// Shelters returned per refresh; must be at least 1.  Default: 2.
    pub top_n: usize,

    /// Walking speed used for ETAs.  Default: 5 km/h.
    pub walking_speed_kmh: f64,

    /// Real time between refreshes when a driver runs the dashboard live.
    /// The dashboard itself never sleeps.  Default: 1 s.
    pub tick_interval: Duration,

    /// Whether the clock is running right after construction.  Default: true.
    pub start_running: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            home:              default_home(),
            radius_km:         3.0,
            top_n:             DEFAULT_TOP_N,
            walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
            tick_interval:     Duration::from_secs(1),
            start_running:     true,
        }
    }
}

/// Clamp a radius into the accepted range.  NaN maps to the minimum.
pub(crate) fn clamp_radius(radius_km: f64) -> f64 {
    if radius_km.is_nan() {
        MIN_RADIUS_KM
    } else {
        radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
    }
}
