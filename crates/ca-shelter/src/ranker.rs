//! Nearest-shelter ranking.
//!
//! `ShelterRanker` holds only immutable parameters, so it is `Send + Sync`
//! and every method is a pure function of its arguments.  The shelter slice
//! is never mutated; results are fresh `RankedShelter`s.

use ca_core::Location;
use tracing::debug;

use crate::{RankedShelter, Shelter, ShelterError, ShelterResult};

/// Walking speed assumed for ETAs: 5 km/h, i.e. 12 minutes per kilometre.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

/// How many shelters [`ShelterRanker::rank`] returns by default.
pub const DEFAULT_TOP_N: usize = 2;

/// Great-circle distance between `a` and `b` in kilometres.
#[inline]
pub fn distance_km(a: Location, b: Location) -> f64 {
    a.distance_km(b)
}

/// Walking time in whole minutes at [`DEFAULT_WALKING_SPEED_KMH`]; never
/// less than 1.
#[inline]
pub fn eta_minutes(distance_km: f64) -> u32 {
    eta_at_speed(distance_km, DEFAULT_WALKING_SPEED_KMH)
}

fn eta_at_speed(distance_km: f64, speed_kmh: f64) -> u32 {
    let minutes = (distance_km * 60.0 / speed_kmh).round();
    // `as` saturates; NaN maps to 0 and is lifted by the clamp.
    (minutes as u32).max(1)
}

// ── ShelterRanker ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShelterRanker {
    walking_speed_kmh: f64,
    top_n:             usize,
}

impl Default for ShelterRanker {
    fn default() -> Self {
        Self {
            walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
            top_n:             DEFAULT_TOP_N,
        }
    }
}

impl ShelterRanker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the walking speed used for ETAs.  Must be finite and > 0.
    pub fn with_walking_speed_kmh(mut self, kmh: f64) -> ShelterResult<Self> {
        if !(kmh.is_finite() && kmh > 0.0) {
            return Err(ShelterError::InvalidWalkingSpeed(kmh));
        }
        self.walking_speed_kmh = kmh;
        Ok(self)
    }

    /// Override how many shelters [`rank`][Self::rank] returns.  Zero is
    /// raised to 1 so a non-empty shelter set always yields a result.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n.max(1);
        self
    }

    pub fn walking_speed_kmh(&self) -> f64 {
        self.walking_speed_kmh
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Walking time for `distance_km` at this ranker's speed.
    #[inline]
    pub fn eta_minutes(&self, distance_km: f64) -> u32 {
        eta_at_speed(distance_km, self.walking_speed_kmh)
    }

    /// Distance and ETA for every shelter, in input order.
    pub fn rank_all(&self, home: Location, shelters: &[Shelter]) -> Vec<RankedShelter> {
        let measure = |s: &Shelter| {
            let d = home.distance_km(s.location());
            RankedShelter {
                shelter:     s.clone(),
                distance_km: d,
                eta_minutes: self.eta_minutes(d),
            }
        };

        #[cfg(not(feature = "parallel"))]
        {
            shelters.iter().map(measure).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed collect keeps input order.
            shelters.par_iter().map(measure).collect()
        }
    }

    /// The shelters to head to, using this ranker's `top_n` (default 2).
    pub fn rank(&self, home: Location, shelters: &[Shelter], radius_km: f64) -> Vec<RankedShelter> {
        self.rank_top(home, shelters, radius_km, self.top_n)
    }

    /// Up to `top_n` shelters, nearest first.
    ///
    /// Shelters within `radius_km` are preferred.  If none are, the `top_n`
    /// globally nearest are returned instead, so the result is empty only
    /// when `shelters` is.  Equal distances keep their input order.
    pub fn rank_top(
        &self,
        home:      Location,
        shelters:  &[Shelter],
        radius_km: f64,
        top_n:     usize,
    ) -> Vec<RankedShelter> {
        let mut ranked = self.rank_all(home, shelters);
        // Stable: ties keep input order.
        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        // After sorting, the in-radius shelters are exactly a prefix.
        let in_radius = ranked.partition_point(|r| r.distance_km <= radius_km);
        if in_radius > 0 {
            ranked.truncate(in_radius.min(top_n));
        } else {
            if !ranked.is_empty() {
                debug!(radius_km, total = ranked.len(), "no shelter within radius; using nearest overall");
            }
            ranked.truncate(top_n);
        }
        ranked
    }
}
