//! Plain data row written by plan backends.

use ca_dashboard::Refresh;

/// One ranked shelter in an exported plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRow {
    pub tick:         u64,
    /// 1-based position in the plan.
    pub rank:         usize,
    pub name:         String,
    pub lat:          f64,
    pub lon:          f64,
    pub distance_km:  f64,
    pub eta_minutes:  u32,
    pub shelter_type: Option<String>,
    pub capacity:     Option<u32>,
}

impl PlanRow {
    /// Flatten a refresh's nearest shelters into rows, nearest first.
    pub fn from_refresh(refresh: &Refresh) -> Vec<PlanRow> {
        refresh
            .nearest
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let loc = r.shelter.location();
                PlanRow {
                    tick:         refresh.tick.0,
                    rank:         i + 1,
                    name:         r.shelter.name().to_owned(),
                    lat:          loc.lat(),
                    lon:          loc.lon(),
                    distance_km:  r.distance_km,
                    eta_minutes:  r.eta_minutes,
                    shelter_type: r.shelter.shelter_type().map(str::to_owned),
                    capacity:     r.shelter.capacity(),
                }
            })
            .collect()
    }
}
