//! Unit tests for ca-shelter.

use ca_core::Location;

use crate::{RankedShelter, Shelter, ShelterRanker};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn loc(lat: f64, lon: f64) -> Location {
    Location::new(lat, lon).unwrap()
}

fn shelter(name: &str, lat: f64, lon: f64) -> Shelter {
    Shelter::at(name, lat, lon).unwrap()
}

fn home() -> Location {
    loc(50.583, 30.486)
}

/// Alpha ≈ 1.54 km and Beta ≈ 1.26 km from `home()`.
fn alpha_beta() -> Vec<Shelter> {
    vec![
        shelter("Community Shelter Alpha", 50.593, 30.501),
        shelter("School Shelter Beta", 50.590, 30.472),
    ]
}

fn names(ranked: &[RankedShelter]) -> Vec<&str> {
    ranked.iter().map(|r| r.shelter.name()).collect()
}

// ── Distance and ETA ──────────────────────────────────────────────────────────

#[cfg(test)]
mod measure {
    use super::*;
    use crate::{distance_km, eta_minutes};

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_km(home(), home()), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = home();
        let b = loc(50.593, 30.501);
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-12);
    }

    #[test]
    fn scenario_distances() {
        let d_alpha = distance_km(home(), loc(50.593, 30.501));
        let d_beta = distance_km(home(), loc(50.590, 30.472));
        assert!((d_alpha - 1.5355).abs() < 1e-3, "alpha {d_alpha}");
        assert!((d_beta - 1.2581).abs() < 1e-3, "beta {d_beta}");
    }

    #[test]
    fn eta_is_twelve_minutes_per_km() {
        assert_eq!(eta_minutes(1.0), 12);
        assert_eq!(eta_minutes(1.2581), 15);
        assert_eq!(eta_minutes(2.5), 30);
    }

    #[test]
    fn eta_never_below_one() {
        assert_eq!(eta_minutes(0.0), 1);
        assert_eq!(eta_minutes(0.01), 1);
        assert_eq!(eta_minutes(0.06), 1);
        for i in 0..1_000 {
            assert!(eta_minutes(i as f64 * 0.013) >= 1);
        }
    }

    #[test]
    fn custom_walking_speed() {
        let r = ShelterRanker::new().with_walking_speed_kmh(4.0).unwrap();
        assert_eq!(r.eta_minutes(1.0), 15);
    }

    #[test]
    fn bad_walking_speed_rejected() {
        assert!(ShelterRanker::new().with_walking_speed_kmh(0.0).is_err());
        assert!(ShelterRanker::new().with_walking_speed_kmh(-3.0).is_err());
        assert!(ShelterRanker::new().with_walking_speed_kmh(f64::NAN).is_err());
    }
}

// ── Ranking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rank {
    use super::*;
    use crate::{DEFAULT_TOP_N, builtin_shelters, eta_minutes};

    #[test]
    fn both_within_radius_nearest_first() {
        let out = ShelterRanker::new().rank(home(), &alpha_beta(), 3.0);
        assert_eq!(names(&out), ["School Shelter Beta", "Community Shelter Alpha"]);
        for r in &out {
            assert_eq!(r.eta_minutes, eta_minutes(r.distance_km));
            assert_eq!(r.eta_minutes, ((r.distance_km * 12.0).round() as u32).max(1));
        }
    }

    #[test]
    fn nothing_within_radius_falls_back_to_nearest() {
        let out = ShelterRanker::new().rank(home(), &alpha_beta(), 1.0);
        assert_eq!(names(&out), ["School Shelter Beta", "Community Shelter Alpha"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(ShelterRanker::new().rank(home(), &[], 3.0).is_empty());
        assert!(ShelterRanker::new().rank(home(), &[], 0.0).is_empty());
    }

    #[test]
    fn radius_filter_limits_result() {
        // Only Municipal Office (≈0.35 km) lies within 1 km.
        let out = ShelterRanker::new().rank(home(), &builtin_shelters(), 1.0);
        assert_eq!(names(&out), ["Municipal Office Basement"]);
    }

    #[test]
    fn builtin_top_two_at_default_radius() {
        let out = ShelterRanker::new().rank(home(), &builtin_shelters(), 3.0);
        assert_eq!(out.len(), DEFAULT_TOP_N);
        assert_eq!(names(&out), ["Municipal Office Basement", "Clinic Shelter Gamma"]);
        assert_eq!(out[0].eta_minutes, 4);
        assert_eq!(out[1].eta_minutes, 14);
    }

    #[test]
    fn output_sorted_and_bounded() {
        let ranker = ShelterRanker::new();
        for top_n in 0..12 {
            for radius in [0.5, 1.0, 1.5, 2.0, 3.0, 10.0] {
                let out = ranker.rank_top(home(), &builtin_shelters(), radius, top_n);
                assert!(out.len() <= top_n);
                assert!(out.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
            }
        }
    }

    #[test]
    fn zero_top_n_still_returns_nearest() {
        let r = ShelterRanker::new().with_top_n(0);
        assert_eq!(r.top_n(), 1);
        assert_eq!(names(&r.rank(home(), &alpha_beta(), 3.0)), ["School Shelter Beta"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let twins = vec![
            shelter("First", 50.593, 30.501),
            shelter("Second", 50.593, 30.501),
            shelter("Third", 50.593, 30.501),
        ];
        let out = ShelterRanker::new().with_top_n(3).rank(home(), &twins, 3.0);
        assert_eq!(names(&out), ["First", "Second", "Third"]);
    }

    #[test]
    fn deterministic() {
        let ranker = ShelterRanker::new();
        let shelters = builtin_shelters();
        assert_eq!(ranker.rank(home(), &shelters, 2.0), ranker.rank(home(), &shelters, 2.0));
    }

    #[test]
    fn input_not_mutated() {
        let shelters = builtin_shelters();
        let before = shelters.clone();
        let _ = ShelterRanker::new().rank(home(), &shelters, 3.0);
        assert_eq!(shelters, before);
    }

    #[test]
    fn rank_all_keeps_input_order() {
        let out = ShelterRanker::new().rank_all(home(), &alpha_beta());
        assert_eq!(names(&out), ["Community Shelter Alpha", "School Shelter Beta"]);
    }

    #[test]
    fn shelter_at_home_is_zero_km_one_minute() {
        let out = ShelterRanker::new().rank(home(), &[shelter("Here", 50.583, 30.486)], 1.0);
        assert_eq!(out[0].distance_km, 0.0);
        assert_eq!(out[0].eta_minutes, 1);
    }

    #[test]
    fn ranker_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShelterRanker>();
    }
}

// ── Shelter construction ──────────────────────────────────────────────────────

#[cfg(test)]
mod shelter {
    use super::*;
    use crate::{ShelterError, builtin_shelters, default_home};

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(Shelter::at("  ", 50.0, 30.0), Err(ShelterError::EmptyName)));
    }

    #[test]
    fn bad_coordinates_rejected() {
        assert!(matches!(Shelter::at("X", 91.0, 30.0), Err(ShelterError::InvalidLocation(_))));
    }

    #[test]
    fn optional_fields() {
        let s = shelter("X", 50.0, 30.0).with_type("Public").with_capacity(120);
        assert_eq!(s.shelter_type(), Some("Public"));
        assert_eq!(s.capacity(), Some(120));
        assert_eq!(shelter("Y", 50.0, 30.0).capacity(), None);
    }

    #[test]
    fn builtin_table() {
        let all = builtin_shelters();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0].name(), "Community Shelter Alpha");
        assert_eq!(all[4].shelter_type(), Some("Staff"));
        assert_eq!(all[7].capacity(), Some(300));
        assert_eq!(default_home(), home());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{ShelterError, load_shelters_csv, load_shelters_reader};

    #[test]
    fn required_columns_only() {
        let csv = "name,lat,lon\nA,50.1,30.1\nB,50.2,30.2\n";
        let out = load_shelters_reader(Cursor::new(csv)).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].name(), "B");
        assert_eq!(out[1].location(), loc(50.2, 30.2));
        assert_eq!(out[0].shelter_type(), None);
    }

    #[test]
    fn optional_columns_any_order_with_blanks() {
        let csv = "capacity,lon,name,type,lat,notes\n280,30.501,Alpha,Public,50.593,x\n,30.472,Beta,,50.590,y\n";
        let out = load_shelters_reader(Cursor::new(csv)).unwrap();
        assert_eq!(out[0].capacity(), Some(280));
        assert_eq!(out[0].shelter_type(), Some("Public"));
        assert_eq!(out[1].capacity(), None);
        assert_eq!(out[1].shelter_type(), None);
    }

    #[test]
    fn missing_required_column() {
        let err = load_shelters_reader(Cursor::new("name,lat\nA,50.0\n")).unwrap_err();
        assert!(matches!(err, ShelterError::MissingColumn("lon")));
    }

    #[test]
    fn out_of_range_row_reports_row_number() {
        let csv = "name,lat,lon\nA,50.0,30.0\nB,95.0,30.0\n";
        let err = load_shelters_reader(Cursor::new(csv)).unwrap_err();
        match err {
            ShelterError::Row { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, ShelterError::InvalidLocation(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_name_row() {
        let err = load_shelters_reader(Cursor::new("name,lat,lon\n,50.0,30.0\n")).unwrap_err();
        assert!(err.to_string().starts_with("row 1:"), "{err}");
    }

    #[test]
    fn non_numeric_latitude() {
        let err = load_shelters_reader(Cursor::new("name,lat,lon\nA,north,30.0\n")).unwrap_err();
        assert!(matches!(err, ShelterError::Row { row: 1, .. }));
    }

    #[test]
    fn header_only_is_empty_set() {
        assert!(load_shelters_reader(Cursor::new("name,lat,lon\n")).unwrap().is_empty());
    }

    #[test]
    fn from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "name,lat,lon,type,capacity\nAlpha,50.593,30.501,Public,280\n").unwrap();
        let out = load_shelters_csv(f.path()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name(), "Alpha");
    }
}
