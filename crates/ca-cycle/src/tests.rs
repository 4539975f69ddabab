//! Unit tests for ca-cycle.

use ca_core::Tick;

use crate::{CycleClock, CycleState, Phase, PhaseKind, PhaseSchedule};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn state(phase_index: usize, phase: PhaseKind, elapsed: u64, remaining: u64) -> CycleState {
    CycleState {
        phase_index,
        phase,
        elapsed_secs:   elapsed,
        remaining_secs: remaining,
    }
}

/// ALERT 120 → SAFE 60 → ALERT 45 → SAFE 90 (315 s cycle).
fn default_clock() -> CycleClock {
    CycleClock::default()
}

// ── PhaseSchedule ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use super::*;
    use crate::CycleError;

    #[test]
    fn default_cycle_length() {
        let s = PhaseSchedule::default();
        assert_eq!(s.len(), 4);
        assert_eq!(s.cycle_len(), 315);
        assert_eq!(s.start_of(0), 0);
        assert_eq!(s.start_of(3), 225);
    }

    #[test]
    fn default_matches_validated_construction() {
        let built = PhaseSchedule::new(vec![
            Phase::alert(120),
            Phase::safe(60),
            Phase::alert(45),
            Phase::safe(90),
        ])
        .unwrap();
        assert_eq!(built, PhaseSchedule::default());
    }

    #[test]
    fn empty_schedule_rejected() {
        let err = PhaseSchedule::new(vec![]).unwrap_err();
        assert!(matches!(err, CycleError::EmptySchedule));
        assert!(err.is_configuration());
    }

    #[test]
    fn zero_duration_rejected() {
        let err = PhaseSchedule::new(vec![Phase::alert(10), Phase::safe(0)]).unwrap_err();
        assert!(matches!(err, CycleError::NonPositiveDuration { index: 1, duration: 0 }));
    }

    #[test]
    fn negative_duration_rejected() {
        let err = PhaseSchedule::from_signed([(PhaseKind::Alert, 30), (PhaseKind::Safe, -5)])
            .unwrap_err();
        assert!(matches!(err, CycleError::NonPositiveDuration { index: 1, duration: -5 }));
        assert!(err.is_configuration());
    }

    #[test]
    fn phase_kind_parsing() {
        assert_eq!("ALERT".parse::<PhaseKind>().unwrap(), PhaseKind::Alert);
        assert_eq!(" safe ".parse::<PhaseKind>().unwrap(), PhaseKind::Safe);
        assert!("ALARM".parse::<PhaseKind>().is_err());
        assert_eq!(PhaseKind::Alert.to_string(), "ALERT");
    }
}

// ── CycleClock ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clock {
    use super::*;

    #[test]
    fn tick_zero_is_first_phase() {
        assert_eq!(default_clock().evaluate(Tick(0)), state(0, PhaseKind::Alert, 0, 120));
    }

    #[test]
    fn boundary_belongs_to_next_phase() {
        let c = default_clock();
        assert_eq!(c.evaluate(Tick(119)), state(0, PhaseKind::Alert, 119, 1));
        assert_eq!(c.evaluate(Tick(120)), state(1, PhaseKind::Safe, 0, 60));
        assert_eq!(c.evaluate(Tick(180)), state(2, PhaseKind::Alert, 0, 45));
        assert_eq!(c.evaluate(Tick(225)), state(3, PhaseKind::Safe, 0, 90));
    }

    #[test]
    fn last_second_of_cycle() {
        assert_eq!(default_clock().evaluate(Tick(314)), state(3, PhaseKind::Safe, 89, 1));
    }

    #[test]
    fn wraps_across_cycles() {
        let c = default_clock();
        assert_eq!(c.evaluate(Tick(315)), c.evaluate(Tick(0)));
        // 315 * 3 + 200 → cycle position 200 → second ALERT, 20 s in.
        assert_eq!(c.evaluate(Tick(1_145)), state(2, PhaseKind::Alert, 20, 25));
    }

    #[test]
    fn periodic_over_many_ticks() {
        let c = default_clock();
        for t in 0..2 * c.cycle_len() {
            assert_eq!(c.evaluate(Tick(t)), c.evaluate(Tick(t + c.cycle_len())), "tick {t}");
        }
    }

    #[test]
    fn elapsed_plus_remaining_is_phase_duration() {
        let c = default_clock();
        for t in 0..c.cycle_len() {
            let s = c.evaluate(Tick(t));
            let dur = c.schedule().phases()[s.phase_index].duration_secs;
            assert_eq!(s.elapsed_secs + s.remaining_secs, dur, "tick {t}");
            assert!(s.elapsed_secs < dur);
            assert!(s.remaining_secs > 0);
        }
    }

    #[test]
    fn single_phase_schedule() {
        let c = CycleClock::from_phases(vec![Phase::safe(10)]).unwrap();
        assert_eq!(c.evaluate(Tick(0)), state(0, PhaseKind::Safe, 0, 10));
        assert_eq!(c.evaluate(Tick(27)), state(0, PhaseKind::Safe, 7, 3));
    }

    #[test]
    fn very_large_tick() {
        let c = default_clock();
        let t = Tick(u64::MAX);
        let s = c.evaluate(t);
        assert_eq!(s, c.evaluate(Tick(u64::MAX % 315)));
    }

    #[test]
    fn next_transition() {
        let c = default_clock();
        assert_eq!(c.next_transition(Tick(10)), Tick(120));
        assert_eq!(c.next_transition(Tick(120)), Tick(180));
        assert_eq!(c.next_transition(Tick(314)), Tick(315));
        assert_eq!(c.next_transition(Tick(u64::MAX)), Tick(u64::MAX));
    }

    #[test]
    fn cycle_index_counts_whole_cycles() {
        let c = default_clock();
        assert_eq!(c.cycle_index(Tick(0)), 0);
        assert_eq!(c.cycle_index(Tick(314)), 0);
        assert_eq!(c.cycle_index(Tick(315)), 1);
        assert_eq!(c.cycle_index(Tick(700)), 2);
    }

    #[test]
    fn fallback_is_first_safe_phase() {
        assert_eq!(default_clock().fallback_state(), state(1, PhaseKind::Safe, 0, 60));
    }

    #[test]
    fn fallback_without_safe_phase_uses_first_phase() {
        let c = CycleClock::from_phases(vec![Phase::alert(5), Phase::alert(7)]).unwrap();
        assert_eq!(c.fallback_state(), state(0, PhaseKind::Alert, 0, 5));
    }

    #[test]
    fn clock_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CycleClock>();
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{CycleError, load_schedule_csv, load_schedule_reader};

    const CSV: &str = "kind,duration_secs\nALERT,120\nSAFE,60\nalert,45\nSafe,90\n";

    #[test]
    fn loads_default_pattern() {
        let s = load_schedule_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(s, PhaseSchedule::default());
    }

    #[test]
    fn tolerates_whitespace() {
        let s = load_schedule_reader(Cursor::new("kind, duration_secs\n ALERT , 30\n")).unwrap();
        assert_eq!(s.phases(), &[Phase::alert(30)]);
    }

    #[test]
    fn header_only_is_empty_schedule() {
        let err = load_schedule_reader(Cursor::new("kind,duration_secs\n")).unwrap_err();
        assert!(matches!(err, CycleError::EmptySchedule));
    }

    #[test]
    fn negative_duration_is_configuration_error() {
        let err = load_schedule_reader(Cursor::new("kind,duration_secs\nALERT,10\nSAFE,-1\n"))
            .unwrap_err();
        assert!(matches!(err, CycleError::NonPositiveDuration { index: 1, duration: -1 }));
    }

    #[test]
    fn unknown_kind_is_parse_error() {
        let err = load_schedule_reader(Cursor::new("kind,duration_secs\nSIREN,10\n")).unwrap_err();
        assert!(matches!(err, CycleError::Parse(_)));
    }

    #[test]
    fn non_numeric_duration_is_parse_error() {
        let err = load_schedule_reader(Cursor::new("kind,duration_secs\nALERT,ten\n")).unwrap_err();
        assert!(matches!(err, CycleError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_schedule_csv(std::path::Path::new("/nonexistent/schedule.csv")).unwrap_err();
        assert!(matches!(err, CycleError::Io(_)));
    }
}
