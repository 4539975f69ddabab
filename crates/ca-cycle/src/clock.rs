//! `CycleClock` — maps an absolute tick onto the repeating schedule.
//!
//! The clock is a pure function of `(tick, schedule)`.  It never advances
//! itself and holds nothing that changes between calls, so it is `Send +
//! Sync` and can be shared freely.

use ca_core::Tick;

use crate::{CycleResult, Phase, PhaseKind, PhaseSchedule};

// ── CycleState ────────────────────────────────────────────────────────────────

/// Position within the schedule at a given tick.
///
/// `elapsed_secs + remaining_secs` always equals the active phase's duration,
/// with `elapsed_secs < duration` and `remaining_secs > 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleState {
    /// Index of the active phase within the schedule.
    pub phase_index: usize,
    pub phase: PhaseKind,
    pub elapsed_secs: u64,
    pub remaining_secs: u64,
}

impl CycleState {
    #[inline]
    pub fn is_alert(&self) -> bool {
        self.phase.is_alert()
    }
}

// ── CycleClock ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct CycleClock {
    schedule: PhaseSchedule,
}

impl CycleClock {
    pub fn new(schedule: PhaseSchedule) -> Self {
        Self { schedule }
    }

    /// Validate `phases` and build a clock in one step.
    pub fn from_phases(phases: Vec<Phase>) -> CycleResult<Self> {
        PhaseSchedule::new(phases).map(Self::new)
    }

    pub fn schedule(&self) -> &PhaseSchedule {
        &self.schedule
    }

    #[inline]
    pub fn cycle_len(&self) -> u64 {
        self.schedule.cycle_len()
    }

    /// Offset of `tick` within the current cycle.
    #[inline]
    pub fn cycle_pos(&self, tick: Tick) -> u64 {
        tick.0 % self.schedule.cycle_len()
    }

    /// How many full cycles lie before `tick`.
    #[inline]
    pub fn cycle_index(&self, tick: Tick) -> u64 {
        tick.0 / self.schedule.cycle_len()
    }

    /// The schedule state at `tick`.
    pub fn evaluate(&self, tick: Tick) -> CycleState {
        let pos = self.cycle_pos(tick);
        match self.schedule.index_at(pos) {
            Some(idx) => {
                let phase = self.schedule.phases()[idx];
                let elapsed = pos - self.schedule.start_of(idx);
                CycleState {
                    phase_index:    idx,
                    phase:          phase.kind,
                    elapsed_secs:   elapsed,
                    remaining_secs: phase.duration_secs - elapsed,
                }
            }
            None => self.fallback_state(),
        }
    }

    /// The absolute tick at which the phase active at `tick` ends, capped at
    /// `u64::MAX`.
    pub fn next_transition(&self, tick: Tick) -> Tick {
        tick.offset(self.evaluate(tick).remaining_secs)
    }

    /// State reported when a cycle position matches no phase: the first SAFE
    /// phase at its start, or the first phase if the schedule has no SAFE
    /// phase.
    pub(crate) fn fallback_state(&self) -> CycleState {
        let phases = self.schedule.phases();
        let idx = phases
            .iter()
            .position(|p| p.kind == PhaseKind::Safe)
            .unwrap_or(0);
        let phase = phases[idx];
        CycleState {
            phase_index:    idx,
            phase:          phase.kind,
            elapsed_secs:   0,
            remaining_secs: phase.duration_secs,
        }
    }
}
