//! Schedule types: `PhaseKind`, `Phase`, and `PhaseSchedule`.
//!
//! A `PhaseSchedule` is validated once, at construction: it must hold at
//! least one phase and every duration must be positive.  The cumulative end
//! offset of each phase is precomputed so lookups are a binary search over a
//! sorted table.

use std::fmt;
use std::str::FromStr;

use crate::{CycleError, CycleResult};

// ── PhaseKind ─────────────────────────────────────────────────────────────────

/// The two alert levels a phase can signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseKind {
    Alert,
    Safe,
}

impl PhaseKind {
    #[inline]
    pub fn is_alert(self) -> bool {
        matches!(self, PhaseKind::Alert)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::Alert => "ALERT",
            PhaseKind::Safe => "SAFE",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhaseKind {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALERT" => Ok(PhaseKind::Alert),
            "SAFE" => Ok(PhaseKind::Safe),
            other => Err(CycleError::Parse(format!(
                "invalid phase kind {other:?}: expected \"ALERT\" or \"SAFE\""
            ))),
        }
    }
}

// ── Phase ─────────────────────────────────────────────────────────────────────

/// One segment of the repeating schedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phase {
    pub kind: PhaseKind,
    pub duration_secs: u64,
}

impl Phase {
    pub const fn alert(duration_secs: u64) -> Self {
        Self { kind: PhaseKind::Alert, duration_secs }
    }

    pub const fn safe(duration_secs: u64) -> Self {
        Self { kind: PhaseKind::Safe, duration_secs }
    }
}

// ── PhaseSchedule ─────────────────────────────────────────────────────────────

/// The reference schedule: ALERT 120 s → SAFE 60 s → ALERT 45 s → SAFE 90 s.
pub const DEFAULT_PHASES: [Phase; 4] = [
    Phase::alert(120),
    Phase::safe(60),
    Phase::alert(45),
    Phase::safe(90),
];

/// An ordered, non-empty, looping sequence of phases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseSchedule {
    phases: Vec<Phase>,
    /// `ends[i]` = sum of durations of phases `0..=i`.  Strictly increasing.
    ends: Vec<u64>,
}

impl PhaseSchedule {
    /// Validate `phases` and precompute cumulative boundaries.
    ///
    /// Fails with [`CycleError::EmptySchedule`] or
    /// [`CycleError::NonPositiveDuration`].
    pub fn new(phases: Vec<Phase>) -> CycleResult<Self> {
        if phases.is_empty() {
            return Err(CycleError::EmptySchedule);
        }

        let mut ends = Vec::with_capacity(phases.len());
        let mut total: u64 = 0;
        for (index, phase) in phases.iter().enumerate() {
            if phase.duration_secs == 0 {
                return Err(CycleError::NonPositiveDuration { index, duration: 0 });
            }
            total = total.checked_add(phase.duration_secs).ok_or_else(|| {
                CycleError::Parse(format!("cycle length overflows at phase {index}"))
            })?;
            ends.push(total);
        }

        Ok(Self { phases, ends })
    }

    /// Like [`new`][Self::new] but accepts signed durations, as read from
    /// untrusted input.  Zero or negative values are rejected with their
    /// original value in the error.
    pub fn from_signed<I>(pairs: I) -> CycleResult<Self>
    where
        I: IntoIterator<Item = (PhaseKind, i64)>,
    {
        let phases = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (kind, duration))| {
                if duration <= 0 {
                    Err(CycleError::NonPositiveDuration { index, duration })
                } else {
                    Ok(Phase { kind, duration_secs: duration as u64 })
                }
            })
            .collect::<CycleResult<Vec<_>>>()?;
        Self::new(phases)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Read-only slice of the phases in schedule order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Sum of all phase durations.
    #[inline]
    pub fn cycle_len(&self) -> u64 {
        // `ends` is non-empty by construction.
        self.ends[self.ends.len() - 1]
    }

    /// Offset within the cycle at which phase `index` starts.
    #[inline]
    pub fn start_of(&self, index: usize) -> u64 {
        if index == 0 { 0 } else { self.ends[index - 1] }
    }

    /// Index of the phase containing cycle offset `pos`, or `None` if `pos`
    /// lies at or past the end of the cycle.
    pub(crate) fn index_at(&self, pos: u64) -> Option<usize> {
        // First index whose end is strictly greater than `pos`.
        let idx = self.ends.partition_point(|&end| end <= pos);
        (idx < self.phases.len()).then_some(idx)
    }
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        let phases = DEFAULT_PHASES.to_vec();
        let ends = phases
            .iter()
            .scan(0u64, |acc, p| {
                *acc += p.duration_secs;
                Some(*acc)
            })
            .collect();
        Self { phases, ends }
    }
}
