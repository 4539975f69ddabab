//! `ca-cycle` — the repeating alert schedule and the clock that reads it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`phase`]   | `PhaseKind`, `Phase`, `PhaseSchedule`            |
//! | [`clock`]   | `CycleClock`, `CycleState`                       |
//! | [`loader`]  | `load_schedule_csv`, `load_schedule_reader`      |
//! | [`error`]   | `CycleError`, `CycleResult<T>`                   |
//!
//! # Cycle model (summary)
//!
//! A schedule is an ordered list of phases with positive durations.  At tick
//! `t`:
//!
//! ```text
//! cycle_pos     = t.0 % cycle_len
//! active phase  = first phase whose cumulative end > cycle_pos
//! elapsed       = cycle_pos - phase start
//! remaining     = phase duration - elapsed
//! ```
//!
//! Boundaries are half-open, so a tick landing exactly on a boundary belongs
//! to the phase that starts there.

pub mod clock;
pub mod error;
pub mod loader;
pub mod phase;

#[cfg(test)]
mod tests;

pub use clock::{CycleClock, CycleState};
pub use error::{CycleError, CycleResult};
pub use loader::{load_schedule_csv, load_schedule_reader};
pub use phase::{Phase, PhaseKind, PhaseSchedule};
