//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per phase, in schedule order.
//!
//! ```csv
//! kind,duration_secs
//! ALERT,120
//! SAFE,60
//! ALERT,45
//! SAFE,90
//! ```
//!
//! `kind` is case-insensitive.  Zero or negative durations are rejected with
//! [`CycleError::NonPositiveDuration`]; an empty file with
//! [`CycleError::EmptySchedule`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{CycleError, PhaseKind, PhaseSchedule};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PhaseRecord {
    kind:          String,
    duration_secs: i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`PhaseSchedule`] from a CSV file.
pub fn load_schedule_csv(path: &Path) -> Result<PhaseSchedule, CycleError> {
    let file = std::fs::File::open(path)?;
    load_schedule_reader(file)
}

/// Like [`load_schedule_csv`] but accepts any `Read` source.
pub fn load_schedule_reader<R: Read>(reader: R) -> Result<PhaseSchedule, CycleError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let pairs = csv_reader
        .deserialize::<PhaseRecord>()
        .map(|result| {
            let row = result.map_err(|e| CycleError::Parse(e.to_string()))?;
            Ok((row.kind.parse::<PhaseKind>()?, row.duration_secs))
        })
        .collect::<Result<Vec<_>, CycleError>>()?;

    PhaseSchedule::from_signed(pairs)
}
