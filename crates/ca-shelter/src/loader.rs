//! CSV shelter loader.
//!
//! # CSV format
//!
//! ```csv
//! name,lat,lon,type,capacity
//! Community Shelter Alpha,50.593,30.501,Public,280
//! School Shelter Beta,50.590,30.472,,
//! ```
//!
//! `name`, `lat`, and `lon` are required columns; `type` and `capacity` are
//! optional and may be left blank per row.  Column order is free and
//! unknown columns are ignored.  Every record is validated here so the
//! ranker never sees a bad one.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{Shelter, ShelterError, ShelterResult};

const REQUIRED_COLUMNS: [&str; 3] = ["name", "lat", "lon"];

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ShelterRecord {
    name:         String,
    lat:          f64,
    lon:          f64,
    #[serde(rename = "type", default)]
    shelter_type: Option<String>,
    #[serde(default)]
    capacity:     Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load shelters from a CSV file.
pub fn load_shelters_csv(path: &Path) -> ShelterResult<Vec<Shelter>> {
    let file = std::fs::File::open(path)?;
    load_shelters_reader(file)
}

/// Like [`load_shelters_csv`] but accepts any `Read` source.
pub fn load_shelters_reader<R: Read>(reader: R) -> ShelterResult<Vec<Shelter>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ShelterError::Parse(e.to_string()))?
        .clone();
    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !headers.iter().any(|h| h == *c)) {
        return Err(ShelterError::MissingColumn(missing));
    }

    let shelters = csv_reader
        .deserialize::<ShelterRecord>()
        .enumerate()
        .map(|(i, result)| {
            let row = i + 1;
            let record = result.map_err(|e| ShelterError::Row {
                row,
                source: Box::new(ShelterError::Parse(e.to_string())),
            })?;
            to_shelter(record).map_err(|e| ShelterError::Row { row, source: Box::new(e) })
        })
        .collect::<ShelterResult<Vec<_>>>()?;

    debug!(count = shelters.len(), "loaded shelters from CSV");
    Ok(shelters)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_shelter(record: ShelterRecord) -> ShelterResult<Shelter> {
    let mut shelter = Shelter::at(record.name, record.lat, record.lon)?;
    if let Some(kind) = record.shelter_type.filter(|t| !t.is_empty()) {
        shelter = shelter.with_type(kind);
    }
    if let Some(capacity) = record.capacity {
        shelter = shelter.with_capacity(capacity);
    }
    Ok(shelter)
}
