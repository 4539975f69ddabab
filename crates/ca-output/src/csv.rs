//! CSV plan output.
//!
//! Header: `tick,rank,name,lat,lon,dist_km,eta_min,type,capacity`.
//! `type` and `capacity` are blank when a shelter has none.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use ::csv::Writer;
use ca_dashboard::Refresh;

use crate::row::PlanRow;
use crate::{OutputResult, PlanWriter};

pub const HEADER: [&str; 9] = [
    "tick", "rank", "name", "lat", "lon", "dist_km", "eta_min", "type", "capacity",
];

/// Writes one CSV row per ranked shelter.
pub struct CsvPlanWriter<W: Write> {
    rows: Writer<W>,
}

impl CsvPlanWriter<File> {
    /// Create (or truncate) `shelter_plan.csv` in `dir` and write the header.
    pub fn create(dir: &Path) -> OutputResult<Self> {
        Self::from_csv_writer(Writer::from_path(dir.join("shelter_plan.csv"))?)
    }
}

impl<W: Write> CsvPlanWriter<W> {
    /// Wrap any `Write` sink and write the header.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        Self::from_csv_writer(Writer::from_writer(out))
    }

    fn from_csv_writer(mut rows: Writer<W>) -> OutputResult<Self> {
        rows.write_record(HEADER)?;
        Ok(Self { rows })
    }

    /// Write pre-built rows.
    pub fn write_rows(&mut self, rows: &[PlanRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                row.tick.to_string(),
                row.rank.to_string(),
                row.name.clone(),
                row.lat.to_string(),
                row.lon.to_string(),
                format!("{:.3}", row.distance_km),
                row.eta_minutes.to_string(),
                row.shelter_type.clone().unwrap_or_default(),
                row.capacity.map(|c| c.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    /// Flush and unwrap the inner sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.rows.flush()?;
        self.rows
            .into_inner()
            .map_err(|e| crate::OutputError::Io(e.into_error()))
    }
}

impl<W: Write> PlanWriter for CsvPlanWriter<W> {
    fn write_plan(&mut self, refresh: &Refresh) -> OutputResult<()> {
        self.write_rows(&PlanRow::from_refresh(refresh))
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.rows.flush()?;
        Ok(())
    }
}
