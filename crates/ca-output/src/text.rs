//! Human-readable plan output.
//!
//! ```text
//! Nearest Shelter Plan — Vyshhorod
//! My location: 50.58300, 30.48600
//! Status: ALERT (remain 120s)
//!
//! 1. Municipal Office Basement — 0.35 km (~4 min)
//! 2. Clinic Shelter Gamma — 1.15 km (~14 min)
//! ```

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ca_dashboard::Refresh;

use crate::{OutputResult, PlanWriter};

/// Default heading of a rendered plan.
pub const DEFAULT_TITLE: &str = "Nearest Shelter Plan — Vyshhorod";

/// One-line status for the countdown display.
pub fn status_line(refresh: &Refresh) -> String {
    let remaining = refresh.cycle.remaining_secs;
    if refresh.is_alert() {
        format!("ALERT — Go to shelter now (time remaining: {remaining}s)")
    } else {
        format!("SAFE — Stay ready (next change in ~{remaining}s)")
    }
}

/// Render the plan text, or `None` if there are no shelters to list.
pub fn render_plan(refresh: &Refresh, title: &str) -> Option<String> {
    if refresh.nearest.is_empty() {
        return None;
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "My location: {:.5}, {:.5}", refresh.home.lat(), refresh.home.lon());
    let _ = writeln!(out, "Status: {} (remain {}s)", refresh.cycle.phase, refresh.cycle.remaining_secs);
    let _ = writeln!(out);
    for (i, r) in refresh.nearest.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} — {:.2} km (~{} min)",
            i + 1,
            r.shelter.name(),
            r.distance_km,
            r.eta_minutes
        );
    }
    Some(out)
}

/// Writes rendered plans to any `Write` sink, separated by blank lines.
pub struct TextPlanWriter<W: Write> {
    out:      W,
    title:    String,
    written:  usize,
}

impl TextPlanWriter<BufWriter<File>> {
    /// Create (or truncate) `shelter_plan.txt` in `dir`.
    pub fn create(dir: &Path) -> OutputResult<Self> {
        let file = File::create(dir.join("shelter_plan.txt"))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> TextPlanWriter<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out,
            title:    DEFAULT_TITLE.to_owned(),
            written:  0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of plans written so far.
    pub fn plans_written(&self) -> usize {
        self.written
    }

    /// Unwrap the inner sink (e.g. to inspect an in-memory buffer).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PlanWriter for TextPlanWriter<W> {
    fn write_plan(&mut self, refresh: &Refresh) -> OutputResult<()> {
        let Some(text) = render_plan(refresh, &self.title) else {
            return Ok(());
        };
        if self.written > 0 {
            self.out.write_all(b"\n")?;
        }
        self.out.write_all(text.as_bytes())?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
