//! `ca-output` — shelter plan writers for the civil_alert dashboard.
//!
//! Two backends are provided:
//!
//! | Backend          | File created        | Contents                               |
//! |------------------|---------------------|----------------------------------------|
//! | `TextPlanWriter` | `shelter_plan.txt`  | human-readable plan, one per write     |
//! | `CsvPlanWriter`  | `shelter_plan.csv`  | one row per ranked shelter per write   |
//!
//! Both implement [`PlanWriter`] and can be driven by [`PlanObserver`], which
//! implements `ca_dashboard::DashboardObserver` and writes a plan each time
//! the dashboard enters an ALERT phase.  A pair `(A, B)` of writers is itself
//! a writer, so both files can be produced from one observer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ca_output::{CsvPlanWriter, PlanObserver, TextPlanWriter};
//!
//! let writer = (TextPlanWriter::create(dir)?, CsvPlanWriter::create(dir)?);
//! let mut obs = PlanObserver::new(writer);
//! dashboard.run_ticks(315, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use crate::csv::CsvPlanWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlanObserver;
pub use row::PlanRow;
pub use text::{TextPlanWriter, render_plan, status_line};
pub use writer::PlanWriter;
