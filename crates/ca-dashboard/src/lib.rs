//! `ca-dashboard` — the driver side of the civil_alert dashboard.
//!
//! The cycle clock and shelter ranker are pure.  Everything that changes
//! over time — the tick counter, the running flag, the home location, the
//! shelter set, the focus radius — lives in one explicit [`Dashboard`] value
//! owned by the caller.
//!
//! # Refresh loop
//!
//! ```text
//! while running:
//!   ① refresh   — evaluate the cycle clock at `tick` and rank shelters
//!                 around `home` within `radius_km`
//!   ② notify    — DashboardObserver::on_refresh (and on_phase_change when
//!                 the active phase differs from the previous refresh)
//!   ③ step      — tick += 1
//! ```
//!
//! Bulk jumps (`fast_forward`), `reset`, `start`/`stop`, and location or
//! shelter changes are plain method calls between refreshes.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ca_dashboard::{DashboardBuilder, DashboardConfig, NoopObserver};
//!
//! let mut dash = DashboardBuilder::new(DashboardConfig::default()).build()?;
//! dash.run_ticks(315, &mut NoopObserver);
//! ```

pub mod builder;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod observer;


pub use builder::DashboardBuilder;
pub use config::{DashboardConfig, MAX_RADIUS_KM, MIN_RADIUS_KM};
pub use dashboard::{Dashboard, Refresh};
pub use error::{DashboardError, DashboardResult};
pub use observer::{DashboardObserver, NoopObserver};
