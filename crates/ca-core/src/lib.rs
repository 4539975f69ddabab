//! `ca-core` — foundational types for the `civil_alert` dashboard.
//!
//! This crate is a dependency of every other `ca-*` crate.  It has no `ca-*`
//! dependencies and only `thiserror` as an external one (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`geo`]   | `Location`, haversine distance in kilometres    |
//! | [`time`]  | `Tick`                                          |
//! | [`error`] | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_KM, Location};
pub use time::Tick;
