//! `ca-shelter` — shelters, their ingestion, and nearest-shelter ranking.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`shelter`]  | `Shelter`, `RankedShelter`                            |
//! | [`ranker`]   | `ShelterRanker`, `distance_km`, `eta_minutes`         |
//! | [`loader`]   | `load_shelters_csv`, `load_shelters_reader`           |
//! | [`builtin`]  | `builtin_shelters`, `DEFAULT_HOME`                    |
//! | [`error`]    | `ShelterError`, `ShelterResult<T>`                    |
//!
//! # Ranking (summary)
//!
//! ```text
//! for every shelter:  distance = haversine(home, shelter)
//!                     eta      = max(1, round(distance * 60 / walking_speed))
//! focus  = shelters with distance ≤ radius, stable-sorted by distance
//! result = first top_n of focus, or — if focus is empty — the top_n
//!          globally nearest shelters
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs the distance pass on Rayon's thread pool.      |

pub mod builtin;
pub mod error;
pub mod loader;
pub mod ranker;
pub mod shelter;

#[cfg(test)]
mod tests;

pub use builtin::{DEFAULT_HOME, builtin_shelters, default_home};
pub use error::{ShelterError, ShelterResult};
pub use loader::{load_shelters_csv, load_shelters_reader};
pub use ranker::{DEFAULT_TOP_N, DEFAULT_WALKING_SPEED_KMH, ShelterRanker, distance_km, eta_minutes};
pub use shelter::{RankedShelter, Shelter};
