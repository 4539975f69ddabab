//! Built-in demo table: ten shelters around Vyshhorod.
//!
//! Used when no shelter CSV is supplied.

use ca_core::Location;

use crate::Shelter;

/// Vyshhorod town centre, the default home location.
pub const DEFAULT_HOME: (f64, f64) = (50.583, 30.486);

// name, lat, lon, type, capacity
const BUILTIN: [(&str, f64, f64, &str, u32); 10] = [
    ("Community Shelter Alpha",   50.593,  30.501, "Public", 280),
    ("School Shelter Beta",       50.590,  30.472, "Public", 220),
    ("Clinic Shelter Gamma",      50.576,  30.498, "Public", 150),
    ("Cultural Center Basement",  50.569,  30.480, "Public", 180),
    ("Industrial Shelter East",   50.589,  30.515, "Staff",  120),
    ("Parking Level -2 (Public)", 50.585,  30.463, "Public", 200),
    ("Library Basement",          50.592,  30.472, "Public", 140),
    ("Sports Complex Shelter",    50.572,  30.450, "Public", 300),
    ("Municipal Office Basement", 50.5805, 30.489, "Public", 160),
    ("Warehouse Underground",     50.600,  30.490, "Staff",  110),
];

/// [`DEFAULT_HOME`] as a [`Location`].
pub fn default_home() -> Location {
    // Constant coordinates are in range.
    Location::new(DEFAULT_HOME.0, DEFAULT_HOME.1).unwrap_or_else(|_| unreachable!())
}

/// The built-in shelter table, in its canonical order.
pub fn builtin_shelters() -> Vec<Shelter> {
    BUILTIN
        .iter()
        .filter_map(|&(name, lat, lon, kind, capacity)| {
            Shelter::at(name, lat, lon)
                .ok()
                .map(|s| s.with_type(kind).with_capacity(capacity))
        })
        .collect()
}
