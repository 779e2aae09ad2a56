//! Earth radius per distance unit.
//!
//! Unit names are matched case-insensitively. Anything not in the table
//! resolves to the [`DEFAULT_UNIT`] radius without complaint.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const DEFAULT_UNIT: &str = "meters";

const RADIUS_UNITS: [(&str, f64); 8] = [
    ("feet", 20_908_800.0),
    ("yards", 6_969_600.0),
    ("miles", 3960.0),
    ("mi", 3960.0),
    ("kilometers", 6371.0),
    ("km", 6371.0),
    ("meters", 6_371_000.0),
    ("m", 6_371_000.0),
];

static UNIT_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| RADIUS_UNITS.into_iter().collect());

fn lookup(unit: &str) -> Option<f64> {
    UNIT_TABLE.get(unit.to_lowercase().as_str()).copied()
}

/// Radius of the earth expressed in `unit`.
///
/// `None` and `""` mean [`DEFAULT_UNIT`]; unknown names fall back to it too.
pub fn resolve_earth_radius(unit: Option<&str>) -> f64 {
    let unit = unit.filter(|u| !u.is_empty()).unwrap_or(DEFAULT_UNIT);

    lookup(unit).unwrap_or(UNIT_TABLE[DEFAULT_UNIT])
}

pub fn is_known_unit(unit: &str) -> bool {
    lookup(unit).is_some()
}

/// Table entries in their declared order.
pub fn known_units() -> impl Iterator<Item = (&'static str, f64)> {
    RADIUS_UNITS.into_iter()
}
