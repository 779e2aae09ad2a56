use std::fmt::Display;

use crate::{haversine::haversine, options::Options, point::Point, units::resolve_earth_radius};

/// What [`compute_distance`] hands back; the variant depends on [`Options`].
#[derive(Debug, Clone, PartialEq)]
pub enum Distance {
    Value(f64),
    Formatted(String),
    WithinLimit(bool),
}

impl Distance {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Distance::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Distance::Formatted(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Distance::WithinLimit(b) => Some(*b),
            _ => None,
        }
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Value(v) => write!(f, "{v}"),
            Distance::Formatted(s) => write!(f, "{s}"),
            Distance::WithinLimit(b) => write!(f, "{b}"),
        }
    }
}

/// Haversine distance from `start` to `end`.
///
/// Post-processing runs in a fixed order: floor unless `exact`, then
/// `limit` (yields [`Distance::WithinLimit`] and wins over `format`), then
/// `format`. An unknown unit computes in meters but keeps its own name in
/// the formatted label.
pub fn compute_distance(start: &Point, end: &Point, options: &Options) -> Distance {
    let earth_radius = resolve_earth_radius(options.unit());
    let mut dist = haversine(start, end, earth_radius);

    if !options.exact {
        dist = dist.floor();
    }
    if let Some(limit) = options.active_limit() {
        return Distance::WithinLimit(limit > dist);
    }
    if options.format {
        return Distance::Formatted(format!("{dist} {}", options.unit_label()));
    }

    Distance::Value(dist)
}
