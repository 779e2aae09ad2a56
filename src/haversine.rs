use std::f64::consts::PI;

use crate::point::Point;

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Great-circle distance between `start` and `end`, scaled by `earth_radius`.
///
/// Nothing is validated: out-of-range coordinates go through the math as-is
/// and `NaN` comes back whenever `1 - a` rounds below zero.
pub fn haversine(start: &Point, end: &Point, earth_radius: f64) -> f64 {
    let lat_delta = degrees_to_radians(end.lat - start.lat);
    let lat_delta_sin = f64::sin(lat_delta * 0.5);
    let lon_delta = degrees_to_radians(end.lon - start.lon);
    let lon_delta_sin = f64::sin(lon_delta * 0.5);

    let start_lat = degrees_to_radians(start.lat);
    let end_lat = degrees_to_radians(end.lat);

    let a = lat_delta_sin * lat_delta_sin
        + lon_delta_sin * lon_delta_sin * f64::cos(start_lat) * f64::cos(end_lat);
    let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));

    earth_radius * c
}
