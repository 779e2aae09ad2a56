//! Great-circle distance between two latitude/longitude points.

mod distance;
mod haversine;
mod options;
mod point;
pub mod units;

pub use distance::{Distance, compute_distance};
pub use haversine::{degrees_to_radians, haversine};
pub use options::Options;
pub use point::Point;
pub use units::{DEFAULT_UNIT, resolve_earth_radius};
