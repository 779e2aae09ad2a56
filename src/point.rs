use std::{fmt::Display, str::FromStr};

use anyhow::{Context, Result};

/// A latitude/longitude pair in degrees. Values are never range-checked.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses `"<lat>,<lon>"`, e.g. `"52.2296756,21.0122287"`.
impl FromStr for Point {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| anyhow::anyhow!("Expected \"lat,lon\", got: {s:?}"))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .with_context(|| format!("Invalid latitude in {s:?}"))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .with_context(|| format!("Invalid longitude in {s:?}"))?;

        Ok(Point { lat, lon })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let p: Point = "52.2296756,21.0122287".parse().unwrap();
        assert_eq!(p, Point::new(52.2296756, 21.0122287));
    }

    #[test]
    fn test_parse_negative_with_spaces() {
        let p: Point = " -33.8688 , -151.2093 ".parse().unwrap();
        assert_eq!(p, Point::new(-33.8688, -151.2093));
    }

    #[test]
    fn test_parse_keeps_out_of_range_values() {
        let p: Point = "120,400".parse().unwrap();
        assert_eq!(p, Point::new(120.0, 400.0));
    }

    #[test]
    fn test_parse_errors() {
        assert!("52.2".parse::<Point>().is_err());
        assert!("north,21.0".parse::<Point>().is_err());
        assert!("52.2,".parse::<Point>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(0.5, -1.0).to_string(), "0.5,-1");
    }
}
