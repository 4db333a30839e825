//! A single decoded GPS fix.

use time::OffsetDateTime;

#[cfg(feature = "serialize")]
use serde::Serialize;

/// One GPS fix, decoded and timestamped in UTC. Fields with no direct
/// payload analog (`dop`, `has_valid_fix`, `has_3d_fix`) are derived on
/// access rather than stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct GpsSample {
    pub description: String,
    #[cfg_attr(feature = "serialize", serde(with = "time::serde::iso8601"))]
    pub timestamp: OffsetDateTime,
    pub precision_x100: u16,
    pub fix: u32,
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub speed2d: f64,
    pub speed3d: f64,
    pub units: String,
    pub npoints: usize,
}

impl GpsSample {
    /// Dilution of precision, `precision_x100 / 100.0`.
    pub fn dop(&self) -> f64 {
        self.precision_x100 as f64 / 100.0
    }

    /// `true` iff `fix >= 2` (2D or 3D lock).
    pub fn has_valid_fix(&self) -> bool {
        self.fix >= 2
    }

    /// `true` iff `fix >= 3` (3D lock).
    pub fn has_3d_fix(&self) -> bool {
        self.fix >= 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample(fix: u32) -> GpsSample {
        GpsSample {
            description: "GPS5".to_string(),
            timestamp: datetime!(2023-06-15 12:00:00 UTC),
            precision_x100: 150,
            fix,
            lat: 47.5,
            lon: -122.5,
            alt: 12.345,
            speed2d: 5.0,
            speed3d: 5.1,
            units: "deg,deg,m,m/s,m/s".to_string(),
            npoints: 1,
        }
    }

    #[test]
    fn derived_fix_predicates() {
        assert!(!sample(0).has_valid_fix());
        assert!(sample(2).has_valid_fix());
        assert!(!sample(2).has_3d_fix());
        assert!(sample(3).has_3d_fix());
    }

    #[test]
    fn dop_is_precision_divided_by_100() {
        assert_eq!(sample(3).dop(), 1.5);
    }
}
