//! The normalized GPS track produced by either decoder.

#[cfg(feature = "serialize")]
use serde::Serialize;

use super::sample::GpsSample;

/// Which GPS payload format a track's samples were decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum GpsFormat {
    Gps5,
    Gps9,
    #[default]
    Unknown,
}

/// A decoded GPS track: device identity plus an ordered sample list.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct GpsTrack {
    pub device_id: String,
    pub device_name: String,
    pub format: GpsFormat,
    pub samples: Vec<GpsSample>,
}

impl GpsTrack {
    /// A copy of this track keeping only samples with `has_valid_fix()`.
    pub fn valid_only(&self) -> GpsTrack {
        GpsTrack {
            device_id: self.device_id.clone(),
            device_name: self.device_name.clone(),
            format: self.format,
            samples: self
                .samples
                .iter()
                .filter(|s| s.has_valid_fix())
                .cloned()
                .collect(),
        }
    }
}
