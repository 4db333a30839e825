//! GPS9 decoding: fixed-stride samples carrying their own per-sample time,
//! DOP, and fix, so (unlike GPS5) no external `GPSU`/`GPSP`/`GPSF` siblings
//! are consulted.

use log::debug;

use crate::constants::{DEFAULT_GPS_UNITS, GPS9_DESCRIPTION};
use crate::klv::payload::as_string;
use crate::tree::GpmfTree;
use crate::FourCC;

use super::sample::GpsSample;
use super::scale::Scales;
use super::timestamp::gps9_timestamp;

/// Byte offsets of each field within one GPS9 sample.
mod offset {
    pub const LAT: usize = 0;
    pub const LON: usize = 4;
    pub const ALT: usize = 8;
    pub const SPEED2D: usize = 12;
    pub const SPEED3D: usize = 14;
    pub const DAYS: usize = 16;
    pub const SECS: usize = 18;
    pub const DOP: usize = 22;
    pub const FIX: usize = 24;
    /// Number of bytes a sample must supply for every field above to be
    /// readable; the stride itself may be wider (trailing reserved bytes).
    pub const MIN_LEN: usize = FIX + 1;
}

/// Decode every fixed-stride sample packed into a stream's `GPS9` leaf.
/// `size` in the KLV header gives the per-sample byte stride; `repeat`
/// gives the sample count. Stops early, without error, at the first sample
/// the payload doesn't fully cover.
pub fn decode(strm: &GpmfTree) -> Vec<GpsSample> {
    let Some(gps9) = strm.leaf(&FourCC::GPS9) else {
        return Vec::new();
    };
    let stride = gps9.size as usize;
    let sample_count = gps9.repeat as usize;
    if stride == 0 || sample_count == 0 {
        return Vec::new();
    }

    let scales = Scales::from_stream(strm);
    let units = strm
        .leaf(&FourCC::UNIT)
        .map(as_string)
        .unwrap_or_else(|| {
            debug!("UNIT absent, defaulting to {DEFAULT_GPS_UNITS}");
            DEFAULT_GPS_UNITS.to_string()
        });

    let payload = gps9.payload;
    let mut samples = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let base = i * stride;
        if base + offset::MIN_LEN > payload.len() {
            break;
        }
        let i32_at = |o: usize| i32::from_be_bytes(payload[base + o..base + o + 4].try_into().unwrap());
        let i16_at = |o: usize| i16::from_be_bytes(payload[base + o..base + o + 2].try_into().unwrap());
        let u16_at = |o: usize| u16::from_be_bytes(payload[base + o..base + o + 2].try_into().unwrap());
        let u32_at = |o: usize| u32::from_be_bytes(payload[base + o..base + o + 4].try_into().unwrap());

        let lat = i32_at(offset::LAT) as f64 / scales.get(0);
        let lon = i32_at(offset::LON) as f64 / scales.get(1);
        let alt = i32_at(offset::ALT) as f64 / scales.get(2);
        let speed2d = i16_at(offset::SPEED2D) as f64 / scales.get(3);
        let speed3d = i16_at(offset::SPEED3D) as f64 / scales.get(4);
        let days = u16_at(offset::DAYS);
        let secs_scaled = u32_at(offset::SECS) as f64 / scales.get(6);
        let dop = u16_at(offset::DOP);
        let fix = payload[base + offset::FIX] as u32;

        samples.push(GpsSample {
            description: GPS9_DESCRIPTION.to_string(),
            timestamp: gps9_timestamp(days, secs_scaled),
            precision_x100: dop,
            fix,
            lat,
            lon,
            alt,
            speed2d,
            speed3d,
            units: units.clone(),
            npoints: sample_count,
        });
    }
    samples
}
