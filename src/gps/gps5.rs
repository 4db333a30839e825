//! GPS5 decoding: five packed `int32`s per sample, timestamped from a
//! shared `GPSU` base plus a nominal 18 Hz per-sample offset.

use log::debug;
use time::Duration;

use crate::constants::{
    DEFAULT_FIX, DEFAULT_GPS_UNITS, DEFAULT_PRECISION_X100, GPS5_DESCRIPTION,
    GPS5_SAMPLE_RATE_HZ,
};
use crate::klv::payload::{as_f64_vec, as_i32, as_string};
use crate::tree::GpmfTree;
use crate::FourCC;

use super::sample::GpsSample;
use super::scale::Scales;
use super::timestamp::base_time;

/// Decode every sample packed into a stream's `GPS5` leaf. Returns an empty
/// vec if the stream has no `GPS5` item or it holds fewer than five
/// `int32`s.
pub fn decode(strm: &GpmfTree) -> Vec<GpsSample> {
    let Some(gps5) = strm.leaf(&FourCC::GPS5) else {
        return Vec::new();
    };
    let raw = as_i32(gps5);
    let sample_count = raw.len() / 5;
    if sample_count == 0 {
        return Vec::new();
    }

    let scales = Scales::from_stream(strm);
    let units = strm.leaf(&FourCC::UNIT).map(as_string).unwrap_or_else(|| {
        debug!("UNIT absent, defaulting to {DEFAULT_GPS_UNITS}");
        DEFAULT_GPS_UNITS.to_string()
    });
    let precision_x100 = strm
        .leaf(&FourCC::GPSP)
        .and_then(|item| as_f64_vec(item).first().copied())
        .map(|v| v as u16)
        .unwrap_or_else(|| {
            debug!("GPSP absent, defaulting precision_x100 to {DEFAULT_PRECISION_X100}");
            DEFAULT_PRECISION_X100
        });
    let fix = strm
        .leaf(&FourCC::GPSF)
        .and_then(|item| as_f64_vec(item).first().copied())
        .map(|v| v as u32)
        .unwrap_or_else(|| {
            debug!("GPSF absent, defaulting fix to {DEFAULT_FIX}");
            DEFAULT_FIX
        });
    let gpsu = strm.leaf(&FourCC::GPSU).map(as_string);
    let base = base_time(gpsu.as_deref());

    (0..sample_count)
        .map(|i| {
            let off = i * 5;
            let offset_ms = (i as i64 * 1000) / GPS5_SAMPLE_RATE_HZ as i64;
            GpsSample {
                description: GPS5_DESCRIPTION.to_string(),
                timestamp: base + Duration::milliseconds(offset_ms),
                precision_x100,
                fix,
                lat: raw[off] as f64 / scales.get(0),
                lon: raw[off + 1] as f64 / scales.get(1),
                alt: raw[off + 2] as f64 / scales.get(2),
                speed2d: raw[off + 3] as f64 / scales.get(3),
                speed3d: raw[off + 4] as f64 / scales.get(4),
                units: units.clone(),
                npoints: sample_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn item(fourcc: &[u8; 4], type_code: u8, size: u8, repeat: u16, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(fourcc);
        out.push(type_code);
        out.push(size);
        out.extend_from_slice(&repeat.to_be_bytes());
        out.extend_from_slice(payload);
        let pad = crate::klv::ceil4(payload.len()) - payload.len();
        out.extend(std::iter::repeat(0).take(pad));
        out
    }

    fn strm_with_one_sample() -> Vec<u8> {
        let scal: Vec<u8> = [10_000_000i32, 10_000_000, 1000, 1000, 1000]
            .iter()
            .flat_map(|v| v.to_be_bytes())
            .collect();
        let gps5: Vec<u8> = [475_000_000i32, -1_225_000_000, 12345, 5000, 5100]
            .iter()
            .flat_map(|v| v.to_be_bytes())
            .collect();

        let mut children = Vec::new();
        children.extend_from_slice(&item(b"SCAL", b'l', 4, 5, &scal));
        children.extend_from_slice(&item(b"GPSU", b'c', 1, 16, b"230615120000.000"));
        children.extend_from_slice(&item(b"GPSP", b'S', 2, 1, &150u16.to_be_bytes()));
        children.extend_from_slice(&item(b"GPSF", b'L', 4, 1, &3u32.to_be_bytes()));
        children.extend_from_slice(&item(b"GPS5", b'l', 4, 5, &gps5));
        children
    }

    #[test]
    fn scales_and_decodes_a_single_sample() {
        let children = strm_with_one_sample();
        let tree = crate::tree::project(&children).unwrap();
        let samples = decode(&tree);
        assert_eq!(samples.len(), 1);
        let s = &samples[0];
        assert!((s.lat - 47.5).abs() < 1e-9);
        assert!((s.lon - (-122.5)).abs() < 1e-9);
        assert!((s.alt - 12.345).abs() < 1e-9);
        assert!((s.speed2d - 5.0).abs() < 1e-9);
        assert!((s.speed3d - 5.1).abs() < 1e-9);
        assert_eq!(s.fix, 3);
        assert_eq!(s.precision_x100, 150);
        assert_eq!(s.timestamp, datetime!(2023-06-15 12:00:00.000 UTC));
    }

    #[test]
    fn spaces_samples_at_nominal_18hz() {
        let scal: Vec<u8> = [1i32, 1, 1, 1, 1].iter().flat_map(|v| v.to_be_bytes()).collect();
        let mut gps5 = Vec::new();
        for i in 0..19i32 {
            gps5.extend_from_slice(&i.to_be_bytes());
            gps5.extend_from_slice(&0i32.to_be_bytes());
            gps5.extend_from_slice(&0i32.to_be_bytes());
            gps5.extend_from_slice(&0i32.to_be_bytes());
            gps5.extend_from_slice(&0i32.to_be_bytes());
        }
        let mut children = Vec::new();
        children.extend_from_slice(&item(b"SCAL", b'l', 4, 5, &scal));
        children.extend_from_slice(&item(b"GPSU", b'c', 1, 16, b"230615120000.000"));
        children.extend_from_slice(&item(b"GPS5", b'l', 4, (19 * 5) as u16, &gps5));

        let tree = crate::tree::project(&children).unwrap();
        let samples = decode(&tree);
        assert_eq!(samples.len(), 19);
        assert_eq!(samples[0].timestamp, datetime!(2023-06-15 12:00:00.000 UTC));
        assert_eq!(samples[18].timestamp, datetime!(2023-06-15 12:00:01.000 UTC));
    }

    #[test]
    fn missing_gps5_yields_no_samples() {
        let tree = crate::tree::project(&[]).unwrap();
        assert!(decode(&tree).is_empty());
    }
}
