//! GPS decoding: turning a located GPS-bearing stream into a normalized,
//! UTC-timestamped [`GpsTrack`].

pub mod gps5;
pub mod gps9;
pub mod sample;
pub mod scale;
pub mod timestamp;
pub mod track;

pub use sample::GpsSample;
pub use track::{GpsFormat, GpsTrack};

use crate::constants::{DEFAULT_DEVICE_ID, DEFAULT_DEVICE_NAME};
use crate::gpmf::{self, GpsFormat as LocatedFormat};
use crate::tree::GpmfTree;

/// Locate the GPS-bearing stream in a projected tree and decode it into a
/// track. Absence of any GPS-bearing stream yields an empty track with
/// `format = Unknown`, never an error.
pub fn decode_track(tree: &GpmfTree) -> GpsTrack {
    let Some(found) = gpmf::find_gps_stream(tree) else {
        return GpsTrack {
            device_id: DEFAULT_DEVICE_ID.to_string(),
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            format: GpsFormat::Unknown,
            samples: Vec::new(),
        };
    };

    let device_id = gpmf::device_id(found.devc);
    let device_name = gpmf::device_name(found.devc);
    let (format, samples) = match found.format {
        LocatedFormat::Gps9 => (GpsFormat::Gps9, gps9::decode(found.strm)),
        LocatedFormat::Gps5 => (GpsFormat::Gps5, gps5::decode(found.strm)),
    };

    GpsTrack {
        device_id,
        device_name,
        format,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn container(fourcc: &[u8; 4], children: &[u8]) -> Vec<u8> {
        item(fourcc, 0x00, 0, children.len() as u16, children)
    }

    #[test]
    fn absent_gps_yields_empty_unknown_track() {
        let devc = container(b"DEVC", &item(b"DVNM", b'c', 1, 4, b"abcd"));
        let tree = crate::tree::project(&devc).unwrap();
        let track = decode_track(&tree);
        assert_eq!(track.format, GpsFormat::Unknown);
        assert!(track.samples.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_unknown_track() {
        let tree = crate::tree::project(&[]).unwrap();
        let track = decode_track(&tree);
        assert_eq!(track.format, GpsFormat::Unknown);
        assert!(track.samples.is_empty());
        assert_eq!(track.device_id, DEFAULT_DEVICE_ID);
        assert_eq!(track.device_name, DEFAULT_DEVICE_NAME);
    }

    #[test]
    fn full_gps5_pipeline_reports_device_and_format() {
        let scal: Vec<u8> = [10_000_000i32, 10_000_000, 1000, 1000, 1000]
            .iter()
            .flat_map(|v| v.to_be_bytes())
            .collect();
        let gps5: Vec<u8> = [475_000_000i32, -1_225_000_000, 12345, 5000, 5100]
            .iter()
            .flat_map(|v| v.to_be_bytes())
            .collect();

        let mut strm_children = Vec::new();
        strm_children.extend_from_slice(&item(b"SCAL", b'l', 4, 5, &scal));
        strm_children.extend_from_slice(&item(b"GPSU", b'c', 1, 16, b"230615120000.000"));
        strm_children.extend_from_slice(&item(b"GPSF", b'L', 4, 1, &3u32.to_be_bytes()));
        strm_children.extend_from_slice(&item(b"GPS5", b'l', 4, 5, &gps5));
        let strm = container(b"STRM", &strm_children);

        let mut devc_children = Vec::new();
        devc_children.extend_from_slice(&item(b"DVID", b'L', 4, 1, &1234u32.to_be_bytes()));
        devc_children.extend_from_slice(&item(b"DVNM", b'c', 1, 12, b"HERO11 Black"));
        devc_children.extend_from_slice(&strm);
        let devc = container(b"DEVC", &devc_children);

        let tree = crate::tree::project(&devc).unwrap();
        let track = decode_track(&tree);
        assert_eq!(track.format, GpsFormat::Gps5);
        assert_eq!(track.device_id, "1234");
        assert_eq!(track.device_name, "HERO11 Black");
        assert_eq!(track.samples.len(), 1);
        assert_eq!(track.samples[0].fix, 3);
    }
}
