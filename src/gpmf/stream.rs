//! Locating the GPS-bearing stream within a projected GPMF tree.
//!
//! A single buffer may carry more than one `DEVC` (e.g. a multi-camera rig
//! merged into one GPMF blob); each `DEVC` may carry more than one `STRM`.
//! `GPS9` takes precedence over `GPS5` when both are present, matching
//! GoPro's own migration away from `GPS5` starting with the Hero 11.

use log::debug;

use crate::constants::{DEFAULT_DEVICE_ID, DEFAULT_DEVICE_NAME};
use crate::klv::payload::as_string;
use crate::klv::ValueType;
use crate::tree::{GpmfNode, GpmfTree};
use crate::FourCC;

/// Which GPS stream format was found under a `DEVC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsFormat {
    Gps5,
    Gps9,
}

/// A located GPS-bearing `STRM` container plus the format it carries.
pub struct GpsStream<'a, 'b> {
    pub format: GpsFormat,
    pub devc: &'b GpmfTree<'a>,
    pub strm: &'b GpmfTree<'a>,
}

/// Walk every top-level `DEVC` container (in encounter order) and return the
/// first `STRM` child carrying a `GPS9` or `GPS5` leaf, preferring `GPS9`
/// within each `DEVC` before moving to the next one.
pub fn find_gps_stream<'a, 'b>(root: &'b GpmfTree<'a>) -> Option<GpsStream<'a, 'b>> {
    for devc_node in root.all(&FourCC::DEVC) {
        let GpmfNode::Branch(devc) = devc_node else {
            continue;
        };
        if let Some(strm) = find_gps9_strm(devc) {
            return Some(GpsStream {
                format: GpsFormat::Gps9,
                devc,
                strm,
            });
        }
        if let Some(strm) = find_gps5_strm(devc) {
            return Some(GpsStream {
                format: GpsFormat::Gps5,
                devc,
                strm,
            });
        }
    }
    None
}

fn find_gps9_strm<'a, 'b>(devc: &'b GpmfTree<'a>) -> Option<&'b GpmfTree<'a>> {
    devc.all(&FourCC::STRM).into_iter().find_map(|node| match node {
        GpmfNode::Branch(strm) if strm.leaf(&FourCC::GPS9).is_some() => Some(strm),
        _ => None,
    })
}

fn find_gps5_strm<'a, 'b>(devc: &'b GpmfTree<'a>) -> Option<&'b GpmfTree<'a>> {
    devc.all(&FourCC::STRM).into_iter().find_map(|node| match node {
        GpmfNode::Branch(strm) if strm.leaf(&FourCC::GPS5).is_some() => Some(strm),
        _ => None,
    })
}

/// `DVID` as a string, falling back to [`DEFAULT_DEVICE_ID`] when absent.
pub fn device_id(devc: &GpmfTree) -> String {
    devc.leaf(&FourCC::DVID)
        .map(scalar_or_string)
        .unwrap_or_else(|| {
            debug!("DVID absent, defaulting device_id to {DEFAULT_DEVICE_ID:?}");
            DEFAULT_DEVICE_ID.to_string()
        })
}

/// `DVNM` as a string, falling back to [`DEFAULT_DEVICE_NAME`] when absent.
pub fn device_name(devc: &GpmfTree) -> String {
    devc.leaf(&FourCC::DVNM)
        .map(scalar_or_string)
        .unwrap_or_else(|| {
            debug!("DVNM absent, defaulting device_name to {DEFAULT_DEVICE_NAME:?}");
            DEFAULT_DEVICE_NAME.to_string()
        })
}

fn scalar_or_string(item: &crate::klv::KlvItem) -> String {
    if item.value_type == ValueType::Ascii {
        as_string(item)
    } else {
        crate::klv::payload::as_f64_vec(item)
            .first()
            .map(|v| {
                if v.fract() == 0.0 {
                    format!("{v:.0}")
                } else {
                    v.to_string()
                }
            })
            .unwrap_or_else(|| DEFAULT_DEVICE_ID.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::project;

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
    fn prefers_gps9_over_gps5_within_same_devc() {
        let gps5_strm = container(
            b"STRM",
            &item(b"GPS5", b'l', 20, 1, &[0u8; 20]),
        );
        let gps9_strm = container(
            b"STRM",
            &item(b"GPS9", b'l', 40, 1, &[0u8; 40]),
        );
        let mut children = Vec::new();
        children.extend_from_slice(&gps5_strm);
        children.extend_from_slice(&gps9_strm);
        let devc = container(b"DEVC", &children);

        let tree = project(&devc).unwrap();
        let found = find_gps_stream(&tree).expect("gps stream");
        assert_eq!(found.format, GpsFormat::Gps9);
    }

    #[test]
    fn missing_device_fields_use_defaults() {
        let strm = container(b"STRM", &item(b"GPS5", b'l', 20, 1, &[0u8; 20]));
        let devc = container(b"DEVC", &strm);
        let tree = project(&devc).unwrap();
        let found = find_gps_stream(&tree).unwrap();
        assert_eq!(device_id(found.devc), DEFAULT_DEVICE_ID);
        assert_eq!(device_name(found.devc), DEFAULT_DEVICE_NAME);
    }
}
