//! Decode GoPro GPMF (GoPro Metadata Format) telemetry from a byte buffer
//! into a normalized GPS track.
//!
//! GPMF is a recursive, tagged, 4-byte-aligned Key-Length-Value binary
//! format. This crate covers the core decode path: a streaming KLV reader,
//! a recursive tree projector, a typed payload reader, and decoders for the
//! two GPS payload families GoPro cameras emit.
//!
//! GPS support:
//! - `GPS5` (lat, lon, alt, 2D speed, 3D speed): all GoPro cameras with a
//!   GPS module up to and including the Hero 11 Black.
//! - `GPS9` (lat, lon, alt, 2D/3D speed, days, secs, DOP, fix): Hero 11
//!   onwards, which log both formats concurrently. `GPS9` takes precedence
//!   when both are present.
//!
//! Reading GPMF bytes out of an MP4 container and emitting GPX are treated
//! as external collaborators; this crate starts from an in-memory buffer
//! and stops at a [`gps::GpsTrack`].
//!
//! ```
//! let bytes: &[u8] = &[];
//! let track = gpmf_gps::parse(bytes);
//! assert_eq!(track.format, gpmf_gps::GpsFormat::Unknown);
//! ```

pub mod batch;
pub mod config;
pub mod constants;
pub mod errors;
pub mod gpmf;
pub mod gps;
pub mod klv;
pub mod tree;

pub use batch::parse_many;
pub use config::Limits;
pub use errors::GpmfError;
pub use gpmf::FourCC;
pub use gps::{GpsFormat, GpsSample, GpsTrack};
pub use klv::{KlvItem, KlvReader};
pub use tree::{GpmfNode, GpmfTree};

/// Device identity recovered from a `DEVC` container, independent of
/// whether it carries a GPS-bearing stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device_id: String,
    pub device_name: String,
}

/// Full decode: locate the GPS-bearing stream and decode it into a track.
/// Infallible - a malformed or GPS-less buffer yields an empty track with
/// `format = Unknown` rather than an error. To surface defensive-limit
/// violations instead, use [`parse_with_limits`].
pub fn parse(bytes: &[u8]) -> GpsTrack {
    parse_with_limits(bytes, Limits::default()).unwrap_or_else(|_| GpsTrack {
        device_id: constants::DEFAULT_DEVICE_ID.to_string(),
        device_name: constants::DEFAULT_DEVICE_NAME.to_string(),
        format: GpsFormat::Unknown,
        samples: Vec::new(),
    })
}

/// Full decode under caller-supplied [`Limits`], surfacing
/// [`GpmfError::MalformedInput`] if the tree projector exceeds them.
pub fn parse_with_limits(bytes: &[u8], limits: Limits) -> Result<GpsTrack, GpmfError> {
    let tree = tree::project_with_limits(bytes, limits)?;
    Ok(gps::decode_track(&tree))
}

/// Locator-only: which GPS format (if any) the buffer's GPS-bearing stream
/// carries, without decoding samples.
pub fn detect_format(bytes: &[u8]) -> GpsFormat {
    let Ok(tree) = tree::project(bytes) else {
        return GpsFormat::Unknown;
    };
    match gpmf::find_gps_stream(&tree) {
        Some(found) => match found.format {
            gpmf::GpsFormat::Gps5 => GpsFormat::Gps5,
            gpmf::GpsFormat::Gps9 => GpsFormat::Gps9,
        },
        None => GpsFormat::Unknown,
    }
}

/// Locator-only: device identity from the `DEVC` that carries the
/// GPS-bearing stream, or the crate's defaults if none is found.
pub fn device_info(bytes: &[u8]) -> DeviceInfo {
    let defaults = || DeviceInfo {
        device_id: constants::DEFAULT_DEVICE_ID.to_string(),
        device_name: constants::DEFAULT_DEVICE_NAME.to_string(),
    };
    let Ok(tree) = tree::project(bytes) else {
        return defaults();
    };
    match gpmf::find_gps_stream(&tree) {
        Some(found) => DeviceInfo {
            device_id: gpmf::device_id(found.devc),
            device_name: gpmf::device_name(found.devc),
        },
        None => defaults(),
    }
}

/// Low-level: a lazy, non-restartable iterator over a buffer's top-level
/// KLV items.
pub fn read_klv(bytes: &[u8]) -> KlvReader<'_> {
    KlvReader::new(bytes)
}

/// Mid-level: project a buffer into a [`GpmfTree`] under the default
/// [`Limits`]. Infallible, like [`parse`] - a limit violation yields an
/// empty tree rather than an error. Use [`project_tree_with_limits`] to
/// surface that instead.
pub fn project_tree(bytes: &[u8]) -> GpmfTree<'_> {
    project_tree_with_limits(bytes, Limits::default()).unwrap_or_default()
}

/// Mid-level: project a buffer into a [`GpmfTree`] under caller-supplied
/// [`Limits`], surfacing [`GpmfError::MalformedInput`] if they're exceeded.
pub fn project_tree_with_limits(bytes: &[u8], limits: Limits) -> Result<GpmfTree<'_>, GpmfError> {
    tree::project_with_limits(bytes, limits)
}
