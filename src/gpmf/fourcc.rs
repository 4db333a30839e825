//! GPMF FourCC, i.e. the 4-byte key that identifies every KLV item.
//!
//! Only the FourCCs this crate's tree projector and GPS decoders actually
//! interpret get named variants. Everything else (accelerometer, gyroscope,
//! face detection, and the many other device-specific streams GoPro defines)
//! is retained verbatim via `FourCC::Other` so the tree never silently drops
//! data the caller might still want to walk by hand.
//! Descriptions lifted from the official GPMF documentation
//! (<https://github.com/gopro/gpmf-parser>).

use std::fmt;

/// FourCC enum. Compared as raw bytes, never case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FourCC {
    /// unique device source for metadata
    DEVC,
    /// device/track ID
    DVID,
    /// device name
    DVNM,
    /// nested signal stream of metadata/telemetry
    STRM,
    /// stream name
    STNM,
    /// comments for any stream
    RMRK,
    /// scaling factor (divisor)
    SCAL,
    /// standard units (SI)
    SIUN,
    /// display units
    UNIT,
    /// typedefs for complex structures
    TYPE,
    /// total samples delivered
    TSMP,
    /// time offset
    TIMO,
    /// empty payload count
    EMPT,
    /// GPS5: lat, lon, alt, 2D speed, 3D speed
    GPS5,
    /// GPS9: lat, lon, alt, 2D/3D speed, days, secs, DOP, fix
    GPS9,
    /// GPS fix: 0 - no lock, 2/3 - 2D/3D lock
    GPSF,
    /// GPS precision, DOP x100
    GPSP,
    /// UTC date and time from GPS
    GPSU,
    /// GPS altitude system (added ~v1.50)
    GPSA,

    /// Invalid/zero-padded FourCC, e.g. MP4 `udta` padding bleeding into GPMF parsing.
    Invalid,
    /// Undocumented or out-of-scope FourCC (e.g. `ACCL`, `GYRO`, `FACE`, ...).
    Other([u8; 4]),
}

impl Default for FourCC {
    fn default() -> Self {
        FourCC::Invalid
    }
}

impl FourCC {
    /// Parse a FourCC from exactly 4 bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        match &bytes {
            b"DEVC" => FourCC::DEVC,
            b"DVID" => FourCC::DVID,
            b"DVNM" => FourCC::DVNM,
            b"STRM" => FourCC::STRM,
            b"STNM" => FourCC::STNM,
            b"RMRK" => FourCC::RMRK,
            b"SCAL" => FourCC::SCAL,
            b"SIUN" => FourCC::SIUN,
            b"UNIT" => FourCC::UNIT,
            b"TYPE" => FourCC::TYPE,
            b"TSMP" => FourCC::TSMP,
            b"TIMO" => FourCC::TIMO,
            b"EMPT" => FourCC::EMPT,
            b"GPS5" => FourCC::GPS5,
            b"GPS9" => FourCC::GPS9,
            b"GPSF" => FourCC::GPSF,
            b"GPSP" => FourCC::GPSP,
            b"GPSU" => FourCC::GPSU,
            b"GPSA" => FourCC::GPSA,
            [0, 0, 0, 0] => FourCC::Invalid,
            other => FourCC::Other(*other),
        }
    }

    /// Parse a FourCC from a byte slice. Returns `None` if `slice` is not exactly 4 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 4] = slice.try_into().ok()?;
        Some(Self::from_bytes(bytes))
    }

    /// Render the FourCC as its raw 4 bytes.
    pub fn as_bytes(&self) -> [u8; 4] {
        match self {
            FourCC::DEVC => *b"DEVC",
            FourCC::DVID => *b"DVID",
            FourCC::DVNM => *b"DVNM",
            FourCC::STRM => *b"STRM",
            FourCC::STNM => *b"STNM",
            FourCC::RMRK => *b"RMRK",
            FourCC::SCAL => *b"SCAL",
            FourCC::SIUN => *b"SIUN",
            FourCC::UNIT => *b"UNIT",
            FourCC::TYPE => *b"TYPE",
            FourCC::TSMP => *b"TSMP",
            FourCC::TIMO => *b"TIMO",
            FourCC::EMPT => *b"EMPT",
            FourCC::GPS5 => *b"GPS5",
            FourCC::GPS9 => *b"GPS9",
            FourCC::GPSF => *b"GPSF",
            FourCC::GPSP => *b"GPSP",
            FourCC::GPSU => *b"GPSU",
            FourCC::GPSA => *b"GPSA",
            FourCC::Invalid => [0, 0, 0, 0],
            FourCC::Other(b) => *b,
        }
    }

    /// `true` for the zero-padding sentinel.
    pub fn is_invalid(&self) -> bool {
        self == &FourCC::Invalid
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.as_bytes()))
    }
}
