use time::{macros::datetime, OffsetDateTime};

/// GPS9 day count and GPMF epoch: 2000-01-01, 00:00 UTC.
pub const GPMF_EPOCH: OffsetDateTime = datetime!(2000-1-1 0:0:0 UTC);

/// Fallback `device_id` when no `DVID` item is present under `DEVC`.
pub const DEFAULT_DEVICE_ID: &str = "unknown";
/// Fallback `device_name` when no `DVNM` item is present under `DEVC`.
pub const DEFAULT_DEVICE_NAME: &str = "GoPro";
/// Fallback `UNIT` string for GPS streams lacking one.
pub const DEFAULT_GPS_UNITS: &str = "deg,deg,m,m/s,m/s";
/// Fallback `GPSP` (DOP x100) when absent.
pub const DEFAULT_PRECISION_X100: u16 = 9999;
/// Fallback `GPSF` (fix) when absent.
pub const DEFAULT_FIX: u32 = 0;

/// Nominal GPS5 sample rate in Hz, used to space per-sample timestamps
/// within a single GPS5 cluster.
pub const GPS5_SAMPLE_RATE_HZ: u32 = 18;

/// `description` field for samples decoded from a `GPS5` stream.
pub const GPS5_DESCRIPTION: &str = "GPS5";
/// `description` field for samples decoded from a `GPS9` stream.
pub const GPS9_DESCRIPTION: &str = "GPS9";
