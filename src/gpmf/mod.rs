//! GPMF structural vocabulary: the FourCC key space and the logic for
//! locating the GPS-bearing stream within a projected tree.

pub mod fourcc;
pub mod stream;

pub use fourcc::FourCC;
pub use stream::{device_id, device_name, find_gps_stream, GpsFormat, GpsStream};
