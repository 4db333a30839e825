//! Low-level KLV (Key-Length-Value) framing: the 4-byte-aligned binary
//! layer underneath the GPMF tree.

pub mod item;
pub mod payload;
pub mod reader;
pub mod types;

pub use item::{ceil4, KlvItem, HEADER_LEN};
pub use reader::KlvReader;
pub use types::ValueType;
