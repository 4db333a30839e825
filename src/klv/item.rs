//! A single framed KLV item: `{ key, type, size, repeat, payload }`.

use binrw::BinRead;

use super::types::ValueType;
use crate::FourCC;

/// Byte length of a KLV header (FourCC + type + size + repeat).
pub const HEADER_LEN: usize = 8;

/// Raw 8-byte KLV header, read big-endian.
#[derive(BinRead, Debug)]
#[br(big)]
pub(crate) struct RawHeader {
    pub fourcc: [u8; 4],
    pub type_code: u8,
    pub size: u8,
    pub repeat: u16,
}

/// Rounds `x` up to the next multiple of 4. `ceil4(0) == 0`.
pub fn ceil4(x: usize) -> usize {
    if x == 0 {
        0
    } else {
        (x + 3) & !3
    }
}

/// A single KLV item framed from the input buffer. `payload` is a
/// non-owning view into the original byte slice.
#[derive(Debug, Clone)]
pub struct KlvItem<'a> {
    pub key: FourCC,
    pub type_code: u8,
    pub value_type: ValueType,
    pub size: u8,
    pub repeat: u16,
    pub payload: &'a [u8],
}

impl<'a> KlvItem<'a> {
    /// Nominal raw payload size (`size * repeat`), before 4-byte alignment
    /// and before any truncation from a short buffer.
    pub fn nominal_len(&self) -> usize {
        self.size as usize * self.repeat as usize
    }

    /// `true` if this item is a nested container rather than a leaf value:
    /// type byte `0x00`, or an unrecognized type byte with `size == 0`.
    pub fn is_container(&self) -> bool {
        matches!(self.value_type, ValueType::Nested)
            || (matches!(self.value_type, ValueType::Unknown(_)) && self.size == 0)
    }

    /// `true` if the payload view is shorter than the nominal size implies,
    /// i.e. the input buffer was cut mid-item.
    pub fn is_truncated(&self) -> bool {
        self.payload.len() < ceil4(self.nominal_len())
    }
}
