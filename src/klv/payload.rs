//! Typed decoding of a [`KlvItem`](super::item::KlvItem) payload.
//!
//! All readers here are bounds-checked against the actual (possibly
//! truncated) payload slice rather than the item's nominal size, so a short
//! final item never panics - it just yields fewer elements than `repeat`
//! claims.

use super::item::KlvItem;

macro_rules! numeric_reader {
    ($name:ident, $ty:ty, $width:expr, $from_be:expr) => {
        /// Decode the payload as a big-endian array of this width, stopping
        /// at whatever whole number of elements the payload actually holds.
        pub fn $name(item: &KlvItem) -> Vec<$ty> {
            item.payload
                .chunks_exact($width)
                .map(|chunk| {
                    let arr: [u8; $width] = chunk.try_into().expect("chunks_exact width");
                    $from_be(arr)
                })
                .collect()
        }
    };
}

numeric_reader!(as_i8, i8, 1, |a: [u8; 1]| a[0] as i8);
numeric_reader!(as_u8, u8, 1, |a: [u8; 1]| a[0]);
numeric_reader!(as_i16, i16, 2, i16::from_be_bytes);
numeric_reader!(as_u16, u16, 2, u16::from_be_bytes);
numeric_reader!(as_i32, i32, 4, i32::from_be_bytes);
numeric_reader!(as_u32, u32, 4, u32::from_be_bytes);
numeric_reader!(as_i64, i64, 8, i64::from_be_bytes);
numeric_reader!(as_u64, u64, 8, u64::from_be_bytes);
numeric_reader!(as_f32, f32, 4, f32::from_be_bytes);
numeric_reader!(as_f64, f64, 8, f64::from_be_bytes);

/// Decode the payload as an ASCII/UTF-8 string, trimming trailing `0x00`
/// padding and trailing spaces (both used by GPMF writers to pad strings to
/// a 4-byte boundary).
pub fn as_string(item: &KlvItem) -> String {
    let trimmed = trim_padding(item.payload);
    String::from_utf8_lossy(trimmed).into_owned()
}

fn trim_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != 0x00 && b != b' ')
        .map(|i| i + 1)
        .unwrap_or(0);
    &bytes[..end]
}

/// Convenience accessor for items expected to hold exactly one `f64`-valued
/// scalar, regardless of their underlying numeric type. Returns `None` for
/// empty or non-numeric payloads.
pub fn as_f64_scalar(item: &KlvItem) -> Option<f64> {
    as_f64_vec(item).into_iter().next()
}

/// Decode the payload as an array of `f64`, widening whatever the
/// underlying numeric type is. Non-numeric types yield an empty vec.
pub fn as_f64_vec(item: &KlvItem) -> Vec<f64> {
    use super::types::ValueType::*;
    match item.value_type {
        F64 => as_f64(item),
        F32 => as_f32(item).into_iter().map(|v| v as f64).collect(),
        I8 => as_i8(item).into_iter().map(|v| v as f64).collect(),
        U8 => as_u8(item).into_iter().map(|v| v as f64).collect(),
        I16 => as_i16(item).into_iter().map(|v| v as f64).collect(),
        U16 => as_u16(item).into_iter().map(|v| v as f64).collect(),
        I32 => as_i32(item).into_iter().map(|v| v as f64).collect(),
        U32 => as_u32(item).into_iter().map(|v| v as f64).collect(),
        I64 => as_i64(item).into_iter().map(|v| v as f64).collect(),
        U64 => as_u64(item).into_iter().map(|v| v as f64).collect(),
        Ascii | Utc | Complex | Nested | Unknown(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::klv::types::ValueType;
    use crate::FourCC;

    fn item(value_type: ValueType, size: u8, repeat: u16, payload: &[u8]) -> KlvItem {
        KlvItem {
            key: FourCC::Other(*b"TEST"),
            type_code: 0,
            value_type,
            size,
            repeat,
            payload,
        }
    }

    #[test]
    fn decodes_i32_array() {
        let bytes = [0i32.to_be_bytes(), 1i32.to_be_bytes()].concat();
        let it = item(ValueType::I32, 4, 2, &bytes);
        assert_eq!(as_i32(&it), vec![0, 1]);
    }

    #[test]
    fn truncated_payload_yields_partial_array() {
        let bytes = 7i32.to_be_bytes(); // one full element, no second
        let it = item(ValueType::I32, 4, 2, &bytes);
        assert_eq!(as_i32(&it), vec![7]);
    }

    #[test]
    fn string_trims_null_and_space_padding() {
        let it = item(ValueType::Ascii, 1, 8, b"HERO11\0\0");
        assert_eq!(as_string(&it), "HERO11");
        let it2 = item(ValueType::Ascii, 1, 8, b"abc     ");
        assert_eq!(as_string(&it2), "abc");
    }

    #[test]
    fn f64_vec_widens_integer_types() {
        let bytes = 2i16.to_be_bytes();
        let it = item(ValueType::I16, 2, 1, &bytes);
        assert_eq!(as_f64_vec(&it), vec![2.0]);
    }
}
