//! Streaming KLV reader over an in-memory byte slice.

use std::io::Cursor;

use binrw::BinReaderExt;
use log::{trace, warn};

use super::item::{ceil4, KlvItem, RawHeader, HEADER_LEN};
use super::types::ValueType;
use crate::FourCC;

/// Iterates over a buffer's top-level KLV items without recursing into
/// nested containers; the tree projector drives recursion by handing a
/// container item's payload back to a fresh `KlvReader`.
///
/// Stops cleanly (returns `None`) once fewer than [`HEADER_LEN`] bytes
/// remain, and tolerates a final item whose declared payload runs past the
/// end of the buffer by handing back a payload view truncated to what is
/// actually available.
pub struct KlvReader<'a> {
    remaining: &'a [u8],
}

impl<'a> KlvReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { remaining: bytes }
    }
}

impl<'a> Iterator for KlvReader<'a> {
    type Item = KlvItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.len() < HEADER_LEN {
            if !self.remaining.is_empty() {
                trace!(
                    "dropping {} trailing byte(s), too short for a KLV header",
                    self.remaining.len()
                );
            }
            self.remaining = &[];
            return None;
        }

        let mut cursor = Cursor::new(&self.remaining[..HEADER_LEN]);
        let raw: RawHeader = cursor
            .read_be()
            .expect("exactly HEADER_LEN bytes available for an 8-byte header");

        let key = FourCC::from_bytes(raw.fourcc);
        if key.is_invalid() {
            trace!("zero-padded FourCC encountered, stopping stream");
            self.remaining = &[];
            return None;
        }

        let value_type = ValueType::from_byte(raw.type_code);
        let padded_len = ceil4(raw.size as usize * raw.repeat as usize);
        let available = self.remaining.len() - HEADER_LEN;
        let payload_len = padded_len.min(available);
        let payload = &self.remaining[HEADER_LEN..HEADER_LEN + payload_len];

        let consumed = (HEADER_LEN + padded_len).min(self.remaining.len());
        self.remaining = &self.remaining[consumed..];

        let item = KlvItem {
            key,
            type_code: raw.type_code,
            value_type,
            size: raw.size,
            repeat: raw.repeat,
            payload,
        };

        if item.is_truncated() {
            warn!(
                "{} payload truncated: wanted {} bytes, buffer had {}",
                item.key,
                ceil4(item.nominal_len()),
                item.payload.len()
            );
        }

        trace!(
            "klv item {} type={:?} size={} repeat={} payload_len={}",
            item.key,
            item.value_type,
            item.size,
            item.repeat,
            item.payload.len()
        );

        Some(item)
    }
}
