//! GPMF type characters (the single byte after a FourCC in a KLV header)
//! and the element width/decoder kind they select.

/// A decoded GPMF type character, see
/// <https://github.com/gopro/gpmf-parser?tab=readme-ov-file#type>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    F64,
    F32,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    Ascii,
    Utc,
    Complex,
    Nested,
    /// Type byte not in the recognized table. Retained, never interpreted
    /// numerically.
    Unknown(u8),
}

impl ValueType {
    /// Classify a raw type byte.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'd' => Self::F64,
            b'f' => Self::F32,
            b'b' => Self::I8,
            b'B' => Self::U8,
            b's' => Self::I16,
            b'S' => Self::U16,
            b'l' => Self::I32,
            b'L' => Self::U32,
            b'j' => Self::I64,
            b'J' => Self::U64,
            b'c' => Self::Ascii,
            b'U' => Self::Utc,
            b'?' => Self::Complex,
            0x00 => Self::Nested,
            other => Self::Unknown(other),
        }
    }

    /// Width in bytes of a single element of this type. `0` for container
    /// and complex/unknown types, which have no fixed element width.
    pub fn element_width(&self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 => 4,
            Self::I8 | Self::U8 | Self::Ascii => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 => 4,
            Self::I64 | Self::U64 => 8,
            Self::Utc => 16,
            Self::Complex => 4,
            Self::Nested => 0,
            Self::Unknown(_) => 0,
        }
    }

    /// `true` if this type char denotes a nested container.
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested)
    }
}
