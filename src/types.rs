//! Wire format types and utilities.

use std::fmt;

/// Length of the little-endian size prefix that opens every frame.
pub const FRAME_PREFIX_LEN: usize = 4;

/// Length of the little-endian count that precedes string content.
pub const STRING_LEN_PREFIX: usize = 4;

/// Type tags written ahead of every encoded value.
///
/// The set is closed: a reader only accepts the tag it was asked to decode,
/// so new variants can be added without changing the meaning of existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    /// One raw byte.
    Byte = 1,
    /// Signed 32-bit integer (little-endian).
    Int32 = 2,
    /// IEEE 754 single precision float (little-endian).
    Float32 = 3,
    /// One byte, `0x01` for true and `0x00` for false.
    Bool = 4,
    /// 32-bit little-endian length followed by that many raw bytes.
    String = 5,
}

impl TypeTag {
    /// Converts a u8 to a TypeTag.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(TypeTag::Byte),
            2 => Some(TypeTag::Int32),
            3 => Some(TypeTag::Float32),
            4 => Some(TypeTag::Bool),
            5 => Some(TypeTag::String),
            _ => None,
        }
    }

    /// Returns the tag byte.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Size of the payload following the tag, for fixed-width types.
    ///
    /// Strings return the size of their length prefix only.
    pub fn fixed_payload_len(self) -> usize {
        match self {
            TypeTag::Byte | TypeTag::Bool => 1,
            TypeTag::Int32 | TypeTag::Float32 => 4,
            TypeTag::String => STRING_LEN_PREFIX,
        }
    }

    /// Wire name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Byte => "BYTE",
            TypeTag::Int32 => "INT32",
            TypeTag::Float32 => "FLOAT32",
            TypeTag::Bool => "BOOL",
            TypeTag::String => "STRING",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag as u8
    }
}
