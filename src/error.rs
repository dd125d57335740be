//! Error types for bitstream operations.

use thiserror::Error;

use crate::types::TypeTag;

/// Result type for bitstream operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bitstream operations.
#[derive(Error, Debug)]
pub enum Error {
    /// `load` was handed a zero-length payload.
    #[error("empty input: payload must contain at least one byte")]
    EmptyInput,

    /// The tag byte at the head of the stream is not the one the caller asked for.
    ///
    /// Only the tag byte has been consumed; the read cursor is no longer
    /// aligned with a value boundary.
    #[error("type mismatch: expected {expected}, found tag {found:#04x}")]
    TypeMismatch { expected: TypeTag, found: u8 },

    /// Fewer bytes remain than the value being decoded requires.
    ///
    /// `needed` counts from the tag byte. Nothing has been consumed, so the
    /// read can be retried once more bytes are loaded.
    #[error("truncated data: needed {needed} bytes, only {available} available")]
    Truncated { needed: usize, available: usize },

    /// A string length prefix decoded to a negative count.
    #[error("negative string length: {0}")]
    NegativeLength(i32),

    /// String content is not valid UTF-8.
    #[error("invalid UTF-8 string")]
    InvalidUtf8,

    /// A frame announced a payload larger than the reader accepts.
    #[cfg(feature = "io")]
    #[error("frame size {size} exceeds maximum {max}")]
    FrameTooLarge { size: usize, max: usize },

    /// The underlying stream ended inside a frame.
    #[cfg(feature = "io")]
    #[error("unexpected end of file")]
    UnexpectedEof,

    /// IO error.
    #[cfg(feature = "io")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: TypeTag, found: u8) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// Creates a truncated data error.
    pub fn truncated(needed: usize, available: usize) -> Self {
        Self::Truncated { needed, available }
    }

    /// Returns true for errors that leave a reader unusable for further decoding.
    pub fn is_desync(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::NegativeLength(_) | Self::InvalidUtf8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_expected_type() {
        let err = Error::type_mismatch(TypeTag::Int32, 5);
        assert_eq!(err.to_string(), "type mismatch: expected INT32, found tag 0x05");
    }

    #[test]
    fn test_desync_classification() {
        assert!(Error::type_mismatch(TypeTag::Byte, 2).is_desync());
        assert!(Error::NegativeLength(-1).is_desync());
        assert!(!Error::truncated(4, 1).is_desync());
        assert!(!Error::EmptyInput.is_desync());
    }
}
