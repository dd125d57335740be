//! Bitstream decoder.

use byteorder::{ByteOrder, LittleEndian};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::{TypeTag, STRING_LEN_PREFIX};

/// Reader drains tagged values from a loaded message payload.
///
/// Decoding is forward-only: each `get_*` call advances a position index
/// past the value it returns. The payload bytes themselves are never
/// shifted or overwritten.
pub struct Reader {
    buffer: Vec<u8>,
    pos: usize,
}

impl Reader {
    /// Creates an empty reader. Call [`Reader::load`] before decoding.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            pos: 0,
        }
    }

    /// Creates a reader over a payload (frame prefix already stripped).
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        let mut reader = Self::new();
        reader.load(payload)?;
        Ok(reader)
    }

    /// Appends a payload to the bytes available for decoding.
    ///
    /// Loads are cumulative; call [`Reader::reset`] between unrelated messages.
    pub fn load(&mut self, payload: &[u8]) -> Result<()> {
        if payload.is_empty() {
            return Err(Error::EmptyInput);
        }
        self.buffer.extend_from_slice(payload);
        trace!(loaded = payload.len(), remaining = self.len(), "loaded payload");
        Ok(())
    }

    /// Returns the number of bytes not yet consumed.
    pub fn len(&self) -> usize {
        self.buffer.len() - self.pos
    }

    /// Returns true if every loaded byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if there is more data to read.
    pub fn has_more(&self) -> bool {
        self.pos < self.buffer.len()
    }

    /// Returns the current position in the loaded bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Discards all loaded bytes and rewinds to the empty state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.pos = 0;
    }

    /// Checks if there are enough bytes available.
    fn check_available(&self, needed: usize) -> Result<()> {
        if needed > self.len() {
            debug!(needed, available = self.len(), "truncated value");
            return Err(Error::truncated(needed, self.len()));
        }
        Ok(())
    }

    /// Consumes `length` bytes. Callers must check availability first.
    fn take(&mut self, length: usize) -> &[u8] {
        let start = self.pos;
        self.pos += length;
        &self.buffer[start..self.pos]
    }

    /// Checks the tag at the head against `expected` without consuming it.
    ///
    /// A mismatched tag is consumed, leaving the reader mid-value.
    fn peek_tag(&mut self, expected: TypeTag) -> Result<()> {
        self.check_available(1)?;
        let found = self.buffer[self.pos];
        if found != expected.as_u8() {
            debug!(%expected, found, position = self.pos, "type mismatch");
            self.pos += 1;
            return Err(Error::type_mismatch(expected, found));
        }
        Ok(())
    }

    /// Consumes a fixed-width value and returns its payload.
    ///
    /// A truncated value is left in place so it can be retried after
    /// another [`Reader::load`].
    fn take_value(&mut self, expected: TypeTag) -> Result<&[u8]> {
        self.peek_tag(expected)?;
        let width = expected.fixed_payload_len();
        self.check_available(1 + width)?;
        self.pos += 1;
        Ok(self.take(width))
    }

    /// Reads a tagged byte.
    pub fn get_byte(&mut self) -> Result<u8> {
        Ok(self.take_value(TypeTag::Byte)?[0])
    }

    /// Reads a tagged 32-bit signed integer (little-endian).
    pub fn get_int32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take_value(TypeTag::Int32)?))
    }

    /// Reads a tagged 32-bit float (IEEE 754, little-endian).
    pub fn get_float32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.take_value(TypeTag::Float32)?))
    }

    /// Reads a tagged boolean. Only `0x01` decodes as true.
    pub fn get_bool(&mut self) -> Result<bool> {
        Ok(self.take_value(TypeTag::Bool)?[0] == 1)
    }

    /// Reads a tagged string as raw bytes, without validating the content.
    ///
    /// Nothing is consumed when the string is truncated. A negative length
    /// consumes the tag and the length prefix.
    pub fn get_string_bytes(&mut self) -> Result<Vec<u8>> {
        self.peek_tag(TypeTag::String)?;
        self.check_available(1 + STRING_LEN_PREFIX)?;
        let content = self.pos + 1 + STRING_LEN_PREFIX;
        let length = LittleEndian::read_i32(&self.buffer[self.pos + 1..content]);
        let length = match usize::try_from(length) {
            Ok(length) => length,
            Err(_) => {
                self.pos = content;
                debug!(length, "negative string length");
                return Err(Error::NegativeLength(length));
            }
        };
        self.check_available(1 + STRING_LEN_PREFIX + length)?;
        self.pos = content;
        Ok(self.take(length).to_vec())
    }

    /// Reads a tagged string that must hold UTF-8 text.
    ///
    /// The string is consumed even when the content is rejected.
    pub fn get_string(&mut self) -> Result<String> {
        let bytes = self.get_string_bytes()?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}
