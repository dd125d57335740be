//! Bitstream encoder.

use byteorder::{ByteOrder, LittleEndian};
use tracing::trace;

use crate::types::{TypeTag, FRAME_PREFIX_LEN};

const INITIAL_CAPACITY: usize = 256;

/// Writer accumulates tagged values into a message payload.
///
/// Every `put_*` call appends one tag byte followed by the value's payload.
/// None of them can fail; the only observable effect is buffer growth.
pub struct Writer {
    buffer: Vec<u8>,
}

impl Writer {
    /// Creates a new writer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a new writer with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of payload bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the payload as a slice, without the frame prefix.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Discards everything written so far.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    #[inline]
    fn put_tag(&mut self, tag: TypeTag) {
        self.buffer.push(tag.as_u8());
    }

    /// Writes a tagged byte.
    pub fn put_byte(&mut self, value: u8) {
        self.put_tag(TypeTag::Byte);
        self.buffer.push(value);
    }

    /// Writes a tagged 32-bit signed integer (little-endian).
    pub fn put_int32(&mut self, value: i32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_i32(&mut buf, value);
        self.put_tag(TypeTag::Int32);
        self.buffer.extend_from_slice(&buf);
    }

    /// Writes a tagged 32-bit float (IEEE 754, little-endian).
    pub fn put_float32(&mut self, value: f32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_f32(&mut buf, value);
        self.put_tag(TypeTag::Float32);
        self.buffer.extend_from_slice(&buf);
    }

    /// Writes a tagged boolean.
    pub fn put_bool(&mut self, value: bool) {
        self.put_tag(TypeTag::Bool);
        self.buffer.push(u8::from(value));
    }

    /// Writes a tagged, length-prefixed string.
    pub fn put_string(&mut self, value: &str) {
        self.put_string_bytes(value.as_bytes());
    }

    /// Writes raw bytes under the STRING tag.
    ///
    /// The content is not inspected. Its length must fit in an `i32`.
    pub fn put_string_bytes(&mut self, value: &[u8]) {
        let mut len = [0u8; 4];
        LittleEndian::write_i32(&mut len, value.len() as i32);
        self.put_tag(TypeTag::String);
        self.buffer.extend_from_slice(&len);
        self.buffer.extend_from_slice(value);
    }

    /// Returns the framed message: a 4-byte little-endian payload length
    /// followed by the payload.
    ///
    /// The writer keeps its contents; call [`Writer::reset`] to reuse it.
    pub fn finish(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(FRAME_PREFIX_LEN + self.buffer.len());
        let mut prefix = [0u8; FRAME_PREFIX_LEN];
        LittleEndian::write_u32(&mut prefix, self.buffer.len() as u32);
        frame.extend_from_slice(&prefix);
        frame.extend_from_slice(&self.buffer);
        trace!(payload_len = self.buffer.len(), "finished frame");
        frame
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_byte() {
        let mut writer = Writer::new();
        writer.put_byte(0);
        writer.put_byte(255);
        assert_eq!(writer.as_bytes(), &[1, 0, 1, 255]);
    }

    #[test]
    fn test_put_int32() {
        let mut writer = Writer::new();
        writer.put_int32(95959);
        assert_eq!(writer.as_bytes(), &[2, 0xd7, 0x76, 0x01, 0x00]);

        let mut writer = Writer::new();
        writer.put_int32(-1);
        assert_eq!(writer.as_bytes(), &[2, 0xff, 0xff, 0xff, 0xff]);

        let mut writer = Writer::new();
        writer.put_int32(i32::MIN);
        assert_eq!(writer.as_bytes(), &[2, 0x00, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn test_put_float32() {
        let mut writer = Writer::new();
        writer.put_float32(1.0);
        assert_eq!(writer.as_bytes(), &[3, 0x00, 0x00, 0x80, 0x3f]);
    }

    #[test]
    fn test_put_bool() {
        let mut writer = Writer::new();
        writer.put_bool(true);
        writer.put_bool(false);
        assert_eq!(writer.as_bytes(), &[4, 1, 4, 0]);
    }

    #[test]
    fn test_put_string() {
        let mut writer = Writer::new();
        writer.put_string("hello");
        assert_eq!(
            writer.as_bytes(),
            &[5, 5, 0, 0, 0, b'h', b'e', b'l', b'l', b'o']
        );

        let mut writer = Writer::new();
        writer.put_string("");
        assert_eq!(writer.as_bytes(), &[5, 0, 0, 0, 0]);
    }

    #[test]
    fn test_finish_prefixes_length() {
        let mut writer = Writer::new();
        writer.put_byte(7);
        writer.put_bool(true);
        let frame = writer.finish();
        assert_eq!(frame, vec![4, 0, 0, 0, 1, 7, 4, 1]);

        // finish leaves the payload in place
        assert_eq!(writer.len(), 4);
        assert_eq!(writer.finish(), frame);
    }

    #[test]
    fn test_finish_empty() {
        let writer = Writer::new();
        assert_eq!(writer.finish(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_reset() {
        let mut writer = Writer::new();
        writer.put_string("discard me");
        writer.reset();
        assert!(writer.is_empty());
        writer.put_byte(9);
        assert_eq!(writer.as_bytes(), &[1, 9]);
    }
}
