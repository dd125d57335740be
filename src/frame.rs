//! Message framing.
//!
//! A frame is a 4-byte little-endian payload length followed by the payload.
//! [`Writer::finish`](crate::Writer::finish) produces frames and
//! [`split_frame`] takes them apart again. Reading frames off a socket is
//! left to the caller.
//!
//! # Example
//!
//! ```rust
//! use bitstream::frame::split_frame;
//! use bitstream::{Reader, Result, Writer};
//!
//! fn main() -> Result<()> {
//!     let mut first = Writer::new();
//!     first.put_byte(3);
//!     let mut second = Writer::new();
//!     second.put_string("hello");
//!
//!     let mut wire = first.finish();
//!     wire.extend_from_slice(&second.finish());
//!
//!     let (payload, rest) = split_frame(&wire)?;
//!     assert_eq!(Reader::from_payload(payload)?.get_byte()?, 3);
//!
//!     let (payload, rest) = split_frame(rest)?;
//!     assert_eq!(Reader::from_payload(payload)?.get_string()?, "hello");
//!     assert!(rest.is_empty());
//!     Ok(())
//! }
//! ```

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::types::FRAME_PREFIX_LEN;

/// Splits one frame off the front of `data`.
///
/// Returns the payload and whatever follows the frame.
pub fn split_frame(data: &[u8]) -> Result<(&[u8], &[u8])> {
    if data.len() < FRAME_PREFIX_LEN {
        return Err(Error::truncated(FRAME_PREFIX_LEN, data.len()));
    }
    let length = LittleEndian::read_u32(&data[..FRAME_PREFIX_LEN]) as usize;
    let rest = &data[FRAME_PREFIX_LEN..];
    if length > rest.len() {
        return Err(Error::truncated(length, rest.len()));
    }
    Ok(rest.split_at(length))
}
