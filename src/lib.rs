//! Bitstream - self-describing tagged binary messages for Rust
//!
//! Every value is written as a one-byte type tag followed by its payload, and
//! every read re-checks the tag before decoding. A finished message carries a
//! 4-byte little-endian length prefix for stream transports.
//!
//! ```text
//! [payload length: 4 bytes LE]
//!   [1 BYTE   ][value: 1 byte]
//!   [2 INT32  ][value: 4 bytes LE]
//!   [3 FLOAT32][value: 4 bytes LE]
//!   [4 BOOL   ][value: 1 byte]
//!   [5 STRING ][length: 4 bytes LE][value: length bytes]
//!   ...
//! ```
//!
//! # Example
//!
//! ```rust
//! use bitstream::{frame, Reader, Result, Writer};
//!
//! fn main() -> Result<()> {
//!     // Encoding
//!     let mut writer = Writer::new();
//!     writer.put_byte(7);
//!     writer.put_int32(42);
//!     writer.put_string("hello");
//!     let message = writer.finish();
//!
//!     // The transport strips the length prefix before decoding
//!     let (payload, _) = frame::split_frame(&message)?;
//!     let mut reader = Reader::from_payload(payload)?;
//!     assert_eq!(reader.get_byte()?, 7);
//!     assert_eq!(reader.get_int32()?, 42);
//!     assert_eq!(reader.get_string()?, "hello");
//!     assert_eq!(reader.len(), 0);
//!     Ok(())
//! }
//! ```
//!
//! With the `io` feature, the `stream` module adds `FrameWriter` / `FrameReader` for
//! moving frames over `std::io` byte streams.
//!
//! The reader must request values in the order they were written. A tag
//! mismatch consumes the tag byte only, so the rest of that message should
//! be abandoned.

mod error;
pub mod frame;
mod reader;
#[cfg(feature = "io")]
pub mod stream;
mod types;
mod writer;

pub use error::{Error, Result};
pub use frame::split_frame;
pub use reader::Reader;
#[cfg(feature = "io")]
pub use stream::{FrameReader, FrameWriter};
pub use types::{TypeTag, FRAME_PREFIX_LEN};
pub use writer::Writer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a framed message with the given encoder function.
pub fn encode<F>(build: F) -> Vec<u8>
where
    F: FnOnce(&mut Writer),
{
    let mut writer = Writer::new();
    build(&mut writer);
    writer.finish()
}

/// Decodes a payload (length prefix already stripped) with the given decoder function.
pub fn decode<T, F>(payload: &[u8], parse: F) -> Result<T>
where
    F: FnOnce(&mut Reader) -> Result<T>,
{
    let mut reader = Reader::from_payload(payload)?;
    parse(&mut reader)
}
