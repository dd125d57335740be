//! Frame transport over `std::io` streams.
//!
//! Enabled with the `io` feature. The codec itself never touches I/O; these
//! adapters only move whole frames between a [`Writer`] and a byte stream.
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use bitstream::stream::{FrameReader, FrameWriter};
//! use bitstream::{Reader, Result, Writer};
//!
//! fn main() -> Result<()> {
//!     let mut buffer = Vec::new();
//!
//!     {
//!         let mut stream = FrameWriter::new(&mut buffer);
//!
//!         let mut msg = Writer::new();
//!         msg.put_byte(3);
//!         msg.put_string("hello");
//!         stream.write_message(&msg)?;
//!         stream.flush()?;
//!     }
//!
//!     let mut stream = FrameReader::new(Cursor::new(&buffer));
//!     let payload = stream.read_frame()?;
//!     let mut reader = Reader::from_payload(&payload)?;
//!     assert_eq!(reader.get_byte()?, 3);
//!     assert_eq!(reader.get_string()?, "hello");
//!     Ok(())
//! }
//! ```

use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::FRAME_PREFIX_LEN;
use crate::writer::Writer;

/// Default buffer capacity for frame readers/writers.
const DEFAULT_BUFFER_CAPACITY: usize = 8192;

/// Maximum payload size accepted by a [`FrameReader`] (64 MB by default).
const DEFAULT_MAX_FRAME_SIZE: usize = 64 * 1024 * 1024;

/// Maps a short read to [`Error::UnexpectedEof`].
fn read_error(e: io::Error) -> Error {
    if e.kind() == ErrorKind::UnexpectedEof {
        Error::UnexpectedEof
    } else {
        Error::from(e)
    }
}

/// FrameWriter writes length-prefixed messages to a byte stream.
pub struct FrameWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> FrameWriter<W> {
    /// Creates a new FrameWriter wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, writer)
    }

    /// Creates a new FrameWriter with the specified buffer capacity.
    pub fn with_capacity(capacity: usize, writer: W) -> Self {
        Self {
            inner: BufWriter::with_capacity(capacity, writer),
        }
    }

    /// Writes a payload prefixed with its little-endian length.
    pub fn write_frame(&mut self, payload: &[u8]) -> Result<()> {
        self.inner.write_u32::<LittleEndian>(payload.len() as u32)?;
        self.inner.write_all(payload)?;
        trace!(payload_len = payload.len(), "wrote frame");
        Ok(())
    }

    /// Writes the contents of `message` as one frame.
    ///
    /// Produces the same bytes as [`Writer::finish`].
    pub fn write_message(&mut self, message: &Writer) -> Result<()> {
        self.write_frame(message.as_bytes())
    }

    /// Flushes the underlying buffer.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(Error::from)
    }

    /// Consumes this FrameWriter, returning the underlying writer.
    ///
    /// Buffered data is flushed first.
    pub fn into_inner(self) -> Result<W> {
        self.inner.into_inner().map_err(|e| Error::from(e.into_error()))
    }
}

/// FrameReader reads length-prefixed messages from a byte stream.
pub struct FrameReader<R: Read> {
    inner: BufReader<R>,
    max_frame_size: usize,
}

impl<R: Read> FrameReader<R> {
    /// Creates a new FrameReader wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, reader)
    }

    /// Creates a new FrameReader with the specified buffer capacity.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            inner: BufReader::with_capacity(capacity, reader),
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }

    /// Sets the maximum allowed payload size.
    pub fn set_max_frame_size(&mut self, size: usize) {
        self.max_frame_size = size;
    }

    /// Reads one frame and returns its payload.
    pub fn read_frame(&mut self) -> Result<Vec<u8>> {
        let length = self.inner.read_u32::<LittleEndian>().map_err(read_error)?;
        self.read_payload(length as usize)
    }

    /// Attempts to read a frame, returning None if the stream is at EOF.
    pub fn try_read_frame(&mut self) -> Result<Option<Vec<u8>>> {
        match self.try_read_prefix()? {
            Some(length) => self.read_payload(length).map(Some),
            None => Ok(None),
        }
    }

    /// Returns an iterator over frame payloads in the stream.
    pub fn frames(&mut self) -> FrameIter<'_, R> {
        FrameIter { reader: self }
    }

    fn read_payload(&mut self, length: usize) -> Result<Vec<u8>> {
        if length > self.max_frame_size {
            debug!(length, max = self.max_frame_size, "rejecting oversized frame");
            return Err(Error::FrameTooLarge {
                size: length,
                max: self.max_frame_size,
            });
        }

        let mut data = vec![0u8; length];
        self.inner.read_exact(&mut data).map_err(read_error)?;
        trace!(payload_len = length, "read frame");
        Ok(data)
    }

    /// Reads the length prefix, returning None on a clean EOF before it.
    fn try_read_prefix(&mut self) -> Result<Option<usize>> {
        let mut prefix = [0u8; FRAME_PREFIX_LEN];
        let mut filled = 0;

        while filled < FRAME_PREFIX_LEN {
            match self.inner.read(&mut prefix[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => return Err(Error::UnexpectedEof),
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::from(e)),
            }
        }

        Ok(Some(LittleEndian::read_u32(&prefix) as usize))
    }
}

/// Iterator over frame payloads in a stream.
pub struct FrameIter<'a, R: Read> {
    reader: &'a mut FrameReader<R>,
}

impl<R: Read> Iterator for FrameIter<'_, R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.try_read_frame().transpose()
    }
}
