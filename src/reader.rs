use std::io::{ErrorKind, Read};

use crate::endian::Endian;
use crate::error::{Error, Result};
use crate::transcode::{Transcoder, Utf8};

// String payload buffers start no larger than this, whatever the length
// prefix claims; they grow only as bytes actually arrive.
const INITIAL_STRING_CAPACITY: usize = 8 * 1024;

/// Reads binary values from any [`Read`] source in a portable wire format,
/// the exact dual of [`DataWriter`](crate::DataWriter).
///
/// Multi-byte values are decoded in the byte order chosen at construction,
/// little-endian by default; the order is fixed for the reader's lifetime.
/// Strings are read as a `u32` byte-length prefix followed by that many
/// payload bytes, decoded by the bound [`Transcoder`] (UTF-8 by default).
///
/// The reader takes the source by value; pass `&mut R` to keep ownership on
/// the caller's side, or recover a moved source with
/// [`into_inner`](Self::into_inner).
///
/// A source that ends before a value is complete fails with
/// [`Error::UnexpectedEof`], never with a truncated or zero-padded value, so
/// a decoded zero always means the stream really contained one. Bytes consumed
/// before a failure stay consumed; in particular, a string read that fails in
/// its payload leaves the source positioned past the length prefix. Callers
/// needing retry or rollback must buffer externally.
pub struct DataReader<R, C = Utf8> {
    inner: R,
    endian: Endian,
    codec: C,
    max_string_len: usize,
}

impl<R: Read> DataReader<R> {
    /// Creates a little-endian reader over `inner`, with UTF-8 text encoding.
    pub fn new(inner: R) -> Self {
        Self::with_endian(inner, Endian::Little)
    }

    /// Creates a reader over `inner` with an explicit byte order.
    pub fn with_endian(inner: R, endian: Endian) -> Self {
        Self::with_transcoder(inner, endian, Utf8)
    }
}

impl<R: Read, C: Transcoder> DataReader<R, C> {
    /// Creates a reader with an explicit byte order and text transcoder.
    ///
    /// The writer that produced the stream must have encoded with the same
    /// transcoder for text to round-trip.
    pub fn with_transcoder(inner: R, endian: Endian, codec: C) -> Self {
        Self {
            inner,
            endian,
            codec,
            max_string_len: usize::MAX,
        }
    }

    /// The byte order this reader decodes with.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Maximum string payload length, in bytes, that [`read_string`] accepts.
    ///
    /// [`read_string`]: Self::read_string
    pub fn max_string_len(&self) -> usize {
        self.max_string_len
    }

    /// Caps the string payload length accepted by subsequent
    /// [`read_string`](Self::read_string) calls. Defaults to `usize::MAX`.
    ///
    /// A length prefix above the cap fails with [`Error::StringTooLong`]
    /// after consuming the prefix but before consuming any payload byte.
    pub fn set_max_string_len(&mut self, max_string_len: usize) {
        self.max_string_len = max_string_len;
    }

    /// Borrows the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutably borrows the underlying source.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consumes the reader and returns the source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf).map_err(|err| match err.kind() {
            ErrorKind::UnexpectedEof => Error::UnexpectedEof,
            _ => Error::Io(err),
        })
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.read_array()?;
        Ok(byte)
    }

    /// Reads 2 bytes in the configured order as a `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_array()?;
        Ok(self.endian.decode_u16(bytes))
    }

    /// Reads 4 bytes in the configured order as a `u32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_array()?;
        Ok(self.endian.decode_u32(bytes))
    }

    /// Reads 8 bytes in the configured order as a `u64`.
    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.read_array()?;
        Ok(self.endian.decode_u64(bytes))
    }

    /// Reads 8 bytes in the configured order as an IEEE-754 `f64`.
    ///
    /// The bit pattern is reproduced exactly, NaN payloads included.
    pub fn read_f64(&mut self) -> Result<f64> {
        let bytes = self.read_array()?;
        Ok(self.endian.decode_f64(bytes))
    }

    /// Reads a byte as a two's-complement `i8`.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a `u16` and reinterprets its bits as a two's-complement `i16`.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads a `u32` and reinterprets its bits as a two's-complement `i32`.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads a `u64` and reinterprets its bits as a two's-complement `i64`.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Fills `out` with raw bytes, failing with [`Error::UnexpectedEof`] if
    /// the source holds fewer than `out.len()` bytes.
    pub fn read_u8_into(&mut self, out: &mut [u8]) -> Result<()> {
        self.fill(out)
    }

    /// Decodes `out.len()` consecutive `u16` values into `out`.
    ///
    /// On a mid-array end of stream the call fails; slots already decoded
    /// keep their values and the remaining slots keep whatever the caller put
    /// there. Treat the buffer as unspecified after a failure.
    pub fn read_u16_into(&mut self, out: &mut [u16]) -> Result<()> {
        for slot in out.iter_mut() {
            *slot = self.read_u16()?;
        }
        Ok(())
    }

    /// Decodes `out.len()` consecutive `u32` values into `out`.
    ///
    /// Failure semantics match [`read_u16_into`](Self::read_u16_into).
    pub fn read_u32_into(&mut self, out: &mut [u32]) -> Result<()> {
        for slot in out.iter_mut() {
            *slot = self.read_u32()?;
        }
        Ok(())
    }

    /// Decodes `out.len()` consecutive `u64` values into `out`.
    ///
    /// Failure semantics match [`read_u16_into`](Self::read_u16_into).
    pub fn read_u64_into(&mut self, out: &mut [u64]) -> Result<()> {
        for slot in out.iter_mut() {
            *slot = self.read_u64()?;
        }
        Ok(())
    }

    /// Decodes `out.len()` consecutive `f64` values into `out`.
    ///
    /// Failure semantics match [`read_u16_into`](Self::read_u16_into).
    pub fn read_f64_into(&mut self, out: &mut [f64]) -> Result<()> {
        for slot in out.iter_mut() {
            *slot = self.read_f64()?;
        }
        Ok(())
    }

    /// Reads a length-prefixed string: a `u32` byte length in the configured
    /// order, then exactly that many payload bytes, decoded by the bound
    /// transcoder.
    ///
    /// Fails with [`Error::UnexpectedEof`] if the prefix or the payload is
    /// short, with [`Error::StringTooLong`] if the prefix exceeds
    /// [`max_string_len`](Self::max_string_len), and with
    /// [`Error::Transcode`] if the payload is invalid under the transcoder.
    /// Consumed bytes stay consumed: after a payload failure the source is
    /// already past the prefix.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        if len > self.max_string_len {
            return Err(Error::StringTooLong {
                len,
                max: self.max_string_len,
            });
        }

        let mut payload = Vec::with_capacity(len.min(INITIAL_STRING_CAPACITY));
        let got = self
            .inner
            .by_ref()
            .take(len as u64)
            .read_to_end(&mut payload)?;
        if got < len {
            return Err(Error::UnexpectedEof);
        }

        self.codec.decode(payload)
    }
}
