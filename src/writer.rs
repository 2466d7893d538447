use std::io::Write;

use crate::endian::Endian;
use crate::error::{Error, Result};
use crate::transcode::{Transcoder, Utf8};

/// Writes binary values to any [`Write`] sink in a portable wire format.
///
/// Multi-byte values are encoded in the byte order chosen at construction,
/// little-endian by default; the order is fixed for the writer's lifetime.
/// Strings are transcoded (UTF-8 unless another [`Transcoder`] is bound) and
/// written with a `u32` byte-length prefix.
///
/// The writer takes the sink by value. To keep ownership on the caller's
/// side, pass a mutable borrow (`&mut W` implements [`Write`] whenever `W`
/// does), or recover a moved sink later with [`into_inner`](Self::into_inner).
///
/// Every operation either writes its value completely or fails with the
/// sink's own error; nothing is retried here. The writer does not buffer, so
/// wrap the sink in a [`std::io::BufWriter`] when emitting many small values.
pub struct DataWriter<W, C = Utf8> {
    inner: W,
    endian: Endian,
    codec: C,
}

impl<W: Write> DataWriter<W> {
    /// Creates a little-endian writer over `inner`, with UTF-8 text encoding.
    pub fn new(inner: W) -> Self {
        Self::with_endian(inner, Endian::Little)
    }

    /// Creates a writer over `inner` with an explicit byte order.
    pub fn with_endian(inner: W, endian: Endian) -> Self {
        Self::with_transcoder(inner, endian, Utf8)
    }
}

impl<W: Write, C: Transcoder> DataWriter<W, C> {
    /// Creates a writer with an explicit byte order and text transcoder.
    ///
    /// The reader at the other end must decode with the same transcoder for
    /// text to round-trip.
    pub fn with_transcoder(inner: W, endian: Endian, codec: C) -> Self {
        Self {
            inner,
            endian,
            codec,
        }
    }

    /// The byte order this writer encodes with.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Borrows the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrows the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consumes the writer and returns the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.inner.flush()?)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        Ok(self.inner.write_all(bytes)?)
    }

    /// Writes a single byte. Byte order does not apply to one byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_raw(&[value])
    }

    /// Writes a `u16` as 2 bytes in the configured order.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        let bytes = self.endian.encode_u16(value);
        self.write_raw(&bytes)
    }

    /// Writes a `u32` as 4 bytes in the configured order.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        let bytes = self.endian.encode_u32(value);
        self.write_raw(&bytes)
    }

    /// Writes a `u64` as 8 bytes in the configured order.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        let bytes = self.endian.encode_u64(value);
        self.write_raw(&bytes)
    }

    /// Writes an `f64` as its 8-byte IEEE-754 representation, byte-ordered
    /// like [`write_u64`](Self::write_u64).
    ///
    /// The bit pattern is written exactly, so NaN payloads and infinities
    /// survive a round trip.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        let bytes = self.endian.encode_f64(value);
        self.write_raw(&bytes)
    }

    /// Writes an `i8` as its two's-complement byte.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Writes an `i16` as the two's-complement `u16` with the same bits.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_u16(value as u16)
    }

    /// Writes an `i32` as the two's-complement `u32` with the same bits.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_u32(value as u32)
    }

    /// Writes an `i64` as the two's-complement `u64` with the same bits.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_u64(value as u64)
    }

    /// Writes every byte of `values`, as-is.
    pub fn write_u8_slice(&mut self, values: &[u8]) -> Result<()> {
        self.write_raw(values)
    }

    /// Writes each `u16` in `values`, in order, each encoded per the
    /// configured byte order.
    pub fn write_u16_slice(&mut self, values: &[u16]) -> Result<()> {
        for &value in values {
            self.write_u16(value)?;
        }
        Ok(())
    }

    /// Writes each `u32` in `values`, in order, each encoded per the
    /// configured byte order.
    pub fn write_u32_slice(&mut self, values: &[u32]) -> Result<()> {
        for &value in values {
            self.write_u32(value)?;
        }
        Ok(())
    }

    /// Writes each `u64` in `values`, in order, each encoded per the
    /// configured byte order.
    pub fn write_u64_slice(&mut self, values: &[u64]) -> Result<()> {
        for &value in values {
            self.write_u64(value)?;
        }
        Ok(())
    }

    /// Writes each `f64` in `values`, in order, each encoded per the
    /// configured byte order.
    pub fn write_f64_slice(&mut self, values: &[f64]) -> Result<()> {
        for &value in values {
            self.write_f64(value)?;
        }
        Ok(())
    }

    /// Writes `text` in length-prefixed form: the byte length of its encoded
    /// form as a `u32` in the configured order, then the encoded bytes, with
    /// no terminator.
    ///
    /// The prefix counts bytes after transcoding, not characters. Text whose
    /// encoded form does not fit a `u32` fails with [`Error::StringTooLong`]
    /// before anything reaches the sink.
    pub fn write_string(&mut self, text: &str) -> Result<()> {
        let encoded = self.codec.encode(text)?;
        let len = u32::try_from(encoded.len()).map_err(|_| Error::StringTooLong {
            len: encoded.len(),
            max: u32::MAX as usize,
        })?;
        self.write_u32(len)?;
        self.write_raw(&encoded)
    }
}
