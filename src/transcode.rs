use std::borrow::Cow;

use zerocopy::byteorder::{BE, LE, U16};
use zerocopy::FromBytes;

use crate::endian::Endian;
use crate::error::{Error, Result};

/// Converts text between its in-memory form and a byte encoding.
///
/// A stream binds one transcoder at construction and keeps it for its
/// lifetime. The reader and writer at the two ends of a stream must agree on
/// the transcoder, or text round-tripping is undefined. To share a single
/// caller-owned transcoder between several streams, pass a reference: `&T`
/// implements `Transcoder` whenever `T` does.
pub trait Transcoder {
    /// Encodes `text` into its byte representation.
    ///
    /// Borrowing implementations (such as [`Utf8`]) return the input's own
    /// bytes without copying.
    fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>>;

    /// Decodes `bytes` into text, failing with [`Error::Transcode`] if the
    /// bytes are not valid under this encoding.
    fn decode(&self, bytes: Vec<u8>) -> Result<String>;
}

impl<T: Transcoder + ?Sized> Transcoder for &T {
    fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        (**self).encode(text)
    }

    fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        (**self).decode(bytes)
    }
}

/// UTF-8 transcoder, the default for every stream.
///
/// Encoding never fails and never copies. Decoding validates.
#[derive(Copy, Clone, Debug, Default)]
pub struct Utf8;

impl Transcoder for Utf8 {
    fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        Ok(Cow::Borrowed(text.as_bytes()))
    }

    fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes).map_err(|_| Error::Transcode { encoding: "UTF-8" })
    }
}

/// UTF-16 transcoder with a fixed byte order for its code units.
///
/// The unit order chosen here is a property of the text encoding, independent
/// of the stream's integer byte order. The encoded stream carries nothing
/// that distinguishes UTF-8 payloads from UTF-16 payloads; both ends must
/// simply agree on the transcoder.
#[derive(Copy, Clone, Debug, Default)]
pub struct Utf16 {
    endian: Endian,
}

impl Utf16 {
    /// Creates a UTF-16 transcoder whose code units use `endian` order.
    pub fn new(endian: Endian) -> Self {
        Self { endian }
    }

    fn label(&self) -> &'static str {
        match self.endian {
            Endian::Little => "UTF-16LE",
            Endian::Big => "UTF-16BE",
        }
    }
}

impl Transcoder for Utf16 {
    fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        let mut out = Vec::with_capacity(text.len() * 2);
        for unit in text.encode_utf16() {
            out.extend_from_slice(&self.endian.encode_u16(unit));
        }
        Ok(Cow::Owned(out))
    }

    fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        // An odd byte count cannot be UTF-16; ref_from_bytes rejects it.
        let units: Vec<u16> = match self.endian {
            Endian::Little => {
                let Ok(wchars) = <[U16<LE>]>::ref_from_bytes(&bytes) else {
                    return Err(Error::Transcode {
                        encoding: self.label(),
                    });
                };
                wchars.iter().map(|c| c.get()).collect()
            }
            Endian::Big => {
                let Ok(wchars) = <[U16<BE>]>::ref_from_bytes(&bytes) else {
                    return Err(Error::Transcode {
                        encoding: self.label(),
                    });
                };
                wchars.iter().map(|c| c.get()).collect()
            }
        };

        String::from_utf16(&units).map_err(|_| Error::Transcode {
            encoding: self.label(),
        })
    }
}
