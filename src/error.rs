use std::io;

/// Errors produced by [`DataReader`](crate::DataReader) and
/// [`DataWriter`](crate::DataWriter) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying byte sink or source failed.
    #[error("stream I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source ran out of bytes before the requested value was fully
    /// decoded. A partially decoded or zero-padded value is never returned,
    /// so a decoded zero always means the stream really contained one.
    #[error("unexpected end of stream")]
    UnexpectedEof,

    /// A string payload could not be converted by the bound transcoder.
    #[error("{encoding} transcoding failed")]
    Transcode {
        /// Name of the encoding that rejected the text, e.g. `"UTF-8"`.
        encoding: &'static str,
    },

    /// A string's encoded byte length does not fit the 32-bit length prefix,
    /// or exceeds the reader's configured maximum.
    #[error("string payload of {len} bytes exceeds the limit of {max}")]
    StringTooLong {
        /// Encoded byte length of the offending string.
        len: usize,
        /// The limit that was exceeded.
        max: usize,
    },
}

/// Alias for `std::result::Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
