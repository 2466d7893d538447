//! Reads and writes binary data streams in a portable, byte-order-selectable
//! format.
//!
//! [`DataWriter`] appends fixed-width integers, IEEE-754 doubles, and
//! length-prefixed text to any [`std::io::Write`] sink; [`DataReader`]
//! decodes the same values back from any [`std::io::Read`] source. Multi-byte
//! values travel little-endian by default, or big-endian when the stream is
//! constructed that way; a stream's byte order is fixed for its lifetime.
//!
//! # Wire format
//!
//! | Value | Width | Ordering |
//! |---|---|---|
//! | `u8` / `i8` | 1 byte | n/a |
//! | `u16` / `i16` | 2 bytes | stream order |
//! | `u32` / `i32` | 4 bytes | stream order |
//! | `u64` / `i64` | 8 bytes | stream order |
//! | `f64` | 8 bytes, IEEE-754 | byte-reordered like `u64` |
//! | text | `u32` byte length, then the encoded bytes | prefix in stream order, no terminator |
//!
//! Signed integers share their unsigned twin's encoding (two's complement).
//! Text is transcoded before the length is computed (UTF-8 unless another
//! [`Transcoder`] is bound), so the prefix counts encoded bytes, not
//! characters.
//!
//! ```
//! use portable_data_io::{DataReader, DataWriter};
//!
//! # fn main() -> portable_data_io::Result<()> {
//! let mut writer = DataWriter::new(Vec::new());
//! writer.write_u32(1)?;
//! writer.write_string("café")?;
//! let bytes = writer.into_inner();
//!
//! let mut reader = DataReader::new(bytes.as_slice());
//! assert_eq!(reader.read_u32()?, 1);
//! assert_eq!(reader.read_string()?, "café");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod endian;
mod error;
mod reader;
mod transcode;
mod writer;


pub use endian::Endian;
pub use error::{Error, Result};
pub use reader::DataReader;
pub use transcode::{Transcoder, Utf16, Utf8};
pub use writer::DataWriter;
