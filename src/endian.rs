/// Byte order applied to every multi-byte value on a stream.
///
/// Selected once, when a [`DataReader`](crate::DataReader) or
/// [`DataWriter`](crate::DataWriter) is constructed, and fixed for the
/// stream's lifetime. Little-endian is the default on all architectures.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Endian {
    /// Least-significant byte first. The default.
    #[default]
    Little,
    /// Most-significant byte first, as used by Java streams and big-endian
    /// hosts such as SPARC.
    Big,
}

impl Endian {
    /// Encodes a `u16` in this byte order.
    pub fn encode_u16(self, value: u16) -> [u8; 2] {
        match self {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        }
    }

    /// Decodes a `u16` from bytes in this byte order.
    pub fn decode_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        }
    }

    /// Encodes a `u32` in this byte order.
    pub fn encode_u32(self, value: u32) -> [u8; 4] {
        match self {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        }
    }

    /// Decodes a `u32` from bytes in this byte order.
    pub fn decode_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        }
    }

    /// Encodes a `u64` in this byte order.
    pub fn encode_u64(self, value: u64) -> [u8; 8] {
        match self {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        }
    }

    /// Decodes a `u64` from bytes in this byte order.
    pub fn decode_u64(self, bytes: [u8; 8]) -> u64 {
        match self {
            Endian::Little => u64::from_le_bytes(bytes),
            Endian::Big => u64::from_be_bytes(bytes),
        }
    }

    /// Encodes an `f64` in this byte order.
    ///
    /// The IEEE-754 bit pattern is preserved exactly; only the byte
    /// sequencing changes. NaN payloads survive a round trip.
    pub fn encode_f64(self, value: f64) -> [u8; 8] {
        match self {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        }
    }

    /// Decodes an `f64` from bytes in this byte order.
    pub fn decode_f64(self, bytes: [u8; 8]) -> f64 {
        match self {
            Endian::Little => f64::from_le_bytes(bytes),
            Endian::Big => f64::from_be_bytes(bytes),
        }
    }
}
