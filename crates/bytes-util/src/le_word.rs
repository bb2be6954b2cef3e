use byteorder::{ByteOrder, LE};

/// Unsigned word decoded from a byte slice in little-endian order, whatever
/// the host's native order is.
pub trait LeWord: Copy + Send + Sync + Sized {
    const WIDTH: usize;

    /// Decodes a full word. `bytes` must be exactly `WIDTH` long.
    fn from_le_chunk(bytes: &[u8]) -> Self;

    /// Assembles a partial word from fewer than `WIDTH` bytes, byte `i` landing
    /// at bit `8 * i`. An empty slice yields zero.
    fn from_tail(tail: &[u8]) -> Self;
}

impl LeWord for u32 {
    const WIDTH: usize = 4;

    #[inline]
    fn from_le_chunk(bytes: &[u8]) -> Self {
        LE::read_u32(bytes)
    }

    #[inline]
    fn from_tail(tail: &[u8]) -> Self {
        debug_assert!(tail.len() < Self::WIDTH);
        if tail.is_empty() {
            return 0;
        }
        LE::read_uint(tail, tail.len()) as u32
    }
}

impl LeWord for u64 {
    const WIDTH: usize = 8;

    #[inline]
    fn from_le_chunk(bytes: &[u8]) -> Self {
        LE::read_u64(bytes)
    }

    #[inline]
    fn from_tail(tail: &[u8]) -> Self {
        debug_assert!(tail.len() < Self::WIDTH);
        if tail.is_empty() {
            return 0;
        }
        LE::read_uint(tail, tail.len())
    }
}
