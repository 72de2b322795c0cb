//! Bit-level serialization for scaled UI records.
//!
//! Values are written MSB-first into a byte buffer with the cursor `pos`
//! counting bits, not bytes. A packed record is the raw bitstring followed
//! by a single completion `1` bit and zero padding up to the next byte, so
//! the exact bit length can be recovered and trailing data rejected.

mod bits;
mod primitives;
mod varint;

pub use bits::{BitSlice, write_bits, write_bytes};
pub use varint::VarUint;

use thiserror::Error;

/// Error that can be returned when reading bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("not enough bits: pos {pos}, need {need}, record has {len}")]
    NotEnoughBits { pos: usize, need: usize, len: usize },
    #[error("string is not valid utf-8")]
    InvalidUtf8,
    #[error("{0} unread bits left in record")]
    TrailingData(usize),
    #[error("record is missing its completion tag")]
    MissingCompletionTag,
}

/// Error that can be returned when writing bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WriteError {
    /// Not enough space in the buffer.
    #[error("not enough space in buffer")]
    NotEnoughSpace,
    /// The value does not fit in the given number of bits.
    #[error("value does not fit in {0} bits")]
    Overflow(usize),
    /// A length prefix cannot express the given length.
    #[error("length {0} is too long to encode")]
    TooLong(usize),
}

pub trait NumBits {
    /// Exact number of bits `write` will produce.
    fn num_bits(&self) -> usize;
}

pub trait Read: Sized {
    fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError>;

    /// Decodes a packed record, failing if any data bit is left unread.
    fn unpack(bytes: &[u8]) -> Result<Self, ReadError> {
        let slice = BitSlice::from_packed(bytes)?;
        let mut pos = 0;
        let value = Self::read(&slice, &mut pos)?;
        slice.end_parse(pos)?;
        Ok(value)
    }
}

pub trait Write: NumBits {
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError>;

    /// Encodes the value followed by the completion tag.
    fn pack(&self) -> Result<Vec<u8>, WriteError> {
        let mut bytes = vec![0u8; self.num_bits() / 8 + 1];
        let mut pos = 0;
        self.write(&mut bytes, &mut pos)?;
        write_bits(&mut bytes, &mut pos, 1, 1)?;
        bytes.truncate(pos.div_ceil(8));
        Ok(bytes)
    }
}
