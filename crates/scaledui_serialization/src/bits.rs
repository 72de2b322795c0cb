use crate::{ReadError, WriteError};

/// A read-only view over the first `len` bits of a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSlice<'a> {
    bytes: &'a [u8],
    len: usize,
}

impl<'a> BitSlice<'a> {
    /// Views `len` bits of `bytes`. `len` is clamped to the buffer size.
    pub fn new(bytes: &'a [u8], len: usize) -> Self {
        Self {
            bytes,
            len: len.min(bytes.len() * 8),
        }
    }

    /// Views a buffer produced by `Write::pack`, stripping the completion
    /// tag and its padding.
    pub fn from_packed(bytes: &'a [u8]) -> Result<Self, ReadError> {
        let last = *bytes.last().ok_or(ReadError::MissingCompletionTag)?;
        if last == 0 {
            return Err(ReadError::MissingCompletionTag);
        }
        let len = bytes.len() * 8 - last.trailing_zeros() as usize - 1;
        Ok(Self { bytes, len })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn remaining(&self, pos: usize) -> usize {
        self.len.saturating_sub(pos)
    }

    /// Fails unless every bit of the slice has been consumed.
    pub fn end_parse(&self, pos: usize) -> Result<(), ReadError> {
        match self.remaining(pos) {
            0 => Ok(()),
            left => Err(ReadError::TrailingData(left)),
        }
    }

    /// Reads `count` (at most 128) bits as a big-endian unsigned integer.
    pub fn read_bits(&self, pos: &mut usize, count: usize) -> Result<u128, ReadError> {
        debug_assert!(count <= 128);
        self.ensure(*pos, count)?;
        let mut value: u128 = 0;
        for index in *pos..*pos + count {
            let bit = (self.bytes[index / 8] >> (7 - index % 8)) & 1;
            value = (value << 1) | u128::from(bit);
        }
        *pos += count;
        Ok(value)
    }

    pub fn read_bytes(&self, pos: &mut usize, count: usize) -> Result<Vec<u8>, ReadError> {
        self.ensure(*pos, count.saturating_mul(8))?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.read_bits(pos, 8)? as u8);
        }
        Ok(out)
    }

    #[inline]
    fn ensure(&self, pos: usize, need: usize) -> Result<(), ReadError> {
        if pos.saturating_add(need) > self.len {
            return Err(ReadError::NotEnoughBits {
                pos,
                need,
                len: self.len,
            });
        }
        Ok(())
    }
}

/// Writes the low `count` (at most 128) bits of `value`, MSB first.
pub fn write_bits(
    bytes: &mut [u8],
    pos: &mut usize,
    value: u128,
    count: usize,
) -> Result<(), WriteError> {
    debug_assert!(count <= 128);
    if count < 128 && value >> count != 0 {
        return Err(WriteError::Overflow(count));
    }
    // Preflight so we either write everything or nothing.
    if *pos + count > bytes.len() * 8 {
        return Err(WriteError::NotEnoughSpace);
    }
    for i in 0..count {
        let index = *pos + i;
        let mask = 1u8 << (7 - index % 8);
        if (value >> (count - 1 - i)) & 1 == 1 {
            bytes[index / 8] |= mask;
        } else {
            bytes[index / 8] &= !mask;
        }
    }
    *pos += count;
    Ok(())
}

pub fn write_bytes(bytes: &mut [u8], pos: &mut usize, data: &[u8]) -> Result<(), WriteError> {
    if *pos + data.len() * 8 > bytes.len() * 8 {
        return Err(WriteError::NotEnoughSpace);
    }
    for byte in data {
        write_bits(bytes, pos, u128::from(*byte), 8)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_unaligned_bits() {
        let bytes = [0b1011_0011, 0b0100_0000];
        let slice = BitSlice::new(&bytes, 10);
        let mut pos = 0;
        assert_eq!(slice.read_bits(&mut pos, 1).unwrap(), 1);
        assert_eq!(slice.read_bits(&mut pos, 3).unwrap(), 0b011);
        assert_eq!(slice.read_bits(&mut pos, 6).unwrap(), 0b0011_01);
        assert_eq!(pos, 10);
        assert_eq!(
            slice.read_bits(&mut pos, 1),
            Err(ReadError::NotEnoughBits {
                pos: 10,
                need: 1,
                len: 10
            })
        );
    }

    #[test]
    fn write_unaligned_bits() {
        let mut buf = [0xFFu8; 2];
        let mut pos = 0;
        write_bits(&mut buf, &mut pos, 0b0, 1).unwrap();
        write_bits(&mut buf, &mut pos, 0b101, 3).unwrap();
        write_bits(&mut buf, &mut pos, 0b0000_01, 6).unwrap();
        assert_eq!(pos, 10);
        // untouched bits keep their previous value
        assert_eq!(buf, [0b0101_0000, 0b0111_1111]);
    }

    #[test]
    fn write_rejects_oversized_values() {
        let mut buf = [0u8; 4];
        let mut pos = 0;
        assert_eq!(
            write_bits(&mut buf, &mut pos, 16, 4),
            Err(WriteError::Overflow(4))
        );
        assert_eq!(pos, 0);
        assert_eq!(
            write_bits(&mut buf, &mut pos, 1, 33),
            Err(WriteError::NotEnoughSpace)
        );
    }

    #[test]
    fn completion_tag_recovers_length() {
        let slice = BitSlice::from_packed(&[0b1010_1100]).unwrap();
        assert_eq!(slice.len(), 5);
        let slice = BitSlice::from_packed(&[0xAB, 0x80]).unwrap();
        assert_eq!(slice.len(), 8);
        let slice = BitSlice::from_packed(&[0x80]).unwrap();
        assert!(slice.is_empty());
    }

    #[test]
    fn missing_completion_tag() {
        assert_eq!(
            BitSlice::from_packed(&[]),
            Err(ReadError::MissingCompletionTag)
        );
        assert_eq!(
            BitSlice::from_packed(&[0xAB, 0x00]),
            Err(ReadError::MissingCompletionTag)
        );
    }

    #[test]
    fn end_parse_reports_leftover() {
        let slice = BitSlice::from_packed(&[0b1010_1100]).unwrap();
        assert_eq!(slice.end_parse(3), Err(ReadError::TrailingData(2)));
        assert_eq!(slice.end_parse(5), Ok(()));
    }
}
