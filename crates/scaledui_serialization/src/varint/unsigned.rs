use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{BitSlice, NumBits, Read, ReadError, Write, WriteError, write_bits};

/// Length-prefixed unsigned integer: a 4-bit byte count followed by that
/// many bytes of big-endian magnitude. Values up to 15 bytes (120 bits) are
/// representable, which bounds every amount the ledger can hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarUint(pub u128);

impl VarUint {
    pub const LEN_BITS: usize = 4;
    pub const MAX_BYTES: usize = (1 << Self::LEN_BITS) - 1;
    pub const MAX: u128 = (1u128 << (Self::MAX_BYTES * 8)) - 1;

    #[inline]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn fits(&self) -> bool {
        self.0 <= Self::MAX
    }

    /// Minimal number of magnitude bytes, zero for the value zero.
    #[inline]
    fn byte_len(&self) -> usize {
        (128 - self.0.leading_zeros() as usize).div_ceil(8)
    }
}

impl NumBits for VarUint {
    #[inline(always)]
    fn num_bits(&self) -> usize {
        Self::LEN_BITS + self.byte_len() * 8
    }
}

impl Read for VarUint {
    #[inline(always)]
    fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError> {
        let len = slice.read_bits(pos, Self::LEN_BITS)? as usize;
        let value = slice.read_bits(pos, len * 8)?;
        Ok(VarUint(value))
    }
}

impl Write for VarUint {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        if !self.fits() {
            return Err(WriteError::Overflow(Self::MAX_BYTES * 8));
        }
        let len = self.byte_len();
        write_bits(bytes, pos, len as u128, Self::LEN_BITS)?;
        write_bits(bytes, pos, self.0, len * 8)
    }
}

impl fmt::Display for VarUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for VarUint {
    fn from(v: u128) -> Self {
        Self(v)
    }
}

impl From<u64> for VarUint {
    fn from(v: u64) -> Self {
        Self(v.into())
    }
}

impl From<u32> for VarUint {
    fn from(v: u32) -> Self {
        Self(v.into())
    }
}

impl From<VarUint> for u128 {
    fn from(v: VarUint) -> Self {
        v.0
    }
}

impl Serialize for VarUint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u128(self.0)
    }
}

impl<'de> Deserialize<'de> for VarUint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u128::deserialize(deserializer)?;
        Ok(VarUint(value))
    }
}
