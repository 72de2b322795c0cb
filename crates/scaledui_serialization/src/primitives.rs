use crate::{BitSlice, NumBits, Read, ReadError, Write, WriteError, write_bits, write_bytes};

macro_rules! fixed_width_uint {
    ($($ty:ty),*) => {
        $(
            impl NumBits for $ty {
                #[inline(always)]
                fn num_bits(&self) -> usize {
                    <$ty>::BITS as usize
                }
            }

            impl Read for $ty {
                #[inline(always)]
                fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError> {
                    slice
                        .read_bits(pos, <$ty>::BITS as usize)
                        .map(|value| value as $ty)
                }
            }

            impl Write for $ty {
                #[inline(always)]
                fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
                    write_bits(bytes, pos, u128::from(*self), <$ty>::BITS as usize)
                }
            }
        )*
    };
}

fixed_width_uint!(u8, u16, u32, u64);

impl NumBits for i8 {
    #[inline(always)]
    fn num_bits(&self) -> usize {
        8
    }
}

impl Read for i8 {
    #[inline(always)]
    fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError> {
        u8::read(slice, pos).map(|value| value as i8)
    }
}

impl Write for i8 {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        (*self as u8).write(bytes, pos)
    }
}

impl NumBits for bool {
    #[inline(always)]
    fn num_bits(&self) -> usize {
        1
    }
}

impl Read for bool {
    #[inline(always)]
    fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError> {
        slice.read_bits(pos, 1).map(|bit| bit == 1)
    }
}

impl Write for bool {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        write_bits(bytes, pos, u128::from(*self), 1)
    }
}

impl<const N: usize> NumBits for [u8; N] {
    #[inline(always)]
    fn num_bits(&self) -> usize {
        N * 8
    }
}

impl<const N: usize> Read for [u8; N] {
    fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError> {
        let mut out = [0u8; N];
        for byte in out.iter_mut() {
            *byte = u8::read(slice, pos)?;
        }
        Ok(out)
    }
}

impl<const N: usize> Write for [u8; N] {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        write_bytes(bytes, pos, self)
    }
}

// Strings carry a 16-bit byte length followed by the raw UTF-8 bytes.
impl NumBits for String {
    #[inline(always)]
    fn num_bits(&self) -> usize {
        16 + self.len() * 8
    }
}

impl Read for String {
    fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError> {
        let len = u16::read(slice, pos)? as usize;
        let bytes = slice.read_bytes(pos, len)?;
        String::from_utf8(bytes).map_err(|_| ReadError::InvalidUtf8)
    }
}

impl Write for String {
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        let len = u16::try_from(self.len()).map_err(|_| WriteError::TooLong(self.len()))?;
        len.write(bytes, pos)?;
        write_bytes(bytes, pos, self.as_bytes())
    }
}

// Optional values carry a presence bit; an absent value takes no further bits.
impl<T: NumBits> NumBits for Option<T> {
    #[inline(always)]
    fn num_bits(&self) -> usize {
        match self {
            Some(value) => 1 + value.num_bits(),
            None => 1,
        }
    }
}

impl<T: Read> Read for Option<T> {
    #[inline(always)]
    fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError> {
        if bool::read(slice, pos)? {
            T::read(slice, pos).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<T: Write> Write for Option<T> {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        match self {
            Some(value) => {
                true.write(bytes, pos)?;
                value.write(bytes, pos)
            }
            None => false.write(bytes, pos),
        }
    }
}

impl<T1: NumBits, T2: NumBits> NumBits for (T1, T2) {
    #[inline(always)]
    fn num_bits(&self) -> usize {
        self.0.num_bits() + self.1.num_bits()
    }
}

impl<T1: NumBits, T2: NumBits, T3: NumBits> NumBits for (T1, T2, T3) {
    #[inline(always)]
    fn num_bits(&self) -> usize {
        self.0.num_bits() + self.1.num_bits() + self.2.num_bits()
    }
}

impl<T1, T2> Read for (T1, T2)
where
    T1: Read,
    T2: Read,
{
    #[inline(always)]
    fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError> {
        Ok((T1::read(slice, pos)?, T2::read(slice, pos)?))
    }
}

impl<T1, T2, T3> Read for (T1, T2, T3)
where
    T1: Read,
    T2: Read,
    T3: Read,
{
    #[inline(always)]
    fn read(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ReadError> {
        Ok((
            T1::read(slice, pos)?,
            T2::read(slice, pos)?,
            T3::read(slice, pos)?,
        ))
    }
}

impl<T1: Write, T2: Write> Write for (T1, T2) {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        self.0.write(bytes, pos)?;
        self.1.write(bytes, pos)
    }
}

impl<T1: Write, T2: Write, T3: Write> Write for (T1, T2, T3) {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        self.0.write(bytes, pos)?;
        self.1.write(bytes, pos)?;
        self.2.write(bytes, pos)
    }
}
