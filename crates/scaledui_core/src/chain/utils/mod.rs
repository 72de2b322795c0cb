#[inline]
pub fn scaled_assert<T>(condition: bool, error: T) -> Result<(), T> {
    if condition { Ok(()) } else { Err(error) }
}
