//! Integer helpers used when sizing buffers.

use crate::error::QueuesError;

/// Returns the smallest power of two greater than or equal to `x`.<br/>
/// Computed from the leading-zero count of `x - 1`, so the cost does not depend on `x`.
///
/// # Errors
/// - `QueuesError::InvalidArgument` - If `x` is zero or negative.
/// - `QueuesError::Overflow` - If the result does not fit in `isize`.
pub fn ceiling_next_power_of_two(x: isize) -> Result<isize, QueuesError> {
  if x <= 0 {
    return Err(QueuesError::InvalidArgument(x));
  }
  let shift = isize::BITS - (x - 1).leading_zeros();
  if shift >= isize::BITS - 1 {
    return Err(QueuesError::Overflow(x));
  }
  Ok(1 << shift)
}

/// Returns whether `x` is a positive power of two.
pub fn is_power_of_two(x: isize) -> bool {
  x > 0 && x.count_ones() == 1
}
