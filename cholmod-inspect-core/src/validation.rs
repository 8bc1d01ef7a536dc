//! Size and alignment arithmetic for foreign arrays
//!
//! Pure mathematical helpers with no memory access. Array extents come
//! from the inspected process, so every size calculation is
//! overflow-checked before any read is attempted.

use crate::{InspectError, Result};

/// Byte span of `count` elements of type `T`, overflow-checked
pub fn byte_span<T>(count: usize) -> Result<u64> {
    let element_size = core::mem::size_of::<T>() as u64;
    (count as u64)
        .checked_mul(element_size)
        .ok_or(InspectError::AddressOverflow)
}

/// Byte address of element `index` in an array of `T` based at `base`
pub fn element_address<T>(base: u64, index: usize) -> Result<u64> {
    let offset = byte_span::<T>(index)?;
    base.checked_add(offset)
        .ok_or(InspectError::AddressOverflow)
}

/// Align an offset up to a boundary (boundary must be a power of 2)
pub const fn align_to_boundary(offset: usize, boundary: usize) -> usize {
    (offset + boundary - 1) & !(boundary - 1)
}

/// Align an offset to the 8-byte boundary used by the long/double arrays
pub const fn align_to_8(offset: usize) -> usize {
    align_to_boundary(offset, 8)
}
