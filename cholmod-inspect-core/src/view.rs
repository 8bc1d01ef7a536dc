//! Typed views over the inspected process's arrays
//!
//! A `cholmod_sparse` keeps three parallel arrays behind untyped
//! pointers: column starts (`p`), row indices (`i`) and values (`x`).
//! [`TypedSlice`] interprets one such region as a typed array with
//! bounds-checked element reads; [`CscView`] combines the three into the
//! compressed-column lookup
//!
//! ```text
//! A(i[p[c] .. p[c+1]], c) = x[p[c] .. p[c+1]]
//! ```
//!
//! with row indices sorted ascending inside each column slice. That
//! sortedness is a precondition of the storage flags, not something the
//! view verifies; the inspected process is trusted.

use core::marker::PhantomData;

use bytemuck::Pod;

use crate::format::SparseHeader;
use crate::traits::MemoryRead;
use crate::validation::{byte_span, element_address};
use crate::{InspectError, Result, SparseLens};

/// Bounds-checked typed array over foreign memory
///
/// Wraps (accessor, base address, element count). Elements are copied
/// out one at a time; nothing is cached and the region itself is never
/// materialized.
pub struct TypedSlice<'a, T, M> {
    mem: &'a M,
    base: u64,
    len: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: Pod, M: MemoryRead> TypedSlice<'a, T, M> {
    /// View `len` elements of `T` starting at `base`
    ///
    /// The full byte span is checked for address overflow up front;
    /// whether the addresses are actually readable is only discovered
    /// per element.
    pub fn new(mem: &'a M, base: u64, len: usize) -> Result<Self> {
        let span = byte_span::<T>(len)?;
        base.checked_add(span)
            .ok_or(InspectError::AddressOverflow)?;
        Ok(Self {
            mem,
            base,
            len,
            _marker: PhantomData,
        })
    }

    /// Number of elements in the view
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the view has no elements
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read element `index`
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(InspectError::IndexOutOfBounds);
        }
        let addr = element_address::<T>(self.base, index)?;
        let mut out = T::zeroed();
        self.mem.read(addr, bytemuck::bytes_of_mut(&mut out))?;
        Ok(out)
    }
}

/// Read-only CSC projection over a paused process's matrix
///
/// Construction reads exactly one foreign element (the final column
/// start, which is the stored-entry count for packed storage); lookups
/// read a logarithmic number of row indices plus at most one value.
pub struct CscView<'a, M: MemoryRead> {
    nrow: usize,
    ncol: usize,
    col_starts: TypedSlice<'a, i64, M>,
    row_indices: TypedSlice<'a, i64, M>,
    values: TypedSlice<'a, f64, M>,
    nnz: usize,
}

impl<'a, M: MemoryRead> CscView<'a, M> {
    /// Build the view from a header readout and a memory accessor
    pub fn new(header: &SparseHeader, mem: &'a M) -> Result<Self> {
        let starts_len = header
            .ncol
            .checked_add(1)
            .ok_or(InspectError::AddressOverflow)?;
        let col_starts = TypedSlice::new(mem, header.col_starts, starts_len)?;

        // p[ncol] is the stored-entry count for packed storage
        let raw_nnz = col_starts.get(header.ncol)?;
        let nnz = usize::try_from(raw_nnz).map_err(|_| InspectError::InvalidLayout)?;

        let row_indices = TypedSlice::new(mem, header.row_indices, nnz)?;
        let values = TypedSlice::new(mem, header.values, nnz)?;

        Ok(Self {
            nrow: header.nrow,
            ncol: header.ncol,
            col_starts,
            row_indices,
            values,
            nnz,
        })
    }

    /// Number of rows
    pub const fn nrow(&self) -> usize {
        self.nrow
    }

    /// Number of columns
    pub const fn ncol(&self) -> usize {
        self.ncol
    }

    fn column_start(&self, index: usize) -> Result<usize> {
        let raw = self.col_starts.get(index)?;
        usize::try_from(raw).map_err(|_| InspectError::InvalidLayout)
    }

    /// Stored entry at (row, col), or `None` for an implicit zero
    pub fn stored(&self, row: usize, col: usize) -> Result<Option<f64>> {
        if row >= self.nrow || col >= self.ncol {
            return Err(InspectError::IndexOutOfBounds);
        }
        let start = self.column_start(col)?;
        let end = self.column_start(col + 1)?;
        let target = row as i64;

        // Leftmost insertion point in the sorted column slice
        let mut lo = start;
        let mut hi = end;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.row_indices.get(mid)? < target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        if lo < end && self.row_indices.get(lo)? == target {
            Ok(Some(self.values.get(lo)?))
        } else {
            Ok(None)
        }
    }

    /// Value at (row, col), synthesizing 0.0 for unstored positions
    pub fn value_at(&self, row: usize, col: usize) -> Result<f64> {
        Ok(self.stored(row, col)?.unwrap_or(0.0))
    }
}

impl<M: MemoryRead> SparseLens for CscView<'_, M> {
    fn get_element(&self, row: usize, col: usize) -> Result<Option<f64>> {
        self.stored(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrow, self.ncol)
    }

    fn nnz(&self) -> usize {
        self.nnz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Address space stitched out of borrowed byte segments
    struct SegmentMem<'a> {
        segments: &'a [(u64, &'a [u8])],
    }

    impl MemoryRead for SegmentMem<'_> {
        fn read(&self, addr: u64, buf: &mut [u8]) -> Result<()> {
            for (base, bytes) in self.segments {
                if addr < *base {
                    continue;
                }
                let offset = (addr - base) as usize;
                if let Some(end) = offset.checked_add(buf.len()) {
                    if end <= bytes.len() {
                        buf.copy_from_slice(&bytes[offset..end]);
                        return Ok(());
                    }
                }
            }
            Err(InspectError::MemoryRead)
        }
    }

    const P_BASE: u64 = 0x1000;
    const I_BASE: u64 = 0x2000;
    const X_BASE: u64 = 0x3000;

    fn header(nrow: usize, ncol: usize) -> SparseHeader {
        SparseHeader {
            nrow,
            ncol,
            col_starts: P_BASE,
            row_indices: I_BASE,
            values: X_BASE,
            stype: 0,
            itype: 2,
            xtype: 1,
            dtype: 0,
            packed: true,
            sorted: true,
        }
    }

    #[test]
    fn test_typed_slice_get() {
        let data = [10i64, 20, 30];
        let segments = [(P_BASE, bytemuck::cast_slice::<i64, u8>(&data))];
        let mem = SegmentMem {
            segments: &segments,
        };
        let slice = TypedSlice::<i64, _>::new(&mem, P_BASE, 3).unwrap();
        assert_eq!(slice.len(), 3);
        assert_eq!(slice.get(0), Ok(10));
        assert_eq!(slice.get(2), Ok(30));
        assert_eq!(slice.get(3), Err(InspectError::IndexOutOfBounds));
    }

    #[test]
    fn test_typed_slice_overflow_rejected() {
        let segments: [(u64, &[u8]); 0] = [];
        let mem = SegmentMem {
            segments: &segments,
        };
        assert!(TypedSlice::<i64, _>::new(&mem, u64::MAX - 8, 2).is_err());
    }

    #[test]
    fn test_two_by_two_lookup() {
        // A = [[0, 7], [5, 0]] in packed sorted CSC
        let p = [0i64, 1, 2];
        let i = [1i64, 0];
        let x = [5.0f64, 7.0];
        let segments = [
            (P_BASE, bytemuck::cast_slice::<i64, u8>(&p)),
            (I_BASE, bytemuck::cast_slice::<i64, u8>(&i)),
            (X_BASE, bytemuck::cast_slice::<f64, u8>(&x)),
        ];
        let mem = SegmentMem {
            segments: &segments,
        };
        let view = CscView::new(&header(2, 2), &mem).unwrap();

        assert_eq!(view.nnz(), 2);
        assert_eq!(view.stored(0, 0), Ok(None));
        assert_eq!(view.stored(1, 0), Ok(Some(5.0)));
        assert_eq!(view.stored(0, 1), Ok(Some(7.0)));
        assert_eq!(view.stored(1, 1), Ok(None));
        assert_eq!(view.value_at(0, 0), Ok(0.0));
        assert_eq!(view.value_at(0, 1), Ok(7.0));
    }

    #[test]
    fn test_empty_column() {
        // Middle column stores nothing
        let p = [0i64, 1, 1, 2];
        let i = [0i64, 2];
        let x = [1.5f64, 2.5];
        let segments = [
            (P_BASE, bytemuck::cast_slice::<i64, u8>(&p)),
            (I_BASE, bytemuck::cast_slice::<i64, u8>(&i)),
            (X_BASE, bytemuck::cast_slice::<f64, u8>(&x)),
        ];
        let mem = SegmentMem {
            segments: &segments,
        };
        let view = CscView::new(&header(3, 3), &mem).unwrap();

        for row in 0..3 {
            assert_eq!(view.stored(row, 1), Ok(None));
        }
        assert_eq!(view.stored(0, 0), Ok(Some(1.5)));
        assert_eq!(view.stored(2, 2), Ok(Some(2.5)));
    }

    #[test]
    fn test_dense_column_binary_search() {
        // One fully dense column exercises every probe path
        let p = [0i64, 5];
        let i = [0i64, 1, 2, 3, 4];
        let x = [0.5f64, 1.5, 2.5, 3.5, 4.5];
        let segments = [
            (P_BASE, bytemuck::cast_slice::<i64, u8>(&p)),
            (I_BASE, bytemuck::cast_slice::<i64, u8>(&i)),
            (X_BASE, bytemuck::cast_slice::<f64, u8>(&x)),
        ];
        let mem = SegmentMem {
            segments: &segments,
        };
        let view = CscView::new(&header(5, 1), &mem).unwrap();

        for row in 0..5 {
            assert_eq!(view.stored(row, 0), Ok(Some(row as f64 + 0.5)));
        }
    }

    #[test]
    fn test_out_of_bounds_coordinate() {
        let p = [0i64, 0];
        let segments = [(P_BASE, bytemuck::cast_slice::<i64, u8>(&p))];
        let mem = SegmentMem {
            segments: &segments,
        };
        let view = CscView::new(&header(1, 1), &mem).unwrap();
        assert_eq!(view.stored(1, 0), Err(InspectError::IndexOutOfBounds));
        assert_eq!(view.stored(0, 1), Err(InspectError::IndexOutOfBounds));
    }

    #[test]
    fn test_unreadable_memory_propagates() {
        let p = [0i64, 1];
        // Row index and value arrays absent from the address space
        let segments = [(P_BASE, bytemuck::cast_slice::<i64, u8>(&p))];
        let mem = SegmentMem {
            segments: &segments,
        };
        let view = CscView::new(&header(1, 1), &mem).unwrap();
        assert_eq!(view.stored(0, 0), Err(InspectError::MemoryRead));
    }
}
