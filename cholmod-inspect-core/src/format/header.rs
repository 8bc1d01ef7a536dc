//! Field readout of a `cholmod_sparse` struct value
//!
//! A `cholmod_sparse` keeps its arrays behind `void*` fields and its
//! classification in plain `int` tags. [`SparseHeader`] captures one
//! field-by-field readout of such a value: dimensions, array addresses,
//! raw tags and storage flags. It holds no memory references itself; the
//! array contents are only touched later through a
//! [`CscView`](crate::view::CscView).

use crate::format::tags::{IndexKind, Precision, Symmetry, ValueKind};
use crate::traits::TypedValue;
use crate::{InspectError, Result};

/// Type tag family claimed by this printer
pub const SPARSE_TYPE_TAG: &str = "cholmod_sparse";

/// One readout of a `cholmod_sparse` value's scalar fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseHeader {
    /// Number of rows (`nrow`)
    pub nrow: usize,
    /// Number of columns (`ncol`)
    pub ncol: usize,
    /// Address of the column-start array (`p`, `ncol + 1` longs)
    pub col_starts: u64,
    /// Address of the row-index array (`i`, one long per stored entry)
    pub row_indices: u64,
    /// Address of the value array (`x`, one double per stored entry)
    pub values: u64,
    /// Raw `stype` symmetry tag
    pub stype: i32,
    /// Raw `itype` index width tag
    pub itype: i32,
    /// Raw `xtype` value kind tag
    pub xtype: i32,
    /// Raw `dtype` precision tag
    pub dtype: i32,
    /// Nonzero `packed` flag
    pub packed: bool,
    /// Nonzero `sorted` flag
    pub sorted: bool,
}

fn read_extent<V: TypedValue>(value: &V, name: &str) -> Result<usize> {
    let raw = value.field(name)?.as_int()?;
    usize::try_from(raw).map_err(|_| InspectError::InvalidLayout)
}

fn read_tag<V: TypedValue>(value: &V, name: &str) -> Result<i32> {
    let raw = value.field(name)?.as_int()?;
    i32::try_from(raw).map_err(|_| InspectError::InvalidLayout)
}

fn read_flag<V: TypedValue>(value: &V, name: &str) -> Result<bool> {
    Ok(value.field(name)?.as_int()? != 0)
}

impl SparseHeader {
    /// Read all scalar fields out of a struct value
    ///
    /// Field names are bit-exact with cholmod. Fails if a field is
    /// missing or has an unexpected kind; a caller that already matched
    /// the type tag treats such a failure as malformed memory.
    pub fn read_from<V: TypedValue>(value: &V) -> Result<Self> {
        Ok(Self {
            nrow: read_extent(value, "nrow")?,
            ncol: read_extent(value, "ncol")?,
            col_starts: value.field("p")?.as_address()?,
            row_indices: value.field("i")?.as_address()?,
            values: value.field("x")?.as_address()?,
            stype: read_tag(value, "stype")?,
            itype: read_tag(value, "itype")?,
            xtype: read_tag(value, "xtype")?,
            dtype: read_tag(value, "dtype")?,
            packed: read_flag(value, "packed")?,
            sorted: read_flag(value, "sorted")?,
        })
    }

    /// Decoded symmetry classification
    pub const fn symmetry(&self) -> Symmetry {
        Symmetry::from_raw(self.stype)
    }

    /// Decoded index width, if the raw tag is known
    pub const fn index_kind(&self) -> Option<IndexKind> {
        IndexKind::from_raw(self.itype)
    }

    /// Decoded value kind, if the raw tag is known
    pub const fn value_kind(&self) -> Option<ValueKind> {
        ValueKind::from_raw(self.xtype)
    }

    /// Decoded precision, if the raw tag is known
    pub const fn precision(&self) -> Option<Precision> {
        Precision::from_raw(self.dtype)
    }

    /// Whether this decoder claims the storage variant
    ///
    /// Deliberately narrow: general shape, long indices, real values,
    /// double precision. Every other combination is declined so the host
    /// falls back to its default rendering.
    pub fn supported(&self) -> bool {
        matches!(self.symmetry(), Symmetry::General)
            && self.index_kind() == Some(IndexKind::Long)
            && self.value_kind() == Some(ValueKind::Real)
            && self.precision() == Some(Precision::Double)
    }

    /// Storage descriptor words for the summary line
    pub const fn storage_words(&self) -> (&'static str, &'static str) {
        (
            if self.packed { "packed" } else { "unpacked" },
            if self.sorted { "sorted" } else { "unsorted" },
        )
    }

    /// Precision word for the summary line
    ///
    /// Anything other than CHOLMOD_DOUBLE reads as "float", matching the
    /// two-way `dtype` branch of the original layout.
    pub const fn precision_word(&self) -> &'static str {
        if self.dtype == 0 {
            "double"
        } else {
            "float"
        }
    }
}
