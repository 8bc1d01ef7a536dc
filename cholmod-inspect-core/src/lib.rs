#![no_std]

//! cholmod-inspect-core - CHOLMOD sparse matrix layout decoding
//!
//! This crate provides the format knowledge and decoding primitives for
//! rendering a `cholmod_sparse` compressed-column matrix out of a paused
//! process's memory: classification tags, the scalar-field readout, typed
//! views over the three parallel arrays, and the column-major cursor used
//! for enumeration. All host interaction goes through the traits in
//! [`traits`]; there is no I/O here.

pub mod cursor;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;
pub mod view;

pub use cursor::*;
pub use error::*;
pub use format::*;
pub use traits::*;
pub use view::*;

/// Read-only sparse matrix lens for coordinate lookup
pub trait SparseLens {
    /// Stored entry at (row, col), or `None` for an implicit zero
    ///
    /// Coordinates outside the dense extent are an error, not a zero.
    fn get_element(&self, row: usize, col: usize) -> Result<Option<f64>>;

    /// Matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of stored entries
    fn nnz(&self) -> usize;
}
