//! `cholmod_sparse` layout definitions
//!
//! Pure format knowledge: the classification tags carried by the struct
//! and the scalar-field readout. No I/O and no foreign-memory access
//! happen here.

pub mod header;
pub mod tags;

pub use header::{SparseHeader, SPARSE_TYPE_TAG};
pub use tags::{IndexKind, Precision, Symmetry, ValueKind};
