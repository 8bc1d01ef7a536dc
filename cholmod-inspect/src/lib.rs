//! cholmod-inspect - Debugger pretty-printing for CHOLMOD sparse matrices
//!
//! Renders a `cholmod_sparse` compressed-column matrix straight out of a
//! paused process's memory: a one-line summary of dimensions, storage
//! flags and precision, plus a lazy `"[row,col]" = value` enumeration of
//! every dense cell, with zeros synthesized for unstored positions.
//!
//! ## Architecture
//!
//! The workspace separates format knowledge from host plumbing:
//!
//! - **cholmod-inspect-core**: layout tags, the scalar-field readout,
//!   typed views over foreign memory, the column-major cursor (no I/O)
//! - **cholmod-inspect**: the printer façade and dispatch, labeled entry
//!   enumeration, the printer registry, and concrete memory backends
//!
//! ## Quick Start
//!
//! ```rust
//! use cholmod_inspect::{
//!     lookup, ImageBuilder, OwnedValue, SPARSE_TYPE_TAG,
//! };
//!
//! fn example() -> cholmod_inspect::Result<()> {
//!     // A 2 x 2 packed sorted CSC image: [[0, 7], [5, 0]]
//!     let mut builder = ImageBuilder::new(0x1000);
//!     let p = builder.push_i64s(&[0, 1, 2])?;
//!     let i = builder.push_i64s(&[1, 0])?;
//!     let x = builder.push_f64s(&[5.0, 7.0])?;
//!     let image = builder.finish();
//!
//!     let value = OwnedValue::structure(SPARSE_TYPE_TAG)
//!         .with_field("nrow", OwnedValue::int(2))
//!         .with_field("ncol", OwnedValue::int(2))
//!         .with_field("p", OwnedValue::address(p))
//!         .with_field("i", OwnedValue::address(i))
//!         .with_field("x", OwnedValue::address(x))
//!         .with_field("stype", OwnedValue::int(0))
//!         .with_field("itype", OwnedValue::int(2))
//!         .with_field("xtype", OwnedValue::int(1))
//!         .with_field("dtype", OwnedValue::int(0))
//!         .with_field("packed", OwnedValue::int(1))
//!         .with_field("sorted", OwnedValue::int(1));
//!
//!     if let Some(printer) = lookup(&value, &image)? {
//!         println!("{}", printer.summary());
//!         for entry in printer.entries() {
//!             let (label, value) = entry?;
//!             println!("{label} = {value}");
//!         }
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions and format definitions
pub use cholmod_inspect_core::{
    // Core traits
    MemoryRead, SparseLens, TypedValue,
    // Format definitions
    IndexKind, Precision, SparseHeader, Symmetry, ValueKind, SPARSE_TYPE_TAG,
    // Decoding primitives
    CscView, DenseCursor, TypedSlice,
    // Error handling
    InspectError, Result,
};

// Implementation modules
pub mod entries;
pub mod image;
pub mod printer;
pub mod registry;
#[cfg(feature = "mmap")]
pub mod snapshot;
pub mod value;

// Public exports
pub use entries::Entries;
pub use image::{ImageBuilder, MemoryImage};
pub use printer::{lookup, register_cholmod_printers, CscPrinter};
pub use registry::{LookupFn, PrettyPrinter, PrinterRegistry, PrinterTable};
pub use value::OwnedValue;

// Memory mapping features
#[cfg(feature = "mmap")]
pub use snapshot::SnapshotFile;
