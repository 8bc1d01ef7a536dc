//! Host-seam traits for the inspection core
//!
//! These are pure interfaces with no implementations: foreign-memory
//! access and the debugger typed-value abstraction.

pub mod memory;
pub mod value;

pub use memory::MemoryRead;
pub use value::TypedValue;
