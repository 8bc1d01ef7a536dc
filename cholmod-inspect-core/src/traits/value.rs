//! Typed-value abstraction over the host debugger runtime
//!
//! Debugger frontends hand out structured value objects (gdb's `Value`,
//! lldb's `SBValue`, a DWARF expression result). This trait is the minimal
//! surface the printer needs from such an object. Host adapters implement
//! it; embedders without a native value object can use the owned value
//! model from the implementation crate.

use crate::Result;

/// A typed value read from the inspected process
pub trait TypedValue: Sized {
    /// Resolve references, cv-qualifiers and typedefs to the underlying
    /// structural value
    ///
    /// Returns a value whose [`type_tag`](Self::type_tag) names the
    /// concrete struct, or `self` unchanged if nothing is wrapped.
    fn strip_wrappers(&self) -> Result<Self>;

    /// Structural type tag, if this value is a struct with one
    ///
    /// `None` for scalars, pointers and anonymous types; dispatch treats
    /// `None` as "not ours".
    fn type_tag(&self) -> Option<&str>;

    /// Access a named field of a struct value
    fn field(&self, name: &str) -> Result<Self>;

    /// Interpret this value as a signed integer
    ///
    /// Covers the `int`, flag and `size_t` fields of the layout; hosts
    /// widen narrower integers to i64.
    fn as_int(&self) -> Result<i64>;

    /// Interpret this value as a pointer and return the address it holds
    fn as_address(&self) -> Result<u64>;
}
