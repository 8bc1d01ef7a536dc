//! Error types for inspection operations

/// Errors that can occur while decoding an inspected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectError {
    /// A named field was absent from the inspected struct
    MissingField,
    /// The value had the wrong kind for the requested interpretation
    TypeMismatch,
    /// The host memory accessor failed to read
    MemoryRead,
    /// Typed array index out of bounds
    IndexOutOfBounds,
    /// Address or size computation would overflow
    AddressOverflow,
    /// Layout fields were inconsistent (negative count, bad tag value)
    InvalidLayout,
}

impl core::fmt::Display for InspectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            InspectError::MissingField => "Missing struct field",
            InspectError::TypeMismatch => "Value kind mismatch",
            InspectError::MemoryRead => "Foreign memory read failed",
            InspectError::IndexOutOfBounds => "Index out of bounds",
            InspectError::AddressOverflow => "Address computation overflow",
            InspectError::InvalidLayout => "Inconsistent matrix layout",
        };
        write!(f, "{msg}")
    }
}

/// Result type for inspection operations
pub type Result<T> = core::result::Result<T, InspectError>;
