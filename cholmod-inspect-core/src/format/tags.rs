//! Classification tags carried by a `cholmod_sparse` value
//!
//! These mirror the numeric constants of cholmod.h. Each tag decodes from
//! its raw field value; unknown raw values decode to `None` and cause the
//! printer to decline the value.

/// Symmetry classification derived from the `stype` field
///
/// `stype == 0` is a general matrix with all entries stored. Any other
/// value implies symmetric storage with only one triangle present, which
/// this decoder does not reconstruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symmetry {
    /// Unsymmetric, both triangles stored
    General,
    /// Symmetric, upper triangle stored (`stype > 0`)
    SymmetricUpper,
    /// Symmetric, lower triangle stored (`stype < 0`)
    SymmetricLower,
}

impl Symmetry {
    /// Decode from the raw `stype` field
    pub const fn from_raw(value: i32) -> Self {
        if value == 0 {
            Symmetry::General
        } else if value > 0 {
            Symmetry::SymmetricUpper
        } else {
            Symmetry::SymmetricLower
        }
    }
}

/// Integer width of the index arrays (`itype` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum IndexKind {
    /// CHOLMOD_INT - 32-bit indices throughout
    Int = 0,
    /// CHOLMOD_INTLONG - 64-bit column starts, 32-bit row indices
    IntLong = 1,
    /// CHOLMOD_LONG - 64-bit indices throughout
    Long = 2,
}

impl IndexKind {
    /// Decode from the raw `itype` field
    pub const fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(IndexKind::Int),
            1 => Some(IndexKind::IntLong),
            2 => Some(IndexKind::Long),
            _ => None,
        }
    }
}

impl core::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndexKind::Int => write!(f, "CHOLMOD_INT"),
            IndexKind::IntLong => write!(f, "CHOLMOD_INTLONG"),
            IndexKind::Long => write!(f, "CHOLMOD_LONG"),
        }
    }
}

/// Numeric payload classification (`xtype` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ValueKind {
    /// CHOLMOD_PATTERN - no numeric values stored
    Pattern = 0,
    /// CHOLMOD_REAL - one real value per entry
    Real = 1,
    /// CHOLMOD_COMPLEX - interleaved real/imaginary pairs
    Complex = 2,
    /// CHOLMOD_ZOMPLEX - split real and imaginary arrays
    Zomplex = 3,
}

impl ValueKind {
    /// Decode from the raw `xtype` field
    pub const fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(ValueKind::Pattern),
            1 => Some(ValueKind::Real),
            2 => Some(ValueKind::Complex),
            3 => Some(ValueKind::Zomplex),
            _ => None,
        }
    }
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueKind::Pattern => write!(f, "pattern"),
            ValueKind::Real => write!(f, "real"),
            ValueKind::Complex => write!(f, "complex"),
            ValueKind::Zomplex => write!(f, "zomplex"),
        }
    }
}

/// Floating point precision of the payload (`dtype` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Precision {
    /// CHOLMOD_DOUBLE - 64-bit payload
    Double = 0,
    /// CHOLMOD_SINGLE - 32-bit payload
    Single = 1,
}

impl Precision {
    /// Decode from the raw `dtype` field
    pub const fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(Precision::Double),
            1 => Some(Precision::Single),
            _ => None,
        }
    }
}

impl core::fmt::Display for Precision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Precision::Double => write!(f, "double"),
            Precision::Single => write!(f, "float"),
        }
    }
}
