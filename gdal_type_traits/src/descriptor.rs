//! Primitive type descriptors.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The category a [`PrimitiveDescriptor`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TypeCategory {
    /// An integer type, including `bool`.
    Integral,
    /// A floating point type.
    FloatingPoint,
    /// A field-less enumeration with an integer representation.
    Enumeration,
    /// Anything else: pointers, aggregates, strings, etc.
    Other,
}

/// A classification of a type along three orthogonal axes (integral, floating point, enumeration) plus its byte width and signedness.
///
/// For an enumeration, `size` and `is_signed` are those of its underlying integer representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitiveDescriptor {
    is_integral: bool,
    is_floating_point: bool,
    is_enum: bool,
    size: usize,
    is_signed: bool,
}

impl PrimitiveDescriptor {
    /// Create a descriptor for an integer type of `size` bytes.
    #[must_use]
    pub const fn integral(size: usize, is_signed: bool) -> Self {
        Self::from_flags(true, false, false, size, is_signed)
    }

    /// Create a descriptor for a floating point type of `size` bytes.
    #[must_use]
    pub const fn floating_point(size: usize) -> Self {
        Self::from_flags(false, true, false, size, true)
    }

    /// Create a descriptor for an enumeration with an `underlying` integer representation.
    ///
    /// # Panics
    /// Panics if `underlying` is not an integer type.
    /// In a const context, such as a [`TypeDescriptor::DESCRIPTOR`](crate::TypeDescriptor::DESCRIPTOR), this is a compile-time error.
    #[must_use]
    pub const fn enumeration(underlying: Self) -> Self {
        assert!(
            matches!(underlying.category(), TypeCategory::Integral),
            "The enumeration base type must be integral."
        );
        Self::from_flags(false, false, true, underlying.size, underlying.is_signed)
    }

    /// Create a descriptor for a type that is neither integral, floating point, nor an enumeration.
    #[must_use]
    pub const fn other(size: usize) -> Self {
        Self::from_flags(false, false, false, size, false)
    }

    /// Create a descriptor from raw flags.
    ///
    /// Contradictory flags are permitted and classify as [`TypeCategory::Other`].
    #[must_use]
    pub const fn from_flags(
        is_integral: bool,
        is_floating_point: bool,
        is_enum: bool,
        size: usize,
        is_signed: bool,
    ) -> Self {
        Self {
            is_integral,
            is_floating_point,
            is_enum,
            size,
            is_signed,
        }
    }

    /// Returns true if the type is flagged as integral.
    #[must_use]
    pub const fn is_integral(&self) -> bool {
        self.is_integral
    }

    /// Returns true if the type is flagged as floating point.
    #[must_use]
    pub const fn is_floating_point(&self) -> bool {
        self.is_floating_point
    }

    /// Returns true if the type is flagged as an enumeration.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        self.is_enum
    }

    /// The size of the type (or its underlying representation) in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the type (or its underlying representation) is signed.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// Return the category of the type.
    ///
    /// Exactly one flag selects its category, otherwise the category is [`TypeCategory::Other`].
    #[must_use]
    pub const fn category(&self) -> TypeCategory {
        match (self.is_integral, self.is_floating_point, self.is_enum) {
            (true, false, false) => TypeCategory::Integral,
            (false, true, false) => TypeCategory::FloatingPoint,
            (false, false, true) => TypeCategory::Enumeration,
            _ => TypeCategory::Other,
        }
    }
}
