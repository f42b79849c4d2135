use gdal_data_type::GdalDataType;

use crate::{classify, Conversion, PrimitiveDescriptor};

/// A type with a [`PrimitiveDescriptor`].
///
/// Implemented for the Rust primitives and common standard library types.
/// Use [`impl_gdal_enum`](crate::impl_gdal_enum) for field-less enumerations and [`impl_gdal_unrecognized`](crate::impl_gdal_unrecognized) for other types.
pub trait TypeDescriptor {
    /// The descriptor of the type.
    const DESCRIPTOR: PrimitiveDescriptor;
}

/// A type with a GDAL data type, resolved at compile time.
///
/// This is implemented for every [`TypeDescriptor`] and cannot be implemented directly.
/// Unsupported types resolve to [`GdalDataType::Unknown`] rather than failing to compile, so generic code can inspect [`GdalType::IS_RECOGNIZED`].
///
/// ```
/// use gdal_type_traits::{GdalDataType, GdalType};
///
/// struct RowMajorMatrix<T> {
///     data: Vec<T>,
/// }
///
/// impl<T: GdalType> RowMajorMatrix<T> {
///     const RASTER_TYPE: GdalDataType = T::DATA_TYPE;
/// }
///
/// assert_eq!(RowMajorMatrix::<f32>::RASTER_TYPE, GdalDataType::Float32);
/// assert_eq!(RowMajorMatrix::<i32>::RASTER_TYPE, GdalDataType::Int32);
/// ```
pub trait GdalType: TypeDescriptor {
    /// The GDAL data type.
    const DATA_TYPE: GdalDataType;

    /// Whether the type maps to a known GDAL data type.
    const IS_RECOGNIZED: bool;
}

impl<T: TypeDescriptor + ?Sized> GdalType for T {
    const DATA_TYPE: GdalDataType = classify(T::DESCRIPTOR);
    const IS_RECOGNIZED: bool = Self::DATA_TYPE.is_known();
}

/// Return the GDAL data type of `T`.
#[must_use]
pub const fn data_type<T: GdalType + ?Sized>() -> GdalDataType {
    T::DATA_TYPE
}

/// Returns true if `T` maps to a known GDAL data type.
#[must_use]
pub const fn is_recognized<T: GdalType + ?Sized>() -> bool {
    T::IS_RECOGNIZED
}

/// Return the [`Conversion`] of `T`.
#[must_use]
pub const fn conversion<T: GdalType + ?Sized>() -> Conversion {
    Conversion::new(T::DATA_TYPE)
}

/// Return the GDAL data type of `T`, rejecting unrecognised types.
///
/// Used in a const context this turns an unrecognised type into a compile-time error.
///
/// ```compile_fail
/// use gdal_type_traits::{require_data_type, GdalDataType};
///
/// const RASTER_TYPE: GdalDataType = require_data_type::<u64>();
/// ```
///
/// # Panics
/// Panics if `T` is not recognised.
#[must_use]
pub const fn require_data_type<T: GdalType + ?Sized>() -> GdalDataType {
    assert!(T::IS_RECOGNIZED, "The type has no GDAL data type.");
    T::DATA_TYPE
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Matrix<T>(Vec<T>);

    impl<T: GdalType> Matrix<T> {
        const RASTER_TYPE: GdalDataType = require_data_type::<T>();

        fn raster_type(&self) -> GdalDataType {
            Self::RASTER_TYPE
        }
    }

    #[test]
    fn generic_usage() {
        assert_eq!(Matrix(vec![0.0f32]).raster_type(), GdalDataType::Float32);
        assert_eq!(Matrix(vec![0i32]).raster_type(), GdalDataType::Int32);
        assert_eq!(Matrix(vec![0u8]).0.len(), 1);
    }

    #[test]
    fn free_functions() {
        assert_eq!(data_type::<u16>(), GdalDataType::UInt16);
        assert!(is_recognized::<u16>());
        assert!(!is_recognized::<u64>());
        assert_eq!(conversion::<f64>(), Conversion::new(GdalDataType::Float64));
        assert_eq!(conversion::<str>(), Conversion::UNKNOWN);
    }

    #[test]
    #[should_panic(expected = "The type has no GDAL data type.")]
    fn require_unrecognized_at_runtime() {
        let _ = require_data_type::<i64>();
    }
}
