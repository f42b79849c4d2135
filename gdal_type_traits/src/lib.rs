//! Compile-time mapping of Rust types to [GDAL](https://gdal.org) pixel data types.
//!
//! `gdal_type_traits` lets generic raster code ask "what [`GdalDataType`] corresponds to `T`?" as a compile-time constant, instead of writing a `match` per instantiation:
//!
//! ```
//! use gdal_type_traits::{GdalDataType, GdalType};
//!
//! struct RowMajorMatrix<T> {
//!     data: Vec<T>,
//! }
//!
//! impl<T: GdalType> RowMajorMatrix<T> {
//!     const RASTER_TYPE: GdalDataType = T::DATA_TYPE;
//!
//!     fn write(&self) {
//!         // RasterIO(..., Self::RASTER_TYPE)
//!         # let _ = (&self.data, Self::RASTER_TYPE);
//!     }
//! }
//!
//! RowMajorMatrix::<f32> { data: vec![] }.write();
//! assert_eq!(RowMajorMatrix::<i32>::RASTER_TYPE, GdalDataType::Int32);
//! ```
//!
//! ## Classification
//! Every [`TypeDescriptor`] is classified by a decision tree over its [`PrimitiveDescriptor`]:
//!
//! | Type | [`GdalDataType`] |
//! |------|------------------|
//! | `i8`, `u8`, `bool` | `Byte` |
//! | `i16` / `u16` | `Int16` / `UInt16` |
//! | `i32` / `u32` | `Int32` / `UInt32` |
//! | `f32` / `f64` | `Float32` / `Float64` |
//! | enumerations ([`impl_gdal_enum`]) | as their `#[repr]` integer type |
//! | anything else (`i64`, `u64`, `f16`, `char`, pointers, aggregates, ...) | `Unknown` |
//!
//! GDAL has no signed byte type in this mapping, so `i8` collapses into `Byte`.
//! `bool` is a one byte unsigned integer and therefore also maps to `Byte`.
//!
//! Unsupported types never fail at runtime; they resolve to [`GdalDataType::Unknown`] with [`GdalType::IS_RECOGNIZED`] set to false.
//! Use [`require_data_type`] or [`assert_gdal_type`] to reject them at compile time instead.
//!
//! ## Runtime lookup
//! Code that only has a [`TypeId`](std::any::TypeId) or a `&dyn Any` can use [`data_type_of_type_id`] and [`data_type_of_val`].
//! These consult a read-only table of the builtin types and every type passed to [`impl_gdal_enum`] or [`impl_gdal_unrecognized`].
//! The table agrees with the compile-time constants: `data_type_of_val(&x)` is always `T::DATA_TYPE` for a registered `x: T`.
//!
//! ## Licence
//! `gdal_type_traits` is licensed under the MIT license.

mod classify;
mod descriptor;
mod error;
mod gdal_type;
mod macros;
mod primitives;
mod type_registration;

pub use classify::{classify, float_to_gdal, integral_to_gdal, Conversion, ConversionError};
pub use descriptor::{PrimitiveDescriptor, TypeCategory};
pub use error::{try_data_type, try_data_type_of_type_id, UnsupportedTypeError};
pub use gdal_type::{
    conversion, data_type, is_recognized, require_data_type, GdalType, TypeDescriptor,
};
pub use type_registration::{
    conversion_of_type_id, data_type_of_type_id, data_type_of_val, lookup_registration,
    lookup_type_id, TypeRegistration,
};

pub use gdal_data_type::{GdalDataType, GdalDataTypeCodeError, GdalDataTypeNameError};

/// Re-export of [`inventory`] for use in the [`impl_gdal_enum`] and [`impl_gdal_unrecognized`] macros.
#[doc(hidden)]
pub use inventory;

// Compile-time checks of the classification tree.
crate::assert_gdal_type!(i8, i16, i32, u8, u16, u32, f32, f64, bool);

const _: () = {
    assert!(matches!(data_type::<i8>(), GdalDataType::Byte));
    assert!(matches!(data_type::<u8>(), GdalDataType::Byte));
    assert!(matches!(data_type::<i16>(), GdalDataType::Int16));
    assert!(matches!(data_type::<u16>(), GdalDataType::UInt16));
    assert!(matches!(data_type::<i32>(), GdalDataType::Int32));
    assert!(matches!(data_type::<u32>(), GdalDataType::UInt32));
    assert!(matches!(data_type::<f32>(), GdalDataType::Float32));
    assert!(matches!(data_type::<f64>(), GdalDataType::Float64));
    assert!(matches!(
        data_type::<*mut std::ffi::c_void>(),
        GdalDataType::Unknown
    ));
    assert!(!is_recognized::<*mut std::ffi::c_void>());
    assert!(is_recognized::<i8>());
};
