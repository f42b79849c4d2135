//! The GDAL pixel data type codes for the [`gdal_type_traits`](https://docs.rs/gdal_type_traits) crate.
//!
//! [`GdalDataType`] mirrors the `GDALDataType` enumeration of the GDAL C API, including its numeric codes and names.
//! It is a closed set: `gdal_type_traits` only ever produces values of it.
//!
//! ## Licence
//! `gdal_data_type` is licensed under the MIT license.

mod data_type;
pub mod names;

pub use data_type::{GdalDataType, GdalDataTypeCodeError, GdalDataTypeNameError};
