//! GDAL data type names.
//!
//! These are the names returned by `GDALGetDataTypeName` and accepted by `GDALGetDataTypeByName`.

/// Name of the `GDT_Unknown` data type.
pub const UNKNOWN: &str = "Unknown";

/// Name of the `GDT_Byte` data type (8-bit unsigned integer).
pub const BYTE: &str = "Byte";

/// Name of the `GDT_Int8` data type (8-bit signed integer).
pub const INT8: &str = "Int8";

/// Name of the `GDT_UInt16` data type (16-bit unsigned integer).
pub const UINT16: &str = "UInt16";

/// Name of the `GDT_Int16` data type (16-bit signed integer).
pub const INT16: &str = "Int16";

/// Name of the `GDT_UInt32` data type (32-bit unsigned integer).
pub const UINT32: &str = "UInt32";

/// Name of the `GDT_Int32` data type (32-bit signed integer).
pub const INT32: &str = "Int32";

/// Name of the `GDT_UInt64` data type (64-bit unsigned integer).
pub const UINT64: &str = "UInt64";

/// Name of the `GDT_Int64` data type (64-bit signed integer).
pub const INT64: &str = "Int64";

/// Name of the `GDT_Float32` data type (32-bit IEEE floating point).
pub const FLOAT32: &str = "Float32";

/// Name of the `GDT_Float64` data type (64-bit IEEE floating point).
pub const FLOAT64: &str = "Float64";

/// Name of the `GDT_CInt16` data type (complex 16-bit signed integer).
pub const CINT16: &str = "CInt16";

/// Name of the `GDT_CInt32` data type (complex 32-bit signed integer).
pub const CINT32: &str = "CInt32";

/// Name of the `GDT_CFloat32` data type (complex 32-bit floating point).
pub const CFLOAT32: &str = "CFloat32";

/// Name of the `GDT_CFloat64` data type (complex 64-bit floating point).
pub const CFLOAT64: &str = "CFloat64";
