use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::names;

/// A GDAL pixel data type (`GDALDataType`).
///
/// The discriminants are the numeric codes used by the GDAL C API.
/// It serializes as its GDAL name and deserializes through [`FromStr`], so names are matched ignoring ASCII case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
#[repr(i32)]
pub enum GdalDataType {
    /// Unknown or unspecified type.
    #[default]
    Unknown = 0,
    /// Eight bit unsigned integer.
    Byte = 1,
    /// Sixteen bit unsigned integer.
    UInt16 = 2,
    /// Sixteen bit signed integer.
    Int16 = 3,
    /// Thirty two bit unsigned integer.
    UInt32 = 4,
    /// Thirty two bit signed integer.
    Int32 = 5,
    /// Thirty two bit floating point.
    Float32 = 6,
    /// Sixty four bit floating point.
    Float64 = 7,
    /// Complex `Int16`.
    CInt16 = 8,
    /// Complex `Int32`.
    CInt32 = 9,
    /// Complex `Float32`.
    CFloat32 = 10,
    /// Complex `Float64`.
    CFloat64 = 11,
    /// Sixty four bit unsigned integer.
    UInt64 = 12,
    /// Sixty four bit signed integer.
    Int64 = 13,
    /// Eight bit signed integer.
    Int8 = 14,
}

/// An unknown GDAL data type code error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown GDAL data type code {0}")]
pub struct GdalDataTypeCodeError(pub i32);

/// An unknown GDAL data type name error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown GDAL data type name {0}")]
pub struct GdalDataTypeNameError(pub String);

impl GdalDataType {
    /// Every data type, in code order.
    pub const ALL: [Self; 15] = [
        Self::Unknown,
        Self::Byte,
        Self::UInt16,
        Self::Int16,
        Self::UInt32,
        Self::Int32,
        Self::Float32,
        Self::Float64,
        Self::CInt16,
        Self::CInt32,
        Self::CFloat32,
        Self::CFloat64,
        Self::UInt64,
        Self::Int64,
        Self::Int8,
    ];

    /// Return the GDAL numeric code of the data type.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Create a data type from a GDAL numeric code.
    ///
    /// # Errors
    /// Returns [`GdalDataTypeCodeError`] if `code` is not a GDAL data type code.
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_code(code: i32) -> Result<Self, GdalDataTypeCodeError> {
        if code >= 0 && (code as usize) < Self::ALL.len() {
            Ok(Self::ALL[code as usize])
        } else {
            Err(GdalDataTypeCodeError(code))
        }
    }

    /// Return the GDAL name of the data type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => names::UNKNOWN,
            Self::Byte => names::BYTE,
            Self::UInt16 => names::UINT16,
            Self::Int16 => names::INT16,
            Self::UInt32 => names::UINT32,
            Self::Int32 => names::INT32,
            Self::Float32 => names::FLOAT32,
            Self::Float64 => names::FLOAT64,
            Self::CInt16 => names::CINT16,
            Self::CInt32 => names::CINT32,
            Self::CFloat32 => names::CFLOAT32,
            Self::CFloat64 => names::CFLOAT64,
            Self::UInt64 => names::UINT64,
            Self::Int64 => names::INT64,
            Self::Int8 => names::INT8,
        }
    }

    /// Return the size of one sample in bits, or zero for [`GdalDataType::Unknown`].
    #[must_use]
    pub const fn size_bits(self) -> usize {
        match self {
            Self::Unknown => 0,
            Self::Byte | Self::Int8 => 8,
            Self::UInt16 | Self::Int16 => 16,
            Self::UInt32 | Self::Int32 | Self::Float32 | Self::CInt16 => 32,
            Self::Float64 | Self::CInt32 | Self::CFloat32 | Self::UInt64 | Self::Int64 => 64,
            Self::CFloat64 => 128,
        }
    }

    /// Return the size of one sample in bytes, or zero for [`GdalDataType::Unknown`].
    #[must_use]
    pub const fn size_bytes(self) -> usize {
        self.size_bits() / 8
    }

    /// Returns true if the data type is an integer type (real or complex).
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::Int8
                | Self::UInt16
                | Self::Int16
                | Self::UInt32
                | Self::Int32
                | Self::UInt64
                | Self::Int64
                | Self::CInt16
                | Self::CInt32
        )
    }

    /// Returns true if the data type is a floating point type (real or complex).
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(
            self,
            Self::Float32 | Self::Float64 | Self::CFloat32 | Self::CFloat64
        )
    }

    /// Returns true if the data type is a complex type.
    #[must_use]
    pub const fn is_complex(self) -> bool {
        matches!(
            self,
            Self::CInt16 | Self::CInt32 | Self::CFloat32 | Self::CFloat64
        )
    }

    /// Returns true if the data type can represent negative values.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            Self::Unknown | Self::Byte | Self::UInt16 | Self::UInt32 | Self::UInt64
        )
    }

    /// Returns true unless the data type is [`GdalDataType::Unknown`].
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl TryFrom<i32> for GdalDataType {
    type Error = GdalDataTypeCodeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<GdalDataType> for i32 {
    fn from(data_type: GdalDataType) -> Self {
        data_type.code()
    }
}

impl FromStr for GdalDataType {
    type Err = GdalDataTypeNameError;

    /// Match a GDAL data type name, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|data_type| data_type.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| GdalDataTypeNameError(name.to_string()))
    }
}

impl TryFrom<String> for GdalDataType {
    type Error = GdalDataTypeNameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(GdalDataType::Unknown.code(), 0);
        assert_eq!(GdalDataType::Byte.code(), 1);
        assert_eq!(GdalDataType::Float64.code(), 7);
        assert_eq!(GdalDataType::Int8.code(), 14);
        for (code, data_type) in GdalDataType::ALL.into_iter().enumerate() {
            assert_eq!(data_type.code(), i32::try_from(code).unwrap());
            assert_eq!(GdalDataType::try_from(data_type.code()), Ok(data_type));
        }
    }

    #[test]
    fn invalid_codes() {
        assert_eq!(GdalDataType::try_from(-1), Err(GdalDataTypeCodeError(-1)));
        assert_eq!(GdalDataType::try_from(15), Err(GdalDataTypeCodeError(15)));
        assert_eq!(
            GdalDataType::try_from(15).unwrap_err().to_string(),
            "unknown GDAL data type code 15"
        );
    }

    #[test]
    fn names() {
        for data_type in GdalDataType::ALL {
            assert_eq!(data_type.to_string(), data_type.name());
            assert_eq!(data_type.name().parse::<GdalDataType>(), Ok(data_type));
        }
        assert_eq!("float32".parse::<GdalDataType>(), Ok(GdalDataType::Float32));
        assert_eq!("BYTE".parse::<GdalDataType>(), Ok(GdalDataType::Byte));
        assert_eq!(
            "Float16".parse::<GdalDataType>(),
            Err(GdalDataTypeNameError("Float16".to_string()))
        );
    }

    #[test]
    fn sizes() {
        assert_eq!(GdalDataType::Unknown.size_bytes(), 0);
        assert_eq!(GdalDataType::Byte.size_bytes(), 1);
        assert_eq!(GdalDataType::Int16.size_bytes(), 2);
        assert_eq!(GdalDataType::UInt32.size_bytes(), 4);
        assert_eq!(GdalDataType::Float64.size_bytes(), 8);
        assert_eq!(GdalDataType::CInt16.size_bytes(), 4);
        assert_eq!(GdalDataType::CFloat64.size_bits(), 128);
    }

    #[test]
    fn classification() {
        assert!(GdalDataType::Byte.is_integer());
        assert!(!GdalDataType::Byte.is_signed());
        assert!(GdalDataType::Int8.is_signed());
        assert!(GdalDataType::Float32.is_floating());
        assert!(GdalDataType::Float32.is_signed());
        assert!(!GdalDataType::Float32.is_complex());
        assert!(GdalDataType::CInt32.is_integer());
        assert!(GdalDataType::CInt32.is_complex());
        assert!(!GdalDataType::Unknown.is_integer());
        assert!(!GdalDataType::Unknown.is_floating());
        assert!(!GdalDataType::Unknown.is_signed());
        assert!(!GdalDataType::Unknown.is_known());
        assert!(GdalDataType::Int32.is_known());
        assert_eq!(GdalDataType::default(), GdalDataType::Unknown);
    }

    #[test]
    fn serde() {
        assert_eq!(
            serde_json::to_string(&GdalDataType::UInt16).unwrap(),
            r#""UInt16""#
        );
        assert_eq!(
            serde_json::from_str::<GdalDataType>(r#""CFloat32""#).unwrap(),
            GdalDataType::CFloat32
        );
        assert!(serde_json::from_str::<GdalDataType>(r#""UInt128""#).is_err());
    }

    #[test]
    fn serde_ignores_case() {
        assert_eq!(
            serde_json::from_str::<GdalDataType>(r#""float32""#).unwrap(),
            GdalDataType::Float32
        );
        assert_eq!(
            serde_json::from_str::<GdalDataType>(r#""BYTE""#).unwrap(),
            "byte".parse::<GdalDataType>().unwrap()
        );
        let error = serde_json::from_str::<GdalDataType>(r#""uint128""#).unwrap_err();
        assert!(error.to_string().starts_with("unknown GDAL data type name uint128"));
        assert!(serde_json::from_str::<GdalDataType>("5").is_err());
    }
}
