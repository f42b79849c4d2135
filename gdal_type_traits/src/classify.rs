//! The classification decision tree.
//!
//! A descriptor is first split by [`TypeCategory`], then each branch defers to a table keyed by byte width (and signedness for integers).
//! Any width not in a table falls through to [`GdalDataType::Unknown`].

use gdal_data_type::GdalDataType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PrimitiveDescriptor, TypeCategory};

/// Map the size and signedness of an integer type to a GDAL data type.
///
/// GDAL has no signed byte type in this mapping, so one byte integers of either signedness map to [`GdalDataType::Byte`].
#[must_use]
pub const fn integral_to_gdal(size: usize, is_signed: bool) -> GdalDataType {
    match (size, is_signed) {
        (1, _) => GdalDataType::Byte,
        (2, false) => GdalDataType::UInt16,
        (2, true) => GdalDataType::Int16,
        (4, false) => GdalDataType::UInt32,
        (4, true) => GdalDataType::Int32,
        _ => GdalDataType::Unknown,
    }
}

/// Map the size of a floating point type to a GDAL data type.
#[must_use]
pub const fn float_to_gdal(size: usize) -> GdalDataType {
    match size {
        4 => GdalDataType::Float32,
        8 => GdalDataType::Float64,
        _ => GdalDataType::Unknown,
    }
}

/// Map a type descriptor to a GDAL data type.
///
/// Enumerations classify as their underlying integer representation.
#[must_use]
pub const fn classify(descriptor: PrimitiveDescriptor) -> GdalDataType {
    match descriptor.category() {
        TypeCategory::Integral | TypeCategory::Enumeration => {
            integral_to_gdal(descriptor.size(), descriptor.is_signed())
        }
        TypeCategory::FloatingPoint => float_to_gdal(descriptor.size()),
        TypeCategory::Other => GdalDataType::Unknown,
    }
}

/// The result of classifying a type: a GDAL data type and whether it was recognised.
///
/// `is_recognized` is false if and only if `data_type` is [`GdalDataType::Unknown`].
/// Deserialization rejects input that breaks this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ConversionFields")]
pub struct Conversion {
    data_type: GdalDataType,
    is_recognized: bool,
}

impl Conversion {
    /// The conversion of an unrecognised type.
    pub const UNKNOWN: Self = Self::new(GdalDataType::Unknown);

    /// Create a new conversion result for `data_type`.
    #[must_use]
    pub const fn new(data_type: GdalDataType) -> Self {
        Self {
            data_type,
            is_recognized: data_type.is_known(),
        }
    }

    /// Classify `descriptor`.
    #[must_use]
    pub const fn from_descriptor(descriptor: PrimitiveDescriptor) -> Self {
        Self::new(classify(descriptor))
    }

    /// The GDAL data type.
    #[must_use]
    pub const fn data_type(&self) -> GdalDataType {
        self.data_type
    }

    /// Returns true if the type maps to a known GDAL data type.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        self.is_recognized
    }
}

#[derive(Deserialize)]
struct ConversionFields {
    data_type: GdalDataType,
    is_recognized: bool,
}

/// A serialized [`Conversion`] whose recognised flag contradicts its data type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("a conversion to {data_type} cannot have is_recognized = {is_recognized}")]
pub struct ConversionError {
    data_type: GdalDataType,
    is_recognized: bool,
}

impl TryFrom<ConversionFields> for Conversion {
    type Error = ConversionError;

    fn try_from(fields: ConversionFields) -> Result<Self, Self::Error> {
        let conversion = Self::new(fields.data_type);
        if conversion.is_recognized == fields.is_recognized {
            Ok(conversion)
        } else {
            Err(ConversionError {
                data_type: fields.data_type,
                is_recognized: fields.is_recognized,
            })
        }
    }
}

impl From<GdalDataType> for Conversion {
    fn from(data_type: GdalDataType) -> Self {
        Self::new(data_type)
    }
}

impl From<PrimitiveDescriptor> for Conversion {
    fn from(descriptor: PrimitiveDescriptor) -> Self {
        Self::from_descriptor(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_table() {
        assert_eq!(integral_to_gdal(1, false), GdalDataType::Byte);
        assert_eq!(integral_to_gdal(1, true), GdalDataType::Byte);
        assert_eq!(integral_to_gdal(2, false), GdalDataType::UInt16);
        assert_eq!(integral_to_gdal(2, true), GdalDataType::Int16);
        assert_eq!(integral_to_gdal(4, false), GdalDataType::UInt32);
        assert_eq!(integral_to_gdal(4, true), GdalDataType::Int32);
        assert_eq!(integral_to_gdal(8, false), GdalDataType::Unknown);
        assert_eq!(integral_to_gdal(8, true), GdalDataType::Unknown);
        assert_eq!(integral_to_gdal(16, true), GdalDataType::Unknown);
        assert_eq!(integral_to_gdal(0, false), GdalDataType::Unknown);
        assert_eq!(integral_to_gdal(3, true), GdalDataType::Unknown);
    }

    #[test]
    fn float_table() {
        assert_eq!(float_to_gdal(4), GdalDataType::Float32);
        assert_eq!(float_to_gdal(8), GdalDataType::Float64);
        assert_eq!(float_to_gdal(2), GdalDataType::Unknown);
        assert_eq!(float_to_gdal(16), GdalDataType::Unknown);
    }

    #[test]
    fn classify_branches() {
        assert_eq!(
            classify(PrimitiveDescriptor::integral(2, true)),
            GdalDataType::Int16
        );
        assert_eq!(
            classify(PrimitiveDescriptor::floating_point(4)),
            GdalDataType::Float32
        );
        assert_eq!(
            classify(PrimitiveDescriptor::enumeration(
                PrimitiveDescriptor::integral(4, false)
            )),
            GdalDataType::UInt32
        );
        assert_eq!(
            classify(PrimitiveDescriptor::enumeration(
                PrimitiveDescriptor::integral(8, false)
            )),
            GdalDataType::Unknown
        );
        assert_eq!(classify(PrimitiveDescriptor::other(4)), GdalDataType::Unknown);
    }

    #[test]
    fn integral_and_floating_point_is_unknown() {
        // Both flags set would otherwise hit both the integer and float tables at width 4.
        let descriptor = PrimitiveDescriptor::from_flags(true, true, false, 4, true);
        assert_eq!(classify(descriptor), GdalDataType::Unknown);
        assert!(!Conversion::from_descriptor(descriptor).is_recognized());
    }

    #[test]
    fn conversion() {
        let conversion = Conversion::new(GdalDataType::Float64);
        assert_eq!(conversion.data_type(), GdalDataType::Float64);
        assert!(conversion.is_recognized());

        assert_eq!(Conversion::UNKNOWN.data_type(), GdalDataType::Unknown);
        assert!(!Conversion::UNKNOWN.is_recognized());
        assert_eq!(Conversion::from(GdalDataType::Unknown), Conversion::UNKNOWN);
        assert_eq!(
            Conversion::from(PrimitiveDescriptor::integral(1, true)),
            Conversion::new(GdalDataType::Byte)
        );
    }

    #[test]
    fn conversion_serde() {
        assert_eq!(
            serde_json::to_string(&Conversion::new(GdalDataType::Int32)).unwrap(),
            r#"{"data_type":"Int32","is_recognized":true}"#
        );
        assert_eq!(
            serde_json::from_str::<Conversion>(r#"{"data_type":"Int32","is_recognized":true}"#)
                .unwrap(),
            Conversion::new(GdalDataType::Int32)
        );
        assert_eq!(
            serde_json::from_str::<Conversion>(
                r#"{"data_type":"Unknown","is_recognized":false}"#
            )
            .unwrap(),
            Conversion::UNKNOWN
        );
    }

    #[test]
    fn conversion_serde_rejects_inconsistent_flag() {
        let error = serde_json::from_str::<Conversion>(
            r#"{"data_type":"Unknown","is_recognized":true}"#,
        )
        .unwrap_err();
        assert!(error
            .to_string()
            .starts_with("a conversion to Unknown cannot have is_recognized = true"));
        assert!(serde_json::from_str::<Conversion>(
            r#"{"data_type":"Float32","is_recognized":false}"#
        )
        .is_err());
    }
}
