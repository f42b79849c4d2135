//! Unsupported type errors.

use std::any::TypeId;
use std::borrow::Cow;

use gdal_data_type::GdalDataType;
use thiserror::Error;

use crate::{lookup_registration, GdalType};

/// A type without a GDAL data type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnsupportedTypeError {
    /// The type is known but does not map to a GDAL data type.
    #[error("`{0}` has no GDAL data type")]
    Unrecognized(Cow<'static, str>),
    /// The type has no registration in the dynamic table.
    #[error("{0:?} is not a registered type")]
    Unregistered(TypeId),
}

impl UnsupportedTypeError {
    /// Create a new [`UnsupportedTypeError::Unrecognized`].
    #[must_use]
    pub fn new(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self::Unrecognized(type_name.into())
    }

    /// The name of the unsupported type, if it is known.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Unrecognized(type_name) => Some(&**type_name),
            Self::Unregistered(_) => None,
        }
    }
}

/// Return the GDAL data type of `T`.
///
/// # Errors
/// Returns [`UnsupportedTypeError::Unrecognized`] if `T` is not recognised.
pub fn try_data_type<T: GdalType + ?Sized>() -> Result<GdalDataType, UnsupportedTypeError> {
    if T::IS_RECOGNIZED {
        Ok(T::DATA_TYPE)
    } else {
        Err(UnsupportedTypeError::new(std::any::type_name::<T>()))
    }
}

/// Return the GDAL data type of a type by its [`TypeId`].
///
/// # Errors
/// Returns [`UnsupportedTypeError::Unregistered`] if the type has no registration,
/// or [`UnsupportedTypeError::Unrecognized`] naming the registered type if it is not recognised.
pub fn try_data_type_of_type_id(type_id: TypeId) -> Result<GdalDataType, UnsupportedTypeError> {
    let registration =
        lookup_registration(type_id).ok_or(UnsupportedTypeError::Unregistered(type_id))?;
    let data_type = registration.data_type();
    if data_type.is_known() {
        Ok(data_type)
    } else {
        Err(UnsupportedTypeError::new(registration.type_name()))
    }
}
