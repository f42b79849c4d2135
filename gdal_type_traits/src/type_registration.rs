//! A `TypeId` keyed table for code that only has runtime type information.
//!
//! The table holds the builtin primitives and everything submitted by [`impl_gdal_enum`](crate::impl_gdal_enum) or [`impl_gdal_unrecognized`](crate::impl_gdal_unrecognized).
//! It is collected on first use and never mutated afterwards.
//! A registration can only be created from a [`TypeDescriptor`] impl, so a lookup always agrees with [`GdalType::DATA_TYPE`](crate::GdalType::DATA_TYPE).

use std::any::{Any, TypeId};
use std::collections::{hash_map::Entry, HashMap};
use std::ffi::c_void;
use std::fmt::Debug;
use std::sync::LazyLock;

use gdal_data_type::GdalDataType;

use crate::{classify, Conversion, PrimitiveDescriptor, TypeDescriptor};

/// The registration of a type in the dynamic table.
///
/// Submit one with [`inventory::submit!`] to make a type visible to [`lookup_type_id`].
/// The macros [`impl_gdal_enum`](crate::impl_gdal_enum) and [`impl_gdal_unrecognized`](crate::impl_gdal_unrecognized) do this automatically.
pub struct TypeRegistration {
    type_id_fn: fn() -> TypeId,
    type_name_fn: fn() -> &'static str,
    descriptor: PrimitiveDescriptor,
}

inventory::collect!(TypeRegistration);

impl TypeRegistration {
    /// Create a registration for `T` from its [`TypeDescriptor`].
    #[must_use]
    pub const fn of<T: TypeDescriptor + ?Sized + 'static>() -> Self {
        Self {
            type_id_fn: TypeId::of::<T>,
            type_name_fn: std::any::type_name::<T>,
            descriptor: T::DESCRIPTOR,
        }
    }

    /// The [`TypeId`] of the registered type.
    ///
    /// Through references and smart pointers, call this as `TypeRegistration::type_id(registration)`.
    /// Method resolution on `&&TypeRegistration` picks [`Any::type_id`] first.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        (self.type_id_fn)()
    }

    /// The name of the registered type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        (self.type_name_fn)()
    }

    /// The descriptor of the registered type.
    #[must_use]
    pub const fn descriptor(&self) -> PrimitiveDescriptor {
        self.descriptor
    }

    /// The GDAL data type of the registered type.
    #[must_use]
    pub const fn data_type(&self) -> GdalDataType {
        classify(self.descriptor)
    }
}

impl Debug for TypeRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistration")
            .field("type_name", &self.type_name())
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

static BUILTIN_TYPE_REGISTRATIONS: [TypeRegistration; 27] = [
    TypeRegistration::of::<i8>(),
    TypeRegistration::of::<i16>(),
    TypeRegistration::of::<i32>(),
    TypeRegistration::of::<i64>(),
    TypeRegistration::of::<i128>(),
    TypeRegistration::of::<isize>(),
    TypeRegistration::of::<u8>(),
    TypeRegistration::of::<u16>(),
    TypeRegistration::of::<u32>(),
    TypeRegistration::of::<u64>(),
    TypeRegistration::of::<u128>(),
    TypeRegistration::of::<usize>(),
    TypeRegistration::of::<bool>(),
    TypeRegistration::of::<f32>(),
    TypeRegistration::of::<f64>(),
    TypeRegistration::of::<half::f16>(),
    TypeRegistration::of::<half::bf16>(),
    TypeRegistration::of::<char>(),
    TypeRegistration::of::<()>(),
    TypeRegistration::of::<str>(),
    TypeRegistration::of::<&'static str>(),
    TypeRegistration::of::<String>(),
    TypeRegistration::of::<c_void>(),
    TypeRegistration::of::<*const c_void>(),
    TypeRegistration::of::<*mut c_void>(),
    TypeRegistration::of::<Vec<u8>>(),
    TypeRegistration::of::<[u8]>(),
];

// Builtins come first, so a submission for a builtin type is always the one refused.
static TYPE_REGISTRATIONS: LazyLock<HashMap<TypeId, &'static TypeRegistration>> =
    LazyLock::new(|| {
        let mut registrations = HashMap::new();
        for registration in BUILTIN_TYPE_REGISTRATIONS
            .iter()
            .chain(inventory::iter::<TypeRegistration>)
        {
            match registrations.entry(TypeRegistration::type_id(registration)) {
                Entry::Vacant(entry) => {
                    entry.insert(registration);
                }
                Entry::Occupied(_) => {
                    log::warn!(
                        "The type `{}` is registered more than once, ignoring the duplicate registration.",
                        registration.type_name()
                    );
                }
            }
        }
        registrations
    });

/// Look up the registration of a type by its [`TypeId`].
///
/// Returns [`None`] if the type has no registration.
#[must_use]
pub fn lookup_registration(type_id: TypeId) -> Option<&'static TypeRegistration> {
    TYPE_REGISTRATIONS.get(&type_id).copied()
}

/// Look up the descriptor of a type by its [`TypeId`].
///
/// Returns [`None`] if the type has no registration.
#[must_use]
pub fn lookup_type_id(type_id: TypeId) -> Option<PrimitiveDescriptor> {
    lookup_registration(type_id).map(TypeRegistration::descriptor)
}

/// Return the [`Conversion`] of a type by its [`TypeId`].
///
/// Types without a registration are unrecognised.
#[must_use]
pub fn conversion_of_type_id(type_id: TypeId) -> Conversion {
    lookup_type_id(type_id).map_or(Conversion::UNKNOWN, Conversion::from_descriptor)
}

/// Return the GDAL data type of a type by its [`TypeId`].
///
/// Types without a registration map to [`GdalDataType::Unknown`].
#[must_use]
pub fn data_type_of_type_id(type_id: TypeId) -> GdalDataType {
    conversion_of_type_id(type_id).data_type()
}

/// Return the GDAL data type of the concrete type behind `value`.
///
/// ```
/// use gdal_type_traits::{data_type_of_val, GdalDataType};
///
/// let samples: [Box<dyn std::any::Any>; 3] = [Box::new(1u16), Box::new(2.5f64), Box::new('c')];
/// let data_types: Vec<_> = samples.iter().map(|sample| data_type_of_val(&**sample)).collect();
/// assert_eq!(
///     data_types,
///     [GdalDataType::UInt16, GdalDataType::Float64, GdalDataType::Unknown]
/// );
/// ```
#[must_use]
pub fn data_type_of_val(value: &dyn Any) -> GdalDataType {
    data_type_of_type_id(value.type_id())
}
