#[cfg(doc)]
use crate::{GdalType, TypeDescriptor, TypeRegistration};

/// A macro to define field-less enumerations that implement [`TypeDescriptor`] (and hence [`GdalType`]).
///
/// Each enumeration is written with its base integer type after the name, `enum Name: u8 { .. }`.
/// The macro emits the enumeration with `#[repr(u8)]`, so the declared base type is always the real underlying type and the enumeration classifies as that type.
/// The enumeration is also submitted as a [`TypeRegistration`] so that it can be looked up by [`TypeId`](std::any::TypeId).
///
/// ```
/// use gdal_type_traits::{impl_gdal_enum, GdalDataType, GdalType};
///
/// impl_gdal_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Classification: i8 {
///         Water = -1,
///         Land,
///     }
///
///     enum Wide: u64 {
///         Value,
///     }
/// }
///
/// fn main() {
///     assert_eq!(Classification::DATA_TYPE, GdalDataType::Byte);
///     assert_eq!(Classification::Land as i8, 0);
///     assert_eq!(Wide::DATA_TYPE, GdalDataType::Unknown);
/// }
/// ```
///
/// Only enumerations are accepted:
/// ```compile_fail
/// gdal_type_traits::impl_gdal_enum! {
///     struct Band: u32 {
///         Red,
///     }
/// }
/// ```
///
/// the base type must be an integer:
/// ```compile_fail
/// gdal_type_traits::impl_gdal_enum! {
///     enum Band: f32 {
///         Red,
///     }
/// }
/// ```
///
/// and the discriminants must fit the base type:
/// ```compile_fail
/// gdal_type_traits::impl_gdal_enum! {
///     enum Band: u32 {
///         Red = -1,
///     }
/// }
/// ```
#[macro_export]
macro_rules! impl_gdal_enum {
    ($(
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $discriminant:expr)?
            ),* $(,)?
        }
    )+) => {
        $(
            $(#[$meta])*
            #[repr($repr)]
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant $(= $discriminant)?
                ),*
            }

            const _: () = ::core::assert!(
                ::core::matches!(
                    <$repr as $crate::TypeDescriptor>::DESCRIPTOR.category(),
                    $crate::TypeCategory::Integral
                ),
                "The enumeration base type must be integral."
            );

            impl $crate::TypeDescriptor for $name {
                const DESCRIPTOR: $crate::PrimitiveDescriptor = $crate::PrimitiveDescriptor::enumeration(
                    <$repr as $crate::TypeDescriptor>::DESCRIPTOR,
                );
            }

            $crate::inventory::submit! {
                $crate::TypeRegistration::of::<$name>()
            }
        )+
    };
}

/// A macro to implement [`TypeDescriptor`] for types without a GDAL data type, such as structs.
///
/// The types resolve to [`GdalDataType::Unknown`](crate::GdalDataType::Unknown) and are submitted as a [`TypeRegistration`].
///
/// ```
/// use gdal_type_traits::{impl_gdal_unrecognized, GdalType};
///
/// struct Rgb {
///     r: u8,
///     g: u8,
///     b: u8,
/// }
///
/// impl_gdal_unrecognized!(Rgb);
///
/// fn main() {
///     assert!(!Rgb::IS_RECOGNIZED);
/// }
/// ```
#[macro_export]
macro_rules! impl_gdal_unrecognized {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::TypeDescriptor for $type {
                const DESCRIPTOR: $crate::PrimitiveDescriptor =
                    $crate::PrimitiveDescriptor::other(::core::mem::size_of::<$type>());
            }

            $crate::inventory::submit! {
                $crate::TypeRegistration::of::<$type>()
            }
        )+
    };
}

/// A macro asserting at compile time that types have a GDAL data type.
///
/// ```
/// gdal_type_traits::assert_gdal_type!(u8, i16, f64);
/// ```
///
/// ```compile_fail
/// gdal_type_traits::assert_gdal_type!(u64);
/// ```
#[macro_export]
macro_rules! assert_gdal_type {
    ($($type:ty),+ $(,)?) => {
        $(
            const _: () = ::core::assert!(
                <$type as $crate::GdalType>::IS_RECOGNIZED,
                ::core::concat!("`", ::core::stringify!($type), "` has no GDAL data type.")
            );
        )+
    };
}
