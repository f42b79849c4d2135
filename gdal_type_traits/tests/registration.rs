//! Tests for the `TypeId` registration table.
//!
//! The table is collected once per process, so everything that observes its construction lives in a single test.

use std::any::TypeId;

use gdal_type_traits::{
    data_type_of_type_id, data_type_of_val, impl_gdal_unrecognized, lookup_registration,
    lookup_type_id, try_data_type_of_type_id, GdalDataType, GdalType, PrimitiveDescriptor,
    TypeRegistration, UnsupportedTypeError,
};

#[allow(dead_code)]
struct Pixel(u8, u8, u8);

impl_gdal_unrecognized!(Pixel);

gdal_type_traits::inventory::submit! {
    TypeRegistration::of::<u8>()
}

gdal_type_traits::inventory::submit! {
    TypeRegistration::of::<Pixel>()
}

#[test]
fn duplicate_registrations_are_refused() {
    testing_logger::setup();

    assert_eq!(data_type_of_val(&1u8), GdalDataType::Byte);
    assert_eq!(data_type_of_type_id(TypeId::of::<u8>()), u8::DATA_TYPE);
    assert_eq!(
        lookup_type_id(TypeId::of::<u8>()),
        Some(PrimitiveDescriptor::integral(1, false))
    );
    assert_eq!(
        lookup_type_id(TypeId::of::<Pixel>()),
        Some(PrimitiveDescriptor::other(3))
    );
    assert_eq!(data_type_of_type_id(TypeId::of::<Pixel>()), Pixel::DATA_TYPE);

    let registration = lookup_registration(TypeId::of::<Pixel>()).unwrap();
    assert_eq!(
        try_data_type_of_type_id(TypeId::of::<Pixel>()),
        Err(UnsupportedTypeError::new(registration.type_name()))
    );
    assert!(try_data_type_of_type_id(TypeId::of::<Pixel>())
        .unwrap_err()
        .to_string()
        .ends_with("Pixel` has no GDAL data type"));

    testing_logger::validate(|captured_logs| {
        assert_eq!(captured_logs.len(), 2);
        assert!(captured_logs
            .iter()
            .all(|log| log.level == log::Level::Warn));
        assert!(captured_logs.iter().any(|log| log.body
            == "The type `u8` is registered more than once, ignoring the duplicate registration."));
        assert!(captured_logs.iter().any(|log| log.body.ends_with(
            "Pixel` is registered more than once, ignoring the duplicate registration."
        )));
    });
}
