//! [`TypeDescriptor`] implementations for primitive and standard library types.

use std::ffi::c_void;

use crate::{PrimitiveDescriptor, TypeDescriptor};

macro_rules! impl_type_descriptor_integral {
    ($is_signed:literal: $($type:ty),+ $(,)?) => {
        $(
            impl TypeDescriptor for $type {
                const DESCRIPTOR: PrimitiveDescriptor =
                    PrimitiveDescriptor::integral(size_of::<$type>(), $is_signed);
            }
        )+
    };
}

macro_rules! impl_type_descriptor_floating_point {
    ($($type:ty),+ $(,)?) => {
        $(
            impl TypeDescriptor for $type {
                const DESCRIPTOR: PrimitiveDescriptor =
                    PrimitiveDescriptor::floating_point(size_of::<$type>());
            }
        )+
    };
}

macro_rules! impl_type_descriptor_other {
    ($($type:ty),+ $(,)?) => {
        $(
            impl TypeDescriptor for $type {
                const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(size_of::<$type>());
            }
        )+
    };
}

impl_type_descriptor_integral!(true: i8, i16, i32, i64, i128, isize);
impl_type_descriptor_integral!(false: u8, u16, u32, u64, u128, usize);
impl_type_descriptor_floating_point!(f32, f64, half::f16, half::bf16);
impl_type_descriptor_other!(char, (), String, c_void);

// A one byte unsigned integer, so `bool` maps to `Byte`.
impl TypeDescriptor for bool {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::integral(size_of::<bool>(), false);
}

impl TypeDescriptor for str {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(0);
}

impl<T> TypeDescriptor for [T] {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(0);
}

impl<T, const N: usize> TypeDescriptor for [T; N] {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(size_of::<[T; N]>());
}

impl<T> TypeDescriptor for Vec<T> {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(size_of::<Vec<T>>());
}

impl<T> TypeDescriptor for Option<T> {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(size_of::<Option<T>>());
}

impl<T: ?Sized> TypeDescriptor for Box<T> {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(size_of::<Box<T>>());
}

impl<T: ?Sized> TypeDescriptor for &T {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(size_of::<&T>());
}

impl<T: ?Sized> TypeDescriptor for &mut T {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(size_of::<&mut T>());
}

impl<T: ?Sized> TypeDescriptor for *const T {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(size_of::<*const T>());
}

impl<T: ?Sized> TypeDescriptor for *mut T {
    const DESCRIPTOR: PrimitiveDescriptor = PrimitiveDescriptor::other(size_of::<*mut T>());
}

macro_rules! impl_type_descriptor_tuple {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<$($name),+> TypeDescriptor for ($($name,)+) {
                const DESCRIPTOR: PrimitiveDescriptor =
                    PrimitiveDescriptor::other(size_of::<($($name,)+)>());
            }
        )+
    };
}

impl_type_descriptor_tuple!((A), (A, B), (A, B, C), (A, B, C, D));
