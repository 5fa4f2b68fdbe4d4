//! C99 integer types.
//!
//! The fixed-width types map directly onto Rust primitives; the platform
//! built-ins come from `core::ffi`.

#![allow(non_camel_case_types)]

use core::mem::size_of;

pub use core::ffi::{c_int, c_long, c_short, c_uint, c_ulong, c_ushort};

pub type int8_t = i8;
pub type uint8_t = u8;
pub type int16_t = i16;
pub type uint16_t = u16;
pub type int32_t = i32;
pub type uint32_t = u32;
pub type int64_t = i64;
pub type uint64_t = u64;

/// Difference between two pointers.
pub type ptrdiff_t = isize;
/// An array index or object size.
pub type size_t = usize;
pub type intptr_t = isize;
pub type uintptr_t = usize;

const_assert_eq!(size_of::<int8_t>(), 1);
const_assert_eq!(size_of::<uint8_t>(), 1);
const_assert_eq!(size_of::<int16_t>(), 2);
const_assert_eq!(size_of::<uint16_t>(), 2);
const_assert_eq!(size_of::<int32_t>(), 4);
const_assert_eq!(size_of::<uint32_t>(), 4);
const_assert_eq!(size_of::<int64_t>(), 8);
const_assert_eq!(size_of::<uint64_t>(), 8);

const_assert_eq!(size_of::<intptr_t>(), size_of::<*const ()>());
const_assert_eq!(size_of::<uintptr_t>(), size_of::<*const ()>());
const_assert_eq!(size_of::<size_t>(), size_of::<ptrdiff_t>());
