//! Sizes of the host's C built-in types, resolved at compile time.
//!
//! A type whose maximum does not match a fixed-width maximum stops the
//! build with "Cannot determine size of ...".

use core::ffi::{c_int, c_long, c_short};
use core::mem::size_of;

use crate::ctype::PlatformType;
use crate::limits::{resolve_width, Limits};
use crate::resolve::Resolution;

/// Size in bytes of `t` under `limits`, for use in const items.
///
/// Evaluating a const with a maximum that matches no fixed-width maximum
/// is a compile error:
///
/// ```compile_fail
/// use cwidth::ctype::PlatformType;
/// use cwidth::limits::Limits;
/// use cwidth::machine::width_or_abort;
///
/// const W: u8 = width_or_abort(
///     &Limits {
///         int_max: 0x7fffff,
///         ..Limits::HOST
///     },
///     PlatformType::Int,
/// );
///
/// fn main() {
///     assert_eq!(W, 3);
/// }
/// ```
///
/// ```
/// use cwidth::ctype::PlatformType;
/// use cwidth::limits::Limits;
/// use cwidth::machine::width_or_abort;
///
/// const W: u8 = width_or_abort(
///     &Limits {
///         int_max: 0x7fff,
///         ..Limits::HOST
///     },
///     PlatformType::Int,
/// );
///
/// fn main() {
///     assert_eq!(W, 2);
/// }
/// ```
pub const fn width_or_abort(limits: &Limits, t: PlatformType) -> u8 {
    let max = match t {
        PlatformType::Short => limits.shrt_max,
        PlatformType::Int => limits.int_max,
        PlatformType::Long => limits.long_max,
        PlatformType::Pointer => limits.intptr_max,
    };
    match resolve_width(max) {
        Some(w) => w,
        None => match t {
            PlatformType::Short => panic!("Cannot determine size of short"),
            PlatformType::Int => panic!("Cannot determine size of int"),
            PlatformType::Long => panic!("Cannot determine size of long"),
            PlatformType::Pointer => panic!("Cannot determine size of void *"),
        },
    }
}

const fn host_width(t: PlatformType) -> u8 {
    width_or_abort(&Limits::HOST, t)
}

pub const SHORT_SIZE: u8 = host_width(PlatformType::Short);
pub const INT_SIZE: u8 = host_width(PlatformType::Int);
pub const LONG_SIZE: u8 = host_width(PlatformType::Long);
pub const PTR_SIZE: u8 = host_width(PlatformType::Pointer);

const_assert!(SHORT_SIZE >= 2);
const_assert!(INT_SIZE >= 2);
const_assert!(LONG_SIZE >= 4);

const_assert!(SHORT_SIZE <= INT_SIZE);
const_assert!(INT_SIZE <= LONG_SIZE);

const_assert_eq!(SHORT_SIZE as usize, size_of::<c_short>());
const_assert_eq!(INT_SIZE as usize, size_of::<c_int>());
const_assert_eq!(LONG_SIZE as usize, size_of::<c_long>());
const_assert_eq!(PTR_SIZE as usize, size_of::<*const ()>());

/// The host widths as a `Resolution`.
pub const fn host() -> Resolution {
    Resolution {
        short: SHORT_SIZE,
        int: INT_SIZE,
        long: LONG_SIZE,
        pointer: PTR_SIZE,
    }
}
