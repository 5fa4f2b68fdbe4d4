//! Sizes of the C built-in integer types.
//!
//! [`machine`] holds the host sizes, fixed at compile time. [`resolve`]
//! does the same resolution at run time over any [`limits::Limits`] table,
//! which is how other targets are described.

pub mod cmdline;
pub mod ctype;
pub mod error;
pub mod header;
pub mod limits;
pub mod literal;
pub mod machine;
pub mod resolve;
pub mod types;

#[cfg(test)]
mod test;

#[macro_use]
extern crate static_assertions;

#[macro_use]
extern crate lazy_static;

pub use machine::{INT_SIZE, LONG_SIZE, PTR_SIZE, SHORT_SIZE};
