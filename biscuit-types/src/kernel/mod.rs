//! biscuit-internal shorthand names.
//!
//! The user-space runtime and the kernel sources share these short names.
//! They never appear in a POSIX header, so they are kept apart from
//! [`crate::posix`].

#![allow(non_camel_case_types)]

use static_assertions::{assert_eq_size, const_assert};

/// Unsigned byte
pub type uchar = u8;

/// 16-bit unsigned integer
pub type ushort = u16;

/// 32-bit unsigned integer
pub type uint = u32;

/// Machine-width unsigned integer
pub type ulong = u64;

/// Byte, under its shorthand name. This is the language primitive itself.
pub use core::primitive::u8;

assert_eq_size!(uchar, [u8; 1]);
assert_eq_size!(ushort, [u8; 2]);
assert_eq_size!(uint, [u8; 4]);
assert_eq_size!(ulong, [u8; 8]);

const_assert!(uchar::MIN == 0);
const_assert!(ushort::MIN == 0);
const_assert!(uint::MIN == 0);
const_assert!(ulong::MIN == 0);

// ulong carries addresses between user space and the kernel.
const_assert!(core::mem::size_of::<ulong>() >= core::mem::size_of::<usize>());
