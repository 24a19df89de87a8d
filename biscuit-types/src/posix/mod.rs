//! Primitive names shared with the host C library and POSIX headers.
//!
//! These are the names a ported C program expects from `<sys/types.h>`,
//! `<stddef.h>`, `<stdint.h>` and `<sys/socket.h>`. Every one of them is
//! 64 bits wide on biscuit because the system-call ABI passes arguments in
//! full machine registers.

#![allow(non_camel_case_types)]

use static_assertions::{assert_eq_size, const_assert};

/// Size of an object in bytes
pub type size_t = u64;

/// Signed size, or a negative error code
pub type ssize_t = i64;

/// Seconds since the epoch
pub type time_t = u64;

/// File type and permission bits, see [`crate::mode::ModeFlags`]
pub type mode_t = u64;

/// Device number, see [`crate::dev`]
pub type dev_t = u64;

/// Signed file offset
pub type off_t = i64;

/// Process identifier
pub type pid_t = i64;

/// Length of a socket address
pub type socklen_t = u64;

/// Exact-width 64-bit unsigned integer
pub type uint64_t = u64;

assert_eq_size!(size_t, [u8; 8]);
assert_eq_size!(ssize_t, [u8; 8]);
assert_eq_size!(time_t, [u8; 8]);
assert_eq_size!(mode_t, [u8; 8]);
assert_eq_size!(dev_t, [u8; 8]);
assert_eq_size!(off_t, [u8; 8]);
assert_eq_size!(pid_t, [u8; 8]);
assert_eq_size!(socklen_t, [u8; 8]);
assert_eq_size!(uint64_t, [u8; 8]);

// Sizes must be able to hold any address on the target.
const_assert!(core::mem::size_of::<size_t>() >= core::mem::size_of::<usize>());

// Signedness: the minimum of an unsigned type is zero.
const_assert!(size_t::MIN == 0);
const_assert!(time_t::MIN == 0);
const_assert!(mode_t::MIN == 0);
const_assert!(dev_t::MIN == 0);
const_assert!(socklen_t::MIN == 0);
const_assert!(uint64_t::MIN == 0);
const_assert!(ssize_t::MIN < 0);
const_assert!(off_t::MIN < 0);
const_assert!(pid_t::MIN < 0);
