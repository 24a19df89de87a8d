//! biscuit-types - Primitive types for the biscuit user-space runtime
//!
//! This crate gives user-space programs on biscuit a fixed-width view of
//! primitive types and of the variadic calling convention, independent of
//! what the host toolchain calls them.
//!
//! # Architecture
//!
//! - **posix**: names shared with the host C library (`size_t`, `pid_t`, ...)
//! - **kernel**: biscuit shorthand names (`uchar`, `uint`, `ulong`, ...)
//! - **ptr**: the [`NULL`] pointer constant and [`UserPtr`]
//! - **va**: the variadic-argument protocol (`va_start`, `va_arg`, `va_end`)
//! - **abi**: a descriptor table of every alias, checked at build time
//! - **mode** / **dev**: helpers over `mode_t` and `dev_t`
//!
//! Widths are fixed: a conflicting declaration is a build failure.
//!
//! # Usage
//!
//! ```rust
//! use biscuit_types::*;
//!
//! fn first_len(mut args: va::VaArgs<'_>) -> error::Result<size_t> {
//!     let mut ap = va_start!(args);
//!     let len = va_arg!(ap, size_t)?;
//!     va_end!(ap);
//!     Ok(len)
//! }
//!
//! assert_eq!(first_len(va_args![42u64]).unwrap(), 42);
//! assert!(is_null(NULL));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod abi;
pub mod dev;
pub mod error;
pub mod kernel;
pub mod mode;
pub mod posix;
pub mod ptr;
pub mod va;

// Re-export the registry so consumers can glob-import the crate root
pub use crate::kernel::*;
pub use crate::posix::*;

pub use crate::error::{Error, Result};
pub use crate::mode::{FileKind, ModeFlags};
pub use crate::ptr::{NULL, NULL_MUT, UserPtr, is_null};
pub use crate::va::{VaArgs, VaList, va_list};
