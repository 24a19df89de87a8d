//! Variadic-argument protocol
//!
//! A variadic function takes its fixed parameters followed by a
//! [`VaArgs`] tail. Reading the tail is a three-step protocol:
//!
//! 1. [`VaArgs::start`] (`va_start`) binds a [`VaList`] cursor to the first
//!    argument after the named parameters.
//! 2. [`VaList::arg`] (`va_arg`) yields the next argument as the requested
//!    type and advances the cursor.
//! 3. [`VaList::end`] (`va_end`) releases the cursor. Dropping it does the
//!    same on every other exit path.
//!
//! ```rust
//! use biscuit_types::{va_arg, va_args, va_end, va_start};
//! use biscuit_types::kernel::uint;
//! use biscuit_types::va::VaArgs;
//! use biscuit_types::error::Result;
//!
//! fn sum(count: uint, mut args: VaArgs<'_>) -> Result<i64> {
//!     let mut ap = va_start!(args);
//!     let mut total = 0;
//!     for _ in 0..count {
//!         total += va_arg!(ap, i64)?;
//!     }
//!     va_end!(ap);
//!     Ok(total)
//! }
//!
//! assert_eq!(sum(3, va_args![1, 2, 3]).unwrap(), 6);
//! assert_eq!(sum(0, va_args![]).unwrap(), 0);
//! ```

mod list;
mod slot;

pub use list::{VaArgs, VaList};
pub use slot::{SlotKind, VaPrimitive, VaSlot};

/// C name of the cursor type
#[allow(non_camel_case_types)]
pub type va_list<'a> = VaList<'a>;

/// Builds a variadic tail from a list of arguments.
///
/// Each argument is promoted to a 64-bit [`VaSlot`]: signed integers are
/// sign-extended, unsigned integers and `bool` zero-extended, and pointers
/// (including [`NULL`](crate::NULL)) kept as pointers. Unsuffixed integer
/// literals are `i32`, as in C.
#[macro_export]
macro_rules! va_args {
    ($($arg:expr),* $(,)?) => {
        $crate::va::VaArgs {
            __slots: &[$($crate::va::VaSlot::from($arg)),*],
        }
    };
}

/// `va_start`: binds a cursor to a variadic tail.
#[macro_export]
macro_rules! va_start {
    ($args:expr) => {
        $args.start()
    };
}

/// `va_arg`: reads the next argument as the given type.
#[macro_export]
macro_rules! va_arg {
    ($ap:expr, $t:ty) => {
        $ap.arg::<$t>()
    };
}

/// `va_end`: releases a cursor.
#[macro_export]
macro_rules! va_end {
    ($ap:expr) => {
        $ap.end()
    };
}
