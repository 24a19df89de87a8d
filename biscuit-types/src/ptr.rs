//! Null pointer constant and nullable user-space pointers.

use core::ffi::c_void;
use core::fmt;
use core::ptr::{self, NonNull};

use crate::kernel::ulong;

/// The null pointer.
///
/// This is a pointer, not an integer: it cannot be used where a number is
/// expected, and a variadic tail records it as a pointer argument.
///
/// ```compile_fail
/// let n: u64 = biscuit_types::NULL;
/// ```
pub const NULL: *const c_void = ptr::null();

/// Mutable null pointer.
pub const NULL_MUT: *mut c_void = ptr::null_mut();

/// Returns true if `p` is the null pointer.
#[inline]
pub fn is_null<T: ?Sized>(p: *const T) -> bool {
    p.is_null()
}

/// A user-space address that may be null.
///
/// The syscall ABI moves addresses as plain `ulong` values; this wrapper
/// keeps the pointer type attached on the Rust side.
#[repr(transparent)]
pub struct UserPtr<T> {
    inner: Option<NonNull<T>>,
}

impl<T> UserPtr<T> {
    /// The null user pointer
    pub const fn null() -> Self {
        Self { inner: None }
    }

    /// Wraps a raw pointer
    pub fn new(p: *mut T) -> Self {
        Self { inner: NonNull::new(p) }
    }

    /// Builds a pointer from an address received over the syscall ABI
    pub fn from_addr(addr: ulong) -> Self {
        Self::new(ptr::without_provenance_mut(addr as usize))
    }

    /// Address as carried by the syscall ABI; zero for null
    pub fn addr(&self) -> ulong {
        self.inner.map_or(0, |p| p.as_ptr() as usize as ulong)
    }

    /// Returns true for the null pointer
    pub fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    /// Raw pointer, null if unset
    pub fn as_ptr(&self) -> *mut T {
        self.inner.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Non-null pointer, if any
    pub fn as_non_null(&self) -> Option<NonNull<T>> {
        self.inner
    }

    /// Erases the pointee type
    pub fn cast_void(&self) -> *const c_void {
        self.as_ptr() as *const c_void
    }
}

impl<T> Clone for UserPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for UserPtr<T> {}

impl<T> PartialEq for UserPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Eq for UserPtr<T> {}

impl<T> Default for UserPtr<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for UserPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            Some(p) => write!(f, "UserPtr({:p})", p),
            None => write!(f, "UserPtr(NULL)"),
        }
    }
}

impl<T> From<*mut T> for UserPtr<T> {
    fn from(p: *mut T) -> Self {
        Self::new(p)
    }
}
