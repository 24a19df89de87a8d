//! Argument slots and the types that can be read from them.

use core::ffi::c_void;
use core::fmt;

use crate::ptr::UserPtr;

/// What an argument slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Signed integer, sign-extended to 64 bits
    Int,
    /// Unsigned integer, zero-extended to 64 bits
    Uint,
    /// Pointer, including [`crate::NULL`]
    Ptr,
}

impl SlotKind {
    /// Returns true for both integer kinds
    pub fn is_integer(&self) -> bool {
        matches!(self, SlotKind::Int | SlotKind::Uint)
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Int => write!(f, "signed integer"),
            SlotKind::Uint => write!(f, "unsigned integer"),
            SlotKind::Ptr => write!(f, "pointer"),
        }
    }
}

/// One argument of a variadic tail.
///
/// Integers narrower than 64 bits are widened on the way in, the same
/// promotion the calling convention applies when it puts them in a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaSlot {
    /// Signed integer argument
    Int(i64),
    /// Unsigned integer argument
    Uint(u64),
    /// Pointer argument
    Ptr(*const c_void),
}

impl VaSlot {
    /// Kind of value held by this slot
    pub fn kind(&self) -> SlotKind {
        match self {
            VaSlot::Int(_) => SlotKind::Int,
            VaSlot::Uint(_) => SlotKind::Uint,
            VaSlot::Ptr(_) => SlotKind::Ptr,
        }
    }

    /// Raw register image of the slot
    pub fn bits(&self) -> u64 {
        match *self {
            VaSlot::Int(v) => v as u64,
            VaSlot::Uint(v) => v,
            VaSlot::Ptr(p) => p as usize as u64,
        }
    }
}

macro_rules! impl_slot_from {
    ($variant:ident, $wide:ty; $($t:ty),*) => {
        $(
            impl From<$t> for VaSlot {
                fn from(v: $t) -> Self {
                    VaSlot::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_slot_from!(Int, i64; i8, i16, i32, i64, isize);
impl_slot_from!(Uint, u64; u8, u16, u32, u64, usize);

impl From<bool> for VaSlot {
    fn from(v: bool) -> Self {
        VaSlot::Uint(v as u64)
    }
}

impl<T> From<*const T> for VaSlot {
    fn from(p: *const T) -> Self {
        VaSlot::Ptr(p as *const c_void)
    }
}

impl<T> From<*mut T> for VaSlot {
    fn from(p: *mut T) -> Self {
        VaSlot::Ptr(p as *const c_void)
    }
}

impl<T> From<UserPtr<T>> for VaSlot {
    fn from(p: UserPtr<T>) -> Self {
        VaSlot::Ptr(p.cast_void())
    }
}

mod private {
    pub trait Sealed {}
}

/// A type that can be read out of a variadic tail with
/// [`VaList::arg`](super::VaList::arg).
///
/// Any integer type can be read from any integer slot; the bits are
/// reinterpreted and truncated exactly like an `as` cast. Pointers can
/// only be read from pointer slots.
pub trait VaPrimitive: private::Sealed + Sized {
    /// Slot kind this type is naturally passed as
    const KIND: SlotKind;

    /// Converts a slot, or returns `None` if the kinds are incompatible
    fn from_slot(slot: VaSlot) -> Option<Self>;
}

macro_rules! impl_va_int {
    ($kind:ident; $($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl VaPrimitive for $t {
                const KIND: SlotKind = SlotKind::$kind;

                fn from_slot(slot: VaSlot) -> Option<Self> {
                    match slot {
                        VaSlot::Int(v) => Some(v as $t),
                        VaSlot::Uint(v) => Some(v as $t),
                        VaSlot::Ptr(_) => None,
                    }
                }
            }
        )*
    };
}

impl_va_int!(Int; i8, i16, i32, i64, isize);
impl_va_int!(Uint; u8, u16, u32, u64, usize);

impl<T> private::Sealed for *const T {}

impl<T> VaPrimitive for *const T {
    const KIND: SlotKind = SlotKind::Ptr;

    fn from_slot(slot: VaSlot) -> Option<Self> {
        match slot {
            VaSlot::Ptr(p) => Some(p as *const T),
            _ => None,
        }
    }
}

impl<T> private::Sealed for *mut T {}

impl<T> VaPrimitive for *mut T {
    const KIND: SlotKind = SlotKind::Ptr;

    fn from_slot(slot: VaSlot) -> Option<Self> {
        match slot {
            VaSlot::Ptr(p) => Some(p as *mut T),
            _ => None,
        }
    }
}

impl<T> private::Sealed for UserPtr<T> {}

impl<T> VaPrimitive for UserPtr<T> {
    const KIND: SlotKind = SlotKind::Ptr;

    fn from_slot(slot: VaSlot) -> Option<Self> {
        match slot {
            VaSlot::Ptr(p) => Some(UserPtr::new(p as *mut T)),
            _ => None,
        }
    }
}
