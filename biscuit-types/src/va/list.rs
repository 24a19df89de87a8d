//! The variadic tail and the cursor that walks it.

use core::marker::PhantomData;

use super::slot::{VaPrimitive, VaSlot};
use crate::error::{Error, Result};

/// The variable argument tail passed to a variadic function.
///
/// Build one with [`va_args!`](crate::va_args) at the call site; the callee
/// takes it as its last parameter and walks it with [`VaArgs::start`].
#[derive(Debug)]
pub struct VaArgs<'a> {
    // Public only so `va_args!` can build the tail with a struct literal.
    #[doc(hidden)]
    pub __slots: &'a [VaSlot],
}

impl<'a> VaArgs<'a> {
    /// Wraps already-promoted argument slots
    pub const fn new(slots: &'a [VaSlot]) -> Self {
        Self { __slots: slots }
    }

    /// An empty tail
    pub const fn empty() -> Self {
        Self { __slots: &[] }
    }

    /// Number of arguments in the tail
    pub fn len(&self) -> usize {
        self.__slots.len()
    }

    /// Returns true if the tail has no arguments
    pub fn is_empty(&self) -> bool {
        self.__slots.is_empty()
    }

    /// Binds a cursor to the first argument of the tail (`va_start`).
    ///
    /// The tail stays mutably borrowed for as long as the cursor lives, so
    /// a call frame can hold only one cursor obtained this way. Use
    /// [`VaList::copy`] for a second one.
    ///
    /// ```compile_fail
    /// use biscuit_types::va::VaArgs;
    ///
    /// fn twice(mut args: VaArgs<'_>) {
    ///     let a = args.start();
    ///     let b = args.start();
    ///     a.end();
    ///     b.end();
    /// }
    /// ```
    pub fn start(&mut self) -> VaList<'_> {
        #[cfg(feature = "log")]
        log::trace!("va_start: {} argument(s)", self.__slots.len());
        VaList {
            slots: self.__slots,
            pos: 0,
            _frame: PhantomData,
        }
    }
}

impl Default for VaArgs<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Cursor over a variadic tail (`va_list`).
///
/// Arguments can only be read through a cursor, so there is no way to read
/// one before [`VaArgs::start`]:
///
/// ```compile_fail
/// use biscuit_types::va::{VaArgs, VaList};
///
/// fn first(args: VaArgs<'_>) -> i32 {
///     VaList::arg::<i32>(&mut args).unwrap()
/// }
/// ```
///
/// [`VaList::end`] consumes the cursor, so it can't be used afterwards:
///
/// ```compile_fail
/// use biscuit_types::va::VaArgs;
///
/// fn after_end(mut args: VaArgs<'_>) -> i32 {
///     let mut ap = args.start();
///     ap.end();
///     ap.arg::<i32>().unwrap()
/// }
/// ```
///
/// The cursor belongs to the thread running the call frame:
///
/// ```compile_fail
/// use biscuit_types::va::VaArgs;
///
/// fn share(mut args: VaArgs<'_>) {
///     let ap = args.start();
///     std::thread::scope(|s| {
///         s.spawn(move || ap.end());
///     });
/// }
/// ```
///
/// Every read goes through [`VaList::arg`] with an explicit type; the
/// cursor hands out no untyped slots:
///
/// ```compile_fail
/// use biscuit_types::va::VaArgs;
///
/// fn raw(mut args: VaArgs<'_>) {
///     let mut ap = args.start();
///     let _ = ap.next();
/// }
/// ```
///
/// Dropping the cursor releases it, so early returns and `?` need no extra
/// bookkeeping.
#[must_use = "a cursor does nothing unless arguments are read from it"]
#[derive(Debug)]
pub struct VaList<'a> {
    slots: &'a [VaSlot],
    pos: usize,
    _frame: PhantomData<*const ()>,
}

impl<'a> VaList<'a> {
    /// Reads the next argument as `T` and advances (`va_arg`).
    ///
    /// On error the cursor does not move, so the caller may retry with the
    /// right type.
    pub fn arg<T: VaPrimitive>(&mut self) -> Result<T> {
        let position = self.pos;
        let slot = *self.slots.get(position).ok_or(Error::Exhausted { position })?;
        let value = T::from_slot(slot).ok_or_else(|| {
            #[cfg(feature = "log")]
            log::debug!(
                "va_arg: argument {} is {}, requested as {}",
                position,
                slot.kind(),
                T::KIND
            );
            Error::TypeMismatch {
                position,
                expected: T::KIND,
                found: slot.kind(),
            }
        })?;
        self.pos += 1;
        Ok(value)
    }

    /// Index of the next argument to be read
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of arguments not yet read
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.pos
    }

    /// An independent cursor at the same position (`va_copy`)
    pub fn copy(&self) -> VaList<'a> {
        VaList {
            slots: self.slots,
            pos: self.pos,
            _frame: PhantomData,
        }
    }

    /// Releases the cursor (`va_end`)
    pub fn end(self) {}
}

impl Drop for VaList<'_> {
    fn drop(&mut self) {
        #[cfg(feature = "log")]
        log::trace!("va_end: read {} of {} argument(s)", self.pos, self.slots.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::va::SlotKind;

    #[test]
    fn test_empty_tail() {
        let mut args = VaArgs::empty();
        assert!(args.is_empty());
        let mut ap = args.start();
        assert_eq!(ap.remaining(), 0);
        assert_eq!(ap.arg::<i32>(), Err(Error::Exhausted { position: 0 }));
        ap.end();
    }

    #[test]
    fn test_mismatch_keeps_position() {
        let slots = [VaSlot::from(crate::NULL), VaSlot::from(5u32)];
        let mut args = VaArgs::new(&slots);
        let mut ap = args.start();
        assert_eq!(
            ap.arg::<u64>(),
            Err(Error::TypeMismatch {
                position: 0,
                expected: SlotKind::Uint,
                found: SlotKind::Ptr,
            })
        );
        assert_eq!(ap.position(), 0);
        assert!(ap.arg::<*const u8>().unwrap().is_null());
        assert_eq!(ap.arg::<u32>(), Ok(5));
        assert_eq!(ap.remaining(), 0);
        ap.end();
    }

    #[test]
    fn test_copy_is_independent() {
        let slots = [VaSlot::from(1i32), VaSlot::from(2i32), VaSlot::from(3i32)];
        let mut args = VaArgs::new(&slots);
        let mut ap = args.start();
        assert_eq!(ap.arg::<i32>(), Ok(1));
        let mut aq = ap.copy();
        assert_eq!(aq.arg::<i32>(), Ok(2));
        assert_eq!(aq.arg::<i32>(), Ok(3));
        assert_eq!(ap.position(), 1);
        assert_eq!(ap.arg::<i32>(), Ok(2));
        aq.end();
        ap.end();
    }

    #[test]
    fn test_restart_after_end() {
        let slots = [VaSlot::from(9u8)];
        let mut args = VaArgs::new(&slots);
        let mut ap = args.start();
        assert_eq!(ap.arg::<u8>(), Ok(9));
        ap.end();
        let mut ap = args.start();
        assert_eq!(ap.arg::<u8>(), Ok(9));
        ap.end();
    }

    #[test]
    fn test_remaining_tracks_typed_reads() {
        let slots = [VaSlot::from(-4i64), VaSlot::from(4u64)];
        let mut args = VaArgs::new(&slots);
        let mut ap = args.start();
        assert_eq!(ap.remaining(), 2);
        assert_eq!(ap.arg::<i64>(), Ok(-4));
        assert_eq!((ap.position(), ap.remaining()), (1, 1));
        assert_eq!(ap.arg::<u64>(), Ok(4));
        assert_eq!(ap.remaining(), 0);
        assert_eq!(ap.arg::<u64>(), Err(Error::Exhausted { position: 2 }));
        ap.end();
    }
}
