//! Variadic protocol tests

use biscuit_types::error::{Error, Result};
use biscuit_types::va::{SlotKind, VaArgs, VaSlot};
use biscuit_types::*;
use core::ffi::c_void;
use proptest::prelude::*;

fn sum(count: uint, mut args: VaArgs<'_>) -> Result<i64> {
    let mut ap = va_start!(args);
    let mut total = 0;
    for _ in 0..count {
        total += va_arg!(ap, i64)?;
    }
    va_end!(ap);
    Ok(total)
}

/// Tiny printf: `%d` signed, `%u` unsigned, `%c` byte, `%p` pointer.
fn format(fmt: &str, mut args: VaArgs<'_>) -> Result<String> {
    let mut ap: va_list<'_> = va_start!(args);
    let mut out = String::new();
    let mut chars = fmt.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => out += &va_arg!(ap, i32)?.to_string(),
            Some('u') => out += &va_arg!(ap, ulong)?.to_string(),
            Some('c') => out.push(va_arg!(ap, uchar)? as char),
            Some('p') => {
                let p = va_arg!(ap, *const c_void)?;
                if is_null(p) {
                    out += "(nil)";
                } else {
                    out += &format!("{:p}", p);
                }
            }
            Some(other) => out.push(other),
            None => break,
        }
    }
    va_end!(ap);
    Ok(out)
}

#[test]
fn test_zero_arguments() {
    assert_eq!(sum(0, va_args![]), Ok(0));
    assert_eq!(format("plain", va_args![]).unwrap(), "plain");
}

#[test]
fn test_one_argument() {
    assert_eq!(sum(1, va_args![41i64]), Ok(41));
}

#[test]
fn test_many_arguments() {
    assert_eq!(sum(6, va_args![1, 2, 3, 4, 5, -6]), Ok(9));
    let s = format("%d %u %c %p", va_args![-7, 8u64, b'x', NULL]).unwrap();
    assert_eq!(s, "-7 8 x (nil)");
}

#[test]
fn test_too_few_arguments() {
    assert_eq!(sum(3, va_args![1, 2]), Err(Error::Exhausted { position: 2 }));
}

#[test]
fn test_null_is_not_an_integer() {
    assert_eq!(
        sum(1, va_args![NULL]),
        Err(Error::TypeMismatch {
            position: 0,
            expected: SlotKind::Int,
            found: SlotKind::Ptr,
        })
    );
}

#[test]
fn test_integer_is_not_a_pointer() {
    let err = format("%p", va_args![0]).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            position: 0,
            expected: SlotKind::Ptr,
            found: SlotKind::Int,
        }
    );
}

#[test]
fn test_pointer_keeps_target() {
    let value = 99u32;
    let mut args = va_args![&value as *const u32];
    let mut ap = args.start();
    let p = ap.arg::<*const u32>().unwrap();
    assert_eq!(unsafe { *p }, 99);
    ap.end();
}

#[test]
fn test_early_return_releases_cursor() {
    fn first_positive(args: &mut VaArgs<'_>) -> Option<i32> {
        let mut ap = args.start();
        while let Ok(v) = ap.arg::<i32>() {
            if v > 0 {
                return Some(v);
            }
        }
        ap.end();
        None
    }

    let slots = [VaSlot::from(-1), VaSlot::from(3), VaSlot::from(4)];
    let mut args = VaArgs::new(&slots);
    assert_eq!(first_positive(&mut args), Some(3));
    // Same tail: the callee's cursor was released on the early return.
    let mut ap = args.start();
    assert_eq!(ap.position(), 0);
    assert_eq!(ap.remaining(), 3);
    assert_eq!(ap.arg::<i32>(), Ok(-1));
    ap.end();
    assert_eq!(first_positive(&mut args), Some(3));
}

#[test]
fn test_error_return_releases_cursor() {
    fn sum_three(args: &mut VaArgs<'_>) -> Result<i64> {
        let mut ap = args.start();
        let total = ap.arg::<i64>()? + ap.arg::<i64>()? + ap.arg::<i64>()?;
        ap.end();
        Ok(total)
    }

    let mut args = va_args![1, 2];
    assert_eq!(sum_three(&mut args), Err(Error::Exhausted { position: 2 }));
    let mut ap = args.start();
    assert_eq!(ap.arg::<i32>(), Ok(1));
    ap.end();
}

proptest! {
    #[test]
    fn prop_narrow_reads_truncate_like_casts(v in any::<i64>()) {
        let slots = [VaSlot::from(v); 4];
        let mut args = VaArgs::new(&slots);
        let mut ap = args.start();
        prop_assert_eq!(ap.arg::<uchar>().unwrap(), v as uchar);
        prop_assert_eq!(ap.arg::<ushort>().unwrap(), v as ushort);
        prop_assert_eq!(ap.arg::<uint>().unwrap(), v as uint);
        prop_assert_eq!(ap.arg::<ssize_t>().unwrap(), v);
        prop_assert_eq!(ap.remaining(), 0);
    }

    #[test]
    fn prop_unsigned_slot_reads_as_signed(v in any::<u64>()) {
        let slots = [VaSlot::from(v)];
        let mut args = VaArgs::new(&slots);
        let mut ap = args.start();
        prop_assert_eq!(ap.arg::<off_t>().unwrap(), v as off_t);
    }
}
