//! Error handling module for the biscuit primitive type layer

use core::fmt;

use crate::va::SlotKind;

/// Common error type used throughout the biscuit type layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The cursor moved past the last argument of the tail
    Exhausted {
        /// Index of the argument that was requested
        position: usize,
    },
    /// The requested type does not match the kind of the argument slot
    TypeMismatch {
        /// Index of the offending argument
        position: usize,
        /// Kind the caller asked for
        expected: SlotKind,
        /// Kind the slot actually holds
        found: SlotKind,
    },
    /// A bit width that no registry alias uses
    InvalidWidth {
        /// The rejected width
        bits: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Exhausted { position } => {
                write!(f, "Variadic argument {} requested past the end of the list", position)
            }
            Error::TypeMismatch { position, expected, found } => write!(
                f,
                "Variadic argument {} is {}, requested as {}",
                position, found, expected
            ),
            Error::InvalidWidth { bits } => write!(f, "Invalid width: {} bits", bits),
        }
    }
}

impl core::error::Error for Error {}

/// Result type for operations that can fail
pub type Result<T> = core::result::Result<T, Error>;
