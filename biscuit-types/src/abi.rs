//! ABI descriptor table for the primitive type registry.
//!
//! Every alias of [`crate::posix`] and [`crate::kernel`] has one entry here.
//! The entries are checked against the real type sizes at build time.

use core::fmt;
use core::mem::size_of;

use static_assertions::const_assert;

use crate::error::{Error, Result};
use crate::kernel::{uchar, uint, ulong, ushort};
use crate::posix::{dev_t, mode_t, off_t, pid_t, size_t, socklen_t, ssize_t, time_t, uint64_t};

/// Namespace an alias is exported from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Names shared with the host C library, see [`crate::posix`]
    Posix,
    /// biscuit-internal shorthand, see [`crate::kernel`]
    Kernel,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Posix => write!(f, "posix"),
            Namespace::Kernel => write!(f, "kernel"),
        }
    }
}

/// Bit width of an alias
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Width {
    /// 8 bits
    W8 = 8,
    /// 16 bits
    W16 = 16,
    /// 32 bits
    W32 = 32,
    /// 64 bits
    W64 = 64,
}

impl Width {
    /// Width from a bit count
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            _ => Err(Error::InvalidWidth { bits }),
        }
    }

    /// Number of bits
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Number of bytes
    pub const fn bytes(self) -> usize {
        self as usize / 8
    }
}

/// Description of one registry alias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasInfo {
    /// Name as written in C sources
    pub name: &'static str,
    /// Namespace the alias lives in
    pub namespace: Namespace,
    /// Underlying width
    pub width: Width,
    /// Whether the underlying integer is signed
    pub signed: bool,
}

impl AliasInfo {
    const fn new(name: &'static str, namespace: Namespace, width: Width, signed: bool) -> Self {
        Self { name, namespace, width, signed }
    }

    /// Size in bytes
    pub const fn size(&self) -> usize {
        self.width.bytes()
    }
}

impl fmt::Display for AliasInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{} ({}{})",
            self.namespace,
            self.name,
            if self.signed { "i" } else { "u" },
            self.width.bits()
        )
    }
}

use Namespace::{Kernel, Posix};
use Width::{W8, W16, W32, W64};

/// All registry aliases
pub const ALIASES: &[AliasInfo] = &[
    AliasInfo::new("uchar", Kernel, W8, false),
    AliasInfo::new("u8", Kernel, W8, false),
    AliasInfo::new("ushort", Kernel, W16, false),
    AliasInfo::new("uint", Kernel, W32, false),
    AliasInfo::new("ulong", Kernel, W64, false),
    AliasInfo::new("uint64_t", Posix, W64, false),
    AliasInfo::new("size_t", Posix, W64, false),
    AliasInfo::new("socklen_t", Posix, W64, false),
    AliasInfo::new("time_t", Posix, W64, false),
    AliasInfo::new("mode_t", Posix, W64, false),
    AliasInfo::new("dev_t", Posix, W64, false),
    AliasInfo::new("ssize_t", Posix, W64, true),
    AliasInfo::new("off_t", Posix, W64, true),
    AliasInfo::new("pid_t", Posix, W64, true),
];

/// Finds an alias by its C name
pub fn lookup(name: &str) -> Option<&'static AliasInfo> {
    ALIASES.iter().find(|info| info.name == name)
}

/// Aliases exported from one namespace
pub fn by_namespace(namespace: Namespace) -> impl Iterator<Item = &'static AliasInfo> {
    ALIASES.iter().filter(move |info| info.namespace == namespace)
}

const fn entry(name: &str) -> AliasInfo {
    let mut i = 0;
    while i < ALIASES.len() {
        if const_str_eq(ALIASES[i].name, name) {
            return ALIASES[i];
        }
        i += 1;
    }
    panic!("alias missing from ALIASES");
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

macro_rules! check_alias {
    ($($t:ident),*) => {
        $(
            const_assert!(entry(stringify!($t)).size() == size_of::<$t>());
            const_assert!(entry(stringify!($t)).signed == ($t::MIN != 0));
        )*
    };
}

check_alias!(uchar, ushort, uint, ulong);
check_alias!(uint64_t, size_t, socklen_t, time_t, mode_t, dev_t, ssize_t, off_t, pid_t);
const_assert!(entry("u8").size() == size_of::<crate::kernel::u8>());
