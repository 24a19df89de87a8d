//! Device numbers.
//!
//! A `dev_t` carries the major number in its upper 32 bits and the minor
//! number in its lower 32 bits.

use crate::kernel::uint;
use crate::posix::dev_t;

/// Packs a major and minor number into a device number
pub const fn makedev(major: uint, minor: uint) -> dev_t {
    ((major as dev_t) << 32) | minor as dev_t
}

/// Major number of a device
pub const fn major(dev: dev_t) -> uint {
    (dev >> 32) as uint
}

/// Minor number of a device
pub const fn minor(dev: dev_t) -> uint {
    dev as uint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let dev = makedev(2, 1);
        assert_eq!(dev, 0x0000_0002_0000_0001);
        assert_eq!(major(dev), 2);
        assert_eq!(minor(dev), 1);
    }

    #[test]
    fn test_extremes() {
        let dev = makedev(uint::MAX, uint::MAX);
        assert_eq!(dev, dev_t::MAX);
        assert_eq!(major(makedev(0, uint::MAX)), 0);
        assert_eq!(minor(makedev(uint::MAX, 0)), 0);
    }
}
