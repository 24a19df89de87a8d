//! File type and permission bits carried in a `mode_t`.

use bitflags::bitflags;

use crate::posix::mode_t;

bitflags! {
    /// Bits of a `mode_t`.
    ///
    /// The file-type field is a 4-bit code under [`ModeFlags::S_IFMT`], not
    /// a set of independent flags; use [`FileKind::from_mode`] to decode it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModeFlags: mode_t {
        /// File-type mask
        const S_IFMT = 0o170000;
        /// Socket
        const S_IFSOCK = 0o140000;
        /// Symbolic link
        const S_IFLNK = 0o120000;
        /// Regular file
        const S_IFREG = 0o100000;
        /// Block device
        const S_IFBLK = 0o060000;
        /// Directory
        const S_IFDIR = 0o040000;
        /// Character device
        const S_IFCHR = 0o020000;
        /// FIFO
        const S_IFIFO = 0o010000;

        /// Set user id on execution
        const S_ISUID = 0o4000;
        /// Set group id on execution
        const S_ISGID = 0o2000;
        /// Sticky bit
        const S_ISVTX = 0o1000;

        /// Owner read
        const S_IRUSR = 0o400;
        /// Owner write
        const S_IWUSR = 0o200;
        /// Owner execute
        const S_IXUSR = 0o100;
        /// Group read
        const S_IRGRP = 0o040;
        /// Group write
        const S_IWGRP = 0o020;
        /// Group execute
        const S_IXGRP = 0o010;
        /// Others read
        const S_IROTH = 0o004;
        /// Others write
        const S_IWOTH = 0o002;
        /// Others execute
        const S_IXOTH = 0o001;

        /// Owner read, write and execute
        const S_IRWXU = Self::S_IRUSR.bits() | Self::S_IWUSR.bits() | Self::S_IXUSR.bits();
        /// Group read, write and execute
        const S_IRWXG = Self::S_IRGRP.bits() | Self::S_IWGRP.bits() | Self::S_IXGRP.bits();
        /// Others read, write and execute
        const S_IRWXO = Self::S_IROTH.bits() | Self::S_IWOTH.bits() | Self::S_IXOTH.bits();
    }
}

impl ModeFlags {
    /// Permission bits only, including set-id and sticky bits
    pub fn permissions(self) -> ModeFlags {
        self.difference(ModeFlags::S_IFMT)
    }

    /// Decoded file type
    pub fn kind(self) -> Option<FileKind> {
        FileKind::from_mode(self.bits())
    }
}

/// File type stored in the `S_IFMT` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Regular file
    Regular,
    /// Directory
    Directory,
    /// Character device
    CharDevice,
    /// Block device
    BlockDevice,
    /// FIFO
    Fifo,
    /// Symbolic link
    Symlink,
    /// Socket
    Socket,
}

impl FileKind {
    /// Decodes the file-type field of `mode`
    pub fn from_mode(mode: mode_t) -> Option<FileKind> {
        let kind = match mode & ModeFlags::S_IFMT.bits() {
            0o100000 => FileKind::Regular,
            0o040000 => FileKind::Directory,
            0o020000 => FileKind::CharDevice,
            0o060000 => FileKind::BlockDevice,
            0o010000 => FileKind::Fifo,
            0o120000 => FileKind::Symlink,
            0o140000 => FileKind::Socket,
            _ => return None,
        };
        Some(kind)
    }

    /// The `S_IFMT` field value for this kind
    pub fn mode_bits(self) -> ModeFlags {
        match self {
            FileKind::Regular => ModeFlags::S_IFREG,
            FileKind::Directory => ModeFlags::S_IFDIR,
            FileKind::CharDevice => ModeFlags::S_IFCHR,
            FileKind::BlockDevice => ModeFlags::S_IFBLK,
            FileKind::Fifo => ModeFlags::S_IFIFO,
            FileKind::Symlink => ModeFlags::S_IFLNK,
            FileKind::Socket => ModeFlags::S_IFSOCK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_regular_file() {
        let mode = ModeFlags::from_bits_truncate(0o100644);
        assert_eq!(mode.kind(), Some(FileKind::Regular));
        assert_eq!(mode.permissions().bits(), 0o644);
        assert!(mode.contains(ModeFlags::S_IRUSR | ModeFlags::S_IWUSR));
        assert!(!mode.contains(ModeFlags::S_IXUSR));
    }

    #[test]
    fn test_socket_is_not_a_directory() {
        // S_IFSOCK shares bits with S_IFDIR, so the field must be compared whole.
        assert_eq!(FileKind::from_mode(0o140755), Some(FileKind::Socket));
        assert_eq!(FileKind::from_mode(0o040755), Some(FileKind::Directory));
        assert_eq!(FileKind::from_mode(0o000755), None);
    }

    #[test]
    fn test_kind_bits_match_decoder() {
        for kind in [
            FileKind::Regular,
            FileKind::Directory,
            FileKind::CharDevice,
            FileKind::BlockDevice,
            FileKind::Fifo,
            FileKind::Symlink,
            FileKind::Socket,
        ] {
            assert_eq!(FileKind::from_mode(kind.mode_bits().bits()), Some(kind));
        }
    }
}
