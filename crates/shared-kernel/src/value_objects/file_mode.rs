// crates/shared-kernel/src/value_objects/file_mode.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw `st_mode` bitfield: file type bits plus permission bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileMode(u32);

impl FileMode {
    pub const OWNER_READ: u32 = 0o400;
    pub const OWNER_WRITE: u32 = 0o200;
    pub const OWNER_EXECUTE: u32 = 0o100;

    const PERMISSION_MASK: u32 = 0o7777;

    #[inline]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Permission bits only (setuid/setgid/sticky included), type bits stripped.
    #[inline]
    pub const fn permissions(self) -> u32 {
        self.0 & Self::PERMISSION_MASK
    }

    #[inline]
    pub const fn readable_by_owner(self) -> bool {
        self.0 & Self::OWNER_READ != 0
    }

    #[inline]
    pub const fn writable_by_owner(self) -> bool {
        self.0 & Self::OWNER_WRITE != 0
    }

    #[inline]
    pub const fn executable_by_owner(self) -> bool {
        self.0 & Self::OWNER_EXECUTE != 0
    }

    /// `33188 (0o100644)`: decimal and octal side by side.
    pub fn describe(self) -> String {
        format!("{} ({:#o})", self.0, self.0)
    }
}

impl From<u32> for FileMode {
    fn from(bits: u32) -> Self {
        Self::new(bits)
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#o}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
