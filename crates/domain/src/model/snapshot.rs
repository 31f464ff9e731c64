use metastat_shared_kernel::{FileMode, FileSize, Timestamp};
use serde::{Deserialize, Serialize};

use super::CreationTime;

/// Type of the entry itself. Symlinks are never followed, so a link to a
/// directory is `Symlink`, not `Directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// FIFOs, sockets, device nodes.
    Special,
}

impl EntryKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Directory => "Directory",
            Self::Symlink => "Symbolic Link",
            Self::Special => "Special File",
        }
    }
}

/// Every stat-derived field of a report, taken from one observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub size: FileSize,
    pub kind: EntryKind,
    pub created: Option<CreationTime>,
    pub modified: Option<Timestamp>,
    pub accessed: Option<Timestamp>,
    pub mode: FileMode,
    pub inode: u64,
    pub device_id: u64,
    pub hard_link_count: u64,
    pub owner_uid: u32,
    pub group_gid: u32,
}

impl StatSnapshot {
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }
}
