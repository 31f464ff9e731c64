// crates/infra/src/filesystem.rs
use std::{fs, path::Path};

use log::debug;
use metastat_domain::{
    CreationTime, CreationTimeSource, CreationTimeSupport, Diagnostic, EntryKind, MetadataReport, StatSnapshot,
};
use metastat_ports::metadata::{MetadataSource, PlatformCapabilities};
use metastat_shared_kernel::{CollectionError, CollectionResult, FileMode, FileSize, Timestamp};

use crate::platform::HostPlatform;

/// Stat-backed adapter implementing the `MetadataSource` port.
///
/// Each `collect` performs exactly one `symlink_metadata` call and derives
/// every field from that snapshot. Symlinks are never followed: a link is
/// described as the link itself.
#[derive(Debug, Clone)]
pub struct StatMetadataSource {
    creation_time: CreationTimeSupport,
}

impl StatMetadataSource {
    pub fn new() -> Self {
        Self::with_capabilities(&HostPlatform::detect())
    }

    /// Resolves the capability query once; later calls reuse the answer.
    pub fn with_capabilities(capabilities: &dyn PlatformCapabilities) -> Self {
        Self { creation_time: capabilities.creation_time() }
    }

    fn snapshot(&self, metadata: &fs::Metadata, diagnostics: &mut Vec<Diagnostic>) -> StatSnapshot {
        let ids = native::ids(metadata, diagnostics);
        StatSnapshot {
            size: FileSize::new(metadata.len()),
            kind: entry_kind(metadata),
            created: self.creation_time(metadata, diagnostics),
            modified: metadata.modified().ok().map(Timestamp::from),
            accessed: metadata.accessed().ok().map(Timestamp::from),
            mode: ids.mode,
            inode: ids.inode,
            device_id: ids.device_id,
            hard_link_count: ids.hard_link_count,
            owner_uid: ids.owner_uid,
            group_gid: ids.group_gid,
        }
    }

    fn creation_time(&self, metadata: &fs::Metadata, diagnostics: &mut Vec<Diagnostic>) -> Option<CreationTime> {
        match &self.creation_time {
            CreationTimeSupport::Birth => match metadata.created() {
                Ok(at) => Some(CreationTime::new(CreationTimeSource::Birth, Timestamp::from(at))),
                Err(err) => {
                    diagnostics.push(Diagnostic::CreationTimeUnavailable { reason: err.to_string() });
                    None
                }
            },
            CreationTimeSupport::InodeChange => match native::inode_change_time(metadata) {
                Some(at) => Some(CreationTime::new(CreationTimeSource::InodeChange, at)),
                None => {
                    diagnostics.push(Diagnostic::CreationTimeUnavailable {
                        reason: "inode change time is not exposed on this platform".to_string(),
                    });
                    None
                }
            },
            CreationTimeSupport::Unsupported { platform } => {
                diagnostics.push(Diagnostic::UnsupportedPlatform { platform: platform.clone() });
                None
            }
        }
    }
}

impl Default for StatMetadataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for StatMetadataSource {
    fn collect(&self, path: &Path) -> CollectionResult<MetadataReport> {
        debug!("stat {} (symlinks not followed, creation time: {})", path.display(), self.creation_time);
        let observed_at = Timestamp::now();
        let metadata = fs::symlink_metadata(path).map_err(|err| CollectionError::from_io(path, err))?;

        let mut diagnostics = Vec::new();
        let snapshot = self.snapshot(&metadata, &mut diagnostics);
        for note in &diagnostics {
            debug!("{}: {note}", path.display());
        }
        Ok(MetadataReport::observed(path, observed_at, snapshot, diagnostics))
    }
}

fn entry_kind(metadata: &fs::Metadata) -> EntryKind {
    let file_type = metadata.file_type();
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Special
    }
}

struct NativeIds {
    mode: FileMode,
    inode: u64,
    device_id: u64,
    hard_link_count: u64,
    owner_uid: u32,
    group_gid: u32,
}

#[cfg(unix)]
mod native {
    use std::{fs, os::unix::fs::MetadataExt};

    use metastat_domain::Diagnostic;
    use metastat_shared_kernel::{FileMode, Timestamp};

    use super::NativeIds;

    pub(super) fn ids(metadata: &fs::Metadata, _diagnostics: &mut Vec<Diagnostic>) -> NativeIds {
        NativeIds {
            mode: FileMode::new(metadata.mode()),
            inode: metadata.ino(),
            device_id: metadata.dev(),
            hard_link_count: metadata.nlink(),
            owner_uid: metadata.uid(),
            group_gid: metadata.gid(),
        }
    }

    pub(super) fn inode_change_time(metadata: &fs::Metadata) -> Option<Timestamp> {
        Timestamp::from_unix(metadata.ctime(), metadata.ctime_nsec())
    }
}

#[cfg(not(unix))]
mod native {
    use std::fs;

    use metastat_domain::Diagnostic;
    use metastat_shared_kernel::{FileMode, Timestamp};

    use super::NativeIds;

    const DIRECTORY_TYPE: u32 = 0o040_000;
    const REGULAR_TYPE: u32 = 0o100_000;

    pub(super) fn ids(metadata: &fs::Metadata, diagnostics: &mut Vec<Diagnostic>) -> NativeIds {
        let permissions = if metadata.permissions().readonly() { 0o444 } else { 0o666 };
        let file_type = if metadata.is_dir() { DIRECTORY_TYPE } else { REGULAR_TYPE };
        diagnostics.push(Diagnostic::SyntheticMode);
        NativeIds {
            mode: FileMode::new(file_type | permissions),
            inode: 0,
            device_id: 0,
            hard_link_count: 1,
            owner_uid: 0,
            group_gid: 0,
        }
    }

    pub(super) fn inode_change_time(_metadata: &fs::Metadata) -> Option<Timestamp> {
        None
    }
}
