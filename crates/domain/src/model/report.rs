use std::path::Path;

use metastat_shared_kernel::{
    FileMode, FileName, FilePath, FileSize, Timestamp,
    path::{logical_absolute, parent_display},
};
use serde::Serialize;

use super::{CreationTime, Diagnostic, EntryKind, StatSnapshot};

/// Metadata of one filesystem entry as seen at `observed_at`.
///
/// Reports are built once and never mutated; a changed file needs a new
/// report. When the entry does not exist only the location fields and the
/// observation time carry values and every stat accessor returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataReport {
    path: FilePath,
    name: FileName,
    parent_directory: String,
    observed_at: Timestamp,
    exists: bool,
    stat: Option<StatSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<Diagnostic>,
}

impl MetadataReport {
    /// Report for an entry that was successfully observed.
    pub fn observed(
        path: &Path,
        observed_at: Timestamp,
        stat: StatSnapshot,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        debug_assert!(stat.hard_link_count >= 1, "an existing entry has at least one link");
        Self::build(path, observed_at, Some(stat), diagnostics)
    }

    /// Report for a path that did not exist when it was looked up.
    pub fn missing(path: &Path, observed_at: Timestamp) -> Self {
        Self::build(path, observed_at, None, Vec::new())
    }

    fn build(
        path: &Path,
        observed_at: Timestamp,
        stat: Option<StatSnapshot>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let absolute = FilePath::new(logical_absolute(path));
        let name = absolute.file_name();
        let parent_directory = parent_display(absolute.as_path());
        Self {
            path: absolute,
            name,
            parent_directory,
            observed_at,
            exists: stat.is_some(),
            stat,
            diagnostics,
        }
    }

    pub fn path(&self) -> &FilePath {
        &self.path
    }

    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn parent_directory(&self) -> &str {
        &self.parent_directory
    }

    pub fn observed_at(&self) -> Timestamp {
        self.observed_at
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn stat(&self) -> Option<&StatSnapshot> {
        self.stat.as_ref()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn size(&self) -> Option<FileSize> {
        self.stat.as_ref().map(|s| s.size)
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.size().map(FileSize::bytes)
    }

    pub fn kind(&self) -> Option<EntryKind> {
        self.stat.as_ref().map(|s| s.kind)
    }

    pub fn is_directory(&self) -> Option<bool> {
        self.stat.as_ref().map(StatSnapshot::is_directory)
    }

    pub fn is_symlink(&self) -> Option<bool> {
        self.stat.as_ref().map(StatSnapshot::is_symlink)
    }

    pub fn created(&self) -> Option<CreationTime> {
        self.stat.as_ref().and_then(|s| s.created)
    }

    pub fn modified(&self) -> Option<Timestamp> {
        self.stat.as_ref().and_then(|s| s.modified)
    }

    pub fn accessed(&self) -> Option<Timestamp> {
        self.stat.as_ref().and_then(|s| s.accessed)
    }

    pub fn mode(&self) -> Option<FileMode> {
        self.stat.as_ref().map(|s| s.mode)
    }

    pub fn readable_by_owner(&self) -> Option<bool> {
        self.mode().map(FileMode::readable_by_owner)
    }

    pub fn writable_by_owner(&self) -> Option<bool> {
        self.mode().map(FileMode::writable_by_owner)
    }

    pub fn executable_by_owner(&self) -> Option<bool> {
        self.mode().map(FileMode::executable_by_owner)
    }

    pub fn inode(&self) -> Option<u64> {
        self.stat.as_ref().map(|s| s.inode)
    }

    pub fn device_id(&self) -> Option<u64> {
        self.stat.as_ref().map(|s| s.device_id)
    }

    pub fn hard_link_count(&self) -> Option<u64> {
        self.stat.as_ref().map(|s| s.hard_link_count)
    }

    pub fn owner_uid(&self) -> Option<u32> {
        self.stat.as_ref().map(|s| s.owner_uid)
    }

    pub fn group_gid(&self) -> Option<u32> {
        self.stat.as_ref().map(|s| s.group_gid)
    }
}
