// crates/ports/src/metadata.rs
use std::path::Path;

use metastat_domain::{CreationTimeSupport, MetadataReport};
use metastat_shared_kernel::CollectionResult;

/// Port for producing a report from a single stat observation.
pub trait MetadataSource: Send + Sync {
    /// Fails with `CollectionError::NotFound` or `CollectionError::AccessDenied`;
    /// never returns a report whose entry does not exist.
    fn collect(&self, path: &Path) -> CollectionResult<MetadataReport>;
}

/// Capability query answered once by the hosting environment.
pub trait PlatformCapabilities: Send + Sync {
    /// Does this platform expose true creation time, inode change time, or neither?
    fn creation_time(&self) -> CreationTimeSupport;
}
