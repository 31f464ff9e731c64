pub mod creation_time;
pub mod diagnostic;
pub mod report;
pub mod snapshot;

pub use creation_time::{CreationTime, CreationTimeSource, CreationTimeSupport};
pub use diagnostic::Diagnostic;
pub use report::MetadataReport;
pub use snapshot::{EntryKind, StatSnapshot};
