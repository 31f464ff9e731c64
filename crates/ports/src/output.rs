// crates/ports/src/output.rs
use std::path::PathBuf;

use metastat_domain::MetadataReport;
use metastat_shared_kernel::Result;

/// Where a rendered report ends up.
pub trait ReportSink: Send + Sync {
    /// Emits `rendered` for `report`. Returns the destination path when the sink writes a file.
    fn emit(&self, report: &MetadataReport, rendered: &RenderedReport) -> Result<Option<PathBuf>>;
}

/// Text produced for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    /// Full layout in the requested style.
    pub body: String,
    /// Console echo lines.
    pub console: Vec<String>,
}
