use std::path::PathBuf;

use metastat_domain::{MetadataReport, RenderStyle};
use metastat_ports::output::RenderedReport;

/// Input of [`crate::GenerateReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReportRequest {
    pub path: PathBuf,
    pub style: RenderStyle,
}

impl GenerateReportRequest {
    pub fn new(path: impl Into<PathBuf>, style: RenderStyle) -> Self {
        Self { path: path.into(), style }
    }
}

/// Everything produced for one path.
#[derive(Debug, Clone)]
pub struct GenerateReportOutput {
    pub report: MetadataReport,
    pub rendered: RenderedReport,
    /// Files written by the sinks, in sink order.
    pub written: Vec<PathBuf>,
}
