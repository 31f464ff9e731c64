// crates/ports/src/rendering.rs
use metastat_domain::{MetadataReport, RenderStyle};

/// Port for turning a report into text. Implementations are pure.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &MetadataReport, style: RenderStyle) -> String;

    /// Short `Label: value` lines for echoing to a console.
    fn console_lines(&self, report: &MetadataReport) -> Vec<String>;
}
