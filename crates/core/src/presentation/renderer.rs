// crates/core/src/presentation/renderer.rs
use metastat_domain::{MetadataReport, RenderOptions, RenderStyle};
use metastat_ports::rendering::ReportRenderer;

use super::{
    fields,
    formatters::{output_annotated, output_plain, output_table},
};

/// Renders `report` in `style` with default layout options.
pub fn render(report: &MetadataReport, style: RenderStyle) -> String {
    render_with(report, style, &RenderOptions::default())
}

/// Renders `report` in `style`. Pure: identical inputs give byte-identical output.
pub fn render_with(report: &MetadataReport, style: RenderStyle, options: &RenderOptions) -> String {
    let mut out = String::new();
    // fmt::Write into a String never fails
    let _ = match style {
        RenderStyle::Table => output_table(report, options, &mut out),
        RenderStyle::Annotated => output_annotated(report, &mut out),
        RenderStyle::Plain => output_plain(report, options, &mut out),
    };
    out
}

/// `Label: value` lines for echoing to a console.
pub fn console_lines(report: &MetadataReport) -> Vec<String> {
    fields::lines(report)
}

/// `ReportRenderer` adapter over the text layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextRenderer {
    options: RenderOptions,
}

impl TextRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &MetadataReport, style: RenderStyle) -> String {
        render_with(report, style, &self.options)
    }

    fn console_lines(&self, report: &MetadataReport) -> Vec<String> {
        console_lines(report)
    }
}
