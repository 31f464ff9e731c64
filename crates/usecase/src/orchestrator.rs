use log::debug;
use metastat_ports::{
    metadata::MetadataSource,
    output::{RenderedReport, ReportSink},
    rendering::ReportRenderer,
};
use metastat_shared_kernel::{ErrorContext, Result};

use crate::dto::{GenerateReportOutput, GenerateReportRequest};

/// Collects one report, renders it, and hands it to every sink in order.
pub struct GenerateReport<'a> {
    source: &'a dyn MetadataSource,
    renderer: &'a dyn ReportRenderer,
    sinks: Vec<&'a dyn ReportSink>,
}

impl<'a> GenerateReport<'a> {
    pub fn new(source: &'a dyn MetadataSource, renderer: &'a dyn ReportRenderer) -> Self {
        Self { source, renderer, sinks: Vec::new() }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn ReportSink) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Collection failures are returned untouched so callers can map them to exit codes.
    pub fn run(&self, request: &GenerateReportRequest) -> Result<GenerateReportOutput> {
        let report = self.source.collect(&request.path)?;
        let rendered = RenderedReport {
            body: self.renderer.render(&report, request.style),
            console: self.renderer.console_lines(&report),
        };
        debug!("rendered {} as {} ({} bytes)", report.path(), request.style, rendered.body.len());

        let mut written = Vec::new();
        for sink in &self.sinks {
            let target = sink
                .emit(&report, &rendered)
                .with_context(|| format!("emitting report for {}", report.path()))?;
            written.extend(target);
        }
        Ok(GenerateReportOutput { report, rendered, written })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        path::{Path, PathBuf},
        sync::Mutex,
    };

    use metastat_domain::{MetadataReport, RenderStyle};
    use metastat_shared_kernel::{CollectionError, CollectionResult, Timestamp};

    use super::*;

    struct StubSource {
        exists: bool,
    }

    impl MetadataSource for StubSource {
        fn collect(&self, path: &Path) -> CollectionResult<MetadataReport> {
            if self.exists {
                // a missing-shaped report is enough for the orchestration path
                Ok(MetadataReport::missing(path, Timestamp::now()))
            } else {
                Err(CollectionError::NotFound { path: path.to_path_buf() })
            }
        }
    }

    struct EchoRenderer;

    impl ReportRenderer for EchoRenderer {
        fn render(&self, report: &MetadataReport, style: RenderStyle) -> String {
            format!("{style}:{}", report.name())
        }

        fn console_lines(&self, report: &MetadataReport) -> Vec<String> {
            vec![format!("File Name: {}", report.name())]
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        bodies: Mutex<Vec<String>>,
        target: Option<PathBuf>,
    }

    impl ReportSink for RecordingSink {
        fn emit(&self, _report: &MetadataReport, rendered: &RenderedReport) -> Result<Option<PathBuf>> {
            self.bodies.lock().unwrap().push(rendered.body.clone());
            Ok(self.target.clone())
        }
    }

    #[test]
    fn run_renders_and_emits_to_every_sink() {
        let source = StubSource { exists: true };
        let file = RecordingSink { target: Some(PathBuf::from("/out/report.txt")), ..Default::default() };
        let console = RecordingSink::default();
        let usecase = GenerateReport::new(&source, &EchoRenderer).with_sink(&file).with_sink(&console);

        let output = usecase
            .run(&GenerateReportRequest::new("/tmp/sample.txt", RenderStyle::Plain))
            .expect("run succeeds");

        assert_eq!(output.rendered.body, "plain:sample.txt");
        assert_eq!(output.rendered.console, vec!["File Name: sample.txt".to_string()]);
        assert_eq!(output.written, vec![PathBuf::from("/out/report.txt")]);
        assert_eq!(file.bodies.lock().unwrap().len(), 1);
        assert_eq!(console.bodies.lock().unwrap().len(), 1);
    }

    #[test]
    fn not_found_skips_rendering_and_sinks() {
        let source = StubSource { exists: false };
        let sink = RecordingSink::default();
        let usecase = GenerateReport::new(&source, &EchoRenderer).with_sink(&sink);

        let err = usecase
            .run(&GenerateReportRequest::new("/tmp/absent", RenderStyle::Table))
            .expect_err("missing path fails");

        assert!(matches!(err.collection(), Some(CollectionError::NotFound { .. })));
        assert!(sink.bodies.lock().unwrap().is_empty());
    }
}
