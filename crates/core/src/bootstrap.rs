use std::path::PathBuf;

use log::debug;
use metastat_infra::{ConsoleEcho, ConsoleReportSink, FileReportSink};
use metastat_ports::output::ReportSink;
use metastat_usecase::{GenerateReport, GenerateReportOutput, GenerateReportRequest};

use crate::{RenderOptions, RenderStyle, error::Result, host_source, presentation::TextRenderer};

/// Where the report file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutput {
    pub directory: PathBuf,
    /// `None` picks `metadata_<stem>.txt`.
    pub file_name: Option<String>,
}

/// Everything one run needs, decided by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPlan {
    pub path: PathBuf,
    pub style: RenderStyle,
    pub render: RenderOptions,
    pub file: Option<FileOutput>,
    pub console: ConsoleEcho,
}

/// Collects, renders, writes the report file (if any) and echoes to stdout.
pub fn run(plan: &ReportPlan) -> Result<GenerateReportOutput> {
    let stdout = ConsoleReportSink::stdout(plan.console);
    run_with_console(plan, &stdout)
}

/// Same as [`run`] with a caller-supplied console sink.
pub fn run_with_console(plan: &ReportPlan, console: &dyn ReportSink) -> Result<GenerateReportOutput> {
    debug!("metastat v{} · style={} · console={:?}", crate::VERSION, plan.style, plan.console);

    let renderer = TextRenderer::new(plan.render);
    let file_sink = plan.file.as_ref().map(|file| {
        let sink = FileReportSink::new(&file.directory);
        match &file.file_name {
            Some(name) => sink.with_file_name(name),
            None => sink,
        }
    });

    let mut usecase = GenerateReport::new(host_source(), &renderer);
    if let Some(sink) = &file_sink {
        usecase = usecase.with_sink(sink);
    }
    usecase = usecase.with_sink(console);

    usecase.run(&GenerateReportRequest::new(&plan.path, plan.style))
}
