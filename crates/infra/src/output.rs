// crates/infra/src/output.rs
//! Report sinks: the report file and the console echo.

use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Mutex,
};

use log::info;
use metastat_domain::MetadataReport;
use metastat_ports::output::{RenderedReport, ReportSink};
use metastat_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// File name used when the caller does not pick one: `metadata_<stem>.txt`.
pub fn default_file_name(report: &MetadataReport) -> String {
    let stem = report.name().stem();
    let stem = if stem.is_empty() { "root" } else { stem };
    format!("metadata_{stem}.txt")
}

/// Writes the rendered body into a file, overwriting any previous report.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    directory: PathBuf,
    file_name: Option<String>,
}

impl FileReportSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), file_name: None }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Destination of the report for `report`.
    pub fn target_for(&self, report: &MetadataReport) -> PathBuf {
        let name = self.file_name.clone().unwrap_or_else(|| default_file_name(report));
        self.directory.join(name)
    }
}

impl ReportSink for FileReportSink {
    fn emit(&self, report: &MetadataReport, rendered: &RenderedReport) -> Result<Option<PathBuf>> {
        let target = self.target_for(report);
        FileWriter::overwrite(&target, rendered.body.as_bytes())?;
        info!("wrote {} bytes to {}", rendered.body.len(), target.display());
        Ok(Some(target))
    }
}

/// What the console sink prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleEcho {
    /// `Label: value` lines.
    #[default]
    Lines,
    /// The full rendered layout.
    Report,
    /// The report as pretty-printed JSON.
    Json,
    Quiet,
}

/// Echoes a report to a writer, stdout by default.
pub struct ConsoleReportSink<W: Write + Send = io::Stdout> {
    echo: ConsoleEcho,
    out: Mutex<W>,
}

impl ConsoleReportSink<io::Stdout> {
    pub fn stdout(echo: ConsoleEcho) -> Self {
        Self::new(echo, io::stdout())
    }
}

impl<W: Write + Send> ConsoleReportSink<W> {
    pub fn new(echo: ConsoleEcho, out: W) -> Self {
        Self { echo, out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> ReportSink for ConsoleReportSink<W> {
    fn emit(&self, report: &MetadataReport, rendered: &RenderedReport) -> Result<Option<PathBuf>> {
        let mut out = self.out.lock().map_err(|_| InfrastructureError::OutputError {
            message: "console writer lock poisoned".to_string(),
            source: None,
        })?;
        match self.echo {
            ConsoleEcho::Lines => {
                for line in &rendered.console {
                    writeln!(out, "{line}")?;
                }
            }
            ConsoleEcho::Report => out.write_all(rendered.body.as_bytes())?,
            ConsoleEcho::Json => {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)?;
            }
            ConsoleEcho::Quiet => {}
        }
        out.flush()?;
        Ok(None)
    }
}
