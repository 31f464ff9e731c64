use std::path::PathBuf;

use log::info;
use metastat_core::{bootstrap, error::Result};

use crate::config::Config;

/// Runs one report and returns the path of the written file, if any.
pub fn run(config: &Config) -> Result<Option<PathBuf>> {
    let output = bootstrap::run(&config.plan())?;
    info!(
        "{} observed at {} ({} diagnostics)",
        output.report.path().as_path().display(),
        output.report.observed_at(),
        output.report.diagnostics().len()
    );
    Ok(output.written.into_iter().next())
}
