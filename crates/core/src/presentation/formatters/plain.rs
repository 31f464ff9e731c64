// crates/core/src/presentation/formatters/plain.rs
use std::fmt::Write;

use metastat_domain::{MetadataReport, RenderOptions};

use crate::presentation::fields;

/// `Label: value` per line under an optional centered title.
pub fn output_plain(report: &MetadataReport, options: &RenderOptions, out: &mut impl Write) -> std::fmt::Result {
    if options.plain_title {
        let title = format!("Metadata of '{}'", report.name());
        let width = options.title_width;
        writeln!(out, "{}", format!("{title:^width$}").trim_end())?;
        writeln!(out)?;
    }
    for line in fields::lines(report) {
        writeln!(out, "{line}")?;
        if options.spaced {
            writeln!(out)?;
        }
    }
    Ok(())
}
