// crates/core/src/presentation/formatters/annotated.rs
use std::fmt::Write;

use metastat_domain::MetadataReport;

use crate::presentation::fields::{self, Field, NOT_FOUND};

const INNER: usize = 53;
const BRANCH: &str = "   └─ ";

/// Sectioned layout with tree-branch markers under a decorated banner.
///
/// The "Generated On" line is the observation time of the report, which keeps
/// the output a pure function of the report.
pub fn output_annotated(report: &MetadataReport, out: &mut impl Write) -> std::fmt::Result {
    let heavy = format!("+{}+", "=".repeat(INNER));
    let light = format!("+{}+", "-".repeat(INNER));

    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "|{:^width$}|", "*** FILESYSTEM METADATA REPORT ***", width = INNER)?;
    writeln!(out, "{heavy}")?;
    writeln!(out)?;
    writeln!(out, "   📄 File: {}", report.name())?;
    writeln!(out, "   ⏱  Generated On: {}", report.observed_at())?;
    writeln!(out, "   📂 File Path: {}", report.path())?;
    writeln!(out)?;
    writeln!(out, "{light}")?;
    writeln!(out, "|{:^width$}|", "+++ METADATA DETAILS +++", width = INNER)?;
    writeln!(out, "{light}")?;

    match report.stat() {
        Some(stat) => {
            for section in fields::sections(report, stat) {
                write_section(section.title, &section.fields, out)?;
            }
        }
        None => {
            writeln!(out)?;
            writeln!(out, "➤ Status:")?;
            writeln!(out, "{BRANCH}{NOT_FOUND}: no entry exists at {}", report.path())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{light}")?;
    writeln!(out, "|{:^width$}|", "*** END OF REPORT ***", width = INNER)?;
    writeln!(out, "{heavy}")
}

fn write_section(title: &str, fields: &[Field], out: &mut impl Write) -> std::fmt::Result {
    // +1 for the colon so values line up in one column
    let pad = fields.iter().map(|f| f.label.chars().count()).max().unwrap_or(0) + 1;
    writeln!(out)?;
    writeln!(out, "➤ {title}:")?;
    for field in fields {
        let label = format!("{}:", field.label);
        writeln!(out, "{BRANCH}{label:<pad$} {}", field.value)?;
    }
    Ok(())
}
