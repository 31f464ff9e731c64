// crates/core/src/presentation/formatters/table.rs
use std::fmt::Write;

use metastat_domain::{MetadataReport, RenderOptions};

use crate::presentation::fields::{self, Field};

/// Bordered two-column layout; every cell is centered within `column_width`.
pub fn output_table(report: &MetadataReport, options: &RenderOptions, out: &mut impl Write) -> std::fmt::Result {
    let width = options.column_width.max(RenderOptions::MIN_COLUMN_WIDTH);
    let rule = format!("+{}+", "-".repeat(width * 2 + 5));

    write_banner(&format!(" Metadata of '{}' ", report.name()), &rule, width, out)?;
    writeln!(out)?;

    write_row("Attribute", "Value", width, out)?;
    writeln!(out, "{rule}")?;
    match report.stat() {
        Some(stat) => {
            for section in fields::sections(report, stat) {
                write_fields(&section.fields, width, out)?;
                writeln!(out, "{rule}")?;
            }
        }
        None => {
            write_fields(&fields::missing_fields(report), width, out)?;
            writeln!(out, "{rule}")?;
        }
    }

    writeln!(out)?;
    write_banner(" End of Metadata ", &rule, width, out)
}

fn write_banner(text: &str, rule: &str, width: usize, out: &mut impl Write) -> std::fmt::Result {
    let inner = width * 2 + 5;
    writeln!(out, "{rule}")?;
    // long names continue on extra banner rows
    for chunk in fields::wrap(text, inner) {
        writeln!(out, "|{chunk:^inner$}|")?;
    }
    writeln!(out, "{rule}")
}

fn write_fields(fields: &[Field], width: usize, out: &mut impl Write) -> std::fmt::Result {
    for field in fields {
        // long values continue on following rows with an empty label cell
        for (idx, chunk) in fields::wrap(&field.value, width).iter().enumerate() {
            let label = if idx == 0 { field.label } else { "" };
            write_row(label, chunk, width, out)?;
        }
    }
    Ok(())
}

fn write_row(left: &str, right: &str, width: usize, out: &mut impl Write) -> std::fmt::Result {
    writeln!(out, "| {left:^width$} | {right:^width$} |")
}
