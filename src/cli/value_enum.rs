use clap::ValueEnum;
use metastat_core::{ConsoleEcho, RenderStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliStyle {
    Table,
    #[value(alias = "tree")]
    Annotated,
    #[value(alias = "list")]
    Plain,
}

impl From<CliStyle> for RenderStyle {
    fn from(value: CliStyle) -> Self {
        match value {
            CliStyle::Table => RenderStyle::Table,
            CliStyle::Annotated => RenderStyle::Annotated,
            CliStyle::Plain => RenderStyle::Plain,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliConsole {
    /// `Label: value` lines
    Lines,
    /// the full report, same as the file
    Report,
    /// the report as JSON
    Json,
    /// nothing
    Quiet,
}

impl From<CliConsole> for ConsoleEcho {
    fn from(value: CliConsole) -> Self {
        match value {
            CliConsole::Lines => ConsoleEcho::Lines,
            CliConsole::Report => ConsoleEcho::Report,
            CliConsole::Json => ConsoleEcho::Json,
            CliConsole::Quiet => ConsoleEcho::Quiet,
        }
    }
}
