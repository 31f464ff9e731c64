// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliConsole, CliStyle};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "metastat",
    version = crate::VERSION,
    about = "Writes a filesystem metadata report for a single file or directory"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// File or directory to inspect (symlinks are described, not followed)
    #[arg(value_name = "FILE_PATH", value_hint = ValueHint::AnyPath)]
    pub file_path: PathBuf,

    /// Report file name [default: metadata_<stem>.txt]
    #[arg(short, long, value_name = "NAME", help_heading = "Output")]
    pub output: Option<String>,

    /// Directory the report is written into, created if missing
    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        default_value = "metadata_output",
        value_hint = ValueHint::DirPath,
        help_heading = "Output"
    )]
    pub output_dir: PathBuf,

    /// Do not write the report file
    #[arg(long, conflicts_with_all = ["output", "output_dir"], help_heading = "Output")]
    pub no_file: bool,

    /// What to print on stdout
    #[arg(long, value_enum, default_value = "lines", help_heading = "Output")]
    pub console: CliConsole,

    /// Report layout
    #[arg(short, long, value_enum, default_value = "table", help_heading = "Layout")]
    pub style: CliStyle,

    /// Table column width
    #[arg(long, value_name = "N", default_value_t = 50, help_heading = "Layout")]
    pub width: usize,

    /// Blank line between entries (plain style)
    #[arg(long, help_heading = "Layout")]
    pub spaced: bool,

    /// Omit the centered title (plain style)
    #[arg(long, help_heading = "Layout")]
    pub no_title: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
