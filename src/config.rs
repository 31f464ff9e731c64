// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use metastat_core::{
    ConsoleEcho, RenderOptions, RenderStyle,
    bootstrap::{FileOutput, ReportPlan},
    error::{MetastatError, PresentationError, Result},
};

use crate::cli::{Args, validate_args};

/// Resolved settings of one `metastat` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub path: PathBuf,
    #[builder(default)]
    pub style: RenderStyle,
    #[builder(default)]
    pub render: RenderOptions,
    #[builder(default = "PathBuf::from(\"metadata_output\")")]
    pub output_dir: PathBuf,
    /// `None` lets the sink pick `metadata_<stem>.txt`.
    #[builder(default)]
    pub output_name: Option<String>,
    #[builder(default = "true")]
    pub write_file: bool,
    #[builder(default)]
    pub console: ConsoleEcho,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// What the core should do for this configuration.
    pub fn plan(&self) -> ReportPlan {
        ReportPlan {
            path: self.path.clone(),
            style: self.style,
            render: self.render,
            file: self
                .write_file
                .then(|| FileOutput { directory: self.output_dir.clone(), file_name: self.output_name.clone() }),
            console: self.console,
        }
    }
}

impl TryFrom<&Args> for Config {
    type Error = MetastatError;

    fn try_from(args: &Args) -> Result<Self> {
        validate_args(args)?;

        let render = RenderOptions {
            column_width: args.width,
            spaced: args.spaced,
            plain_title: !args.no_title,
            ..RenderOptions::default()
        };

        Config::builder()
            .path(args.file_path.clone())
            .style(RenderStyle::from(args.style))
            .render(render)
            .output_dir(args.output_dir.clone())
            .output_name(args.output.clone())
            .write_file(!args.no_file)
            .console(ConsoleEcho::from(args.console))
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
    }
}
