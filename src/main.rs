// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use metastat::{app, cli::Args, config::Config, logging};
use metastat_core::{
    ConsoleEcho,
    error::{CollectionError, MetastatError},
};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[-] Error: {err}");
            exit_code(&err)
        }
    }
}

fn try_main(args: &Args) -> anyhow::Result<()> {
    let config = Config::try_from(args)?;
    if let Some(path) = app::run(&config)? {
        let status = format!("[+] Metadata written to '{}'", path.display());
        // keep stdout a single JSON document
        if config.console == ConsoleEcho::Json {
            eprintln!("{status}");
        } else {
            println!("{status}");
        }
    }
    Ok(())
}

/// 2 when the path does not exist, 3 when stat was refused, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<MetastatError>().and_then(MetastatError::collection) {
        Some(CollectionError::NotFound { .. }) => ExitCode::from(2),
        Some(CollectionError::AccessDenied { .. }) => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}
