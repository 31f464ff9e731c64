mod args;
mod value_enum;

pub use args::Args;
use metastat_core::error::{PresentationError, Result};
pub use value_enum::{CliConsole, CliStyle};

/// Rejects flag values clap cannot check on its own.
pub(crate) fn validate_args(args: &Args) -> Result<()> {
    validate_width("--width", args.width)?;
    if let Some(name) = &args.output {
        validate_file_name("--output", name)?;
    }
    Ok(())
}

fn validate_width(flag: &str, width: usize) -> Result<()> {
    let min = metastat_core::RenderOptions::MIN_COLUMN_WIDTH;
    if width < min {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: width.to_string(),
            reason: format!("must be at least {min}"),
        }
        .into());
    }
    Ok(())
}

fn validate_file_name(flag: &str, name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        "must not be empty"
    } else if name.contains(['/', '\\']) {
        "must be a file name, use --output-dir for the directory"
    } else {
        return Ok(());
    };
    Err(PresentationError::InvalidValue {
        flag: flag.to_string(),
        value: name.to_string(),
        reason: reason.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use metastat_core::error::MetastatError;

    use super::*;

    #[test]
    fn width_below_minimum_is_rejected() {
        let args = Args::parse_from(["metastat", "--width", "19", "notes.txt"]);
        let err = validate_args(&args).unwrap_err();
        if let MetastatError::Presentation(PresentationError::InvalidValue { flag, value, .. }) = err {
            assert_eq!(flag, "--width");
            assert_eq!(value, "19");
        } else {
            panic!("unexpected error variant: {err:?}");
        }
    }

    #[test]
    fn minimum_width_is_accepted() {
        let args = Args::parse_from(["metastat", "--width", "20", "notes.txt"]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn output_name_with_separator_is_rejected() {
        let args = Args::parse_from(["metastat", "-o", "nested/report.txt", "notes.txt"]);
        let err = validate_args(&args).unwrap_err();
        assert!(err.to_string().contains("--output"), "{err}");
    }

    #[test]
    fn style_aliases_are_accepted() {
        let args = Args::parse_from(["metastat", "-s", "tree", "notes.txt"]);
        assert_eq!(args.style, CliStyle::Annotated);
        let args = Args::parse_from(["metastat", "--style", "list", "notes.txt"]);
        assert_eq!(args.style, CliStyle::Plain);
    }

    #[test]
    fn verbose_is_counted() {
        let args = Args::parse_from(["metastat", "-vv", "notes.txt"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn no_file_conflicts_with_output_dir() {
        let result = Args::try_parse_from(["metastat", "--no-file", "-d", "out", "notes.txt"]);
        assert!(result.is_err());
    }
}
