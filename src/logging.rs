use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Installs the stderr logger.
///
/// `RUST_LOG` applies when no `-v` was given; each `-v` raises the level one
/// step from `warn`.
pub fn init(verbosity: u8) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if verbosity > 0 {
        builder.filter_level(level_for(verbosity));
    }
    builder.target(Target::Stderr).format_target(false);
    // A logger may already be installed when embedded in tests.
    let _ = builder.try_init();
}

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_flag_raises_the_level() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
