//! Tracing subscriber setup.
//!
//! The library crates only emit events; the binary decides where they go.
//! Everything is written to stderr so stdout stays usable for `--output-format
//! json` and for completion scripts.
//!
//! `-q` keeps errors only, no flag keeps warnings, and each `-v` adds a level
//! (info, debug, trace). `RUST_LOG` replaces the whole filter when set.

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown.
const TARGETS: [&str; 3] = ["pypans", "pypans_core", "pypans_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn level_for(args: &GlobalArgs) -> Level {
    if args.quiet {
        return Level::ERROR;
    }
    match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn warnings_by_default() {
        assert_eq!(level_for(&args(0, false)), Level::WARN);
    }

    #[test]
    fn each_v_adds_a_level() {
        assert_eq!(level_for(&args(1, false)), Level::INFO);
        assert_eq!(level_for(&args(2, false)), Level::DEBUG);
        assert_eq!(level_for(&args(3, false)), Level::TRACE);
        assert_eq!(level_for(&args(7, false)), Level::TRACE);
    }

    #[test]
    fn quiet_keeps_errors_only() {
        assert_eq!(level_for(&args(0, true)), Level::ERROR);
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            directives(Level::DEBUG),
            "pypans=debug,pypans_core=debug,pypans_adapters=debug"
        );
    }
}
