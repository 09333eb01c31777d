//! What the operator sees on stdout.
//!
//! Logging goes to stderr through `tracing`; this module handles the
//! results: status lines, per-phase listings, the JSON summary and the
//! progress bar.

use std::io::{self, IsTerminal};

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use pypans_core::application::PhaseReport;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    verbose: bool,
    term: Term,
}

#[derive(Clone, Copy)]
enum Status {
    Done,
    Warn,
    Note,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Self::Done => "\u{2713}",
            Self::Warn => "!",
            Self::Note => "\u{2022}",
        }
    }
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            format,
            // stdout carries nothing but the summary in JSON mode.
            quiet: args.quiet || format == OutputFormat::Json,
            no_color: args.no_color || config.output.no_color,
            verbose: args.verbose > 0,
            term: Term::stdout(),
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Done, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warn, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Note, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            self.print(text)
        } else {
            self.print(&text.bold().to_string())
        }
    }

    /// Summary line for a finished phase.
    ///
    /// The written paths follow in plain mode, or with `-v`.
    pub fn phase(&self, report: &PhaseReport) -> io::Result<()> {
        self.success(&format!(
            "{}: {} path(s) written",
            report.phase,
            report.len()
        ))?;
        if self.format == OutputFormat::Plain || self.verbose {
            for path in &report.created {
                self.print(&format!("    {}", path.display()))?;
            }
        }
        Ok(())
    }

    /// Pretty-printed `value` on stdout; a no-op unless the format is JSON.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.format != OutputFormat::Json {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Bar over `total` steps on stderr; hidden unless the format is human.
    pub fn progress(&self, total: u64) -> ProgressBar {
        if self.quiet || self.format != OutputFormat::Human {
            return ProgressBar::hidden();
        }

        let template = if self.no_color {
            "{msg:>8} [{bar:30}] {pos}/{len}"
        } else {
            "{msg:>8} [{bar:30.green/white}] {pos}/{len}"
        };
        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr()).with_style(style)
    }

    fn status(&self, status: Status, msg: &str) -> io::Result<()> {
        let symbol = status.symbol();
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            match status {
                Status::Done => format!("{} {msg}", symbol.green().bold()),
                Status::Warn => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
                Status::Note => format!("{} {msg}", symbol.cyan()),
            }
        };
        self.print(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_print_is_a_no_op() {
        let out = manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.success("done").is_ok());
    }

    #[test]
    fn json_format_silences_status_lines() {
        let out = manager(false, true, OutputFormat::Json);
        assert!(out.quiet);
        assert_eq!(out.format, OutputFormat::Json);
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Plain,
        };
        assert!(OutputManager::new(&args, &config).no_color);
        assert!(!manager(false, false, OutputFormat::Plain).no_color);
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(manager(false, true, OutputFormat::Human).format, OutputFormat::Human);
    }

    #[test]
    fn progress_is_hidden_outside_human_mode() {
        assert!(manager(false, true, OutputFormat::Plain).progress(3).is_hidden());
        assert!(manager(false, true, OutputFormat::Json).progress(3).is_hidden());
    }
}
