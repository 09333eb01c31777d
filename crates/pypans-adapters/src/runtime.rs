//! Python interpreter probe.
//!
//! `runtime.txt` pins the interpreter version of the generated project. When
//! no version is configured, the version of the interpreter on `PATH` is
//! used.

use std::process::Command;

use tracing::{debug, instrument, warn};

/// Interpreters tried in order.
pub const INTERPRETERS: [&str; 2] = ["python3", "python"];

/// Written when nothing is configured and no interpreter answers.
pub const FALLBACK_PYTHON_VERSION: &str = "3.8.0";

/// Configured version, else the probed one, else [`FALLBACK_PYTHON_VERSION`].
pub fn resolve_python_version(configured: Option<&str>) -> String {
    if let Some(version) = configured.filter(|v| !v.trim().is_empty()) {
        debug!(version, "using configured python version");
        return version.trim().to_string();
    }

    probe_python_version().unwrap_or_else(|| {
        warn!(
            fallback = FALLBACK_PYTHON_VERSION,
            "no python interpreter answered; runtime.txt gets the fallback version"
        );
        FALLBACK_PYTHON_VERSION.to_string()
    })
}

/// Ask each interpreter on `PATH` for its version.
///
/// Returns `None` if no interpreter ran or none printed a parseable version.
#[instrument]
pub fn probe_python_version() -> Option<String> {
    INTERPRETERS.iter().find_map(|interpreter| {
        let output = Command::new(interpreter).arg("--version").output().ok()?;
        if !output.status.success() {
            debug!(interpreter, status = %output.status, "interpreter probe failed");
            return None;
        }

        // Python 2 prints its version to stderr.
        let text = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        let version = parse_python_version(&text);
        debug!(interpreter, ?version, "interpreter probed");
        version
    })
}

/// Extract `major.minor.micro` from `python --version` output.
///
/// Pre-release suffixes are dropped: `Python 3.13.0rc1` yields `3.13.0`.
pub fn parse_python_version(output: &str) -> Option<String> {
    let raw = output.trim().strip_prefix("Python")?.trim();
    let mut parts = raw.split('.');

    let major = numeric_prefix(parts.next()?)?;
    let minor = numeric_prefix(parts.next()?)?;
    let micro = parts.next().and_then(numeric_prefix).unwrap_or("0");

    Some(format!("{major}.{minor}.{micro}"))
}

fn numeric_prefix(part: &str) -> Option<&str> {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    (end > 0).then(|| &part[..end])
}
