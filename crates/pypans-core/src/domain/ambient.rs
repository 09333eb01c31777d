//! Run-wide values that do not come from the user.

use chrono::{Datelike, Local, NaiveDate};

/// Version written into the generated package's `__init__.py`.
pub const INITIAL_PACKAGE_VERSION: &str = "0.0.0";

/// Values captured once per run: today's date and the host runtime version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambient {
    date: NaiveDate,
    runtime_version: String,
}

impl Ambient {
    pub fn new(date: NaiveDate, runtime_version: impl Into<String>) -> Self {
        Self {
            date,
            runtime_version: runtime_version.into(),
        }
    }

    /// Capture today's local date alongside the given runtime version.
    pub fn capture(runtime_version: impl Into<String>) -> Self {
        Self::new(Local::now().date_naive(), runtime_version)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Date as written into CHANGELOG.md (`dd.mm.YYYY`).
    pub fn changelog_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }

    /// Runtime version, `major.minor.patch`.
    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }
}
