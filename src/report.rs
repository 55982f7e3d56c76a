//! Severity-tagged reporting routed into the [log] facade.
//!
//! Whoever installs the logger decides what happens to reports. This crate never reports
//! [Severity::Fatal] on its own and never terminates the process.

use std::fmt;

use log::Level;

/// Severity of a report.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
pub enum Severity {
    #[strum(serialize = "debug")]
    Debug,
    #[strum(serialize = "warn")]
    Warn,
    #[strum(serialize = "error")]
    Error,
    #[strum(serialize = "fatal")]
    Fatal,
}

impl Severity {
    /// Log level a report of this severity is emitted at.
    pub fn level(self) -> Level {
        match self {
            Severity::Debug => Level::Debug,
            Severity::Warn => Level::Warn,
            Severity::Error | Severity::Fatal => Level::Error,
        }
    }

    /// Whether reports of this severity are emitted in this build.
    pub fn is_emitted(self) -> bool {
        self != Severity::Debug || cfg!(debug_assertions)
    }
}

/// Emits a report. Debug reports are dropped in release builds.
pub fn report(severity: Severity, args: fmt::Arguments<'_>) {
    if !severity.is_emitted() {
        return;
    }
    log::log!(target: "hasha", severity.level(), "[{}] {}", severity, args);
}
