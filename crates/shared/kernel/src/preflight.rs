//! Startup preflight checks.
//!
//! The image-build contract promises a writable data directory and a sane
//! launch configuration; these checks verify that promise at runtime before
//! the initialization step is allowed to run.

use bvp_domain::config::BootConfig;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const PROBE_FILE: &str = ".preflight-probe";

/// Outcome of a single preflight check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    /// Degraded but startup may proceed.
    Warn,
    /// Startup must not proceed.
    Fail,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("pass"),
            Self::Warn => f.write_str("warn"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

/// A named check with its outcome and a human-readable detail line.
#[derive(Debug)]
pub struct Check {
    pub name: &'static str,
    pub status: CheckStatus,
    pub detail: String,
}

/// Aggregated result of all preflight checks.
#[derive(Default, Debug)]
pub struct PreflightReport {
    checks: Vec<Check>,
}

impl PreflightReport {
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// True if any check failed hard; startup must abort.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    fn record(&mut self, name: &'static str, status: CheckStatus, detail: impl Into<String>) {
        let detail = detail.into();
        match status {
            CheckStatus::Pass => debug!(check = name, "{detail}"),
            CheckStatus::Warn | CheckStatus::Fail => warn!(check = name, "{detail}"),
        }
        self.checks.push(Check { name, status, detail });
    }
}

/// Runs all preflight checks against the effective configuration.
///
/// Creates the data directory if it is missing; a directory that cannot be
/// created or written to is a hard failure.
#[must_use]
pub fn run(cfg: &BootConfig) -> PreflightReport {
    let mut report = PreflightReport::default();

    check_data_dir(&mut report, &cfg.storage.data_dir);

    if cfg.server.port == 0 {
        report.record("server.port", CheckStatus::Fail, "server port must be non-zero");
    } else {
        report.record(
            "server.port",
            CheckStatus::Pass,
            format!("server will listen on {}:{}", cfg.server.address, cfg.server.port),
        );
    }

    if cfg.server.command.program.trim().is_empty() {
        report.record("server.command", CheckStatus::Fail, "server command is empty");
    } else {
        report.record(
            "server.command",
            CheckStatus::Pass,
            format!("server command: {}", cfg.server.command.display()),
        );
    }

    if cfg.init.skip {
        report.record("init.command", CheckStatus::Warn, "initialization step is disabled");
    } else if cfg.init.command.program.trim().is_empty() {
        report.record("init.command", CheckStatus::Fail, "init command is empty");
    } else {
        report.record(
            "init.command",
            CheckStatus::Pass,
            format!("init command: {} (policy: {})", cfg.init.command.display(), cfg.init.policy),
        );
    }

    if let Some(dir) = &cfg.log.dir {
        if fs::create_dir_all(dir).is_err() {
            report.record(
                "log.dir",
                CheckStatus::Warn,
                format!("log directory '{}' is not creatable; file logging disabled", dir.display()),
            );
        } else {
            report.record(
                "log.dir",
                CheckStatus::Pass,
                format!("log directory: {}", dir.display()),
            );
        }
    }

    report
}

fn check_data_dir(report: &mut PreflightReport, dir: &Path) {
    if let Err(e) = fs::create_dir_all(dir) {
        report.record(
            "storage.data_dir",
            CheckStatus::Fail,
            format!("cannot create data directory '{}': {e}", dir.display()),
        );
        return;
    }

    let probe = dir.join(PROBE_FILE);
    match fs::write(&probe, b"probe") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            report.record(
                "storage.data_dir",
                CheckStatus::Pass,
                format!("data directory '{}' is writable", dir.display()),
            );
        },
        Err(e) => {
            report.record(
                "storage.data_dir",
                CheckStatus::Fail,
                format!("data directory '{}' is not writable: {e}", dir.display()),
            );
        },
    }
}
