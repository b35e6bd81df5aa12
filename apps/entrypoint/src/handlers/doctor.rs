use anyhow::Result;
use bvp_domain::config::BootConfig;
use bvp_kernel::preflight::{self, CheckStatus};
use tracing::{info, warn};

/// Runs the preflight checks and reports each one.
///
/// Returns a non-zero code when any check fails hard, so `bvp doctor` can be
/// wired into health tooling.
pub fn run_doctor(cfg: &BootConfig) -> Result<i32> {
    let report = preflight::run(cfg);

    for check in report.checks() {
        match check.status {
            CheckStatus::Pass => info!(check = check.name, status = %check.status, "{}", check.detail),
            CheckStatus::Warn | CheckStatus::Fail => {
                warn!(check = check.name, status = %check.status, "{}", check.detail);
            },
        }
    }

    if report.has_failures() {
        warn!("Doctor found fatal problems; the stack will not start");
        Ok(1)
    } else {
        info!("All preflight checks passed");
        Ok(0)
    }
}
