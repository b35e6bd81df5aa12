use anyhow::Result;
use bvp_bootstrap::{LaunchContext, run_init};
use bvp_domain::config::BootConfig;
use tracing::info;

/// Runs only the initialization step and reports its outcome.
///
/// The returned code mirrors the taxonomy verbatim (0 success, 1 already
/// initialized, N fatal) so operators and scripts can branch on it the same
/// way the entrypoint does.
pub fn run_init_only(cfg: &BootConfig) -> Result<i32> {
    let ctx = LaunchContext::from_config(cfg);
    let outcome = run_init(&ctx.expand(&cfg.init.command))?;
    info!(%outcome, "Initialization step completed");
    Ok(outcome.exit_code())
}
