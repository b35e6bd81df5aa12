use anyhow::{Context, Result, bail};
use bvp_bootstrap::{BootstrapError, LaunchContext, run_init, supervise_server};
use bvp_domain::config::BootConfig;
use bvp_kernel::preflight;
use tracing::info;

/// Drives the full bootstrap sequence: preflight, init per policy, serve.
///
/// On Unix the server replaces this process, so on the happy path this
/// function does not return; the returned code is only reached in supervise
/// mode or when startup is aborted.
pub fn run_stack(cfg: &BootConfig, supervise: bool) -> Result<i32> {
    let report = preflight::run(cfg);
    if report.has_failures() {
        bail!("preflight checks failed; aborting startup");
    }

    let ctx = LaunchContext::from_config(cfg);

    if cfg.init.skip {
        info!("Initialization step skipped by configuration");
    } else {
        let outcome = run_init(&ctx.expand(&cfg.init.command))?;
        if !outcome.tolerated_by(cfg.init.policy) {
            return Err(BootstrapError::InitFailed { code: outcome.exit_code() }.into());
        }
        info!(%outcome, policy = %cfg.init.policy, "Initialization outcome accepted");
    }

    let server = ctx.expand(&cfg.server.command);

    if supervise || cfg!(not(unix)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build supervisor runtime")?;
        let code = runtime.block_on(supervise_server(&server))?;
        return Ok(code);
    }

    launch(&server)
}

#[cfg(unix)]
fn launch(server: &bvp_domain::config::CommandSpec) -> Result<i32> {
    match bvp_bootstrap::exec_server(server) {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}

#[cfg(not(unix))]
fn launch(_server: &bvp_domain::config::CommandSpec) -> Result<i32> {
    // Unreachable: the supervise branch above always runs on non-Unix.
    bail!("process replacement is not available on this platform")
}
