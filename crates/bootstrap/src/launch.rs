use crate::error::BootstrapError;
use bvp_domain::config::CommandSpec;
use std::process::ExitStatus;
use tracing::{error, info};

/// Replaces the current process image with the server command.
///
/// On success the server inherits this process's identity and signal delivery,
/// making it the container's primary process. `exec` therefore only ever
/// returns on failure.
///
/// # Errors
/// Returns [`BootstrapError::Exec`] with the underlying I/O error.
#[cfg(unix)]
pub fn exec_server(spec: &CommandSpec) -> Result<std::convert::Infallible, BootstrapError> {
    use std::os::unix::process::CommandExt;

    info!(command = %spec.display(), "Replacing process with server");

    let err = std::process::Command::new(&spec.program).args(&spec.args).exec();
    Err(BootstrapError::Exec { program: spec.program.clone(), source: err })
}

/// Runs the server as a supervised child, forwarding shutdown to it.
///
/// Fallback for platforms without process replacement (and available behind a
/// flag everywhere): waits for either the child to exit or a shutdown signal
/// (Ctrl+C, SIGTERM); on signal the child is killed and reaped. Returns the
/// exit code the whole process should surface.
///
/// # Errors
/// Returns [`BootstrapError::Spawn`] if the server cannot be started and
/// [`BootstrapError::Supervise`] if waiting on or signalling the child fails.
pub async fn supervise_server(spec: &CommandSpec) -> Result<i32, BootstrapError> {
    info!(command = %spec.display(), "Supervising server process");

    let mut child = tokio::process::Command::new(&spec.program).args(&spec.args).spawn().map_err(
        |source| BootstrapError::Spawn { what: "server", program: spec.program.clone(), source },
    )?;

    tokio::select! {
        status = child.wait() => {
            let status = status.map_err(BootstrapError::Supervise)?;
            let code = exit_code_of(status);
            info!(code, "Server exited");
            Ok(code)
        },
        res = shutdown_signal() => {
            if let Err(e) = res {
                error!("Error while waiting for shutdown signal: {e}");
            }
            info!("Shutdown signal received, stopping server...");
            child.start_kill().map_err(BootstrapError::Supervise)?;
            let status = child.wait().await.map_err(BootstrapError::Supervise)?;
            Ok(exit_code_of(status))
        },
    }
}

fn exit_code_of(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        status.code().or_else(|| status.signal().map(|sig| 128 + sig)).unwrap_or(1)
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(1)
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal;

    let ctrl_c = async { signal::ctrl_c().await };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())?.recv().await;
        Ok::<_, std::io::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<std::io::Result<()>>();

    tokio::select! {
        res = ctrl_c => res,
        res = terminate => res,
    }
}
