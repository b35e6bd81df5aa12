use crate::error::BootstrapError;
use crate::outcome::InitOutcome;
use bvp_domain::config::CommandSpec;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Runs the database-initialization step to completion, blocking.
///
/// The child inherits stdio so the initializer's own console trace stays
/// visible to the operator. The exit status is mapped into [`InitOutcome`];
/// interpreting it against a policy is the caller's job.
///
/// # Errors
/// Returns [`BootstrapError::Spawn`] if the program cannot be started at all.
pub fn run_init(spec: &CommandSpec) -> Result<InitOutcome, BootstrapError> {
    info!(command = %spec.display(), "Running initialization step");

    let status = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| BootstrapError::Spawn {
            what: "init",
            program: spec.program.clone(),
            source,
        })?;

    let outcome = InitOutcome::from_status(status);
    match outcome {
        InitOutcome::Success | InitOutcome::AlreadyInitialized => {
            info!(%outcome, "Initialization step finished");
        },
        InitOutcome::Fatal(_) | InitOutcome::Signaled(_) => {
            warn!(%outcome, "Initialization step did not succeed");
        },
    }

    Ok(outcome)
}
