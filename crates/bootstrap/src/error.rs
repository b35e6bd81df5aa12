use std::io;

/// Fallback process exit code for errors that carry no code of their own.
const GENERIC_FAILURE_CODE: i32 = 1;

/// Errors raised while driving the init-then-serve sequence.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The child program could not be started at all (missing binary, bad permissions).
    /// Distinct from a fatal exit code; never tolerated by any policy.
    #[error("Failed to spawn {what} command '{program}': {source}")]
    Spawn { what: &'static str, program: String, source: io::Error },

    /// The initialization step exited with a code outside the tolerated set.
    #[error("Initialization failed with exit code {code}")]
    InitFailed { code: i32 },

    /// Process replacement with the server failed; `exec` only returns on error.
    #[error("Failed to replace process with server '{program}': {source}")]
    Exec { program: String, source: io::Error },

    /// The supervised server child could not be awaited or signalled.
    #[error("Supervisor error: {0}")]
    Supervise(#[source] io::Error),
}

impl BootstrapError {
    /// The process exit code this error should surface as.
    ///
    /// A fatal init code is propagated verbatim so operators see the
    /// initializer's own status; everything else collapses to a generic failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InitFailed { code } => *code,
            Self::Spawn { .. } | Self::Exec { .. } | Self::Supervise(_) => GENERIC_FAILURE_CODE,
        }
    }
}
