use bvp_domain::policy::InitPolicy;
use std::fmt;
use std::process::ExitStatus;

/// Exit code the initializer uses to signal "found existing state, did nothing".
pub const ALREADY_INITIALIZED_CODE: i32 = 1;

/// Explicit taxonomy of the initialization step's exit status.
///
/// The legacy scripts compared raw numbers inline; naming the cases keeps both
/// entry-point policies honest against a single contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Exit code 0: storage was prepared from scratch.
    Success,
    /// Exit code 1: storage already held state; the step intentionally skipped.
    AlreadyInitialized,
    /// Any other exit code: a genuine failure.
    Fatal(i32),
    /// Terminated by a signal before producing an exit code (Unix carries the signal number).
    Signaled(Option<i32>),
}

impl InitOutcome {
    /// Maps a plain exit code into the taxonomy.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Success,
            ALREADY_INITIALIZED_CODE => Self::AlreadyInitialized,
            other => Self::Fatal(other),
        }
    }

    /// Maps a child's [`ExitStatus`] into the taxonomy.
    #[must_use]
    pub fn from_status(status: ExitStatus) -> Self {
        status.code().map_or_else(|| Self::Signaled(signal_of(status)), Self::from_code)
    }

    /// Whether the given policy lets startup proceed past this outcome.
    ///
    /// Lenient tolerance applies to exit statuses only; spawn failures are
    /// reported before an outcome ever exists.
    #[must_use]
    pub const fn tolerated_by(&self, policy: InitPolicy) -> bool {
        match policy {
            InitPolicy::Lenient => true,
            InitPolicy::Strict => matches!(self, Self::Success | Self::AlreadyInitialized),
        }
    }

    /// The process exit code equivalent of this outcome (shell convention
    /// `128 + signal` for signal deaths).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::AlreadyInitialized => ALREADY_INITIALIZED_CODE,
            Self::Fatal(code) => *code,
            Self::Signaled(Some(sig)) => 128 + *sig,
            Self::Signaled(None) => 1,
        }
    }
}

impl fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::AlreadyInitialized => f.write_str("already initialized"),
            Self::Fatal(code) => write!(f, "fatal (exit code {code})"),
            Self::Signaled(Some(sig)) => write!(f, "killed by signal {sig}"),
            Self::Signaled(None) => f.write_str("killed by signal"),
        }
    }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> Option<i32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_taxonomy() {
        assert_eq!(InitOutcome::from_code(0), InitOutcome::Success);
        assert_eq!(InitOutcome::from_code(1), InitOutcome::AlreadyInitialized);
        assert_eq!(InitOutcome::from_code(2), InitOutcome::Fatal(2));
        assert_eq!(InitOutcome::from_code(42), InitOutcome::Fatal(42));
    }

    #[test]
    fn strict_tolerates_success_and_skip_only() {
        assert!(InitOutcome::Success.tolerated_by(InitPolicy::Strict));
        assert!(InitOutcome::AlreadyInitialized.tolerated_by(InitPolicy::Strict));
        assert!(!InitOutcome::Fatal(2).tolerated_by(InitPolicy::Strict));
        assert!(!InitOutcome::Signaled(Some(9)).tolerated_by(InitPolicy::Strict));
    }

    #[test]
    fn lenient_tolerates_everything() {
        for outcome in [
            InitOutcome::Success,
            InitOutcome::AlreadyInitialized,
            InitOutcome::Fatal(2),
            InitOutcome::Signaled(None),
        ] {
            assert!(outcome.tolerated_by(InitPolicy::Lenient), "{outcome} should be tolerated");
        }
    }

    #[test]
    fn exit_codes_round_out() {
        assert_eq!(InitOutcome::Success.exit_code(), 0);
        assert_eq!(InitOutcome::AlreadyInitialized.exit_code(), 1);
        assert_eq!(InitOutcome::Fatal(7).exit_code(), 7);
        assert_eq!(InitOutcome::Signaled(Some(15)).exit_code(), 143);
    }
}
