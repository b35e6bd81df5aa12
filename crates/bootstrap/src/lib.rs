//! # Bootstrap
//!
//! The init-then-serve contract behind the BV Parfume container entrypoint.
//!
//! The sequence is deliberately boring: run the database-initialization step,
//! map its exit status into an explicit taxonomy ([`InitOutcome`]), let the
//! selected [`InitPolicy`](bvp_domain::policy::InitPolicy) decide whether
//! startup proceeds, then hand the process over to the web server—by `exec`
//! on Unix, or by supervising a child elsewhere.
//!
//! ## Example
//! ```rust,no_run
//! use bvp_bootstrap::{InitOutcome, run_init};
//! use bvp_domain::config::CommandSpec;
//! use bvp_domain::policy::InitPolicy;
//!
//! # fn main() -> Result<(), bvp_bootstrap::BootstrapError> {
//! let outcome = run_init(&CommandSpec::new("python3", &["init_db.py"]))?;
//! if !outcome.tolerated_by(InitPolicy::Strict) {
//!     return Err(bvp_bootstrap::BootstrapError::InitFailed { code: outcome.exit_code() });
//! }
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod init;
mod launch;
mod outcome;

pub use crate::context::LaunchContext;
pub use crate::error::BootstrapError;
pub use crate::init::run_init;
#[cfg(unix)]
pub use crate::launch::exec_server;
pub use crate::launch::supervise_server;
pub use crate::outcome::{ALREADY_INITIALIZED_CODE, InitOutcome};
