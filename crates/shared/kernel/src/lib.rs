//! Kernel utilities shared across the entrypoint.
//! Keep this crate lightweight; it carries layered config loading and the
//! preflight checks that gate startup.
//!
//! ## Config loading
//! ```rust,ignore
//! use bvp_kernel::config::load_config;
//! use bvp_domain::config::BootConfig;
//!
//! let cfg: BootConfig = load_config::<BootConfig>(None)?;
//! ```

pub mod config;
pub mod preflight;

pub use bvp_domain as domain;
