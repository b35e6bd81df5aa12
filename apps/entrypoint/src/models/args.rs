//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the entrypoint.

use bvp_domain::policy::InitPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "bvp")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Deployment entrypoint for the BV Parfume storefront stack")]
pub struct Cli {
    /// Path to the config file (TOML). Without this flag, `entrypoint.toml` in the
    /// working directory is used when present; built-in defaults otherwise.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Run the initialization step, then hand the process over to the web server
    Run {
        /// Override the configured failure-tolerance policy for the init step
        #[arg(long, value_parser = parse_policy)]
        policy: Option<InitPolicy>,

        /// Skip the initialization step entirely
        #[arg(long)]
        skip_init: bool,

        /// Supervise the server as a child instead of replacing the process
        /// (always used on platforms without `exec`)
        #[arg(long)]
        supervise: bool,
    },
    /// Run only the initialization step; the exit code mirrors its outcome
    /// (0 success, 1 already initialized, N fatal)
    Init {},
    /// Verify the runtime environment: data directory, port, commands
    Doctor {},
}

fn parse_policy(s: &str) -> Result<InitPolicy, String> {
    s.parse()
}
