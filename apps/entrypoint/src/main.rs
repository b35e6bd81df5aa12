#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr)]

mod handlers;
mod models;

use crate::handlers::{doctor, init, run};
use crate::models::args::{AppCommands, Cli};

use anyhow::Context;
use bvp_bootstrap::BootstrapError;
use bvp_domain::config::BootConfig;
use bvp_kernel::config::load_config;
use bvp_logger::Logger;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(code) => to_exit_code(code),
        Err(err) => {
            // The logger may not be initialized yet (e.g. malformed config),
            // so the error path always writes to stderr directly.
            eprintln!("Error: {err:#}");
            err.downcast_ref::<BootstrapError>()
                .map_or(ExitCode::FAILURE, |boot| to_exit_code(boot.exit_code()))
        },
    }
}

fn try_main(cli: Cli) -> anyhow::Result<i32> {
    let mut cfg: BootConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg)?;

    match cli.command {
        AppCommands::Run { policy, skip_init, supervise } => {
            if let Some(policy) = policy {
                cfg.init.policy = policy;
            }
            if skip_init {
                cfg.init.skip = true;
            }
            run::run_stack(&cfg, supervise)
        },
        AppCommands::Init {} => init::run_init_only(&cfg),
        AppCommands::Doctor {} => doctor::run_doctor(&cfg),
    }
}

fn init_logger(cfg: &BootConfig) -> anyhow::Result<Logger> {
    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME"));

    if let Some(dir) = &cfg.log.dir {
        builder = builder.path(dir);
        if cfg.log.json {
            builder = builder.json();
        }
    }

    builder.init().context("Failed to initialize logger")
}

fn to_exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
