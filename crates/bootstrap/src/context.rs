use bvp_domain::config::{BootConfig, CommandSpec};
use std::net::IpAddr;
use std::path::PathBuf;

/// Runtime values substituted into command arguments before spawn.
///
/// Keeps the config file free of duplicated host/port literals: the server
/// command says `--port {port}` and the single source of truth stays in
/// `[server]`.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    pub address: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl LaunchContext {
    #[must_use]
    pub fn from_config(cfg: &BootConfig) -> Self {
        Self {
            address: cfg.server.address,
            port: cfg.server.port,
            data_dir: cfg.storage.data_dir.clone(),
        }
    }

    /// Returns a copy of `spec` with `{address}`, `{port}`, and `{data_dir}`
    /// placeholders expanded in every argument. The program name is taken as-is.
    #[must_use]
    pub fn expand(&self, spec: &CommandSpec) -> CommandSpec {
        let address = self.address.to_string();
        let port = self.port.to_string();
        let data_dir = self.data_dir.display().to_string();

        CommandSpec {
            program: spec.program.clone(),
            args: spec
                .args
                .iter()
                .map(|arg| {
                    arg.replace("{address}", &address)
                        .replace("{port}", &port)
                        .replace("{data_dir}", &data_dir)
                })
                .collect(),
        }
    }
}
