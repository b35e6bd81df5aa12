use crate::policy::InitPolicy;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level bootstrap configuration shared across the entrypoint.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootConfigInner {
    pub server: ServerConfig,
    pub init: InitConfig,
    pub storage: StorageConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct BootConfig {
    #[serde(flatten, default)]
    inner: Arc<BootConfigInner>,
}

impl Deref for BootConfig {
    type Target = BootConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for BootConfig {
    fn deref_mut(&mut self) -> &mut BootConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// An opaque external command: program plus arguments.
///
/// Arguments may carry the `{address}`, `{port}`, and `{data_dir}` placeholders;
/// the launcher expands them right before spawn.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    #[must_use]
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self { program: program.into(), args: args.iter().map(|&a| a.to_owned()).collect() }
    }

    /// A one-line rendition for logs.
    #[must_use]
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// The web server the bootstrap hands the process over to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub command: CommandSpec,
}

/// The database-initialization step run before the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InitConfig {
    pub command: CommandSpec,
    pub policy: InitPolicy,
    pub skip: bool,
}

/// Persistent storage roots prepared before initialization runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Optional file logging knobs for the entrypoint itself.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub dir: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            command: CommandSpec::new(
                "uvicorn",
                &["app.main:app", "--host", "{address}", "--port", "{port}"],
            ),
        }
    }
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            command: CommandSpec::new("python3", &["init_db.py"]),
            policy: InitPolicy::Strict,
            skip: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data") }
    }
}
