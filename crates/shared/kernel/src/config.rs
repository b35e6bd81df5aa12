use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Default config file stem looked up in the working directory.
const DEFAULT_CONFIG_STEM: &str = "entrypoint";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `entrypoint.toml`). When no path is
///    provided, the default `entrypoint` file is optional so a container can run on
///    env overrides and built-in defaults alone; an explicitly given path is required.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `BVP__`. Nested structures are accessed using double underscores
///    (e.g., `BVP__SERVER__PORT` maps to `server.port`).
///
/// # Errors
/// This function will return an error if:
/// * An explicitly specified configuration file cannot be found.
/// * The content of the file or environment does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_STEM), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix("BVP")
                .separator("__")
                .convert_case(config::Case::Snake),  // Env var overrides (e.g., BVP__SERVER__PORT)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
