//! Configuration loading from files and the environment.
//!
//! Layering, lowest to highest priority:
//! 1. serde defaults (the stock document set)
//! 2. the YAML config file, if it exists
//! 3. `DOCPRESS__*` environment variables

use std::path::{Path, PathBuf};

use super::{Config, ConfigError, DEFAULT_CONFIG_FILE, ENV_PREFIX};

impl Config {
    /// Load the config from the command line argument, defaulting to `docpress.yaml`
    ///
    /// Returns the config together with the absolute path it was looked up at,
    /// which callers use as the base for relative paths.
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_file = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        let config = Self::load_from_file(&config_file)?;
        Ok((config, config_file))
    }

    /// Load the config from a file path. A missing file is not an error.
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        Self::load_layered(path_str, environment())
    }

    fn load_layered(path: &str, env: config::Environment) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::new(path, config::FileFormat::Yaml).required(false))
            .add_source(env)
            .build()?
            .try_deserialize::<Config>()?;

        config.validate()?;
        Ok(config)
    }
}

/// `DOCPRESS__SITE__VERSION=2.0` sets `site.version`.
///
/// Values are passed through as strings. Lists arrive comma-joined and are
/// split when `Config` is deserialized.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}
