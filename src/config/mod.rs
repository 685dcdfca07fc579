//! Configuration loading and types for docpress.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading configs from files and the environment (`load`)

mod load;
mod types;

use crate::build::output_file_name;

pub use types::{Config, MarkdownConfig, NavLinkConfig, SiteConfig};

/// Name of the config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "docpress.yaml";

/// Prefix for environment overrides, e.g. `DOCPRESS__SITE__VERSION=2.0`.
pub const ENV_PREFIX: &str = "DOCPRESS";

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to encode config file path as a unicode string: {0}")]
    EncodePath(std::path::PathBuf),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("{0}")]
    Validation(String),
}

impl Config {
    /// Check invariants the type system can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.documents {
            if std::path::Path::new(name).file_stem().is_none() {
                return Err(ConfigError::Validation(format!(
                    "invalid document name '{name}': it has no file name"
                )));
            }
        }

        let shadows_index = self
            .documents
            .iter()
            .any(|d| std::path::Path::new(d).file_stem().is_some_and(|s| s == "index"));
        if shadows_index {
            return Err(ConfigError::Validation(
                "a document named 'index.md' would be overwritten by the generated index page"
                    .to_string(),
            ));
        }

        let mut output_names = std::collections::HashSet::new();
        for name in &self.documents {
            let output_name = output_file_name(std::path::Path::new(name));
            if !output_names.insert(output_name.clone()) {
                return Err(ConfigError::Validation(format!(
                    "document '{name}' would write {output_name}, which another listed document already writes"
                )));
            }
        }

        let bad_date_format = chrono::format::StrftimeItems::new(&self.site.date_format)
            .any(|item| matches!(item, chrono::format::Item::Error));
        if bad_date_format {
            return Err(ConfigError::Validation(format!(
                "invalid site.date_format '{}'",
                self.site.date_format
            )));
        }

        Ok(())
    }
}
