//! Integration configuration loaded from TOML.
//!
//! ```toml
//! support_files_dir = "Target Support Files"
//! srcroot_variable = "${SRCROOT}"
//! per_target_support_dirs = false
//! ```

use crate::error::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default directory (under the sandbox root) holding generated support files
pub const DEFAULT_SUPPORT_FILES_DIR: &str = "Target Support Files";

/// Default build-setting variable that resolves to the consumer project directory
pub const DEFAULT_SRCROOT_VARIABLE: &str = "${SRCROOT}";

/// Naming conventions for generated integration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Directory name under the sandbox root for per-target support files
    pub support_files_dir: String,
    /// Build-setting variable prefixed to paths relative to the client root
    pub srcroot_variable: String,
    /// Nest each target's support files in a directory named after its label
    pub per_target_support_dirs: bool,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            support_files_dir: DEFAULT_SUPPORT_FILES_DIR.to_string(),
            srcroot_variable: DEFAULT_SRCROOT_VARIABLE.to_string(),
            per_target_support_dirs: false,
        }
    }
}

impl IntegrationConfig {
    /// Parse configuration from TOML text, filling missing keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: IntegrationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loading integration config from {}", path.display());
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.support_files_dir.trim().is_empty() {
            return Err(ConfigurationError::InvalidConfig {
                reason: "support_files_dir must not be empty".to_string(),
            }
            .into());
        }
        if self.support_files_dir.contains('/') {
            return Err(ConfigurationError::InvalidConfig {
                reason: format!(
                    "support_files_dir '{}' must be a single directory name",
                    self.support_files_dir
                ),
            }
            .into());
        }
        if self.srcroot_variable.trim().is_empty() {
            return Err(ConfigurationError::InvalidConfig {
                reason: "srcroot_variable must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
