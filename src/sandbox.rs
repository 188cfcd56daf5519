//! On-disk layout of the installation sandbox.

use crate::config::IntegrationConfig;
use std::path::{Path, PathBuf};

/// Layout of the directory that holds installed libraries and generated files
#[derive(Debug, Clone)]
pub struct Sandbox {
    root: PathBuf,
    config: IntegrationConfig,
}

impl Sandbox {
    /// Sandbox rooted at `root` with the default naming conventions
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self::with_config(root, IntegrationConfig::default())
    }

    /// Sandbox rooted at `root` with custom naming conventions
    pub fn with_config<P: Into<PathBuf>>(root: P, config: IntegrationConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Root directory of the sandbox
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Naming conventions in effect
    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    /// Directory holding every target's support files
    pub fn target_support_files_root(&self) -> PathBuf {
        self.root.join(&self.config.support_files_dir)
    }

    /// Directory holding the support files of the target named `label`
    ///
    /// Shared by all targets unless `per_target_support_dirs` is set, in which
    /// case each label gets its own subdirectory.
    pub fn target_support_files_dir(&self, label: &str) -> PathBuf {
        let root = self.target_support_files_root();
        if self.config.per_target_support_dirs {
            root.join(label)
        } else {
            root
        }
    }
}
