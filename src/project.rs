//! Consumer project model: the native targets an aggregate integrates with.

use crate::product_type::ProductType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A target in the consumer's native project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeTarget {
    /// Stable identifier within the project
    pub uuid: String,
    /// Display name
    pub name: String,
    /// Declared product type
    pub product_type: ProductType,
}

/// Read access to the consumer's native project
pub trait UserProject: fmt::Debug + Send + Sync {
    /// Location of the project file
    fn path(&self) -> &Path;

    /// Native target with the given stable identifier
    fn native_target(&self, uuid: &str) -> Option<&NativeTarget>;
}

/// In-memory consumer project
#[derive(Debug, Clone, Default)]
pub struct UserProjectModel {
    path: PathBuf,
    targets: HashMap<String, NativeTarget>,
}

impl UserProjectModel {
    /// Empty project located at `path` (the project bundle, e.g. `/Project/App.xcodeproj`)
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            targets: HashMap::new(),
        }
    }

    /// Add a native target, replacing any target with the same identifier
    pub fn add_target(&mut self, uuid: impl Into<String>, name: impl Into<String>, product_type: ProductType) -> &NativeTarget {
        let uuid = uuid.into();
        let target = NativeTarget {
            uuid: uuid.clone(),
            name: name.into(),
            product_type,
        };
        self.targets.insert(uuid.clone(), target);
        &self.targets[&uuid]
    }

    /// Builder form of [`UserProjectModel::add_target`]
    pub fn with_target(mut self, uuid: impl Into<String>, name: impl Into<String>, product_type: ProductType) -> Self {
        self.add_target(uuid, name, product_type);
        self
    }

    /// Number of native targets
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

impl UserProject for UserProjectModel {
    fn path(&self) -> &Path {
        &self.path
    }

    fn native_target(&self, uuid: &str) -> Option<&NativeTarget> {
        self.targets.get(uuid)
    }
}
