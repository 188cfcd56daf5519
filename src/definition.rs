//! Target definitions: the configuration nodes aggregate targets are built from.

use crate::platform::Platform;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// How a build configuration is optimized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    /// Unoptimized build with debugging aids
    Debug,
    /// Optimized build
    Release,
}

/// A configuration node describing one consumer grouping
pub trait TargetDefinition: fmt::Debug + Send + Sync {
    /// Display label, used as the identifier of the aggregate built from it
    fn label(&self) -> String;

    /// Platform the grouping builds for
    fn platform(&self) -> Platform;

    /// Abstract nodes only group children and never produce artifacts
    fn is_abstract(&self) -> bool;

    /// Build configurations declared by the consumer, in declaration order
    fn build_configurations(&self) -> IndexMap<String, BuildType>;

    /// Whether libraries are integrated as frameworks rather than static libraries
    fn uses_frameworks(&self) -> bool;

    /// Whether a pod participates in a build configuration for this grouping
    fn pod_whitelisted_for_configuration(&self, pod_name: &str, configuration_name: &str) -> bool;
}

/// In-memory target definition
#[derive(Debug)]
pub struct DefinitionNode {
    label: String,
    platform: RwLock<Platform>,
    is_abstract: bool,
    uses_frameworks: bool,
    build_configurations: IndexMap<String, BuildType>,
    configuration_whitelist: HashMap<String, Vec<String>>,
}

impl DefinitionNode {
    /// Create a concrete definition with the default `Debug`/`Release` configurations
    pub fn new(label: impl Into<String>, platform: Platform) -> Self {
        let mut build_configurations = IndexMap::new();
        build_configurations.insert("Debug".to_string(), BuildType::Debug);
        build_configurations.insert("Release".to_string(), BuildType::Release);

        Self {
            label: label.into(),
            platform: RwLock::new(platform),
            is_abstract: false,
            uses_frameworks: false,
            build_configurations,
            configuration_whitelist: HashMap::new(),
        }
    }

    /// Mark this definition abstract
    pub fn into_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Integrate libraries as frameworks
    pub fn with_frameworks(mut self, uses_frameworks: bool) -> Self {
        self.uses_frameworks = uses_frameworks;
        self
    }

    /// Replace the declared build configurations
    pub fn with_build_configurations<I, S>(mut self, configurations: I) -> Self
    where
        I: IntoIterator<Item = (S, BuildType)>,
        S: Into<String>,
    {
        self.build_configurations = configurations
            .into_iter()
            .map(|(name, build_type)| (name.into(), build_type))
            .collect();
        self
    }

    /// Restrict a pod to the named build configurations
    pub fn whitelist_pod_for_configurations<I, S>(mut self, pod_name: &str, configurations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configuration_whitelist
            .entry(pod_name.to_string())
            .or_default()
            .extend(configurations.into_iter().map(Into::into));
        self
    }

    /// Replace the platform after construction
    pub fn set_platform(&self, platform: Platform) {
        *self.platform.write() = platform;
    }
}

impl TargetDefinition for DefinitionNode {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn platform(&self) -> Platform {
        self.platform.read().clone()
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn build_configurations(&self) -> IndexMap<String, BuildType> {
        self.build_configurations.clone()
    }

    fn uses_frameworks(&self) -> bool {
        self.uses_frameworks
    }

    fn pod_whitelisted_for_configuration(&self, pod_name: &str, configuration_name: &str) -> bool {
        match self.configuration_whitelist.get(pod_name) {
            Some(configurations) => configurations.iter().any(|c| c == configuration_name),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformName;

    #[test]
    fn unlisted_pods_are_in_every_configuration() {
        let node = DefinitionNode::new("Pods-App", Platform::new(PlatformName::Ios))
            .whitelist_pod_for_configurations("Reveal", ["Debug"]);

        assert!(node.pod_whitelisted_for_configuration("Alamofire", "Release"));
        assert!(node.pod_whitelisted_for_configuration("Reveal", "Debug"));
        assert!(!node.pod_whitelisted_for_configuration("Reveal", "Release"));
        assert!(!node.pod_whitelisted_for_configuration("Reveal", "debug"));
    }
}
