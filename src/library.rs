//! Library targets: the independently built units an aggregate groups.

use crate::definition::TargetDefinition;
use crate::spec::Specification;
use std::fmt;

/// A dependency's buildable unit, shared between the aggregates that use it
pub trait LibraryTarget: fmt::Debug + Send + Sync {
    /// Target name
    fn name(&self) -> &str;

    /// Specifications built into this target, in declaration order
    fn specs(&self) -> &[Specification];

    /// Whether any source in the target is Swift
    fn uses_swift(&self) -> bool;

    /// Whether this target participates in `configuration_name` for the grouping `definition`
    fn include_in_build_configuration(&self, definition: &dyn TargetDefinition, configuration_name: &str) -> bool;
}

/// Library target built from the specs of one pod
#[derive(Debug, Clone)]
pub struct PodTarget {
    name: String,
    specs: Vec<Specification>,
    uses_swift: bool,
}

impl PodTarget {
    /// Create a pod target; the name is taken from the first spec's root name
    pub fn new(specs: Vec<Specification>) -> Self {
        let name = specs
            .first()
            .map(|spec| spec.root_name().to_string())
            .unwrap_or_default();
        Self {
            name,
            specs,
            uses_swift: false,
        }
    }

    /// Override the target name (used when one pod is built for several platforms)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark the target as containing Swift sources
    pub fn with_swift(mut self, uses_swift: bool) -> Self {
        self.uses_swift = uses_swift;
        self
    }

    /// Name of the pod all specs belong to
    pub fn pod_name(&self) -> &str {
        self.specs
            .first()
            .map(|spec| spec.root_name())
            .unwrap_or(&self.name)
    }
}

impl LibraryTarget for PodTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn specs(&self) -> &[Specification] {
        &self.specs
    }

    fn uses_swift(&self) -> bool {
        self.uses_swift
    }

    fn include_in_build_configuration(&self, definition: &dyn TargetDefinition, configuration_name: &str) -> bool {
        definition.pod_whitelisted_for_configuration(self.pod_name(), configuration_name)
    }
}
