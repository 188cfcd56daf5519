//! Shared fixtures for integration tests

#![allow(dead_code)]

use pod_aggregate::{
    AggregateTarget, DefinitionNode, PodTarget, Platform, PlatformName, ProductType, Sandbox,
    Specification, UserProjectModel,
};
use std::sync::Arc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn ios_definition(label: &str) -> DefinitionNode {
    DefinitionNode::new(label, Platform::new(PlatformName::Ios))
}

pub fn aggregate(label: &str) -> AggregateTarget {
    init_logging();
    AggregateTarget::new(Arc::new(ios_definition(label)), Arc::new(Sandbox::new("/Project/Pods")))
        .expect("concrete definition")
}

pub fn aggregate_with(definition: DefinitionNode) -> AggregateTarget {
    init_logging();
    AggregateTarget::new(Arc::new(definition), Arc::new(Sandbox::new("/Project/Pods")))
        .expect("concrete definition")
}

pub fn pod(specs: &[&str]) -> Arc<PodTarget> {
    Arc::new(PodTarget::new(specs.iter().map(|name| Specification::new(*name)).collect()))
}

/// Project at `/Project/App.xcodeproj` with one native target per product type, uuids `T0`, `T1`, ...
pub fn project(product_types: &[ProductType]) -> Arc<UserProjectModel> {
    let mut model = UserProjectModel::new("/Project/App.xcodeproj");
    for (index, product_type) in product_types.iter().enumerate() {
        model.add_target(format!("T{}", index), format!("Target{}", index), product_type.clone());
    }
    Arc::new(model)
}

pub fn uuids(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("T{}", index)).collect()
}
