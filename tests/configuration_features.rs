//! Tests for per-build-configuration filtering and spec aggregation

mod common;

mod configuration_tests {
    use super::common::*;
    use pod_aggregate::{
        BuildType, Platform, PlatformName, PodTarget, SpecAttributes, Specification,
    };
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn names(specs: &[&Specification]) -> Vec<String> {
        specs.iter().map(|spec| spec.name().to_string()).collect()
    }

    #[test]
    fn test_configuration_filtering_by_whitelist() {
        let definition = ios_definition("Pods-App").whitelist_pod_for_configurations("Reveal", ["Debug"]);
        let mut target = aggregate_with(definition);
        target.add_pod_target(pod(&["Reveal"]));
        target.add_pod_target(pod(&["AFNetworking/Core", "AFNetworking/UIKit"]));

        let debug: Vec<String> = target
            .pod_targets_for_build_configuration("Debug")
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(debug, vec!["Reveal".to_string(), "AFNetworking".to_string()]);

        let release: Vec<String> = target
            .pod_targets_for_build_configuration("Release")
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(release, vec!["AFNetworking".to_string()]);
    }

    #[test]
    fn test_configuration_unknown_name_uses_target_answers() {
        let definition = ios_definition("Pods-App").whitelist_pod_for_configurations("Reveal", ["Debug"]);
        let mut target = aggregate_with(definition);
        target.add_pod_target(pod(&["Reveal"]));
        target.add_pod_target(pod(&["AFNetworking"]));

        assert_eq!(target.pod_targets_for_build_configuration("Staging").len(), 1);
    }

    #[test]
    fn test_configuration_specs_by_build_configuration() {
        let definition = ios_definition("Pods-App").whitelist_pod_for_configurations("Reveal", ["Debug"]);
        let mut target = aggregate_with(definition);
        target.add_pod_target(pod(&["Reveal"]));
        target.add_pod_target(pod(&["AFNetworking/Core", "AFNetworking/UIKit"]));

        let by_configuration = target.specs_by_build_configuration();
        let keys: Vec<&String> = by_configuration.keys().collect();
        assert_eq!(keys, vec!["Debug", "Release"]);
        assert_eq!(
            names(&by_configuration["Debug"]),
            vec!["Reveal", "AFNetworking/Core", "AFNetworking/UIKit"]
        );
        assert_eq!(names(&by_configuration["Release"]), vec!["AFNetworking/Core", "AFNetworking/UIKit"]);
    }

    #[test]
    fn test_configuration_empty_configurations_keep_their_key() {
        let definition = ios_definition("Pods-App")
            .with_build_configurations([("Debug", BuildType::Debug), ("Release", BuildType::Release)])
            .whitelist_pod_for_configurations("Reveal", ["Debug"]);
        let mut target = aggregate_with(definition);
        target.add_pod_target(pod(&["Reveal"]));

        let by_configuration = target.specs_by_build_configuration();
        assert!(by_configuration["Release"].is_empty());
    }

    #[test]
    fn test_configuration_user_build_configurations_can_be_overridden() {
        let mut target = aggregate("Pods-App");
        target.add_pod_target(pod(&["AFNetworking"]));

        let mut configurations = IndexMap::new();
        configurations.insert("Beta".to_string(), BuildType::Release);
        target.set_user_build_configurations(configurations);

        let by_configuration = target.specs_by_build_configuration();
        assert_eq!(by_configuration.len(), 1);
        assert_eq!(names(&by_configuration["Beta"]), vec!["AFNetworking"]);
    }

    #[test]
    fn test_configuration_specs_are_not_deduplicated() {
        let mut target = aggregate("Pods-App");
        target.add_pod_target(pod(&["Shared", "Shared/Extras"]));
        target.add_pod_target(Arc::new(PodTarget::new(vec![Specification::new("Shared")]).with_name("Shared-macOS")));

        assert_eq!(names(&target.specs()), vec!["Shared", "Shared/Extras", "Shared"]);
    }

    #[test]
    fn test_configuration_spec_consumers_use_target_platform() {
        let mut target = aggregate("Pods-App");
        let spec = Specification::new("Kit").with_platform_attributes(
            PlatformName::Ios,
            SpecAttributes {
                frameworks: vec!["UIKit".to_string()],
                ..Default::default()
            },
        );
        target.add_pod_target(Arc::new(PodTarget::new(vec![spec])));

        let consumers = target.spec_consumers();
        assert_eq!(consumers.len(), 1);
        assert_eq!(consumers[0].platform(), &Platform::new(PlatformName::Ios));
        assert_eq!(consumers[0].frameworks(), vec!["UIKit"]);
    }

    #[test]
    fn test_configuration_xcconfigs_are_stored_per_configuration() {
        use pod_aggregate::Xcconfig;

        let mut target = aggregate("Pods-App");
        let mut debug = Xcconfig::new();
        debug.set("GCC_PREPROCESSOR_DEFINITIONS", "$(inherited) COCOAPODS=1");
        target.set_xcconfig("Debug", debug);

        assert_eq!(
            target.xcconfig("Debug").and_then(|x| x.get("GCC_PREPROCESSOR_DEFINITIONS")),
            Some("$(inherited) COCOAPODS=1")
        );
        assert!(target.xcconfig("Release").is_none());
    }
}
