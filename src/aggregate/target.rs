//! The aggregate target: one integration library grouping several library targets.

use crate::aggregate::host;
use crate::definition::{BuildType, TargetDefinition};
use crate::error::{AggregateError, ConfigurationError, IntegrationError, PathError, Result};
use crate::library::LibraryTarget;
use crate::naming::c99ext_identifier;
use crate::paths::{relative_path_from, to_setting_string};
use crate::platform::Platform;
use crate::product_type::ProductType;
use crate::project::{NativeTarget, UserProject};
use crate::sandbox::Sandbox;
use crate::spec::{SpecConsumer, Specification};
use crate::xcconfig::Xcconfig;
use hashbrown::HashSet;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, Weak};

/// Integration library a consumer target links against.
///
/// Built once per non-abstract target definition during installation planning.
/// The installer populates the library targets and host types, binds the user
/// project, and then queries names and paths while generating support files.
#[derive(Debug)]
pub struct AggregateTarget {
    definition: Arc<dyn TargetDefinition>,
    sandbox: Arc<Sandbox>,
    pod_targets: Vec<Arc<dyn LibraryTarget>>,
    search_paths_aggregate_targets: Vec<Weak<AggregateTarget>>,
    host_product_types: HashSet<ProductType>,
    xcconfigs: HashMap<String, Xcconfig>,
    user_build_configurations: IndexMap<String, BuildType>,
    user_project: Option<Arc<dyn UserProject>>,
    user_target_uuids: Vec<String>,
    client_root: Option<PathBuf>,
    platform: OnceLock<Platform>,
}

impl AggregateTarget {
    /// Create an aggregate target for a concrete definition
    pub fn new(definition: Arc<dyn TargetDefinition>, sandbox: Arc<Sandbox>) -> Result<Self> {
        if definition.is_abstract() {
            return Err(ConfigurationError::AbstractDefinition {
                label: definition.label(),
            }
            .into());
        }

        let user_build_configurations = definition.build_configurations();
        log::debug!("Creating aggregate target '{}'", definition.label());

        Ok(Self {
            definition,
            sandbox,
            pod_targets: Vec::new(),
            search_paths_aggregate_targets: Vec::new(),
            host_product_types: HashSet::new(),
            xcconfigs: HashMap::new(),
            user_build_configurations,
            user_project: None,
            user_target_uuids: Vec::new(),
            client_root: None,
            platform: OnceLock::new(),
        })
    }

    // ---------------------------------------------------------------------
    // Identity
    // ---------------------------------------------------------------------

    /// The definition this target was built from
    pub fn definition(&self) -> &dyn TargetDefinition {
        self.definition.as_ref()
    }

    /// The sandbox generated files live in
    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    /// Label identifying this target
    pub fn label(&self) -> String {
        self.definition.label()
    }

    /// Alias of [`AggregateTarget::label`]
    pub fn name(&self) -> String {
        self.label()
    }

    /// Source-module-safe identifier derived from the label
    pub fn product_module_name(&self) -> String {
        c99ext_identifier(&self.label())
    }

    /// Platform of the definition, snapshotted on first access
    pub fn platform(&self) -> &Platform {
        self.platform.get_or_init(|| self.definition.platform())
    }

    /// Whether libraries are integrated as frameworks
    pub fn requires_frameworks(&self) -> bool {
        self.definition.uses_frameworks()
    }

    /// Product type of the integration library itself
    pub fn product_type(&self) -> ProductType {
        if self.requires_frameworks() {
            ProductType::Framework
        } else {
            ProductType::StaticLibrary
        }
    }

    /// `<module>.framework`
    pub fn framework_name(&self) -> String {
        format!("{}.framework", self.product_module_name())
    }

    /// `lib<label>.a`
    pub fn static_library_name(&self) -> String {
        format!("lib{}.a", self.label())
    }

    /// File name of the built product
    pub fn product_name(&self) -> String {
        if self.requires_frameworks() {
            self.framework_name()
        } else {
            self.static_library_name()
        }
    }

    /// Product name without prefix or extension
    pub fn product_basename(&self) -> String {
        if self.requires_frameworks() {
            self.product_module_name()
        } else {
            self.label()
        }
    }

    // ---------------------------------------------------------------------
    // Planning-phase population
    // ---------------------------------------------------------------------

    /// Library targets grouped by this aggregate, in insertion order
    pub fn pod_targets(&self) -> &[Arc<dyn LibraryTarget>] {
        &self.pod_targets
    }

    /// Mutable access for the installer populating the aggregate
    pub fn pod_targets_mut(&mut self) -> &mut Vec<Arc<dyn LibraryTarget>> {
        &mut self.pod_targets
    }

    /// Append a library target
    pub fn add_pod_target(&mut self, target: Arc<dyn LibraryTarget>) {
        self.pod_targets.push(target);
    }

    /// Record that this aggregate may be embedded in a host of `product_type`.
    ///
    /// Any tag is accepted; registering the same tag again has no effect.
    pub fn add_host_product_type(&mut self, product_type: ProductType) {
        if self.host_product_types.insert(product_type) {
            log::trace!("'{}' host product types: {:?}", self.label(), self.host_product_types);
        }
    }

    /// Host product types this aggregate may be embedded in
    pub fn host_product_types(&self) -> &HashSet<ProductType> {
        &self.host_product_types
    }

    /// Mutable access for the installer populating the aggregate
    pub fn host_product_types_mut(&mut self) -> &mut HashSet<ProductType> {
        &mut self.host_product_types
    }

    /// Add a sibling aggregate whose headers must be importable but not linked
    pub fn add_search_paths_aggregate_target(&mut self, target: &Arc<AggregateTarget>) {
        self.search_paths_aggregate_targets.push(Arc::downgrade(target));
    }

    /// Live sibling aggregates; peers already dropped are skipped
    pub fn search_paths_aggregate_targets(&self) -> Vec<Arc<AggregateTarget>> {
        self.search_paths_aggregate_targets
            .iter()
            .filter_map(|peer| {
                let upgraded = peer.upgrade();
                if upgraded.is_none() {
                    log::warn!("'{}' references a search-path aggregate that no longer exists", self.label());
                }
                upgraded
            })
            .collect()
    }

    /// Store the generated build settings for a configuration
    pub fn set_xcconfig(&mut self, configuration_name: impl Into<String>, xcconfig: Xcconfig) {
        self.xcconfigs.insert(configuration_name.into(), xcconfig);
    }

    /// Generated build settings for a configuration
    pub fn xcconfig(&self, configuration_name: &str) -> Option<&Xcconfig> {
        self.xcconfigs.get(configuration_name)
    }

    /// Generated build settings keyed by configuration name
    pub fn xcconfigs(&self) -> &HashMap<String, Xcconfig> {
        &self.xcconfigs
    }

    /// Build configurations of the consumer, in declaration order
    pub fn user_build_configurations(&self) -> &IndexMap<String, BuildType> {
        &self.user_build_configurations
    }

    /// Replace the consumer's build configurations
    pub fn set_user_build_configurations(&mut self, configurations: IndexMap<String, BuildType>) {
        self.user_build_configurations = configurations;
    }

    // ---------------------------------------------------------------------
    // User project binding
    // ---------------------------------------------------------------------

    /// Bind the consumer project and the native targets this aggregate integrates with.
    ///
    /// Sets the client root to the directory containing the project unless one
    /// was set explicitly. A bare relative project path leaves it unset.
    pub fn bind_user_project<I, S>(&mut self, project: Arc<dyn UserProject>, user_target_uuids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_target_uuids = user_target_uuids.into_iter().map(Into::into).collect();
        if self.client_root.is_none() {
            self.client_root = project
                .path()
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(Path::to_path_buf);
        }
        log::debug!(
            "Bound '{}' to {} ({} user targets)",
            self.label(),
            project.path().display(),
            self.user_target_uuids.len()
        );
        self.user_project = Some(project);
    }

    /// The bound consumer project
    pub fn user_project(&self) -> Option<&dyn UserProject> {
        self.user_project.as_deref()
    }

    /// Location of the bound consumer project
    pub fn user_project_path(&self) -> Option<&Path> {
        self.user_project.as_ref().map(|project| project.path())
    }

    /// Identifiers of the native targets this aggregate integrates with
    pub fn user_target_uuids(&self) -> &[String] {
        &self.user_target_uuids
    }

    /// Native targets this aggregate integrates with; empty when no project is bound
    pub fn user_targets(&self) -> Result<Vec<&NativeTarget>> {
        let Some(project) = self.user_project.as_deref() else {
            return Ok(Vec::new());
        };

        self.user_target_uuids
            .iter()
            .map(|uuid| {
                project.native_target(uuid).ok_or_else(|| {
                    AggregateError::from(IntegrationError::TargetNotFound {
                        identifier: uuid.clone(),
                        label: self.label(),
                    })
                })
            })
            .collect()
    }

    /// Directory generated paths are made relative to
    pub fn client_root(&self) -> Option<&Path> {
        self.client_root.as_deref()
    }

    /// Set the directory generated paths are made relative to
    pub fn set_client_root<P: Into<PathBuf>>(&mut self, client_root: P) {
        self.client_root = Some(client_root.into());
    }

    /// Whether the aggregate must be integrated through a host target.
    ///
    /// Always `false` without a bound project. Fails if the bound native targets
    /// do not share exactly one product type.
    pub fn requires_host_target(&self) -> Result<bool> {
        if self.user_project.is_none() {
            return Ok(false);
        }

        let user_targets = self.user_targets()?;
        let product_type = host::shared_product_type(user_targets.iter().map(|target| &target.product_type))
            .map_err(|found| ConfigurationError::AmbiguousProductTypes {
                label: self.label(),
                found: found.iter().map(ToString::to_string).collect(),
            })?;

        let requires = host::requires_host(&product_type, &self.host_product_types);
        log::debug!(
            "'{}' integrates {} targets; requires host target: {}",
            self.label(),
            product_type,
            requires
        );
        Ok(requires)
    }

    // ---------------------------------------------------------------------
    // Library targets and specs
    // ---------------------------------------------------------------------

    /// Library targets participating in `configuration_name`
    pub fn pod_targets_for_build_configuration(&self, configuration_name: &str) -> Vec<Arc<dyn LibraryTarget>> {
        self.pod_targets
            .iter()
            .filter(|target| target.include_in_build_configuration(self.definition.as_ref(), configuration_name))
            .cloned()
            .collect()
    }

    /// Specs of every library target, in library-target order; not deduplicated
    pub fn specs(&self) -> Vec<&Specification> {
        self.pod_targets.iter().flat_map(|target| target.specs()).collect()
    }

    /// Specs per consumer build configuration; every configuration has an entry
    pub fn specs_by_build_configuration(&self) -> IndexMap<String, Vec<&Specification>> {
        self.user_build_configurations
            .keys()
            .map(|configuration_name| {
                let specs: Vec<&Specification> = self
                    .pod_targets
                    .iter()
                    .filter(|target| {
                        target.include_in_build_configuration(self.definition.as_ref(), configuration_name)
                    })
                    .flat_map(|target| target.specs())
                    .collect();
                (configuration_name.clone(), specs)
            })
            .collect()
    }

    /// Every spec resolved for this target's platform
    pub fn spec_consumers(&self) -> Vec<SpecConsumer<'_>> {
        let platform = self.platform();
        self.specs().into_iter().map(|spec| spec.consumer(platform)).collect()
    }

    /// Whether any library target uses Swift
    pub fn uses_swift(&self) -> bool {
        self.pod_targets.iter().any(|target| target.uses_swift())
    }

    // ---------------------------------------------------------------------
    // Support files
    // ---------------------------------------------------------------------

    /// Directory holding this target's support files
    pub fn support_files_dir(&self) -> PathBuf {
        self.sandbox.target_support_files_dir(&self.label())
    }

    fn support_file(&self, suffix: &str) -> PathBuf {
        self.support_files_dir().join(format!("{}{}", self.label(), suffix))
    }

    /// Acknowledgements file path without extension; generators add their own
    pub fn acknowledgements_basepath(&self) -> PathBuf {
        self.support_file("-acknowledgements")
    }

    /// Script copying library resources into the product
    pub fn copy_resources_script_path(&self) -> PathBuf {
        self.support_file("-resources.sh")
    }

    /// Script embedding dynamic frameworks into the product
    pub fn embed_frameworks_script_path(&self) -> PathBuf {
        self.support_file("-frameworks.sh")
    }

    /// Build settings file for a configuration
    pub fn xcconfig_path(&self, configuration_name: &str) -> PathBuf {
        let variant = configuration_name.replace('/', "-").to_lowercase();
        self.support_file(&format!(".{}.xcconfig", variant))
    }

    /// Umbrella header of the framework product
    pub fn umbrella_header_path(&self) -> PathBuf {
        self.support_file("-umbrella.h")
    }

    /// Module map of the framework product
    pub fn module_map_path(&self) -> PathBuf {
        self.support_file(".modulemap")
    }

    /// Prefix header
    pub fn prefix_header_path(&self) -> PathBuf {
        self.support_file("-prefix.pch")
    }

    /// Bridge support metadata
    pub fn bridge_support_path(&self) -> PathBuf {
        self.support_file(".bridgesupport")
    }

    /// Info.plist of the framework product
    pub fn info_plist_path(&self) -> PathBuf {
        self.support_file("-Info.plist")
    }

    /// Dummy source giving the library at least one object file
    pub fn dummy_source_path(&self) -> PathBuf {
        self.support_file("-dummy.m")
    }

    // ---------------------------------------------------------------------
    // Paths relative to the client root
    // ---------------------------------------------------------------------

    fn relative_to_client_root(&self, path: &Path) -> Result<String> {
        let client_root = self.client_root.as_deref().ok_or_else(|| PathError::ClientRootUnset {
            label: self.label(),
        })?;
        let relative = relative_path_from(path, client_root)?;
        Ok(to_setting_string(&relative))
    }

    fn srcroot_relative(&self, path: &Path) -> Result<String> {
        let relative = self.relative_to_client_root(path)?;
        Ok(format!("{}/{}", self.sandbox.config().srcroot_variable, relative))
    }

    /// Sandbox root as seen from the consumer's build settings
    pub fn relative_pods_root(&self) -> Result<String> {
        self.srcroot_relative(self.sandbox.root())
    }

    /// Build settings file for a configuration, relative to the client root
    pub fn xcconfig_relative_path(&self, configuration_name: &str) -> Result<String> {
        self.relative_to_client_root(&self.xcconfig_path(configuration_name))
    }

    /// Resources script as seen from the consumer's build settings
    pub fn copy_resources_script_relative_path(&self) -> Result<String> {
        self.srcroot_relative(&self.copy_resources_script_path())
    }

    /// Frameworks script as seen from the consumer's build settings
    pub fn embed_frameworks_script_relative_path(&self) -> Result<String> {
        self.srcroot_relative(&self.embed_frameworks_script_path())
    }
}

impl fmt::Display for AggregateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
