//! # Pod Aggregate
//!
//! Aggregate target model for multi-library build integration.
//!
//! An aggregate target groups several independently built library targets into
//! the single integration library a consumer target (an application, extension
//! or framework) links against. This crate decides:
//!
//! - which library targets participate under each build configuration
//! - whether the aggregate must be embedded through a host target
//! - the names and paths of generated support files referenced from build settings
//!
//! Resolution, project file I/O and sandbox management are external; they reach
//! this crate through the [`TargetDefinition`], [`LibraryTarget`] and
//! [`UserProject`] traits.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pod_aggregate::{AggregateTarget, DefinitionNode, Platform, PlatformName, Sandbox};
//!
//! let definition = DefinitionNode::new("Pods-App", Platform::new(PlatformName::Ios));
//! let sandbox = Sandbox::new("/Project/Pods");
//! let mut target = AggregateTarget::new(Arc::new(definition), Arc::new(sandbox))?;
//! target.set_client_root("/Project");
//!
//! assert_eq!(target.product_module_name(), "Pods_App");
//! assert_eq!(target.relative_pods_root()?, "${SRCROOT}/Pods");
//! # Ok::<(), pod_aggregate::AggregateError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod definition;
pub mod error;
pub mod library;
pub mod naming;
pub mod paths;
pub mod platform;
pub mod product_type;
pub mod project;
pub mod sandbox;
pub mod spec;
pub mod xcconfig;

// Re-export main types for public API
pub use aggregate::AggregateTarget;
pub use config::IntegrationConfig;
pub use definition::{BuildType, DefinitionNode, TargetDefinition};
pub use error::{AggregateError, ConfigurationError, IntegrationError, PathError, Result};
pub use library::{LibraryTarget, PodTarget};
pub use platform::{Platform, PlatformName};
pub use product_type::ProductType;
pub use project::{NativeTarget, UserProject, UserProjectModel};
pub use sandbox::Sandbox;
pub use spec::{SpecAttributes, SpecConsumer, Specification};
pub use xcconfig::Xcconfig;
