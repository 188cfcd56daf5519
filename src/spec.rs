//! Library specifications and their platform-resolved consumers.

use crate::platform::{Platform, PlatformName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Build attributes a specification declares, either for every platform or for one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecAttributes {
    /// System frameworks to link
    pub frameworks: Vec<String>,
    /// System libraries to link
    pub libraries: Vec<String>,
    /// Resource paths to copy into the product
    pub resources: Vec<String>,
}

/// A library specification (root spec or subspec)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    name: String,
    attributes: SpecAttributes,
    platform_attributes: BTreeMap<PlatformName, SpecAttributes>,
}

impl Specification {
    /// Create a specification; subspecs are named `Root/Sub`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: SpecAttributes::default(),
            platform_attributes: BTreeMap::new(),
        }
    }

    /// Set the attributes shared by every platform
    pub fn with_attributes(mut self, attributes: SpecAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set attributes that only apply on one platform
    pub fn with_platform_attributes(mut self, platform: PlatformName, attributes: SpecAttributes) -> Self {
        self.platform_attributes.insert(platform, attributes);
        self
    }

    /// Full name including the subspec path
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the root specification
    pub fn root_name(&self) -> &str {
        self.name.split('/').next().unwrap_or(&self.name)
    }

    /// Whether this is a root specification
    pub fn is_root(&self) -> bool {
        !self.name.contains('/')
    }

    /// Resolve the specification for a platform
    pub fn consumer(&self, platform: &Platform) -> SpecConsumer<'_> {
        SpecConsumer {
            spec: self,
            platform: platform.clone(),
        }
    }
}

/// A specification viewed through one platform
#[derive(Debug, Clone)]
pub struct SpecConsumer<'a> {
    spec: &'a Specification,
    platform: Platform,
}

impl<'a> SpecConsumer<'a> {
    /// The underlying specification
    pub fn spec(&self) -> &'a Specification {
        self.spec
    }

    /// The platform the specification was resolved for
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Frameworks for this platform, common ones first
    pub fn frameworks(&self) -> Vec<&'a str> {
        self.merged(|attributes| &attributes.frameworks)
    }

    /// Libraries for this platform, common ones first
    pub fn libraries(&self) -> Vec<&'a str> {
        self.merged(|attributes| &attributes.libraries)
    }

    /// Resources for this platform, common ones first
    pub fn resources(&self) -> Vec<&'a str> {
        self.merged(|attributes| &attributes.resources)
    }

    fn merged(&self, field: impl Fn(&'a SpecAttributes) -> &'a Vec<String>) -> Vec<&'a str> {
        let mut values: Vec<&'a str> = Vec::new();
        let platform_specific = self.spec.platform_attributes.get(&self.platform.name());
        for value in field(&self.spec.attributes)
            .iter()
            .chain(platform_specific.map(|a| field(a).iter()).into_iter().flatten())
        {
            if !values.contains(&value.as_str()) {
                values.push(value);
            }
        }
        values
    }
}
