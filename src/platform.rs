//! Target platforms and deployment targets.

use crate::error::{ConfigurationError, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system family a target builds for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformName {
    /// iOS
    Ios,
    /// macOS
    Osx,
    /// tvOS
    Tvos,
    /// watchOS
    Watchos,
}

/// A platform with an optional minimum deployment target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    name: PlatformName,
    deployment_target: Option<Version>,
}

impl Platform {
    /// Create a platform without a deployment target
    pub fn new(name: PlatformName) -> Self {
        Self {
            name,
            deployment_target: None,
        }
    }

    /// Create a platform with a deployment target such as `"8.0"` or `"10.13.2"`
    pub fn with_deployment_target(name: PlatformName, target: &str) -> Result<Self> {
        Ok(Self {
            name,
            deployment_target: Some(parse_deployment_target(target)?),
        })
    }

    /// Platform family
    pub fn name(&self) -> PlatformName {
        self.name
    }

    /// Minimum deployment target, if declared
    pub fn deployment_target(&self) -> Option<&Version> {
        self.deployment_target.as_ref()
    }
}

/// Deployment targets are written with one to three numeric components.
fn parse_deployment_target(target: &str) -> Result<Version> {
    let invalid = |reason: &str| ConfigurationError::InvalidPlatform {
        platform: target.to_string(),
        reason: reason.to_string(),
    };

    let components: Vec<&str> = target.trim().split('.').collect();
    if components.is_empty() || components.len() > 3 {
        return Err(invalid("expected between one and three version components").into());
    }

    let mut numbers = [0u64; 3];
    for (slot, component) in numbers.iter_mut().zip(&components) {
        *slot = component
            .parse()
            .map_err(|_| invalid("version components must be numeric"))?;
    }

    Ok(Version::new(numbers[0], numbers[1], numbers[2]))
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformName::Ios => "iOS",
            PlatformName::Osx => "macOS",
            PlatformName::Tvos => "tvOS",
            PlatformName::Watchos => "watchOS",
        };
        f.write_str(name)
    }
}

impl FromStr for PlatformName {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(PlatformName::Ios),
            "osx" | "macos" => Ok(PlatformName::Osx),
            "tvos" => Ok(PlatformName::Tvos),
            "watchos" => Ok(PlatformName::Watchos),
            other => Err(ConfigurationError::InvalidPlatform {
                platform: other.to_string(),
                reason: "unknown platform name".to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.deployment_target {
            Some(version) if version.patch == 0 => {
                write!(f, "{} {}.{}", self.name, version.major, version.minor)
            }
            Some(version) => write!(f, "{} {}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_deployment_targets_are_padded() {
        let platform = Platform::with_deployment_target(PlatformName::Ios, "8.0").unwrap();
        assert_eq!(platform.deployment_target(), Some(&Version::new(8, 0, 0)));
        assert_eq!(platform.to_string(), "iOS 8.0");

        let platform = Platform::with_deployment_target(PlatformName::Osx, "10").unwrap();
        assert_eq!(platform.deployment_target(), Some(&Version::new(10, 0, 0)));
    }

    #[test]
    fn non_numeric_deployment_target_is_rejected() {
        assert!(Platform::with_deployment_target(PlatformName::Tvos, "nine").is_err());
        assert!(Platform::with_deployment_target(PlatformName::Tvos, "1.2.3.4").is_err());
    }

    #[test]
    fn platform_names_parse_case_insensitively() {
        assert_eq!("iOS".parse::<PlatformName>().unwrap(), PlatformName::Ios);
        assert_eq!("macos".parse::<PlatformName>().unwrap(), PlatformName::Osx);
        assert!("beos".parse::<PlatformName>().is_err());
    }
}
