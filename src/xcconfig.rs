//! Generated build settings held per build configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Build settings generated for one configuration of an aggregate target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xcconfig {
    attributes: BTreeMap<String, String>,
    includes: Vec<String>,
}

impl Xcconfig {
    /// Empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a build setting, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Value of a build setting
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Add an `#include` of another settings file
    pub fn include(&mut self, path: impl Into<String>) -> &mut Self {
        self.includes.push(path.into());
        self
    }

    /// Merge `other` into `self`; list-like values are joined with a space
    pub fn merge(&mut self, other: &Xcconfig) {
        for (key, value) in &other.attributes {
            self.attributes
                .entry(key.clone())
                .and_modify(|existing| {
                    if !contains_tokens(existing, value) {
                        existing.push(' ');
                        existing.push_str(value);
                    }
                })
                .or_insert_with(|| value.clone());
        }
        for include in &other.includes {
            if !self.includes.contains(include) {
                self.includes.push(include.clone());
            }
        }
    }

    /// Build settings in key order
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

/// Whether the whitespace-separated tokens of `value` appear contiguously in `existing`.
fn contains_tokens(existing: &str, value: &str) -> bool {
    let needle: Vec<&str> = value.split_whitespace().collect();
    if needle.is_empty() {
        return true;
    }
    let haystack: Vec<&str> = existing.split_whitespace().collect();
    haystack.windows(needle.len()).any(|window| window == needle.as_slice())
}

impl fmt::Display for Xcconfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for include in &self.includes {
            writeln!(f, "#include \"{}\"", include)?;
        }
        for (key, value) in &self.attributes {
            writeln!(f, "{} = {}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_appends_new_values() {
        let mut base = Xcconfig::new();
        base.set("OTHER_LDFLAGS", "-ObjC");
        let mut other = Xcconfig::new();
        other.set("OTHER_LDFLAGS", "-framework \"UIKit\"").set("ENABLE_BITCODE", "NO");

        base.merge(&other);
        base.merge(&other);

        assert_eq!(base.get("OTHER_LDFLAGS"), Some("-ObjC -framework \"UIKit\""));
        assert_eq!(base.to_string(), "ENABLE_BITCODE = NO\nOTHER_LDFLAGS = -ObjC -framework \"UIKit\"\n");
    }
}
