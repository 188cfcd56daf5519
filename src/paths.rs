//! Lexical path relativization.
//!
//! No filesystem access: symlinks are not resolved and `..` components in the
//! inputs are folded lexically before comparison.

use crate::error::{PathError, Result};
use std::path::{Component, Path, PathBuf};

/// Express `path` relative to the directory `base`.
///
/// Both paths must be absolute, or both relative. Returns `.` when they are equal.
pub fn relative_path_from(path: &Path, base: &Path) -> Result<PathBuf> {
    if path.is_absolute() != base.is_absolute() {
        return Err(PathError::Unrelatable {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        }
        .into());
    }

    let path = normalize(path);
    let base = normalize(&base);

    let common = path
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // A base that still climbs out with `..` past the shared prefix is unknowable.
    if base[common..].iter().any(|c| matches!(c, Component::ParentDir)) {
        return Err(PathError::Unrelatable {
            path: path.iter().collect(),
            base: base.iter().collect(),
        }
        .into());
    }

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &path[common..] {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Ok(relative)
}

fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }
    components
}

/// Render a path with `/` separators for use in build settings.
pub fn to_setting_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(path: &str, base: &str) -> String {
        to_setting_string(&relative_path_from(Path::new(path), Path::new(base)).unwrap())
    }

    #[test]
    fn descends_into_children() {
        assert_eq!(rel("/Project/Pods", "/Project"), "Pods");
        assert_eq!(
            rel("/Project/Pods/Target Support Files/Pods-App", "/Project"),
            "Pods/Target Support Files/Pods-App"
        );
    }

    #[test]
    fn climbs_to_siblings() {
        assert_eq!(rel("/Shared/Pods", "/Project/App"), "../../Shared/Pods");
    }

    #[test]
    fn equal_paths_are_dot() {
        assert_eq!(rel("/Project", "/Project/"), ".");
    }

    #[test]
    fn folds_parent_components() {
        assert_eq!(rel("/Project/App/../Pods", "/Project"), "Pods");
    }

    #[test]
    fn mixed_absoluteness_is_an_error() {
        assert!(relative_path_from(Path::new("Pods"), Path::new("/Project")).is_err());
    }
}
