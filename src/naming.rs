//! Identifier sanitization for generated module names.

/// Map arbitrary label text to a C99-extended identifier.
///
/// A leading digit is prefixed with `_` and every character outside
/// `[A-Za-z0-9_]` becomes `_`. The mapping is pure, so a label always yields
/// the same module name.
pub fn c99ext_identifier(label: &str) -> String {
    let mut identifier = String::with_capacity(label.len() + 1);
    if label.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.push('_');
    }
    identifier.extend(label.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    identifier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators() {
        assert_eq!(c99ext_identifier("Pods-App"), "Pods_App");
        assert_eq!(c99ext_identifier("Pods-My App.Tests"), "Pods_My_App_Tests");
    }

    #[test]
    fn escapes_leading_digit() {
        assert_eq!(c99ext_identifier("1Password-Pods"), "_1Password_Pods");
    }

    #[test]
    fn non_ascii_becomes_underscore() {
        assert_eq!(c99ext_identifier("Pods-Café"), "Pods_Caf_");
    }
}
