//! Product type tags of native targets.
//!
//! The set is open: tags the model does not know are carried as
//! [`ProductType::Other`] and only interpreted where a rule names them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of artifact a native target produces
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    /// Application bundle
    Application,
    /// App extension
    AppExtension,
    /// Framework
    Framework,
    /// Dynamic library
    DynamicLibrary,
    /// Static library
    StaticLibrary,
    /// Loadable bundle
    Bundle,
    /// Unit test bundle
    UnitTestBundle,
    /// UI test bundle
    UiTestBundle,
    /// Command line tool
    CommandLineTool,
    /// WatchKit 1 application
    WatchApp,
    /// WatchKit 2 application
    Watch2App,
    /// WatchKit 1 extension
    WatchExtension,
    /// WatchKit 2 extension
    Watch2Extension,
    /// tvOS app extension
    TvExtension,
    /// Messages-only application
    MessagesApplication,
    /// Messages extension
    MessagesExtension,
    /// Sticker pack
    StickerPack,
    /// XPC service
    XpcService,
    /// Any tag not listed above
    Other(String),
}

const KNOWN: &[(ProductType, &str, &str)] = &[
    (ProductType::Application, "application", "com.apple.product-type.application"),
    (ProductType::AppExtension, "app_extension", "com.apple.product-type.app-extension"),
    (ProductType::Framework, "framework", "com.apple.product-type.framework"),
    (ProductType::DynamicLibrary, "dynamic_library", "com.apple.product-type.library.dynamic"),
    (ProductType::StaticLibrary, "static_library", "com.apple.product-type.library.static"),
    (ProductType::Bundle, "bundle", "com.apple.product-type.bundle"),
    (ProductType::UnitTestBundle, "unit_test_bundle", "com.apple.product-type.bundle.unit-test"),
    (ProductType::UiTestBundle, "ui_test_bundle", "com.apple.product-type.bundle.ui-testing"),
    (ProductType::CommandLineTool, "command_line_tool", "com.apple.product-type.tool"),
    (ProductType::WatchApp, "watch_app", "com.apple.product-type.application.watchapp"),
    (ProductType::Watch2App, "watch2_app", "com.apple.product-type.application.watchapp2"),
    (ProductType::WatchExtension, "watch_extension", "com.apple.product-type.watchkit-extension"),
    (ProductType::Watch2Extension, "watch2_extension", "com.apple.product-type.watchkit2-extension"),
    (ProductType::TvExtension, "tv_extension", "com.apple.product-type.tv-app-extension"),
    (ProductType::MessagesApplication, "messages_application", "com.apple.product-type.application.messages"),
    (ProductType::MessagesExtension, "messages_extension", "com.apple.product-type.app-extension.messages"),
    (ProductType::StickerPack, "sticker_pack", "com.apple.product-type.app-extension.messages-sticker-pack"),
    (ProductType::XpcService, "xpc_service", "com.apple.product-type.xpc-service"),
];

impl ProductType {
    /// Map a product-type identifier (`com.apple.product-type.*`) to a tag
    pub fn from_identifier(identifier: &str) -> Self {
        KNOWN
            .iter()
            .find(|(_, _, known)| *known == identifier)
            .map(|(product_type, _, _)| product_type.clone())
            .unwrap_or_else(|| ProductType::Other(identifier.to_string()))
    }

    /// Product-type identifier for known tags
    pub fn identifier(&self) -> Option<&'static str> {
        KNOWN
            .iter()
            .find(|(product_type, _, _)| product_type == self)
            .map(|(_, _, identifier)| *identifier)
    }

    /// Short symbolic name (`app_extension`, `framework`, ...)
    pub fn symbol(&self) -> &str {
        match self {
            ProductType::Other(tag) => tag.as_str(),
            known => KNOWN
                .iter()
                .find(|(product_type, _, _)| product_type == known)
                .map(|(_, symbol, _)| *symbol)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts both symbolic names and product-type identifiers; never fails.
impl FromStr for ProductType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some((product_type, _, _)) = KNOWN.iter().find(|(_, symbol, _)| *symbol == s) {
            return Ok(product_type.clone());
        }
        Ok(ProductType::from_identifier(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_and_symbols_agree() {
        let parsed: ProductType = "com.apple.product-type.app-extension.messages".parse().unwrap();
        assert_eq!(parsed, ProductType::MessagesExtension);
        assert_eq!(parsed.symbol(), "messages_extension");
        assert_eq!("framework".parse::<ProductType>().unwrap(), ProductType::Framework);
    }

    #[test]
    fn unknown_tags_are_kept_verbatim() {
        let parsed: ProductType = "com.example.product-type.widget".parse().unwrap();
        assert_eq!(parsed, ProductType::Other("com.example.product-type.widget".to_string()));
        assert_eq!(parsed.identifier(), None);
        assert_eq!(parsed.to_string(), "com.example.product-type.widget");
    }
}
