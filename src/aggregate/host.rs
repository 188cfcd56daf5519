//! Host embedding rules.

use crate::product_type::ProductType;
use std::collections::BTreeSet;

/// Product types whose artifacts are loaded by a host and cannot carry their own copy of the libraries.
const HOSTED_PRODUCT_TYPES: [ProductType; 4] = [
    ProductType::AppExtension,
    ProductType::Framework,
    ProductType::MessagesExtension,
    ProductType::WatchExtension,
];

/// Collapse the product types of the integrated native targets to the single
/// type they share.
///
/// Returns `Err` with every distinct type found when there is not exactly one,
/// including the empty set when nothing was collected.
pub fn shared_product_type<'a, I>(product_types: I) -> Result<ProductType, BTreeSet<ProductType>>
where
    I: IntoIterator<Item = &'a ProductType>,
{
    let distinct: BTreeSet<ProductType> = product_types.into_iter().cloned().collect();
    if distinct.len() == 1 {
        if let Some(product_type) = distinct.iter().next() {
            return Ok(product_type.clone());
        }
    }
    Err(distinct)
}

/// Whether a target of `user_product_type` must be embedded through its host.
///
/// Being registered for a messages application host already satisfies the
/// embedding, so it suppresses the requirement. No other host type does.
pub fn requires_host<'a, I>(user_product_type: &ProductType, host_product_types: I) -> bool
where
    I: IntoIterator<Item = &'a ProductType>,
{
    HOSTED_PRODUCT_TYPES.contains(user_product_type)
        && !host_product_types
            .into_iter()
            .any(|host| *host == ProductType::MessagesApplication)
}
