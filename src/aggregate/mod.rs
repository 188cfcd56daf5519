//! Aggregate targets and the rules deciding how they are embedded.

pub mod host;
mod target;

pub use host::{requires_host, shared_product_type};
pub use target::AggregateTarget;
