//! Matcher implementations for the filter engine.
//!
//! Each kind is generic over the record type and configured with plain
//! function accessors, so one implementation serves pets, shelters and
//! users alike.

pub mod bucket;
pub mod categorical;
pub mod feature;
pub mod search;

// Re-export for convenience
pub use bucket::{Bucket, Bucketed};
pub use categorical::Categorical;
pub use feature::FeatureFlag;
pub use search::TextSearch;
