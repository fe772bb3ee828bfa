//! Per-entity filter schemas.
//!
//! Each module names its criteria and builds a `FilterEngine` from the
//! generic matchers. The criterion names match the query keys the web
//! front-end uses, so a saved selection can be replayed as-is.

pub mod pets;
pub mod shelters;
pub mod users;
