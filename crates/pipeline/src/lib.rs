//! Filtering engine for the adoption catalog.
//!
//! This crate provides:
//! - Matcher trait and generic matchers (text search, categorical, bucketed
//!   numeric, feature flag)
//! - Criteria, the caller-owned selection with defaults and reset
//! - FilterEngine, which evaluates criteria over a record slice
//! - Per-entity schemas for pets, shelters and users
//! - Landing route decision for signed-in users
//!
//! ## Architecture
//! A schema wires accessors for one record type into matchers. The engine
//! keeps a record iff every non-default criterion matches, preserving input
//! order. Nothing here performs I/O or fails.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::schemas::pets;
//!
//! let engine = pets::engine();
//! let mut criteria = engine.criteria();
//! criteria.set(pets::AGE, "young");
//! criteria.set(pets::VACCINATED, true);
//!
//! let visible = engine.filtered(catalog.pets(), &criteria);
//! if criteria.has_active_filters() {
//!     // offer "clear filters"
//! }
//! ```

pub mod traits;
pub mod criteria;
pub mod matchers;
pub mod filter_engine;
pub mod schemas;
pub mod routing;

// Re-export main types
pub use traits::{FieldAccessor, Matcher};
pub use criteria::{Criteria, CriterionValue, ALL};
pub use filter_engine::FilterEngine;
pub use routing::{dashboard_route, landing_route, DashboardRoute, SessionState};
