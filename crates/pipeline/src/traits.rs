//! Core traits for the filter engine.
//!
//! This module defines the Matcher trait: one named criterion that knows
//! its default value and how to test a record against a selected value.

use crate::criteria::CriterionValue;
use std::borrow::Cow;

/// Reads one string field from a record.
///
/// Returns `None` when the field (or a nested reference on the way to it)
/// is missing. Computed fields such as a full name come back as
/// `Cow::Owned`.
pub type FieldAccessor<R> = fn(&R) -> Option<Cow<'_, str>>;

/// Core trait for a single filter criterion over records of type `R`.
///
/// ## Design Note
/// - `Send + Sync` lets an engine be shared behind an `Arc`
/// - `matches` is only called with non-default values; a matcher must still
///   accept its own default so callers can skip that check
pub trait Matcher<R>: Send + Sync {
    /// Criterion name, used as the key in `Criteria` (e.g. "selectedSize")
    fn name(&self) -> &str;

    /// Value meaning "no constraint"
    fn default_value(&self) -> CriterionValue;

    /// Values a caller can offer for this criterion. Empty for free text
    /// and toggles.
    fn options(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Test one record against the selected value.
    fn matches(&self, record: &R, value: &CriterionValue) -> bool;
}
