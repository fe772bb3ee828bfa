//! The FilterEngine combines matchers for one record type.
//!
//! This module provides the main FilterEngine struct that holds the
//! matchers for an entity and evaluates a `Criteria` against a record
//! collection.

use crate::criteria::{Criteria, CriterionValue};
use crate::traits::Matcher;

/// Evaluates criteria over records of type `R`.
///
/// ## Usage
/// ```ignore
/// let engine = FilterEngine::new("pets")
///     .add_matcher(TextSearch::new("searchTerm").field(pet_name))
///     .add_matcher(Categorical::new("selectedSize", pet_size));
///
/// let mut criteria = engine.criteria();
/// criteria.set("selectedSize", "small");
/// let visible = engine.filtered(&pets, &criteria);
/// ```
pub struct FilterEngine<R> {
    entity: String,
    matchers: Vec<Box<dyn Matcher<R>>>,
}

impl<R> FilterEngine<R> {
    /// Create an engine with no matchers. `entity` labels log output.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            matchers: Vec::new(),
        }
    }

    /// Add a matcher to the engine (builder pattern).
    ///
    /// Criteria names must be unique; a later matcher with a repeated name
    /// is never consulted.
    pub fn add_matcher(mut self, matcher: impl Matcher<R> + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn matchers(&self) -> impl Iterator<Item = &dyn Matcher<R>> {
        self.matchers
            .iter()
            .map(|matcher| matcher.as_ref() as &dyn Matcher<R>)
    }

    /// A fresh criteria set with every criterion at its default.
    pub fn criteria(&self) -> Criteria {
        Criteria::with_defaults(
            self.matchers
                .iter()
                .map(|matcher| (matcher.name().to_string(), matcher.default_value())),
        )
    }

    pub fn has_active_filters(&self, criteria: &Criteria) -> bool {
        criteria.has_active_filters()
    }

    /// Pairs each active criterion with its matcher. Criteria this engine
    /// doesn't know impose no constraint.
    fn active<'a>(&'a self, criteria: &'a Criteria) -> Vec<(&'a dyn Matcher<R>, &'a CriterionValue)> {
        criteria
            .active()
            .filter_map(|(name, value)| {
                self.matchers
                    .iter()
                    .find(|matcher| matcher.name() == name)
                    .map(|matcher| (matcher.as_ref() as &dyn Matcher<R>, value))
            })
            .collect()
    }

    /// Whether a single record passes every active criterion.
    pub fn matches(&self, record: &R, criteria: &Criteria) -> bool {
        self.active(criteria)
            .iter()
            .all(|(matcher, value)| matcher.matches(record, value))
    }

    /// Records passing every active criterion, in input order.
    ///
    /// ## Algorithm
    /// 1. Collect the non-default criteria and their matchers once
    /// 2. Keep each record for which all of them match
    pub fn filtered<'r>(&self, records: &'r [R], criteria: &Criteria) -> Vec<&'r R> {
        let active = self.active(criteria);
        tracing::debug!(
            "Filtering {} (input count: {}, active criteria: {})",
            self.entity,
            records.len(),
            active.len()
        );
        let filtered: Vec<&R> = records
            .iter()
            .filter(|record| active.iter().all(|(matcher, value)| matcher.matches(record, value)))
            .collect();
        tracing::debug!(
            "Filtered {} (output count: {})",
            self.entity,
            filtered.len()
        );
        filtered
    }

    /// Owning variant of [`filtered`](Self::filtered).
    pub fn apply(&self, records: Vec<R>, criteria: &Criteria) -> Vec<R> {
        let active = self.active(criteria);
        records
            .into_iter()
            .filter(|record| active.iter().all(|(matcher, value)| matcher.matches(record, value)))
            .collect()
    }
}
