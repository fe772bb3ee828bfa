//! Boolean feature flags (vaccinated, trained, ...).

use crate::criteria::CriterionValue;
use crate::traits::Matcher;

/// When switched on, keeps only records whose flag is true.
///
/// Switched off means "don't care", not "must be false".
pub struct FeatureFlag<R> {
    name: String,
    accessor: fn(&R) -> bool,
}

impl<R> FeatureFlag<R> {
    pub fn new(name: impl Into<String>, accessor: fn(&R) -> bool) -> Self {
        Self {
            name: name.into(),
            accessor,
        }
    }
}

impl<R> Matcher<R> for FeatureFlag<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_value(&self) -> CriterionValue {
        CriterionValue::Toggle(false)
    }

    fn matches(&self, record: &R, value: &CriterionValue) -> bool {
        !value.is_enabled() || (self.accessor)(record)
    }
}
