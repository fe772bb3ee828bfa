//! Exact match on one categorical or derived field.

use crate::criteria::CriterionValue;
use crate::traits::{FieldAccessor, Matcher};

/// Keeps records whose field equals the selected value, ignoring case.
///
/// The "all" sentinel bypasses the check. A derived status is just an
/// accessor that computes the value, so the same matcher covers both.
pub struct Categorical<R> {
    name: String,
    accessor: FieldAccessor<R>,
    options: &'static [&'static str],
}

impl<R> Categorical<R> {
    pub fn new(name: impl Into<String>, accessor: FieldAccessor<R>) -> Self {
        Self {
            name: name.into(),
            accessor,
            options: &[],
        }
    }

    /// Advertise the known values for this field.
    pub fn with_options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }
}

impl<R> Matcher<R> for Categorical<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_value(&self) -> CriterionValue {
        CriterionValue::all()
    }

    fn options(&self) -> Vec<&str> {
        self.options.to_vec()
    }

    fn matches(&self, record: &R, value: &CriterionValue) -> bool {
        if value.is_all() {
            return true;
        }
        let selected = value.as_text().to_lowercase();
        (self.accessor)(record).is_some_and(|field| field.to_lowercase() == selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    struct Animal {
        size: Option<String>,
    }

    fn animal_size(animal: &Animal) -> Option<Cow<'_, str>> {
        animal.size.as_deref().map(Cow::Borrowed)
    }

    fn animal(size: Option<&str>) -> Animal {
        Animal {
            size: size.map(str::to_string),
        }
    }

    #[test]
    fn test_all_bypasses() {
        let matcher = Categorical::new("selectedSize", animal_size);
        assert!(matcher.matches(&animal(None), &CriterionValue::all()));
        assert!(matcher.matches(&animal(Some("large")), &"ALL".into()));
    }

    #[test]
    fn test_exact_case_insensitive() {
        let matcher = Categorical::new("selectedSize", animal_size);
        assert!(matcher.matches(&animal(Some("Small")), &"small".into()));
        assert!(!matcher.matches(&animal(Some("smallish")), &"small".into()));
        assert!(!matcher.matches(&animal(None), &"small".into()));
    }

    #[test]
    fn test_unknown_value_matches_nothing() {
        let matcher = Categorical::new("selectedSize", animal_size)
            .with_options(&["small", "medium", "large"]);
        assert_eq!(matcher.options(), vec!["small", "medium", "large"]);
        assert!(!matcher.matches(&animal(Some("large")), &"huge".into()));
    }
}
