//! Free-text search across several fields.

use crate::criteria::CriterionValue;
use crate::traits::{FieldAccessor, Matcher};

/// Case-insensitive substring search.
///
/// ## Algorithm
/// 1. Empty term matches every record
/// 2. Lowercase the term once
/// 3. Keep the record if any searchable field contains it
///
/// Missing fields never match.
pub struct TextSearch<R> {
    name: String,
    fields: Vec<FieldAccessor<R>>,
}

impl<R> TextSearch<R> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a searchable field (builder pattern).
    pub fn field(mut self, accessor: FieldAccessor<R>) -> Self {
        self.fields.push(accessor);
        self
    }
}

impl<R> Matcher<R> for TextSearch<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_value(&self) -> CriterionValue {
        CriterionValue::empty()
    }

    fn matches(&self, record: &R, value: &CriterionValue) -> bool {
        let term = value.as_text();
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.fields.iter().any(|field| {
            field(record).is_some_and(|text| text.to_lowercase().contains(&needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    struct Place {
        name: String,
        city: Option<String>,
    }

    fn place_name(place: &Place) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&place.name))
    }

    fn place_city(place: &Place) -> Option<Cow<'_, str>> {
        place.city.as_deref().map(Cow::Borrowed)
    }

    fn search() -> TextSearch<Place> {
        TextSearch::new("searchTerm").field(place_name).field(place_city)
    }

    fn place(name: &str, city: Option<&str>) -> Place {
        Place {
            name: name.to_string(),
            city: city.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let search = search();
        assert!(search.matches(&place("Huellitas", None), &CriterionValue::empty()));
    }

    #[test]
    fn test_case_insensitive_any_field() {
        let search = search();
        let term = CriterionValue::from("BoG");
        assert!(search.matches(&place("Patitas", Some("Bogotá")), &term));
        assert!(!search.matches(&place("Patitas", Some("Cali")), &term));
        assert!(search.matches(&place("Bogey", Some("Cali")), &term));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let search = search();
        assert!(search.matches(&place("Patitas", Some("BOGOTÁ")), &"bogotá".into()));
    }

    #[test]
    fn test_missing_field_does_not_match() {
        let search = search();
        assert!(!search.matches(&place("Rex", None), &"cali".into()));
    }
}
