//! Filter criteria: the live selection a caller mutates.
//!
//! A `Criteria` is created from an engine with every criterion at its
//! default, updated one field at a time with `set`, and cleared with
//! `reset`. It remembers each default so it can answer
//! `has_active_filters` without the engine.

use std::borrow::Cow;
use std::fmt;
use tracing::warn;

/// Sentinel for categorical criteria meaning "any value".
pub const ALL: &str = "all";

/// A selected criterion value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionValue {
    /// Free text or a categorical choice
    Text(String),
    /// Feature flag
    Toggle(bool),
}

impl CriterionValue {
    /// Default for categorical, status and bucket criteria.
    pub fn all() -> Self {
        CriterionValue::Text(ALL.to_string())
    }

    /// Default for free-text search.
    pub fn empty() -> Self {
        CriterionValue::Text(String::new())
    }

    /// Text form of the value. Toggles render as "true"/"false" so a toggle
    /// stored under a text criterion is matched literally.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CriterionValue::Text(text) => Cow::Borrowed(text),
            CriterionValue::Toggle(on) => Cow::Owned(on.to_string()),
        }
    }

    /// Whether a feature flag is switched on. Text "true" counts as on.
    pub fn is_enabled(&self) -> bool {
        match self {
            CriterionValue::Toggle(on) => *on,
            CriterionValue::Text(text) => text.trim().eq_ignore_ascii_case("true"),
        }
    }

    /// Whether this is the "any value" sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, CriterionValue::Text(text) if text.eq_ignore_ascii_case(ALL))
    }

    fn same_as(&self, other: &CriterionValue) -> bool {
        match (self, other) {
            (CriterionValue::Text(a), CriterionValue::Text(b)) => {
                a == b || a.to_lowercase() == b.to_lowercase()
            }
            _ => false,
        }
    }
}

impl From<&str> for CriterionValue {
    fn from(value: &str) -> Self {
        CriterionValue::Text(value.to_string())
    }
}

impl From<String> for CriterionValue {
    fn from(value: String) -> Self {
        CriterionValue::Text(value)
    }
}

impl From<bool> for CriterionValue {
    fn from(value: bool) -> Self {
        CriterionValue::Toggle(value)
    }
}

impl fmt::Display for CriterionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionValue::Text(text) => write!(f, "{:?}", text),
            CriterionValue::Toggle(on) => write!(f, "{}", on),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    name: String,
    default: CriterionValue,
    value: CriterionValue,
}

impl Slot {
    /// Feature flags compare by whether they are switched on, so text
    /// "false" on a flag is the same as its default.
    fn is_active(&self) -> bool {
        match &self.default {
            CriterionValue::Toggle(on) => self.value.is_enabled() != *on,
            CriterionValue::Text(_) => !self.value.same_as(&self.default),
        }
    }
}

/// Current selection for every criterion of one engine, in declaration
/// order.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    slots: Vec<Slot>,
}

impl Criteria {
    /// Build a criteria set from `(name, default)` pairs, all at default.
    pub fn with_defaults<I, S>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (S, CriterionValue)>,
        S: Into<String>,
    {
        let slots = defaults
            .into_iter()
            .map(|(name, default)| Slot {
                name: name.into(),
                value: default.clone(),
                default,
            })
            .collect();
        Self { slots }
    }

    /// Update exactly one criterion.
    ///
    /// Unknown names are ignored. Values are not validated: an unexpected
    /// value simply matches no record.
    pub fn set(&mut self, name: &str, value: impl Into<CriterionValue>) {
        match self.slots.iter_mut().find(|slot| slot.name == name) {
            Some(slot) => slot.value = value.into(),
            None => warn!("Ignoring unknown criterion: {}", name),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CriterionValue> {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| &slot.value)
    }

    /// Whether the named criterion differs from its default.
    pub fn is_active(&self, name: &str) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.name == name && slot.is_active())
    }

    /// Restore every criterion to its default.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.value = slot.default.clone();
        }
    }

    pub fn has_active_filters(&self) -> bool {
        self.slots.iter().any(Slot::is_active)
    }

    /// Non-default criteria in declaration order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &CriterionValue)> {
        self.slots
            .iter()
            .filter(|slot| slot.is_active())
            .map(|slot| (slot.name.as_str(), &slot.value))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
