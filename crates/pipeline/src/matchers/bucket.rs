//! Named ranges over a numeric field.

use crate::criteria::CriterionValue;
use crate::traits::Matcher;

/// A half-open range `(above, up_to]`; either end may be unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub label: &'static str,
    pub above: Option<f64>,
    pub up_to: Option<f64>,
}

impl Bucket {
    pub const fn new(label: &'static str, above: Option<f64>, up_to: Option<f64>) -> Self {
        Self {
            label,
            above,
            up_to,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let lower_ok = self.above.is_none_or(|above| value > above);
        let upper_ok = self.up_to.is_none_or(|up_to| value <= up_to);
        // NaN compares false against any bound; never place it.
        !value.is_nan() && lower_ok && upper_ok
    }
}

/// Keeps records whose numeric field falls in the selected bucket.
///
/// Unknown bucket labels and missing values match nothing.
pub struct Bucketed<R> {
    name: String,
    accessor: fn(&R) -> Option<f64>,
    buckets: &'static [Bucket],
}

impl<R> Bucketed<R> {
    pub fn new(
        name: impl Into<String>,
        accessor: fn(&R) -> Option<f64>,
        buckets: &'static [Bucket],
    ) -> Self {
        Self {
            name: name.into(),
            accessor,
            buckets,
        }
    }
}

impl<R> Matcher<R> for Bucketed<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_value(&self) -> CriterionValue {
        CriterionValue::all()
    }

    fn options(&self) -> Vec<&str> {
        self.buckets.iter().map(|bucket| bucket.label).collect()
    }

    fn matches(&self, record: &R, value: &CriterionValue) -> bool {
        if value.is_all() {
            return true;
        }
        let selected = value.as_text();
        let Some(bucket) = self
            .buckets
            .iter()
            .find(|bucket| bucket.label.eq_ignore_ascii_case(&selected))
        else {
            return false;
        };
        (self.accessor)(record).is_some_and(|v| bucket.contains(v))
    }
}
