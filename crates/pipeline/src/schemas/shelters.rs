//! Filter schema for the shelter directory and the admin shelter table.

use crate::filter_engine::FilterEngine;
use crate::matchers::{Categorical, TextSearch};
use data_loader::{ActivityStatus, Shelter};
use std::borrow::Cow;

pub const SEARCH: &str = "searchTerm";
pub const CITY: &str = "selectedCity";
pub const STATE: &str = "selectedState";
pub const STATUS: &str = "selectedStatus";

const STATUS_OPTIONS: &[&str] = &[
    ActivityStatus::Active.as_str(),
    ActivityStatus::Inactive.as_str(),
];

pub fn engine() -> FilterEngine<Shelter> {
    FilterEngine::new("shelters")
        .add_matcher(
            TextSearch::new(SEARCH)
                .field(shelter_name)
                .field(city)
                .field(state),
        )
        .add_matcher(Categorical::new(CITY, city))
        .add_matcher(Categorical::new(STATE, state))
        .add_matcher(Categorical::new(STATUS, status).with_options(STATUS_OPTIONS))
}

fn shelter_name(shelter: &Shelter) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&shelter.name))
}

fn city(shelter: &Shelter) -> Option<Cow<'_, str>> {
    shelter.city.as_deref().map(Cow::Borrowed)
}

fn state(shelter: &Shelter) -> Option<Cow<'_, str>> {
    shelter.state.as_deref().map(Cow::Borrowed)
}

fn status(shelter: &Shelter) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(shelter.status().as_str()))
}
