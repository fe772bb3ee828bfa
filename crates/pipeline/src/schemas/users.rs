//! Filter schema for the admin user table.

use crate::filter_engine::FilterEngine;
use crate::matchers::{Categorical, TextSearch};
use data_loader::{ActivityStatus, User, UserRole};
use std::borrow::Cow;

pub const SEARCH: &str = "searchTerm";
pub const ROLE: &str = "selectedRole";
pub const STATUS: &str = "selectedStatus";
pub const CITY: &str = "selectedCity";

const ROLE_OPTIONS: &[&str] = &[
    UserRole::Admin.as_str(),
    UserRole::Shelter.as_str(),
    UserRole::Adopter.as_str(),
];
const STATUS_OPTIONS: &[&str] = &[
    ActivityStatus::Active.as_str(),
    ActivityStatus::Inactive.as_str(),
];

pub fn engine() -> FilterEngine<User> {
    FilterEngine::new("users")
        .add_matcher(
            TextSearch::new(SEARCH)
                .field(full_name)
                .field(email)
                .field(city),
        )
        .add_matcher(Categorical::new(ROLE, role).with_options(ROLE_OPTIONS))
        .add_matcher(Categorical::new(STATUS, status).with_options(STATUS_OPTIONS))
        .add_matcher(Categorical::new(CITY, city))
}

fn full_name(user: &User) -> Option<Cow<'_, str>> {
    let name = user.full_name();
    if name.is_empty() {
        None
    } else {
        Some(Cow::Owned(name))
    }
}

fn email(user: &User) -> Option<Cow<'_, str>> {
    user.email.as_deref().map(Cow::Borrowed)
}

fn city(user: &User) -> Option<Cow<'_, str>> {
    user.city.as_deref().map(Cow::Borrowed)
}

fn role(user: &User) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(user.role().as_str()))
}

fn status(user: &User) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(user.status().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, first: &str, last: &str, email: &str, kind: &str, admin: bool) -> User {
        User {
            id,
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: Some(email.to_string()),
            city: Some("Bogotá".to_string()),
            user_type: Some(kind.to_string()),
            is_site_admin: admin,
            is_active: true,
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "Ana", "Gómez", "ana@example.com", "adopter", true),
            user(2, "Carlos", "Ruiz", "refugio@patitas.org", "shelter", false),
            user(3, "Lucía", "Pérez", "lucia@example.com", "adopter", false),
        ]
    }

    fn ids(users: &[&User]) -> Vec<u32> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_search_full_name_across_parts() {
        let engine = engine();
        let users = sample();
        let mut criteria = engine.criteria();

        criteria.set(SEARCH, "carlos ruiz");
        assert_eq!(ids(&engine.filtered(&users, &criteria)), vec![2]);

        criteria.set(SEARCH, "EXAMPLE.COM");
        assert_eq!(ids(&engine.filtered(&users, &criteria)), vec![1, 3]);
    }

    #[test]
    fn test_role_is_derived() {
        let engine = engine();
        let users = sample();
        let mut criteria = engine.criteria();

        criteria.set(ROLE, "admin");
        assert_eq!(ids(&engine.filtered(&users, &criteria)), vec![1]);

        // Site admins are not listed under their account type.
        criteria.set(ROLE, "adopter");
        assert_eq!(ids(&engine.filtered(&users, &criteria)), vec![3]);

        criteria.set(ROLE, "shelter");
        assert_eq!(ids(&engine.filtered(&users, &criteria)), vec![2]);
    }

    #[test]
    fn test_status() {
        let engine = engine();
        let mut users = sample();
        users[1].is_active = false;

        let mut criteria = engine.criteria();
        criteria.set(STATUS, "inactive");
        assert_eq!(ids(&engine.filtered(&users, &criteria)), vec![2]);
    }

    #[test]
    fn test_user_without_name_not_matched_by_name_search() {
        let engine = engine();
        let users = vec![User {
            id: 5,
            ..Default::default()
        }];
        let mut criteria = engine.criteria();
        criteria.set(SEARCH, "a");
        assert!(engine.filtered(&users, &criteria).is_empty());
    }
}
