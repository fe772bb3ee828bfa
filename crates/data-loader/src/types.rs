//! Core domain types for the adoption catalog.
//!
//! Records arrive from the backend as camelCase JSON and are treated as
//! read-only snapshots. Every field except `id` may be missing on the wire:
//! absent booleans read as `false`, absent strings and nested references as
//! `None`. Derived values (pet status, activity status, user role) are
//! computed by the functions in this module so every consumer applies the
//! same rules.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a pet
pub type PetId = u32;

/// Unique identifier for a shelter
pub type ShelterId = u32;

/// Unique identifier for a user account
pub type UserId = u32;

/// Reads a JSON `null` as the field's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Pet-related Types
// =============================================================================

/// A pet listed for adoption.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pet {
    #[serde(deserialize_with = "null_as_default")]
    pub id: PetId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// "dog", "cat", ... as sent by the backend
    pub species: Option<String>,
    pub breed: Option<Breed>,
    /// Age in years; fractional for puppies and kittens
    pub age: Option<f64>,
    /// "small", "medium" or "large"
    pub size: Option<String>,
    /// "male" or "female"
    pub gender: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_adopted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_vaccinated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_neutered: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_trained: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub good_with_kids: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub good_with_pets: bool,
    pub shelter_id: Option<ShelterId>,
    /// Denormalized shelter summary; filled from `shelter_id` at load time
    /// when the backend omits it.
    pub shelter: Option<ShelterRef>,
    pub description: Option<String>,
}

impl Pet {
    /// Adoption status derived from the raw flags.
    pub fn status(&self) -> PetStatus {
        PetStatus::derive(self.is_active, self.is_adopted)
    }

    /// City of the owning shelter, if known.
    pub fn shelter_city(&self) -> Option<&str> {
        self.shelter.as_ref()?.city.as_deref()
    }

    pub fn breed_name(&self) -> Option<&str> {
        self.breed.as_ref()?.name.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Breed {
    pub name: Option<String>,
}

/// Shelter summary embedded in a pet record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelterRef {
    pub id: Option<ShelterId>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Adoption status of a pet.
///
/// There is no `Pending` variant: nothing in the record carries a pending
/// application, so the derivation could never produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Adopted,
    Inactive,
}

impl PetStatus {
    /// Collapse the two raw flags into one status.
    ///
    /// An inactive listing is `Inactive` even if it was also adopted.
    pub fn derive(is_active: bool, is_adopted: bool) -> Self {
        if !is_active {
            PetStatus::Inactive
        } else if is_adopted {
            PetStatus::Adopted
        } else {
            PetStatus::Available
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Adopted => "adopted",
            PetStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Shelter and User Types
// =============================================================================

/// An animal shelter registered on the marketplace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shelter {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ShelterId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: bool,
}

impl Shelter {
    pub fn status(&self) -> ActivityStatus {
        ActivityStatus::from_flag(self.is_active)
    }
}

/// A marketplace account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    /// "adopter" or "shelter"
    pub user_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_site_admin: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: bool,
}

impl User {
    /// First and last name joined by a space, skipping missing parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn role(&self) -> UserRole {
        UserRole::derive(self.is_site_admin, self.user_type.as_deref())
    }

    pub fn status(&self) -> ActivityStatus {
        ActivityStatus::from_flag(self.is_active)
    }
}

/// Active/inactive status shared by shelters and user accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Active,
    Inactive,
}

impl ActivityStatus {
    pub fn from_flag(is_active: bool) -> Self {
        if is_active {
            ActivityStatus::Active
        } else {
            ActivityStatus::Inactive
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ActivityStatus::Active => "active",
            ActivityStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an account is allowed to manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Shelter,
    Adopter,
}

impl UserRole {
    /// Site admins outrank their account type; any type other than
    /// "shelter" is an adopter.
    pub fn derive(is_site_admin: bool, user_type: Option<&str>) -> Self {
        if is_site_admin {
            return UserRole::Admin;
        }
        match user_type {
            Some(kind) if kind.trim().eq_ignore_ascii_case("shelter") => UserRole::Shelter,
            _ => UserRole::Adopter,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Shelter => "shelter",
            UserRole::Adopter => "adopter",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Catalog - in-memory snapshot of the backend collections
// =============================================================================

/// All records the front-end has fetched, in backend order.
///
/// Collections are kept as `Vec`s because listing order is meaningful;
/// the id maps only serve point lookups.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) pets: Vec<Pet>,
    pub(crate) shelters: Vec<Shelter>,
    pub(crate) users: Vec<User>,

    pub(crate) shelter_index: HashMap<ShelterId, usize>,
    pub(crate) user_index: HashMap<UserId, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    pub fn insert_shelter(&mut self, shelter: Shelter) {
        self.shelter_index.insert(shelter.id, self.shelters.len());
        self.shelters.push(shelter);
    }

    pub fn insert_user(&mut self, user: User) {
        self.user_index.insert(user.id, self.users.len());
        self.users.push(user);
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn shelters(&self) -> &[Shelter] {
        &self.shelters
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get_shelter(&self, id: ShelterId) -> Option<&Shelter> {
        self.shelter_index.get(&id).map(|&idx| &self.shelters[idx])
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.user_index.get(&id).map(|&idx| &self.users[idx])
    }

    /// (pets, shelters, users)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.pets.len(), self.shelters.len(), self.users.len())
    }
}
