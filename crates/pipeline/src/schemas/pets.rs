//! Filter schema for the pet catalog.

use crate::filter_engine::FilterEngine;
use crate::matchers::{Bucket, Bucketed, Categorical, FeatureFlag, TextSearch};
use data_loader::{Pet, PetStatus};
use std::borrow::Cow;

pub const SEARCH: &str = "searchTerm";
pub const SPECIES: &str = "selectedSpecies";
pub const SIZE: &str = "selectedSize";
pub const AGE: &str = "selectedAge";
pub const GENDER: &str = "selectedGender";
pub const STATUS: &str = "selectedStatus";
pub const CITY: &str = "selectedCity";
pub const VACCINATED: &str = "vaccinated";
pub const NEUTERED: &str = "neutered";
pub const TRAINED: &str = "trained";
pub const GOOD_WITH_KIDS: &str = "goodWithKids";
pub const GOOD_WITH_PETS: &str = "goodWithPets";

/// Age groups in years: young ≤ 2 < adult ≤ 6 < senior.
pub const AGE_BUCKETS: [Bucket; 3] = [
    Bucket::new("young", None, Some(2.0)),
    Bucket::new("adult", Some(2.0), Some(6.0)),
    Bucket::new("senior", Some(6.0), None),
];

const SPECIES_OPTIONS: &[&str] = &["dog", "cat", "other"];
const SIZE_OPTIONS: &[&str] = &["small", "medium", "large"];
const GENDER_OPTIONS: &[&str] = &["male", "female"];
const STATUS_OPTIONS: &[&str] = &[
    PetStatus::Available.as_str(),
    PetStatus::Adopted.as_str(),
    PetStatus::Inactive.as_str(),
];

/// Engine for the adoption catalog and the shelter/admin pet tables.
pub fn engine() -> FilterEngine<Pet> {
    FilterEngine::new("pets")
        .add_matcher(
            TextSearch::new(SEARCH)
                .field(pet_name)
                .field(breed_name)
                .field(shelter_city),
        )
        .add_matcher(Categorical::new(SPECIES, species).with_options(SPECIES_OPTIONS))
        .add_matcher(Categorical::new(SIZE, size).with_options(SIZE_OPTIONS))
        .add_matcher(Bucketed::new(AGE, age, &AGE_BUCKETS))
        .add_matcher(Categorical::new(GENDER, gender).with_options(GENDER_OPTIONS))
        .add_matcher(Categorical::new(STATUS, status).with_options(STATUS_OPTIONS))
        .add_matcher(Categorical::new(CITY, shelter_city))
        .add_matcher(FeatureFlag::new(VACCINATED, |pet: &Pet| pet.is_vaccinated))
        .add_matcher(FeatureFlag::new(NEUTERED, |pet: &Pet| pet.is_neutered))
        .add_matcher(FeatureFlag::new(TRAINED, |pet: &Pet| pet.is_trained))
        .add_matcher(FeatureFlag::new(GOOD_WITH_KIDS, |pet: &Pet| pet.good_with_kids))
        .add_matcher(FeatureFlag::new(GOOD_WITH_PETS, |pet: &Pet| pet.good_with_pets))
}

/// Label of the age group a pet falls in, if its age is known.
pub fn age_group(pet: &Pet) -> Option<&'static str> {
    let age = pet.age?;
    AGE_BUCKETS
        .iter()
        .find(|bucket| bucket.contains(age))
        .map(|bucket| bucket.label)
}

fn pet_name(pet: &Pet) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&pet.name))
}

fn breed_name(pet: &Pet) -> Option<Cow<'_, str>> {
    pet.breed_name().map(Cow::Borrowed)
}

fn shelter_city(pet: &Pet) -> Option<Cow<'_, str>> {
    pet.shelter_city().map(Cow::Borrowed)
}

fn species(pet: &Pet) -> Option<Cow<'_, str>> {
    pet.species.as_deref().map(Cow::Borrowed)
}

fn size(pet: &Pet) -> Option<Cow<'_, str>> {
    pet.size.as_deref().map(Cow::Borrowed)
}

fn gender(pet: &Pet) -> Option<Cow<'_, str>> {
    pet.gender.as_deref().map(Cow::Borrowed)
}

fn status(pet: &Pet) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(pet.status().as_str()))
}

fn age(pet: &Pet) -> Option<f64> {
    pet.age
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::ShelterRef;

    fn pet(name: &str, age: f64, size: &str, is_active: bool, is_adopted: bool) -> Pet {
        Pet {
            name: name.to_string(),
            age: Some(age),
            size: Some(size.to_string()),
            is_active,
            is_adopted,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Pet> {
        vec![
            pet("Luna", 1.0, "small", true, false),
            pet("Max", 8.0, "large", true, true),
            pet("Rex", 4.0, "medium", false, false),
        ]
    }

    fn names(pets: &[&Pet]) -> Vec<String> {
        pets.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_age_bucket() {
        let engine = engine();
        let pets = sample();
        let mut criteria = engine.criteria();
        criteria.set(AGE, "young");
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Luna"]);

        criteria.set(AGE, "senior");
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Max"]);

        criteria.set(AGE, "adult");
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Rex"]);
    }

    #[test]
    fn test_derived_status() {
        let engine = engine();
        let pets = sample();
        let mut criteria = engine.criteria();

        criteria.set(STATUS, "adopted");
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Max"]);

        criteria.set(STATUS, "available");
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Luna"]);

        criteria.set(STATUS, "inactive");
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Rex"]);

        criteria.set(STATUS, "pending");
        assert!(engine.filtered(&pets, &criteria).is_empty());
    }

    #[test]
    fn test_search_by_shelter_city() {
        let engine = engine();
        let mut pets = sample();
        pets[0].shelter = Some(ShelterRef {
            city: Some("Bogotá".to_string()),
            ..Default::default()
        });
        pets[1].shelter = Some(ShelterRef {
            city: Some("Cali".to_string()),
            ..Default::default()
        });

        let mut criteria = engine.criteria();
        criteria.set(SEARCH, "BoG");
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Luna"]);

        criteria.reset();
        criteria.set(CITY, "cali");
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Max"]);
    }

    #[test]
    fn test_search_by_breed() {
        let engine = engine();
        let mut pets = sample();
        pets[2].breed = Some(data_loader::Breed {
            name: Some("Golden Retriever".to_string()),
        });

        let mut criteria = engine.criteria();
        criteria.set(SEARCH, "golden");
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Rex"]);
    }

    #[test]
    fn test_feature_flags() {
        let engine = engine();
        let mut pets = sample();
        pets[0].is_vaccinated = true;
        pets[0].good_with_kids = true;
        pets[1].is_vaccinated = true;

        let mut criteria = engine.criteria();
        criteria.set(VACCINATED, true);
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Luna", "Max"]);

        criteria.set(GOOD_WITH_KIDS, true);
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Luna"]);

        criteria.set(TRAINED, true);
        assert!(engine.filtered(&pets, &criteria).is_empty());
    }

    #[test]
    fn test_flag_switched_off_by_text() {
        let engine = engine();
        let pets = sample();
        let mut criteria = engine.criteria();
        criteria.set(VACCINATED, "false");
        assert!(!engine.has_active_filters(&criteria));
        assert_eq!(engine.filtered(&pets, &criteria).len(), 3);
    }

    #[test]
    fn test_missing_fields_do_not_match() {
        let engine = engine();
        let pets = vec![Pet {
            name: "Ghost".to_string(),
            ..Default::default()
        }];

        for (name, value) in [(SIZE, "small"), (AGE, "young"), (CITY, "Cali"), (SEARCH, "cali")] {
            let mut criteria = engine.criteria();
            criteria.set(name, value);
            assert!(engine.filtered(&pets, &criteria).is_empty(), "{name}={value}");
        }
        assert_eq!(engine.filtered(&pets, &engine.criteria()).len(), 1);
    }

    #[test]
    fn test_reset_restores_full_list() {
        let engine = engine();
        let pets = sample();
        let mut criteria = engine.criteria();
        criteria.set(SIZE, "small");
        assert_eq!(engine.filtered(&pets, &criteria).len(), 1);

        criteria.reset();
        assert!(!criteria.has_active_filters());
        assert_eq!(names(&engine.filtered(&pets, &criteria)), vec!["Luna", "Max", "Rex"]);
    }

    #[test]
    fn test_age_group_label() {
        let pets = sample();
        assert_eq!(age_group(&pets[0]), Some("young"));
        assert_eq!(age_group(&pets[1]), Some("senior"));
        assert_eq!(age_group(&Pet::default()), None);
    }
}
