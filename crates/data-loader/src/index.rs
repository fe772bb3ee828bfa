//! Catalog loading and indexing logic.
//!
//! Builds a `Catalog` from a directory of JSON files:
//! - parse the three collections in parallel
//! - insert records in file order
//! - fill each pet's shelter summary from its `shelterId`
//! - reject duplicate ids

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load `pets.json`, `shelters.json` and `users.json` from a directory.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", data_dir);

        let pets_path = data_dir.join("pets.json");
        let shelters_path = data_dir.join("shelters.json");
        let users_path = data_dir.join("users.json");

        let ((pets, shelters), users) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_pets(&pets_path),
                    || parser::parse_shelters(&shelters_path),
                )
            },
            || parser::parse_users(&users_path),
        );

        let pets = pets?;
        let shelters = shelters?;
        let users = users?;

        info!(
            "Loaded {} pets, {} shelters, {} users",
            pets.len(),
            shelters.len(),
            users.len()
        );

        let mut catalog = Catalog::new();
        for shelter in shelters {
            catalog.insert_shelter(shelter);
        }
        for user in users {
            catalog.insert_user(user);
        }
        for pet in pets {
            catalog.insert_pet(pet);
        }

        catalog.validate()?;
        catalog.link_shelters();

        Ok(catalog)
    }

    /// Fill in `pet.shelter` from `pet.shelter_id` where the backend sent
    /// only the id.
    ///
    /// Pets pointing at an unknown shelter keep `shelter = None`; the filters
    /// treat the missing reference as non-matching.
    pub fn link_shelters(&mut self) {
        let Catalog {
            pets,
            shelters,
            shelter_index,
            ..
        } = self;

        for pet in pets.iter_mut().filter(|pet| pet.shelter.is_none()) {
            let Some(shelter_id) = pet.shelter_id else {
                continue;
            };
            match shelter_index.get(&shelter_id) {
                Some(&idx) => {
                    let shelter = &shelters[idx];
                    pet.shelter = Some(ShelterRef {
                        id: Some(shelter.id),
                        name: Some(shelter.name.clone()),
                        city: shelter.city.clone(),
                        state: shelter.state.clone(),
                    });
                }
                None => warn!("Pet {} references unknown shelter {}", pet.id, shelter_id),
            }
        }
    }

    /// Check that ids are unique within each collection.
    pub fn validate(&self) -> Result<()> {
        check_unique("pet", self.pets.iter().map(|p| p.id))?;
        check_unique("shelter", self.shelters.iter().map(|s| s.id))?;
        check_unique("user", self.users.iter().map(|u| u.id))?;
        Ok(())
    }
}

fn check_unique(entity: &str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataLoadError::DuplicateId {
                entity: entity.to_string(),
                id,
            });
        }
    }
    Ok(())
}
