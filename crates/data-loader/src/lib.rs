//! # Data Loader Crate
//!
//! Loads the adoption catalog (pets, shelters, users) that the backend API
//! would otherwise serve, and defines the record types the filter engine
//! works on.
//!
//! ## Main Components
//!
//! - **types**: Record types (Pet, Shelter, User), derived statuses, Catalog
//! - **parser**: Parse JSON collection files into records
//! - **index**: Load a catalog directory, link pets to shelters, validate
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data"))?;
//! for pet in catalog.pets() {
//!     println!("{} is {}", pet.name, pet.status());
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    PetId,
    ShelterId,
    UserId,
    // Records
    Pet,
    Breed,
    ShelterRef,
    Shelter,
    User,
    Catalog,
    // Derived values
    PetStatus,
    ActivityStatus,
    UserRole,
};
