use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{Catalog, Pet, PetStatus, Shelter, User, UserId};
use pipeline::schemas::{pets, shelters, users};
use pipeline::{landing_route, Criteria, FilterEngine, SessionState};
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

/// PetFinder - adoption catalog browser
#[derive(Parser)]
#[command(name = "pet-finder")]
#[command(about = "Browse and filter the pet adoption catalog", long_about = None)]
struct Cli {
    /// Directory holding pets.json, shelters.json and users.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pets matching the given filters
    Pets(PetFilters),

    /// List shelters matching the given filters
    Shelters(ShelterFilters),

    /// List user accounts matching the given filters
    Users(UserFilters),

    /// Show the criteria an entity can be filtered by
    Filters {
        #[arg(value_enum)]
        entity: Entity,
    },

    /// Show where a user lands after signing in
    Route {
        /// User to sign in as; omit for an anonymous visitor
        #[arg(long)]
        user_id: Option<UserId>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Entity {
    Pets,
    Shelters,
    Users,
}

#[derive(Args)]
struct PetFilters {
    /// Search name, breed and shelter city (case-insensitive substring)
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    species: Option<String>,

    #[arg(long)]
    size: Option<String>,

    /// young (<= 2 years), adult (<= 6) or senior
    #[arg(long)]
    age: Option<String>,

    #[arg(long)]
    gender: Option<String>,

    /// available, adopted or inactive
    #[arg(long)]
    status: Option<String>,

    /// Shelter city
    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    vaccinated: bool,

    #[arg(long)]
    neutered: bool,

    #[arg(long)]
    trained: bool,

    #[arg(long)]
    good_with_kids: bool,

    #[arg(long)]
    good_with_pets: bool,
}

impl PetFilters {
    fn apply_to(self, criteria: &mut Criteria) {
        set_text(criteria, pets::SEARCH, self.search);
        set_text(criteria, pets::SPECIES, self.species);
        set_text(criteria, pets::SIZE, self.size);
        set_text(criteria, pets::AGE, self.age);
        set_text(criteria, pets::GENDER, self.gender);
        set_text(criteria, pets::STATUS, self.status);
        set_text(criteria, pets::CITY, self.city);
        criteria.set(pets::VACCINATED, self.vaccinated);
        criteria.set(pets::NEUTERED, self.neutered);
        criteria.set(pets::TRAINED, self.trained);
        criteria.set(pets::GOOD_WITH_KIDS, self.good_with_kids);
        criteria.set(pets::GOOD_WITH_PETS, self.good_with_pets);
    }
}

#[derive(Args)]
struct ShelterFilters {
    /// Search name, city and state (case-insensitive substring)
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    state: Option<String>,

    /// active or inactive
    #[arg(long)]
    status: Option<String>,
}

impl ShelterFilters {
    fn apply_to(self, criteria: &mut Criteria) {
        set_text(criteria, shelters::SEARCH, self.search);
        set_text(criteria, shelters::CITY, self.city);
        set_text(criteria, shelters::STATE, self.state);
        set_text(criteria, shelters::STATUS, self.status);
    }
}

#[derive(Args)]
struct UserFilters {
    /// Search full name, email and city (case-insensitive substring)
    #[arg(long)]
    search: Option<String>,

    /// admin, shelter or adopter
    #[arg(long)]
    role: Option<String>,

    /// active or inactive
    #[arg(long)]
    status: Option<String>,

    #[arg(long)]
    city: Option<String>,
}

impl UserFilters {
    fn apply_to(self, criteria: &mut Criteria) {
        set_text(criteria, users::SEARCH, self.search);
        set_text(criteria, users::ROLE, self.role);
        set_text(criteria, users::STATUS, self.status);
        set_text(criteria, users::CITY, self.city);
    }
}

fn set_text(criteria: &mut Criteria, name: &str, value: Option<String>) {
    if let Some(value) = value {
        criteria.set(name, value);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Pets(filters) => handle_pets(&load_catalog(&cli.data_dir)?, filters),
        Commands::Shelters(filters) => handle_shelters(&load_catalog(&cli.data_dir)?, filters),
        Commands::Users(filters) => handle_users(&load_catalog(&cli.data_dir)?, filters),
        Commands::Filters { entity } => {
            match entity {
                Entity::Pets => print_criteria(&pets::engine()),
                Entity::Shelters => print_criteria(&shelters::engine()),
                Entity::Users => print_criteria(&users::engine()),
            }
            Ok(())
        }
        Commands::Route { user_id } => handle_route(&load_catalog(&cli.data_dir)?, user_id),
    }
}

fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    let start = Instant::now();
    let catalog = Catalog::load_from_dir(data_dir)
        .with_context(|| format!("Failed to load catalog from {}", data_dir.display()))?;
    tracing::info!("Loaded catalog in {:?}", start.elapsed());
    Ok(catalog)
}

/// Handle the 'pets' command
fn handle_pets(catalog: &Catalog, filters: PetFilters) -> Result<()> {
    let engine = pets::engine();
    let mut criteria = engine.criteria();
    filters.apply_to(&mut criteria);

    print_listing("pets", &engine, catalog.pets(), &criteria, describe_pet);
    Ok(())
}

/// Handle the 'shelters' command
fn handle_shelters(catalog: &Catalog, filters: ShelterFilters) -> Result<()> {
    let engine = shelters::engine();
    let mut criteria = engine.criteria();
    filters.apply_to(&mut criteria);

    print_listing("shelters", &engine, catalog.shelters(), &criteria, describe_shelter);
    Ok(())
}

/// Handle the 'users' command
fn handle_users(catalog: &Catalog, filters: UserFilters) -> Result<()> {
    let engine = users::engine();
    let mut criteria = engine.criteria();
    filters.apply_to(&mut criteria);

    print_listing("users", &engine, catalog.users(), &criteria, describe_user);
    Ok(())
}

/// Handle the 'route' command
fn handle_route(catalog: &Catalog, user_id: Option<UserId>) -> Result<()> {
    let session = match user_id {
        Some(id) => {
            let user = catalog
                .get_user(id)
                .cloned()
                .ok_or_else(|| anyhow!("User {} not found", id))?;
            SessionState::Authenticated(user)
        }
        None => SessionState::Anonymous,
    };

    let route = landing_route(&session).ok_or_else(|| anyhow!("Session is still loading"))?;
    match &session {
        SessionState::Authenticated(user) => println!(
            "{} ({}) lands on {}",
            display_name(user).bold(),
            user.role(),
            route.path().green()
        ),
        _ => println!("Anonymous visitors land on {}", route.path().green()),
    }
    Ok(())
}

/// Print the filtered records, or say why there are none.
fn print_listing<R>(
    label: &str,
    engine: &FilterEngine<R>,
    records: &[R],
    criteria: &Criteria,
    describe: fn(&R) -> String,
) {
    let filtered = engine.filtered(records, criteria);

    println!("{}", format!("{}:", capitalize(label)).bold().blue());
    if criteria.has_active_filters() {
        let active = criteria
            .active()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}Filters: {}", "• ".cyan(), active);
    }

    if records.is_empty() {
        println!("No {} in the catalog.", label);
        return;
    }
    if filtered.is_empty() {
        println!(
            "No {} match the current filters ({} total). Run without filters to see all.",
            label,
            records.len()
        );
        return;
    }

    for (idx, record) in filtered.iter().enumerate() {
        println!("{}. {}", (idx + 1).to_string().green(), describe(*record));
    }
    println!(
        "{}Showing {} of {} {}",
        "• ".cyan(),
        filtered.len(),
        records.len(),
        label
    );
}

fn print_criteria<R>(engine: &FilterEngine<R>) {
    println!("{}", format!("Filters for {}:", engine.entity()).bold().blue());
    for matcher in engine.matchers() {
        let options = matcher.options();
        if options.is_empty() {
            println!(
                "{}{} (default {})",
                "• ".green(),
                matcher.name(),
                matcher.default_value()
            );
        } else {
            println!(
                "{}{} (default {}): {}",
                "• ".green(),
                matcher.name(),
                matcher.default_value(),
                options.join(", ")
            );
        }
    }
}

fn describe_pet(pet: &Pet) -> String {
    let traits = [
        pet.species.as_deref(),
        pet.breed_name(),
        pet.size.as_deref(),
        pets::age_group(pet),
        pet.gender.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");

    let status = match pet.status() {
        PetStatus::Available => pet.status().as_str().green(),
        PetStatus::Adopted => pet.status().as_str().yellow(),
        PetStatus::Inactive => pet.status().as_str().red(),
    };

    let location = pet.shelter_city().unwrap_or("unknown shelter");
    format!("{} [{}] {} - {}", pet.name.bold(), traits, status, location)
}

fn describe_shelter(shelter: &Shelter) -> String {
    let place = [shelter.city.as_deref(), shelter.state.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} ({}) {}", shelter.name.bold(), place, shelter.status())
}

fn describe_user(user: &User) -> String {
    format!(
        "{} <{}> {} {}",
        display_name(user).bold(),
        user.email.as_deref().unwrap_or("no email"),
        user.role(),
        user.status()
    )
}

fn display_name(user: &User) -> String {
    let name = user.full_name();
    if name.is_empty() {
        format!("User {}", user.id)
    } else {
        name
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
