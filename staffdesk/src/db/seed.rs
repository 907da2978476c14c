//! Default records for a fresh install

use shared::models::{Account, Department, Role};
use shared::util::{new_id, normalize_email};

use super::Collections;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "Password123!";

/// Seed admin credentials
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

/// Insert the admin account when there are no accounts at all
///
/// Returns true if anything was added.
pub fn seed_admin_if_empty(db: &mut Collections, seed: &SeedConfig) -> bool {
    if !db.accounts.is_empty() {
        return false;
    }
    db.accounts.push(Account {
        id: new_id(),
        first_name: "Admin".to_string(),
        last_name: "User".to_string(),
        email: normalize_email(&seed.admin_email),
        password: seed.admin_password.clone(),
        role: Role::Admin,
        verified: true,
    });
    tracing::info!(email = %seed.admin_email, "Seeded admin account");
    true
}

/// Insert the default departments when there are none
pub fn seed_departments_if_empty(db: &mut Collections) -> bool {
    if !db.departments.is_empty() {
        return false;
    }
    db.departments.push(Department {
        id: new_id(),
        name: "Engineering".to_string(),
        description: Some("Builds and maintains systems.".to_string()),
    });
    db.departments.push(Department {
        id: new_id(),
        name: "HR".to_string(),
        description: Some("Handles people and hiring.".to_string()),
    });
    tracing::info!("Seeded default departments");
    true
}

/// Fresh collections: one verified admin, two departments
pub fn seeded(seed: &SeedConfig) -> Collections {
    let mut db = Collections::default();
    seed_admin_if_empty(&mut db, seed);
    seed_departments_if_empty(&mut db);
    db
}
