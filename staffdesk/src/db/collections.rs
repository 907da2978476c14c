//! The persisted collections blob

use serde::{Deserialize, Serialize};
use shared::models::{Account, Department, Employee, Request};
use shared::util::normalize_email;

/// All records, serialized wholesale into [`super::storage::DB_SLOT`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collections {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub requests: Vec<Request>,
}

impl Collections {
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    /// Case-insensitive lookup
    pub fn account_by_email(&self, email: &str) -> Option<&Account> {
        let email = normalize_email(email);
        self.accounts
            .iter()
            .find(|a| normalize_email(&a.email) == email)
    }

    /// True when another account (not `except_id`) already uses the email
    pub fn email_taken(&self, email: &str, except_id: Option<&str>) -> bool {
        let email = normalize_email(email);
        self.accounts
            .iter()
            .any(|a| normalize_email(&a.email) == email && Some(a.id.as_str()) != except_id)
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn account(id: &str, email: &str) -> Account {
        Account {
            id: id.into(),
            first_name: "F".into(),
            last_name: "L".into(),
            email: email.into(),
            password: "secret1".into(),
            role: Role::User,
            verified: true,
        }
    }

    #[test]
    fn test_email_lookup_is_case_insensitive() {
        let db = Collections {
            accounts: vec![account("a1", "a@x.com")],
            ..Default::default()
        };
        assert_eq!(db.account_by_email(" A@X.COM ").map(|a| a.id.as_str()), Some("a1"));
        assert!(db.email_taken("A@x.com", None));
        assert!(!db.email_taken("a@x.com", Some("a1")));
        assert!(db.email_taken("a@x.com", Some("a2")));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let db: Collections = serde_json::from_str(r#"{"accounts":[]}"#).unwrap();
        assert!(db.departments.is_empty());
        assert!(db.requests.is_empty());
    }
}
