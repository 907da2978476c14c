/// Current UTC timestamp (milliseconds)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date in local time, used to stamp new requests
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Generate a record ID (UUID v4, hyphenated)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Canonical form of an email address: trimmed and lower-cased
///
/// Every uniqueness check and lookup on account emails goes through this.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
