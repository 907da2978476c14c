//! Request Model (equipment / leave / resources)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Request type
///
/// The form offers three presets, but any other text is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestType {
    Equipment,
    Leave,
    Resources,
    Other(String),
}

impl RequestType {
    pub fn as_str(&self) -> &str {
        match self {
            RequestType::Equipment => "Equipment",
            RequestType::Leave => "Leave",
            RequestType::Resources => "Resources",
            RequestType::Other(s) => s,
        }
    }
}

impl From<String> for RequestType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Equipment" => RequestType::Equipment,
            "Leave" => RequestType::Leave,
            "Resources" => RequestType::Resources,
            _ => RequestType::Other(value),
        }
    }
}

impl From<&str> for RequestType {
    fn from(value: &str) -> Self {
        RequestType::from(value.to_string())
    }
}

impl From<RequestType> for String {
    fn from(value: RequestType) -> Self {
        match value {
            RequestType::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One requested line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    pub qty: i64,
}

/// Request entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RequestType,
    pub items: Vec<RequestItem>,
    pub status: RequestStatus,
    /// Creation date as stored
    ///
    /// New requests are dated `YYYY-MM-DD`; older blobs may hold any
    /// locale-formatted text, which is kept verbatim.
    pub date: String,
    /// Owner (normalized account email)
    pub employee_email: String,
}

/// Submit request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSubmit {
    #[serde(rename = "type")]
    pub kind: RequestType,
    pub items: Vec<RequestItem>,
}
