//! Named version types
//!
//! A named version is an immutable, user-labeled pointer to a specific
//! changeset. This client creates them and lists them but never mutates or
//! deletes them.

use serde::{Deserialize, Serialize};

/// An immutable, user-created label pointing at a specific changeset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedVersion {
    pub id: String,
    pub display_name: String,
}

/// Envelope wrapping a single named version in item responses.
///
/// Returned both by the per-changeset resolution GET and by the create POST
/// (whose body this client ignores beyond success/failure).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedVersionEnvelope {
    pub named_version: NamedVersion,
}

/// Request body for creating a named version.
///
/// Absent optional fields are omitted from the JSON entirely rather than
/// sent as null.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedVersionCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changeset_id: Option<String>,
}
