//! Model entity

use serde::Deserialize;

/// A revision-controlled container of design data belonging to a project.
///
/// Read-only for this client; listings use minimal representation so only
/// the identifying fields are carried.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub display_name: String,
}
