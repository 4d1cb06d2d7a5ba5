//! Changeset types
//!
//! Changesets are immutable, ordered deltas in a model's history. Full
//! representation carries reference links to related entities; the optional
//! named-version link is resolved by the API client in a secondary fetch.

use serde::Deserialize;

use super::collection::Link;
use super::named_version::NamedVersion;

/// Reference links attached to a changeset in full representation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesetLinks {
    pub creator: Option<Link>,
    pub named_version: Option<Link>,
}

/// An immutable, ordered delta applied to a model's history.
///
/// `index` is the ordinal position in history: monotonically increasing,
/// unique per model, and never changed after creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Changeset {
    pub id: String,
    pub display_name: String,
    pub index: u64,
    #[serde(rename = "_links", default)]
    pub links: ChangesetLinks,
    /// Resolved named version. Starts unset; populated by the API client
    /// if and only if `links.named_version` is present. Not part of the
    /// wire format.
    #[serde(skip)]
    pub named_version: Option<NamedVersion>,
}
