//! Collection responses and pagination links
//!
//! Every collection endpoint returns its domain array plus a `_links`
//! object. The `next` link is an opaque cursor to the following page;
//! absence of `next` signals the final page. No other pagination state
//! (counts, offsets) is trusted across requests.

use serde::Deserialize;

use super::changeset::Changeset;
use super::model::Model;
use super::named_version::NamedVersion;

/// A single hyperlink in an API response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Pagination links carried by every collection response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
    pub next: Option<Link>,
}

/// One page of a paginated collection.
///
/// Implementors expose the next-page cursor and their entity array so the
/// API client can walk any collection generically.
pub trait CollectionPage {
    /// Entity type carried by this page.
    type Entity;

    /// Opaque URL of the next page; `None` on the final page.
    fn next_href(&self) -> Option<&str>;

    /// Consume the page, yielding its entities in server order.
    fn into_entities(self) -> Vec<Self::Entity>;
}

/// One page of a project's models.
#[derive(Debug, Deserialize)]
pub struct ModelsPage {
    pub models: Vec<Model>,
    #[serde(rename = "_links", default)]
    pub links: CollectionLinks,
}

/// One page of a model's named versions.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedVersionsPage {
    pub named_versions: Vec<NamedVersion>,
    #[serde(rename = "_links", default)]
    pub links: CollectionLinks,
}

/// One page of a model's changesets.
#[derive(Debug, Deserialize)]
pub struct ChangesetsPage {
    pub changesets: Vec<Changeset>,
    #[serde(rename = "_links", default)]
    pub links: CollectionLinks,
}

impl CollectionPage for ModelsPage {
    type Entity = Model;

    fn next_href(&self) -> Option<&str> {
        self.links.next.as_ref().map(|link| link.href.as_str())
    }

    fn into_entities(self) -> Vec<Model> {
        self.models
    }
}

impl CollectionPage for NamedVersionsPage {
    type Entity = NamedVersion;

    fn next_href(&self) -> Option<&str> {
        self.links.next.as_ref().map(|link| link.href.as_str())
    }

    fn into_entities(self) -> Vec<NamedVersion> {
        self.named_versions
    }
}

impl CollectionPage for ChangesetsPage {
    type Entity = Changeset;

    fn next_href(&self) -> Option<&str> {
        self.links.next.as_ref().map(|link| link.href.as_str())
    }

    fn into_entities(self) -> Vec<Changeset> {
        self.changesets
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn page_exposes_next_cursor() {
        let page: ModelsPage = serde_json::from_str(
            r#"{
                "models": [{"id":"m1","displayName":"One"},{"id":"m2","displayName":"Two"}],
                "_links": {
                    "self": {"href": "https://api.example.com/models?$skip=0&$top=2"},
                    "next": {"href": "https://api.example.com/models?$skip=2&$top=2"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(page.next_href(), Some("https://api.example.com/models?$skip=2&$top=2"));
        let ids: Vec<String> = page.into_entities().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn missing_next_link_means_final_page() {
        let page: NamedVersionsPage = serde_json::from_str(
            r#"{
                "namedVersions": [{"id":"nv1","displayName":"Release 1"}],
                "_links": {"self": {"href": "https://api.example.com/models/m1/namedversions"}}
            }"#,
        )
        .unwrap();

        assert!(page.next_href().is_none());
    }

    #[test]
    fn links_object_may_be_absent_entirely() {
        let page: ChangesetsPage = serde_json::from_str(r#"{"changesets": []}"#).unwrap();
        assert!(page.next_href().is_none());
        assert!(page.into_entities().is_empty());
    }
}
