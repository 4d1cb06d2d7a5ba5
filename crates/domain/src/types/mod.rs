//! Wire types for the Model Hub collection API
//!
//! Field names follow the API's camelCase convention; structs rename on
//! (de)serialization.

mod changeset;
mod collection;
mod model;
mod named_version;

pub use changeset::{Changeset, ChangesetLinks};
pub use collection::{
    ChangesetsPage, CollectionLinks, CollectionPage, Link, ModelsPage, NamedVersionsPage,
};
pub use model::Model;
pub use named_version::{NamedVersion, NamedVersionCreate, NamedVersionEnvelope};
