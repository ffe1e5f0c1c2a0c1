//! # Relationship Types
//!
//! Typed views of the `relationships` member of a resource object. A
//! relationship's `data` (its *linkage*) comes in three JSON shapes:
//! `null`, a single identifier object, or an identifier array. All
//! three deserialize into one [`Linkage`] enum, so to-one and to-many
//! flow through the same plumbing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key;
use crate::JsonObject;

/// The minimal `{type, id}` pair referencing a resource without
/// embedding its body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub rtype: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(rtype: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            rtype: rtype.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.rtype, self.id)
    }
}

/// Resource linkage: the `data` member of a relationship.
///
/// `One(None)` is an explicit empty to-one (`"data": null`); `Many` with
/// an empty vector is an empty to-many (`"data": []`). Serde's untagged
/// representation round-trips all three JSON shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    One(Option<ResourceIdentifier>),
    Many(Vec<ResourceIdentifier>),
}

impl Linkage {
    /// The identifier of a populated to-one linkage, if that is what
    /// this is.
    pub fn one(&self) -> Option<&ResourceIdentifier> {
        match self {
            Linkage::One(ident) => ident.as_ref(),
            Linkage::Many(_) => None,
        }
    }

    /// The identifier list of a to-many linkage, if that is what this
    /// is.
    pub fn many(&self) -> Option<&[ResourceIdentifier]> {
        match self {
            Linkage::One(_) => None,
            Linkage::Many(idents) => Some(idents),
        }
    }
}

/// A relationship object: at least one of `links`, `data`, `meta`.
///
/// `data: None` means the member was absent, which is different from an
/// explicit `"data": null` (`Some(Linkage::One(None))`); resolution
/// treats both as missing linkage, but serialization preserves the
/// distinction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Linkage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonObject>,
}

impl Relationship {
    /// A to-one relationship pointing at `ident`.
    pub fn to_one(ident: ResourceIdentifier) -> Self {
        Self {
            data: Some(Linkage::One(Some(ident))),
            ..Default::default()
        }
    }

    /// An explicitly empty to-one relationship (`"data": null`), used in
    /// update payloads to clear a link.
    pub fn empty_to_one() -> Self {
        Self {
            data: Some(Linkage::One(None)),
            ..Default::default()
        }
    }

    /// A to-many relationship pointing at `idents` in order.
    pub fn to_many(idents: impl IntoIterator<Item = ResourceIdentifier>) -> Self {
        Self {
            data: Some(Linkage::Many(idents.into_iter().collect())),
            ..Default::default()
        }
    }
}

/// Extracts the named relationship from a resource object.
///
/// Returns `None` when the resource has no `relationships` member, the
/// member lacks `name`, or the entry does not decode as a relationship
/// object.
pub fn relationship_of(resource: &JsonObject, name: &str) -> Option<Relationship> {
    let relationships = resource.get(key::RELATIONSHIPS)?.as_object()?;
    let raw = relationships.get(name)?;
    serde_json::from_value(raw.clone()).ok()
}
