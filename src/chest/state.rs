//! Pool storage owned by the chest actor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::merge;
use crate::key;
use crate::JsonObject;

/// Splits a resource into its `(type, id)` pair when both members hold
/// strings. Resources failing this are not poolable.
pub(crate) fn identity(resource: &JsonObject) -> Option<(&str, &str)> {
    let rtype = resource.get(key::TYPE)?.as_str()?;
    let id = resource.get(key::ID)?.as_str()?;
    Some((rtype, id))
}

/// The pool's contents: one bucket of resource objects per resource
/// type, in first-ingest order.
///
/// A snapshot taken from a [`Chest`](super::Chest) is a detached copy of
/// this state; mutating the pool afterwards does not disturb it. The map
/// serializes transparently, so an exported pool reads as plain
/// `{"<type>": [resource, ...]}` JSON.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChestState {
    buckets: HashMap<String, Vec<JsonObject>>,
}

impl ChestState {
    /// All resources pooled under `rtype`, oldest first.
    pub fn get(&self, rtype: &str) -> Option<&[JsonObject]> {
        self.buckets.get(rtype).map(Vec::as_slice)
    }

    /// The resource pooled under `rtype` with the given `id`.
    pub fn find(&self, rtype: &str, id: &str) -> Option<&JsonObject> {
        self.buckets.get(rtype)?.iter().find(|resource| {
            resource.get(key::ID).and_then(Value::as_str) == Some(id)
        })
    }

    /// Resource types currently holding at least one resource.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Total number of pooled resources across all types.
    pub fn resource_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Serializes the state for [`Chest::export`](super::Chest::export).
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserializes a blob produced by [`ChestState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Drains the state into its resources, bucket by bucket.
    pub(crate) fn into_resources(self) -> impl Iterator<Item = JsonObject> {
        self.buckets.into_values().flatten()
    }

    /// Pools `resource`, merging it into an already pooled resource with
    /// the same identity. Returns the stored identity, or the rejected
    /// resource when its identity is missing or not string-typed.
    pub(crate) fn store(&mut self, resource: JsonObject) -> Result<(String, String), JsonObject> {
        let Some((rtype, id)) = identity(&resource) else {
            return Err(resource);
        };
        let (rtype, id) = (rtype.to_owned(), id.to_owned());

        let bucket = self.buckets.entry(rtype.clone()).or_default();
        let held = bucket.iter_mut().find(|held| {
            held.get(key::ID).and_then(Value::as_str) == Some(id.as_str())
        });
        match held {
            Some(held) => merge::merge(held, resource),
            None => bucket.push(resource),
        }
        Ok((rtype, id))
    }

    /// Removes one resource, pruning its bucket when it empties. Returns
    /// whether anything was removed.
    pub(crate) fn remove(&mut self, rtype: &str, id: &str) -> bool {
        let Some(bucket) = self.buckets.get_mut(rtype) else {
            return false;
        };
        let before = bucket.len();
        bucket.retain(|resource| {
            resource.get(key::ID).and_then(Value::as_str) != Some(id)
        });
        let removed = bucket.len() < before;
        if bucket.is_empty() {
            self.buckets.remove(rtype);
        }
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
    }
}
