//! # Relationship Resolution
//!
//! Turns relationship linkage into typed values by looking the
//! referenced identifiers up in the chest and decoding the pooled
//! resource objects.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::chest::Chest;
use crate::error::ResolveError;
use crate::relationship::{Linkage, Relationship};

impl Chest {
    /// Fetches the pooled resource with the given identity and decodes
    /// it into `T`.
    pub async fn resource_for<T>(&self, rtype: &str, id: &str) -> Result<T, ResolveError>
    where
        T: DeserializeOwned,
    {
        let resource =
            self.lookup(rtype, id)
                .await?
                .ok_or_else(|| ResolveError::ResourceNotFound {
                    rtype: rtype.to_owned(),
                    id: id.to_owned(),
                })?;
        Ok(serde_json::from_value(Value::Object(resource))?)
    }

    /// Resolves a to-one relationship into the pooled resource it
    /// references.
    ///
    /// Fails with [`ResolveError::RelationshipDataMissing`] when the
    /// relationship carries no linkage, when the linkage is null, and
    /// when it is a to-many relationship.
    pub async fn resolve_one<T>(&self, relationship: &Relationship) -> Result<T, ResolveError>
    where
        T: DeserializeOwned,
    {
        let ident = relationship
            .data
            .as_ref()
            .and_then(Linkage::one)
            .ok_or(ResolveError::RelationshipDataMissing)?;
        self.resource_for(&ident.rtype, &ident.id).await
    }

    /// Resolves a to-many relationship into the pooled resources it
    /// references, in linkage order.
    ///
    /// An empty linkage list resolves to an empty `Vec`; an identifier
    /// that is not pooled (or does not decode) fails the whole
    /// resolution.
    pub async fn resolve_many<T>(&self, relationship: &Relationship) -> Result<Vec<T>, ResolveError>
    where
        T: DeserializeOwned,
    {
        let idents = relationship
            .data
            .as_ref()
            .and_then(Linkage::many)
            .ok_or(ResolveError::RelationshipDataMissing)?;

        let mut resolved = Vec::with_capacity(idents.len());
        for ident in idents {
            resolved.push(self.resource_for(&ident.rtype, &ident.id).await?);
        }
        Ok(resolved)
    }
}
