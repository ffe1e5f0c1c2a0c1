//! # Outbound Payload Builder
//!
//! Assembles `{"data": resource}` documents for create and update
//! requests. The built document passes [`validate_for_create`], so a
//! payload that would be rejected server-side fails at [`build`] instead
//! of on the wire.
//!
//! [`build`]: ResourceBuilder::build

use serde_json::Value;

use crate::error::ValidationError;
use crate::key;
use crate::relationship::Relationship;
use crate::validate::validate_for_create;
use crate::JsonObject;

/// Fluent builder for a single outbound resource.
///
/// ```
/// use jsonapi_chest::{Relationship, ResourceIdentifier, ResourceBuilder};
///
/// let payload = ResourceBuilder::create("projects")
///     .attribute("title", "Test Project")
///     .relationship(
///         "user",
///         Relationship::to_one(ResourceIdentifier::new("users", "4")),
///     )
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder {
    rtype: String,
    id: Option<String>,
    attributes: JsonObject,
    relationships: JsonObject,
}

impl ResourceBuilder {
    /// Starts a create payload. The `id` member is left out for the
    /// server to assign; use [`ResourceBuilder::id`] for client-generated
    /// ids.
    pub fn create(rtype: impl Into<String>) -> Self {
        Self {
            rtype: rtype.into(),
            ..Self::default()
        }
    }

    /// Starts an update payload for an existing resource.
    pub fn update(rtype: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::create(rtype)
        }
    }

    /// Sets the resource id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds one attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Adds every attribute from `attributes`, overwriting earlier ones
    /// with the same name.
    pub fn attributes(mut self, attributes: JsonObject) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Adds a named relationship.
    pub fn relationship(mut self, name: impl Into<String>, relationship: Relationship) -> Self {
        let value = serde_json::to_value(&relationship).unwrap_or(Value::Null);
        self.relationships.insert(name.into(), value);
        self
    }

    /// Assembles the `{"data": resource}` document and checks it against
    /// the create/update document rules.
    pub fn build(self) -> Result<JsonObject, ValidationError> {
        let mut resource = JsonObject::new();
        resource.insert(key::TYPE.into(), Value::String(self.rtype));
        if let Some(id) = self.id {
            resource.insert(key::ID.into(), Value::String(id));
        }
        if !self.attributes.is_empty() {
            resource.insert(key::ATTRIBUTES.into(), Value::Object(self.attributes));
        }
        if !self.relationships.is_empty() {
            resource.insert(key::RELATIONSHIPS.into(), Value::Object(self.relationships));
        }

        let mut document = JsonObject::new();
        document.insert(key::DATA.into(), Value::Object(resource));
        validate_for_create(&document)?;
        Ok(document)
    }
}
