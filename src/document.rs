//! # Document Facade
//!
//! [`Document`] ties the pieces together: it parses a JSON:API payload,
//! validates it, pools its resources into a chest, and then serves as a
//! typed view over the top-level members.
//!
//! A `Document` keeps a handle to the chest it was parsed into, so the
//! relationships of its primary resource can be resolved directly:
//!
//! ```no_run
//! use jsonapi_chest::{chest, Document};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct User {
//!     id: String,
//!     attributes: UserAttributes,
//! }
//!
//! #[derive(Deserialize)]
//! struct UserAttributes {
//!     name: String,
//! }
//!
//! # async fn demo(payload: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let pool = chest::spawn();
//! let document = Document::parse(payload, &pool).await?;
//! let author: User = document.resolve_one("author").await?;
//! println!("{} wrote {}", author.attributes.name, author.id);
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::chest::Chest;
use crate::error::{ChestError, ParseError, ResolveError};
use crate::key;
use crate::relationship::{relationship_of, Relationship};
use crate::validate::validate;
use crate::JsonObject;

/// How parsing treats a document that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Reject the document on the first violation, pooling nothing.
    #[default]
    Strict,
    /// Log the violation and pool whatever resources are present.
    Lenient,
}

/// One entry of a document's `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonObject>,
}

/// Where an error originated, as a document pointer or a query
/// parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// The `jsonapi` implementation-info object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonApiInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonObject>,
}

/// A parsed JSON:API document bound to the chest its resources were
/// pooled into.
#[derive(Clone)]
pub struct Document {
    object: JsonObject,
    chest: Chest,
}

impl Document {
    /// Parses `json` in [`ValidationMode::Strict`] and pools its
    /// resources into `chest`.
    pub async fn parse(json: &str, chest: &Chest) -> Result<Self, ParseError> {
        Self::parse_with(json, chest, ValidationMode::default()).await
    }

    /// Like [`Document::parse`], starting from raw bytes.
    pub async fn parse_slice(bytes: &[u8], chest: &Chest) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_slice(bytes).map_err(ParseError::Json)?;
        Self::from_value(value, chest, ValidationMode::default()).await
    }

    /// Parses `json`, validates it under `mode`, and pools its primary
    /// and included resources.
    pub async fn parse_with(
        json: &str,
        chest: &Chest,
        mode: ValidationMode,
    ) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(json).map_err(ParseError::Json)?;
        Self::from_value(value, chest, mode).await
    }

    /// Builds a document from an already parsed value.
    ///
    /// In strict mode a validation failure rejects the document before
    /// anything is pooled. In lenient mode the violation is logged and
    /// pooling proceeds with every resource that carries a usable
    /// identity.
    pub async fn from_value(
        value: Value,
        chest: &Chest,
        mode: ValidationMode,
    ) -> Result<Self, ParseError> {
        let Value::Object(object) = value else {
            return Err(ParseError::NotAnObject);
        };
        if let Err(violation) = validate(&object) {
            match mode {
                ValidationMode::Strict => return Err(violation.into()),
                ValidationMode::Lenient => {
                    warn!(%violation, "Pooling document that failed validation");
                }
            }
        }
        let document = Self {
            object,
            chest: chest.clone(),
        };
        document.pool().await?;
        Ok(document)
    }

    /// Pools every resource of the document — primary data first, then
    /// `included` — as one atomic batch write, awaiting its ack so that
    /// resolution through any handle sees the document's resources.
    async fn pool(&self) -> Result<(), ChestError> {
        let batch: Vec<JsonObject> = self
            .resources()
            .into_iter()
            .chain(self.included())
            .cloned()
            .collect();
        self.chest.ingest_all(batch).await
    }

    /// The raw top-level object.
    pub fn as_object(&self) -> &JsonObject {
        &self.object
    }

    /// The chest this document was pooled into.
    pub fn chest(&self) -> &Chest {
        &self.chest
    }

    /// Top-level `meta`.
    pub fn meta(&self) -> Option<&JsonObject> {
        self.object.get(key::META).and_then(Value::as_object)
    }

    /// Top-level `links`.
    pub fn links(&self) -> Option<&JsonObject> {
        self.object.get(key::LINKS).and_then(Value::as_object)
    }

    /// The `jsonapi` implementation-info object, decoded.
    pub fn jsonapi(&self) -> Option<JsonApiInfo> {
        let value = self.object.get(key::JSONAPI)?.clone();
        serde_json::from_value(value).ok()
    }

    /// The document's error objects, decoded. `None` when the document
    /// has no `errors` member.
    pub fn errors(&self) -> Option<Vec<ErrorObject>> {
        let value = self.object.get(key::ERRORS)?.clone();
        serde_json::from_value(value).ok()
    }

    /// Raw primary data.
    pub fn data(&self) -> Option<&Value> {
        self.object.get(key::DATA)
    }

    /// The single primary resource object, when `data` holds one.
    pub fn resource(&self) -> Option<&JsonObject> {
        self.data()?.as_object()
    }

    /// The document's included resource objects.
    pub fn included(&self) -> Vec<&JsonObject> {
        match self.object.get(key::INCLUDED) {
            Some(Value::Array(entries)) => entries.iter().filter_map(Value::as_object).collect(),
            _ => Vec::new(),
        }
    }

    /// Decodes the single primary resource into `T`. `None` when `data`
    /// is absent, null, a list, or does not decode.
    pub fn map_one<T: DeserializeOwned>(&self) -> Option<T> {
        let resource = self.resource()?.clone();
        serde_json::from_value(Value::Object(resource)).ok()
    }

    /// Decodes the primary resource list into `Vec<T>`. `None` when
    /// `data` is absent, not a list, or does not decode in full.
    pub fn map_many<T: DeserializeOwned>(&self) -> Option<Vec<T>> {
        match self.data()? {
            Value::Array(entries) => {
                serde_json::from_value(Value::Array(entries.clone())).ok()
            }
            _ => None,
        }
    }

    /// The named relationship of the single primary resource.
    pub fn relationship(&self, name: &str) -> Option<Relationship> {
        relationship_of(self.resource()?, name)
    }

    /// Resolves the named to-one relationship of the primary resource
    /// through the chest.
    pub async fn resolve_one<T: DeserializeOwned>(&self, name: &str) -> Result<T, ResolveError> {
        let relationship = self
            .relationship(name)
            .ok_or(ResolveError::RelationshipDataMissing)?;
        self.chest.resolve_one(&relationship).await
    }

    /// Resolves the named to-many relationship of the primary resource
    /// through the chest.
    pub async fn resolve_many<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Vec<T>, ResolveError> {
        let relationship = self
            .relationship(name)
            .ok_or(ResolveError::RelationshipDataMissing)?;
        self.chest.resolve_many(&relationship).await
    }

    /// Normalized primary data: one resource, each list entry, or
    /// nothing for null and absent data.
    pub fn resources(&self) -> Vec<&JsonObject> {
        match self.data() {
            Some(Value::Object(resource)) => vec![resource],
            Some(Value::Array(entries)) => entries.iter().filter_map(Value::as_object).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_objects_decode_including_source() {
        let errors: Vec<ErrorObject> = serde_json::from_value(json!([
            {
                "status": "422",
                "title": "Invalid Attribute",
                "source": {"pointer": "/data/attributes/title"}
            },
            {"code": "E42"}
        ]))
        .unwrap();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].status.as_deref(), Some("422"));
        assert_eq!(
            errors[0].source.as_ref().unwrap().pointer.as_deref(),
            Some("/data/attributes/title")
        );
        assert_eq!(errors[1].code.as_deref(), Some("E42"));
        assert_eq!(errors[1].title, None);
    }

    #[test]
    fn jsonapi_info_decodes_version() {
        let info: JsonApiInfo =
            serde_json::from_value(json!({"version": "1.0"})).unwrap();
        assert_eq!(info.version.as_deref(), Some("1.0"));
        assert_eq!(info.meta, None);
    }

    #[test]
    fn error_object_serialization_skips_absent_members() {
        let error = ErrorObject {
            title: Some("boom".into()),
            ..ErrorObject::default()
        };
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"title": "boom"})
        );
    }
}
