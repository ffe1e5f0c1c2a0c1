//! # Error Types
//!
//! Every fallible surface of the crate returns one of the enums below:
//! [`ValidationError`] for document shape violations, [`ChestError`]
//! for pool transport failures, [`ResolveError`] for relationship
//! resolution, and [`ParseError`] for the document facade.

/// A structural violation of the JSON:API document shape.
///
/// Raised by [`validate`](crate::validate::validate) and
/// [`validate_for_create`](crate::validate::validate_for_create) on the
/// *first* violation found. The payload is a human-readable reason for
/// logs and assertions; the variant is the machine-readable class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid top level: {0}")]
    InvalidTopLevel(String),
    #[error("invalid errors member: {0}")]
    InvalidErrors(String),
    #[error("invalid links object: {0}")]
    InvalidLinks(String),
    #[error("invalid error source: {0}")]
    InvalidErrorSource(String),
    #[error("invalid resource object: {0}")]
    InvalidResource(String),
    #[error("invalid relationship: {0}")]
    InvalidRelationship(String),
    #[error("invalid relationship resource linkage: {0}")]
    InvalidRelationshipResourceLink(String),
}

/// Failures talking to a [`Chest`](crate::Chest).
///
/// Every operation on a live actor succeeds, so these only surface when
/// the actor task is gone or when export/import bytes cannot be
/// encoded or decoded.
#[derive(Debug, thiserror::Error)]
pub enum ChestError {
    /// The chest actor is no longer running (all requests fail fast).
    #[error("chest closed")]
    Closed,
    /// The actor dropped the reply channel before answering.
    #[error("chest dropped response channel")]
    Dropped,
    /// Export/import byte codec failure.
    #[error("chest state codec: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Failures resolving a relationship against the chest.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The relationship carries no usable linkage: `data` is absent,
    /// null, or shaped for the other cardinality.
    #[error("relationship data missing")]
    RelationshipDataMissing,
    /// The linkage points at a resource the chest has never seen.
    #[error("resource {rtype}/{id} not found in chest")]
    ResourceNotFound { rtype: String, id: String },
    #[error(transparent)]
    Chest(#[from] ChestError),
    /// The pooled resource object does not decode into the target type.
    #[error("resource decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures parsing an incoming document through the facade.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The top level of a JSON:API document must be a JSON object.
    #[error("document root must be a JSON object")]
    NotAnObject,
    /// Strict-mode validation rejected the document.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Chest(#[from] ChestError),
    /// Raw input bytes were not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(serde_json::Error),
}
