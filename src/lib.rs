//! # jsonapi-chest
//!
//! Validated JSON:API documents backed by a concurrent, deduplicating
//! resource pool (the *chest*).
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Validation layer** ([`validate()`]) - structural document
//!    checks, fail-fast and purely borrow-based
//! 2. **Pool layer** ([`chest`]) - an actor-owned store of resource
//!    objects keyed by `(type, id)`, with merge-on-conflict writes
//! 3. **Facade layer** ([`Document`]) - parse, pool, and read a payload,
//!    then resolve its relationships into typed values
//!
//! Parsing a document pools its primary and included resources, so a
//! relationship whose target arrived in *any* earlier document resolves
//! without another fetch.
//!
//! ## Quick Start
//!
//! ```no_run
//! use jsonapi_chest::{chest, Document};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Project {
//!     id: String,
//!     attributes: ProjectAttributes,
//! }
//!
//! #[derive(Deserialize)]
//! struct ProjectAttributes {
//!     title: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = chest::spawn();
//!
//!     let payload = r#"{
//!         "data": {
//!             "id": "1",
//!             "type": "projects",
//!             "attributes": {"title": "Test Project"}
//!         }
//!     }"#;
//!
//!     let document = Document::parse(payload, &pool).await?;
//!     let project: Project = document.map_one().ok_or("no primary resource")?;
//!     println!("{}: {}", project.id, project.attributes.title);
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - The pool lives inside one Tokio task; no `Mutex` or `RwLock`
//! - Handles are cheap clones that funnel into a bounded mailbox
//! - Requests are processed sequentially, so each write is atomic and
//!   writes apply in submission order
//! - Writes come confirmed ([`Chest::ingest`]) or fire-and-forget
//!   ([`Chest::ingest_detached`]); both order identically

pub mod builder;
pub mod chest;
pub mod document;
pub mod error;
pub mod key;
pub mod relationship;
mod resolve;
pub mod trace;
pub mod validate;

/// A JSON object, as parsed by `serde_json`.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// Re-export core types for convenience
pub use builder::ResourceBuilder;
pub use chest::{Chest, ChestActor, ChestState};
pub use document::{Document, ErrorObject, ErrorSource, JsonApiInfo, ValidationMode};
pub use error::{ChestError, ParseError, ResolveError, ValidationError};
pub use relationship::{relationship_of, Linkage, Relationship, ResourceIdentifier};
pub use validate::{validate, validate_for_create};
