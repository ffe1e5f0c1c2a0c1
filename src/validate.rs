//! # Document Validator
//!
//! Structural validation of JSON:API documents: a pure, borrow-only pass
//! that returns on the *first* violation, with top-level checks before
//! nested ones. Nothing here touches the chest; strict-mode parsing only
//! ingests a document after this pass accepts it.
//!
//! Two entry points:
//! - [`validate`] enforces the full inbound document shape;
//! - [`validate_for_create`] relaxes it for outbound create/update
//!   payloads, where `id` may be server-assigned and the top level must
//!   hold exactly one resource under `data`.

use serde_json::Value;

use crate::error::ValidationError;
use crate::key;
use crate::JsonObject;

/// Members of which an error object must contain at least one.
const ERROR_MEMBERS: [&str; 8] = [
    key::ID,
    key::LINKS,
    key::STATUS,
    key::CODE,
    key::TITLE,
    key::DETAIL,
    key::SOURCE,
    key::META,
];

/// Members of which a resource object must contain at least one besides
/// its identity.
const RESOURCE_MEMBERS: [&str; 4] = [key::ATTRIBUTES, key::RELATIONSHIPS, key::LINKS, key::META];

/// Validates a full JSON:API document.
///
/// Checks run in a fixed order: top-level member exclusivity, then (only
/// when one of `meta`/`data`/`errors` is present) top-level links, the
/// `errors` array, primary data, and `included`. A document with none of
/// `meta`/`data`/`errors` is vacuously valid.
pub fn validate(document: &JsonObject) -> Result<(), ValidationError> {
    let has_data = document.contains_key(key::DATA);
    let has_errors = document.contains_key(key::ERRORS);
    let has_meta = document.contains_key(key::META);

    if has_data && has_errors {
        return Err(ValidationError::InvalidTopLevel(
            "`data` and `errors` must not coexist".into(),
        ));
    }
    if document.contains_key(key::INCLUDED) && !has_data {
        return Err(ValidationError::InvalidTopLevel(
            "`included` requires `data`".into(),
        ));
    }
    if !(has_meta || has_data || has_errors) {
        return Ok(());
    }

    if let Some(links) = document.get(key::LINKS) {
        validate_links(links, false)?;
    }
    if let Some(errors) = document.get(key::ERRORS) {
        validate_errors(errors)?;
    }
    if let Some(data) = document.get(key::DATA) {
        validate_primary_data(data)?;
    }
    if let Some(included) = document.get(key::INCLUDED) {
        validate_included(included)?;
    }
    Ok(())
}

/// Validates an outbound create/update document.
///
/// The top level must contain exactly `data` holding a single resource
/// object; the resource requires `type` (`id` is optional, pending
/// server assignment) plus at least one content member; relationships
/// are checked with the same rules as inbound documents.
pub fn validate_for_create(document: &JsonObject) -> Result<(), ValidationError> {
    if document.len() != 1 || !document.contains_key(key::DATA) {
        return Err(ValidationError::InvalidTopLevel(
            "create documents must contain exactly `data`".into(),
        ));
    }
    let resource = match &document[key::DATA] {
        Value::Object(resource) => resource,
        Value::Array(_) => {
            return Err(ValidationError::InvalidTopLevel(
                "create documents take a single resource, not a list".into(),
            ))
        }
        _ => {
            return Err(ValidationError::InvalidTopLevel(
                "create document `data` must be a resource object".into(),
            ))
        }
    };
    if !resource.contains_key(key::TYPE) {
        return Err(ValidationError::InvalidResource(
            "create resources require `type`".into(),
        ));
    }
    validate_resource_members(resource)
}

/// Links object rule: an object with `self` and/or `related`, plus
/// `about` when nested inside an error object.
fn validate_links(links: &Value, with_about: bool) -> Result<(), ValidationError> {
    let links = links.as_object().ok_or_else(|| {
        ValidationError::InvalidLinks("links must be an object".into())
    })?;
    if with_about && !links.contains_key(key::ABOUT) {
        return Err(ValidationError::InvalidLinks(
            "error links require `about`".into(),
        ));
    }
    if !links.contains_key(key::SELF) && !links.contains_key(key::RELATED) {
        return Err(ValidationError::InvalidLinks(
            "links require `self` or `related`".into(),
        ));
    }
    Ok(())
}

fn validate_errors(errors: &Value) -> Result<(), ValidationError> {
    let entries = errors.as_array().ok_or_else(|| {
        ValidationError::InvalidErrors("`errors` must be an array".into())
    })?;
    for entry in entries {
        let entry = entry.as_object().ok_or_else(|| {
            ValidationError::InvalidErrors("error entries must be objects".into())
        })?;
        if !ERROR_MEMBERS.iter().any(|m| entry.contains_key(*m)) {
            return Err(ValidationError::InvalidErrors(
                "error objects need at least one standard member".into(),
            ));
        }
        if let Some(links) = entry.get(key::LINKS) {
            validate_links(links, true)?;
        }
        if let Some(source) = entry.get(key::SOURCE) {
            validate_source(source)?;
        }
    }
    Ok(())
}

fn validate_source(source: &Value) -> Result<(), ValidationError> {
    let has_origin = source
        .as_object()
        .is_some_and(|s| s.contains_key(key::POINTER) || s.contains_key(key::PARAMETER));
    if !has_origin {
        return Err(ValidationError::InvalidErrorSource(
            "source requires `pointer` or `parameter`".into(),
        ));
    }
    Ok(())
}

/// Primary data: a resource object, a list of them, or null (empty
/// to-one).
fn validate_primary_data(data: &Value) -> Result<(), ValidationError> {
    match data {
        Value::Null => Ok(()),
        Value::Object(resource) => validate_resource(resource),
        Value::Array(resources) => {
            for entry in resources {
                let resource = entry.as_object().ok_or_else(|| {
                    ValidationError::InvalidResource(
                        "primary data entries must be objects".into(),
                    )
                })?;
                validate_resource(resource)?;
            }
            Ok(())
        }
        _ => Err(ValidationError::InvalidResource(
            "primary data must be an object, a list, or null".into(),
        )),
    }
}

fn validate_included(included: &Value) -> Result<(), ValidationError> {
    let entries = included.as_array().ok_or_else(|| {
        ValidationError::InvalidResource(
            "`included` must be an array of resource objects".into(),
        )
    })?;
    for entry in entries {
        let resource = entry.as_object().ok_or_else(|| {
            ValidationError::InvalidResource("included entries must be objects".into())
        })?;
        validate_resource(resource)?;
    }
    Ok(())
}

fn validate_resource(resource: &JsonObject) -> Result<(), ValidationError> {
    if !(resource.contains_key(key::ID) && resource.contains_key(key::TYPE)) {
        return Err(ValidationError::InvalidResource(
            "resource objects require `id` and `type`".into(),
        ));
    }
    validate_resource_members(resource)
}

/// Everything past the identity requirement, shared by inbound resources
/// and outbound create payloads.
fn validate_resource_members(resource: &JsonObject) -> Result<(), ValidationError> {
    if !RESOURCE_MEMBERS.iter().any(|m| resource.contains_key(*m)) {
        return Err(ValidationError::InvalidResource(
            "resource objects need attributes, relationships, links, or meta".into(),
        ));
    }
    if let Some(relationships) = resource.get(key::RELATIONSHIPS) {
        validate_relationships(relationships)?;
    }
    if let Some(links) = resource.get(key::LINKS) {
        validate_links(links, false)?;
    }
    Ok(())
}

fn validate_relationships(relationships: &Value) -> Result<(), ValidationError> {
    let relationships = relationships.as_object().ok_or_else(|| {
        ValidationError::InvalidRelationship("`relationships` must be an object".into())
    })?;
    for (name, entry) in relationships {
        let entry = entry.as_object().ok_or_else(|| {
            ValidationError::InvalidRelationship(format!(
                "relationship `{name}` must be an object"
            ))
        })?;
        if !(entry.contains_key(key::LINKS)
            || entry.contains_key(key::DATA)
            || entry.contains_key(key::META))
        {
            return Err(ValidationError::InvalidRelationship(format!(
                "relationship `{name}` needs links, data, or meta"
            )));
        }
        if let Some(links) = entry.get(key::LINKS) {
            validate_links(links, false)?;
        }
        if let Some(data) = entry.get(key::DATA) {
            validate_linkage(name, data)?;
        }
    }
    Ok(())
}

/// Linkage rule: null, one identifier, or a list of identifiers, each
/// carrying `id` and `type`.
fn validate_linkage(name: &str, data: &Value) -> Result<(), ValidationError> {
    match data {
        Value::Null => Ok(()),
        Value::Object(ident) => validate_identifier(name, ident),
        Value::Array(idents) => {
            for entry in idents {
                let ident = entry.as_object().ok_or_else(|| {
                    ValidationError::InvalidRelationshipResourceLink(format!(
                        "relationship `{name}` linkage entries must be objects"
                    ))
                })?;
                validate_identifier(name, ident)?;
            }
            Ok(())
        }
        _ => Err(ValidationError::InvalidRelationshipResourceLink(format!(
            "relationship `{name}` linkage must be an identifier, a list, or null"
        ))),
    }
}

fn validate_identifier(name: &str, ident: &JsonObject) -> Result<(), ValidationError> {
    if !(ident.contains_key(key::ID) && ident.contains_key(key::TYPE)) {
        return Err(ValidationError::InvalidRelationshipResourceLink(format!(
            "relationship `{name}` identifiers require `id` and `type`"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> JsonObject {
        value.as_object().expect("test document").clone()
    }

    #[test]
    fn rejects_data_and_errors_together() {
        let document = doc(json!({
            "data": {"id": "1", "type": "projects", "attributes": {"title": "T"}},
            "errors": [{"title": "boom"}]
        }));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidTopLevel(_))
        ));
    }

    #[test]
    fn rejects_included_without_data() {
        let document = doc(json!({
            "meta": {"test": "tester"},
            "included": [{"id": "4", "type": "users", "attributes": {"name": "N"}}]
        }));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidTopLevel(_))
        ));
    }

    #[test]
    fn empty_document_is_vacuously_valid() {
        assert_eq!(validate(&doc(json!({}))), Ok(()));
        // Without meta/data/errors nothing else is inspected, even a
        // garbage links member.
        assert_eq!(validate(&doc(json!({"links": 5}))), Ok(()));
    }

    #[test]
    fn accepts_complete_top_level_document() {
        let document = doc(json!({
            "data": {"id": "2", "type": "projects", "attributes": {"title": "Test Project"}},
            "links": {"self": "http://example.com/projects"},
            "meta": {"test": "tester"}
        }));
        assert_eq!(validate(&document), Ok(()));
    }

    #[test]
    fn rejects_top_level_links_without_self_or_related() {
        let document = doc(json!({
            "meta": {},
            "links": {"first": "/projects?page=1"}
        }));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidLinks(_))
        ));
    }

    #[test]
    fn rejects_non_object_links() {
        let document = doc(json!({"meta": {}, "links": "nope"}));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidLinks(_))
        ));
    }

    #[test]
    fn rejects_non_array_errors() {
        let document = doc(json!({"errors": {"title": "boom"}}));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidErrors(_))
        ));
    }

    #[test]
    fn rejects_error_entry_without_standard_members() {
        let document = doc(json!({"errors": [{"severity": "high"}]}));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidErrors(_))
        ));
    }

    #[test]
    fn error_links_require_about_and_self_or_related() {
        let missing_about = doc(json!({
            "errors": [{"title": "boom", "links": {"self": "/errors/1"}}]
        }));
        assert!(matches!(
            validate(&missing_about),
            Err(ValidationError::InvalidLinks(_))
        ));

        let about_only = doc(json!({
            "errors": [{"title": "boom", "links": {"about": "/errors/1"}}]
        }));
        assert!(matches!(
            validate(&about_only),
            Err(ValidationError::InvalidLinks(_))
        ));

        let complete = doc(json!({
            "errors": [{"title": "boom", "links": {"about": "/errors/1", "self": "/errors/1"}}]
        }));
        assert_eq!(validate(&complete), Ok(()));
    }

    #[test]
    fn rejects_error_source_without_pointer_or_parameter() {
        let document = doc(json!({
            "errors": [{"title": "boom", "source": {"line": 4}}]
        }));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidErrorSource(_))
        ));

        let pointered = doc(json!({
            "errors": [{"title": "boom", "source": {"pointer": "/data/attributes/title"}}]
        }));
        assert_eq!(validate(&pointered), Ok(()));
    }

    #[test]
    fn strict_path_requires_id_create_path_does_not() {
        let resource = json!({"type": "projects", "attributes": {"title": "T"}});

        let inbound = doc(json!({ "data": resource }));
        assert!(matches!(
            validate(&inbound),
            Err(ValidationError::InvalidResource(_))
        ));

        assert_eq!(validate_for_create(&inbound), Ok(()));
    }

    #[test]
    fn rejects_resource_with_identity_only() {
        let document = doc(json!({"data": {"id": "1", "type": "projects"}}));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidResource(_))
        ));
    }

    #[test]
    fn null_primary_data_is_valid() {
        assert_eq!(validate(&doc(json!({"data": null}))), Ok(()));
    }

    #[test]
    fn rejects_scalar_primary_data() {
        assert!(matches!(
            validate(&doc(json!({"data": 7}))),
            Err(ValidationError::InvalidResource(_))
        ));
    }

    #[test]
    fn rejects_non_array_included() {
        let document = doc(json!({
            "data": {"id": "1", "type": "projects", "meta": {}},
            "included": {"id": "4", "type": "users", "meta": {}}
        }));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidResource(_))
        ));
    }

    #[test]
    fn accepts_document_with_relationship_links_and_data() {
        let document = doc(json!({
            "data": {
                "id": "1",
                "type": "projects",
                "attributes": {"title": "Test Project"},
                "relationships": {
                    "author": {
                        "links": {
                            "self": "/projects/1/relationships/author",
                            "related": "/projects/1/author"
                        },
                        "data": {"type": "people", "id": "9"}
                    }
                }
            }
        }));
        assert_eq!(validate(&document), Ok(()));
    }

    #[test]
    fn rejects_empty_relationship_entry() {
        let document = doc(json!({
            "data": {
                "id": "1",
                "type": "projects",
                "relationships": {"users": {}}
            }
        }));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidRelationship(_))
        ));
    }

    #[test]
    fn null_relationship_linkage_is_valid() {
        let document = doc(json!({
            "data": {
                "id": "1",
                "type": "projects",
                "relationships": {"users": {"data": null}}
            }
        }));
        assert_eq!(validate(&document), Ok(()));
    }

    #[test]
    fn rejects_identifier_missing_id() {
        let document = doc(json!({
            "data": {
                "id": "1",
                "type": "projects",
                "relationships": {"users": {"data": {"type": "users"}}}
            }
        }));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidRelationshipResourceLink(_))
        ));
    }

    #[test]
    fn rejects_bad_identifier_inside_to_many_linkage() {
        let document = doc(json!({
            "data": {
                "id": "1",
                "type": "projects",
                "relationships": {
                    "points": {"data": [{"type": "points", "id": "1"}, {"type": "points"}]}
                }
            }
        }));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidRelationshipResourceLink(_))
        ));
    }

    #[test]
    fn links_violation_reported_before_errors_violation() {
        // Both members are broken; the top-level links check runs first.
        let document = doc(json!({
            "errors": "nope",
            "links": {"page": 1}
        }));
        assert!(matches!(
            validate(&document),
            Err(ValidationError::InvalidLinks(_))
        ));
    }

    #[test]
    fn create_document_must_hold_exactly_data() {
        let with_meta = doc(json!({
            "data": {"type": "projects", "attributes": {"title": "T"}},
            "meta": {}
        }));
        assert!(matches!(
            validate_for_create(&with_meta),
            Err(ValidationError::InvalidTopLevel(_))
        ));

        let listed = doc(json!({
            "data": [{"type": "projects", "attributes": {"title": "T"}}]
        }));
        assert!(matches!(
            validate_for_create(&listed),
            Err(ValidationError::InvalidTopLevel(_))
        ));

        let typeless = doc(json!({"data": {"attributes": {"title": "T"}}}));
        assert!(matches!(
            validate_for_create(&typeless),
            Err(ValidationError::InvalidResource(_))
        ));
    }

    #[test]
    fn create_document_validates_relationships() {
        let document = doc(json!({
            "data": {
                "type": "projects",
                "attributes": {"title": "T"},
                "relationships": {"users": {"data": {"type": "users"}}}
            }
        }));
        assert!(matches!(
            validate_for_create(&document),
            Err(ValidationError::InvalidRelationshipResourceLink(_))
        ));
    }
}
