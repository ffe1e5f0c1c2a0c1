//! Merge policy for resources sharing an identity.
//!
//! A re-ingested resource never duplicates its pooled twin; it lands on
//! top of it. `attributes` and `relationships` merge field by field with
//! the incoming side winning, so a sparse update keeps the fields it
//! does not mention. Every other member is replaced wholesale.

use serde_json::Value;

use crate::key;
use crate::JsonObject;

/// Folds `incoming` into `existing` in place.
pub(crate) fn merge(existing: &mut JsonObject, incoming: JsonObject) {
    if *existing == incoming {
        return;
    }
    for (member, value) in incoming {
        match value {
            Value::Object(new_fields)
                if matches!(member.as_str(), key::ATTRIBUTES | key::RELATIONSHIPS) =>
            {
                match existing.get_mut(&member) {
                    Some(Value::Object(old_fields)) => overlay(old_fields, new_fields),
                    _ => {
                        existing.insert(member, Value::Object(new_fields));
                    }
                }
            }
            other => {
                existing.insert(member, other);
            }
        }
    }
}

fn overlay(old_fields: &mut JsonObject, new_fields: JsonObject) {
    for (field, value) in new_fields {
        old_fields.insert(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> JsonObject {
        value.as_object().expect("test object").clone()
    }

    #[test]
    fn attributes_overlay_field_by_field() {
        let mut existing = obj(json!({
            "id": "1",
            "type": "projects",
            "attributes": {"a": 1, "b": 2}
        }));
        let incoming = obj(json!({
            "id": "1",
            "type": "projects",
            "attributes": {"b": 3, "c": 4}
        }));

        merge(&mut existing, incoming);

        assert_eq!(
            existing["attributes"],
            json!({"a": 1, "b": 3, "c": 4})
        );
    }

    #[test]
    fn relationships_overlay_by_name() {
        let mut existing = obj(json!({
            "id": "1",
            "type": "projects",
            "relationships": {"author": {"data": {"type": "users", "id": "4"}}}
        }));
        let incoming = obj(json!({
            "id": "1",
            "type": "projects",
            "relationships": {"points": {"data": []}}
        }));

        merge(&mut existing, incoming);

        let relationships = existing["relationships"].as_object().unwrap();
        assert!(relationships.contains_key("author"));
        assert!(relationships.contains_key("points"));
    }

    #[test]
    fn other_members_replace_wholesale() {
        let mut existing = obj(json!({
            "id": "1",
            "type": "projects",
            "meta": {"x": 1}
        }));
        let incoming = obj(json!({
            "id": "1",
            "type": "projects",
            "meta": {"y": 2}
        }));

        merge(&mut existing, incoming);

        assert_eq!(existing["meta"], json!({"y": 2}));
    }

    #[test]
    fn non_object_attributes_replace_the_old_object() {
        let mut existing = obj(json!({
            "id": "1",
            "type": "projects",
            "attributes": {"a": 1}
        }));
        let incoming = obj(json!({
            "id": "1",
            "type": "projects",
            "attributes": null
        }));

        merge(&mut existing, incoming);

        assert_eq!(existing["attributes"], Value::Null);
    }

    #[test]
    fn attributes_materialize_when_previously_absent() {
        let mut existing = obj(json!({"id": "1", "type": "projects", "meta": {}}));
        let incoming = obj(json!({
            "id": "1",
            "type": "projects",
            "attributes": {"title": "T"}
        }));

        merge(&mut existing, incoming);

        assert_eq!(existing["attributes"], json!({"title": "T"}));
    }

    #[test]
    fn identical_resources_are_left_untouched() {
        let resource = obj(json!({
            "id": "1",
            "type": "projects",
            "attributes": {"title": "T"}
        }));
        let mut existing = resource.clone();

        merge(&mut existing, resource.clone());

        assert_eq!(existing, resource);
    }
}
