use crate::scene::model::{RenderableItem, SceneKind, SchemaEnum};
use crate::schema::error::{SchemaPathElem, ValidationError};
use crate::schema::fields::{
    FieldSpec, Presence, check_authored_value, check_value, fields_for,
};
use serde_json::{Map, Value};

const TYPE_TAG: &str = "type";

/// Turn a slot-free candidate object into a strict [`RenderableItem`].
///
/// Runs structural validation first, then fills defaults for absent optional fields. Pure: the
/// candidate is not modified. Validating the serialized form of a returned item yields the same
/// item.
pub fn validate_item(candidate: &Value) -> Result<RenderableItem, ValidationError> {
    let (kind, obj) = check_item(candidate)?;
    let normalized = apply_item_defaults(kind, obj);
    serde_json::from_value(Value::Object(normalized))
        .map_err(|e| ValidationError::root(format!("{kind} item does not match schema: {e}")))
}

/// Structural phase: type tag, unknown fields, required fields, primitive kinds, enum sets.
pub(crate) fn check_item(candidate: &Value) -> Result<(SceneKind, &Map<String, Value>), ValidationError> {
    let obj = candidate
        .as_object()
        .ok_or_else(|| ValidationError::root("scene item must be a JSON object"))?;
    let kind = scene_kind(obj)?;

    check_object(obj, fields_for(kind), &[])?;
    Ok((kind, obj))
}

/// Shape check for an item as the template author wrote it, slots still in place.
///
/// Uses the same field tables as [`validate_item`]. A slot object is accepted wherever a string
/// or string-array element is expected and rejected everywhere else. Enum membership and unknown
/// fields are left to [`validate_item`], which sees them after slot resolution.
pub(crate) fn check_authored_item(raw: &Value) -> Result<SceneKind, ValidationError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ValidationError::root("scene item must be a JSON object"))?;
    let kind = scene_kind(obj)?;

    for field in fields_for(kind) {
        let path = [SchemaPathElem::Field(field.name.to_owned())];
        match obj.get(field.name) {
            None | Some(Value::Null) => {
                if matches!(field.presence, Presence::Required) {
                    return Err(ValidationError::at(&path, "missing required field"));
                }
            }
            Some(value) => {
                check_authored_value(field.kind, value).map_err(|(index, message)| {
                    let mut p = path.to_vec();
                    if let Some(i) = index {
                        p.push(SchemaPathElem::Index(i));
                    }
                    ValidationError::at(&p, message)
                })?;
            }
        }
    }

    Ok(kind)
}

fn scene_kind(obj: &Map<String, Value>) -> Result<SceneKind, ValidationError> {
    let tag_path = [SchemaPathElem::Field(TYPE_TAG.to_owned())];
    match obj.get(TYPE_TAG) {
        None | Some(Value::Null) => Err(ValidationError::at(&tag_path, "missing scene type tag")),
        Some(Value::String(s)) => SceneKind::parse(s).ok_or_else(|| {
            ValidationError::at(
                &tag_path,
                format!(
                    "unknown scene type \"{s}\" (expected one of: {})",
                    SceneKind::names().join(", ")
                ),
            )
        }),
        Some(_) => Err(ValidationError::at(&tag_path, "scene type tag must be a string")),
    }
}

/// Defaulting phase: canonical type tag, nulls dropped, absent defaulted fields filled.
pub(crate) fn apply_item_defaults(kind: SceneKind, obj: &Map<String, Value>) -> Map<String, Value> {
    let mut out = fill_defaults(obj, fields_for(kind));
    out.insert(TYPE_TAG.to_owned(), Value::from(kind.as_str()));
    out
}

pub(crate) fn check_object(
    obj: &Map<String, Value>,
    spec: &[FieldSpec],
    base: &[SchemaPathElem],
) -> Result<(), ValidationError> {
    let field_path = |name: &str| -> Vec<SchemaPathElem> {
        let mut p = base.to_vec();
        p.push(SchemaPathElem::Field(name.to_owned()));
        p
    };

    for key in obj.keys() {
        if key == TYPE_TAG && base.is_empty() {
            continue;
        }
        if !spec.iter().any(|f| f.name == key) {
            return Err(ValidationError::at(&field_path(key), "unknown field"));
        }
    }

    for field in spec {
        match obj.get(field.name) {
            None | Some(Value::Null) => {
                if matches!(field.presence, Presence::Required) {
                    return Err(ValidationError::at(
                        &field_path(field.name),
                        "missing required field",
                    ));
                }
            }
            Some(value) => {
                if let Err((index, message)) = check_value(field.kind, value) {
                    let mut path = field_path(field.name);
                    if let Some(i) = index {
                        path.push(SchemaPathElem::Index(i));
                    }
                    return Err(ValidationError::at(&path, message));
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn fill_defaults(obj: &Map<String, Value>, spec: &[FieldSpec]) -> Map<String, Value> {
    let mut out = Map::new();
    for field in spec {
        match (obj.get(field.name), field.presence) {
            (Some(v), _) if !v.is_null() => {
                out.insert(field.name.to_owned(), v.clone());
            }
            (_, Presence::Defaulted(default)) => {
                out.insert(field.name.to_owned(), default.to_value());
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
