//! Declarative field tables for every scene variant and the theme.
//!
//! Each table lists the accepted keys in declaration order. Validation walks the table to check
//! shapes; defaulting walks it again to fill absent optional fields.

use crate::foundation::color::HexColor;
use crate::scene::model::{
    FeatureGridLayout, ImageEffect, SceneKind, SchemaEnum, SplitLayout, SubtitleStyle,
};
use crate::schema::theme::{FontFamily, GlobalFilter, Overlay};
use serde_json::Value;

/// Primitive shape a field value must have.
#[derive(Clone, Copy)]
pub(crate) enum FieldKind {
    String,
    /// Any integer; sign is not checked (durations may be <= 0).
    Int,
    NonNegativeInt,
    PositiveInt,
    /// Finite number in `[0, 1]`.
    UnitNumber,
    Bool,
    StringArray,
    /// String drawn from a closed set.
    Enum(fn() -> Vec<&'static str>),
    /// `#RRGGBB` / `#RRGGBBAA`.
    HexColor,
}

/// Value inserted when a defaulted field is absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DefaultValue {
    Str(&'static str),
    Int(i64),
    Number(f64),
    Bool(bool),
}

impl DefaultValue {
    pub(crate) fn to_value(self) -> Value {
        match self {
            Self::Str(s) => Value::from(s),
            Self::Int(v) => Value::from(v),
            Self::Number(v) => Value::from(v),
            Self::Bool(v) => Value::from(v),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) enum Presence {
    Required,
    Optional,
    Defaulted(DefaultValue),
}

#[derive(Clone, Copy)]
pub(crate) struct FieldSpec {
    pub(crate) name: &'static str,
    pub(crate) kind: FieldKind,
    pub(crate) presence: Presence,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
        }
    }

    const fn defaulted(name: &'static str, kind: FieldKind, default: DefaultValue) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Defaulted(default),
        }
    }
}

const IMAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("src", FieldKind::String),
    FieldSpec::required("duration", FieldKind::Int),
    FieldSpec::defaulted(
        "effect",
        FieldKind::Enum(<ImageEffect as SchemaEnum>::names),
        DefaultValue::Str("none"),
    ),
    FieldSpec::optional("caption", FieldKind::String),
];

const GRID_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("images", FieldKind::StringArray),
    FieldSpec::required("duration", FieldKind::Int),
    FieldSpec::defaulted("interval", FieldKind::PositiveInt, DefaultValue::Int(30)),
    FieldSpec::defaulted("columns", FieldKind::PositiveInt, DefaultValue::Int(2)),
    FieldSpec::optional("title", FieldKind::String),
];

const QUOTE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("text", FieldKind::String),
    FieldSpec::optional("author", FieldKind::String),
    FieldSpec::required("duration", FieldKind::Int),
];

const INTRO_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", FieldKind::String),
    FieldSpec::optional("subtitle", FieldKind::String),
    FieldSpec::optional("date", FieldKind::String),
    FieldSpec::optional("background", FieldKind::String),
    FieldSpec::required("duration", FieldKind::Int),
];

const SPLIT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("image", FieldKind::String),
    FieldSpec::required("title", FieldKind::String),
    FieldSpec::optional("body", FieldKind::String),
    FieldSpec::defaulted(
        "layout",
        FieldKind::Enum(<SplitLayout as SchemaEnum>::names),
        DefaultValue::Str("image-right"),
    ),
    FieldSpec::required("duration", FieldKind::Int),
];

const FEATURE_GRID_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("images", FieldKind::StringArray),
    FieldSpec::required("title", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::defaulted(
        "layout",
        FieldKind::Enum(<FeatureGridLayout as SchemaEnum>::names),
        DefaultValue::Str("grid-left"),
    ),
    FieldSpec::required("duration", FieldKind::Int),
];

const VIDEO_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("src", FieldKind::String),
    FieldSpec::required("duration", FieldKind::Int),
    FieldSpec::defaulted("muted", FieldKind::Bool, DefaultValue::Bool(false)),
    FieldSpec::defaulted("volume", FieldKind::UnitNumber, DefaultValue::Number(1.0)),
    FieldSpec::optional("startFrom", FieldKind::NonNegativeInt),
    FieldSpec::optional("subtitle", FieldKind::String),
    FieldSpec::defaulted(
        "subtitleStyle",
        FieldKind::Enum(<SubtitleStyle as SchemaEnum>::names),
        DefaultValue::Str("simple"),
    ),
];

pub(crate) const THEME_FIELDS: &[FieldSpec] = &[
    FieldSpec::defaulted(
        "backgroundColor",
        FieldKind::HexColor,
        DefaultValue::Str("#000000"),
    ),
    FieldSpec::defaulted("textColor", FieldKind::HexColor, DefaultValue::Str("#ffffff")),
    FieldSpec::defaulted(
        "primaryColor",
        FieldKind::HexColor,
        DefaultValue::Str("#ff0000"),
    ),
    FieldSpec::defaulted(
        "fontFamily",
        FieldKind::Enum(<FontFamily as SchemaEnum>::names),
        DefaultValue::Str("sans-serif"),
    ),
    FieldSpec::defaulted(
        "globalFilter",
        FieldKind::Enum(<GlobalFilter as SchemaEnum>::names),
        DefaultValue::Str("none"),
    ),
    FieldSpec::defaulted(
        "overlay",
        FieldKind::Enum(<Overlay as SchemaEnum>::names),
        DefaultValue::Str("none"),
    ),
];

/// Field table for a scene variant.
pub(crate) fn fields_for(kind: SceneKind) -> &'static [FieldSpec] {
    match kind {
        SceneKind::Image => IMAGE_FIELDS,
        SceneKind::Grid => GRID_FIELDS,
        SceneKind::Quote => QUOTE_FIELDS,
        SceneKind::Intro => INTRO_FIELDS,
        SceneKind::Split => SPLIT_FIELDS,
        SceneKind::FeatureGrid => FEATURE_GRID_FIELDS,
        SceneKind::Video => VIDEO_FIELDS,
    }
}

/// Check a present, non-null value against its field kind.
///
/// Array element failures report the element index.
pub(crate) fn check_value(kind: FieldKind, value: &Value) -> Result<(), (Option<usize>, String)> {
    let fail = |msg: String| -> Result<(), (Option<usize>, String)> { Err((None, msg)) };
    match kind {
        FieldKind::String => match value {
            Value::String(_) => Ok(()),
            other => fail(format!("expected a string, got {}", type_name(other))),
        },
        FieldKind::Int => match value.as_i64() {
            Some(_) => Ok(()),
            None => fail(format!("expected an integer, got {}", type_name(value))),
        },
        FieldKind::NonNegativeInt => match value.as_i64() {
            Some(v) if v >= 0 => Ok(()),
            Some(v) => fail(format!("must be >= 0, got {v}")),
            None => fail(format!("expected an integer, got {}", type_name(value))),
        },
        FieldKind::PositiveInt => match value.as_i64() {
            Some(v) if v > 0 => Ok(()),
            Some(v) => fail(format!("must be > 0, got {v}")),
            None => fail(format!("expected an integer, got {}", type_name(value))),
        },
        FieldKind::UnitNumber => match value.as_f64() {
            Some(v) if v.is_finite() && (0.0..=1.0).contains(&v) => Ok(()),
            Some(v) => fail(format!("must be within [0, 1], got {v}")),
            None => fail(format!("expected a number, got {}", type_name(value))),
        },
        FieldKind::Bool => match value {
            Value::Bool(_) => Ok(()),
            other => fail(format!("expected a boolean, got {}", type_name(other))),
        },
        FieldKind::StringArray => match value {
            Value::Array(elems) => {
                for (i, e) in elems.iter().enumerate() {
                    if !e.is_string() {
                        return Err((
                            Some(i),
                            format!("expected a string, got {}", type_name(e)),
                        ));
                    }
                }
                Ok(())
            }
            other => fail(format!("expected an array of strings, got {}", type_name(other))),
        },
        FieldKind::Enum(names) => match value {
            Value::String(s) => {
                let allowed = names();
                if allowed.contains(&s.as_str()) {
                    Ok(())
                } else {
                    fail(format!(
                        "unknown value \"{s}\" (expected one of: {})",
                        allowed.join(", ")
                    ))
                }
            }
            other => fail(format!("expected a string, got {}", type_name(other))),
        },
        FieldKind::HexColor => match value {
            Value::String(s) => HexColor::parse(s).map(|_| ()).map_err(|e| (None, e)),
            other => fail(format!("expected a hex color string, got {}", type_name(other))),
        },
    }
}

/// Like [`check_value`], for a field as authored in a template.
///
/// String fields and string-array elements may hold a slot object instead of a literal.
pub(crate) fn check_authored_value(
    kind: FieldKind,
    value: &Value,
) -> Result<(), (Option<usize>, String)> {
    match (kind, value) {
        (FieldKind::String, Value::Object(_)) => check_slot(value).map_err(|m| (None, m)),
        (FieldKind::StringArray, Value::Array(elems)) => {
            for (i, e) in elems.iter().enumerate() {
                match e {
                    Value::String(_) => {}
                    Value::Object(_) => check_slot(e).map_err(|m| (Some(i), m))?,
                    other => {
                        return Err((
                            Some(i),
                            format!("expected a string or slot, got {}", type_name(other)),
                        ));
                    }
                }
            }
            Ok(())
        }
        // Membership is checked by the registry once the item is resolved.
        (FieldKind::Enum(_), Value::String(_)) => Ok(()),
        (_, Value::Object(o)) if o.contains_key(SLOT_ID) => {
            Err((None, "field does not accept a slot".to_owned()))
        }
        _ => check_value(kind, value),
    }
}

const SLOT_ID: &str = "slotId";
const SLOT_DESCRIPTION: &str = "description";

fn check_slot(value: &Value) -> Result<(), String> {
    let Some(obj) = value.as_object() else {
        return Err(format!("expected a slot object, got {}", type_name(value)));
    };
    if let Some(key) = obj.keys().find(|k| *k != SLOT_ID && *k != SLOT_DESCRIPTION) {
        return Err(format!("unknown slot field \"{key}\""));
    }
    match obj.get(SLOT_ID) {
        Some(Value::String(id)) if !id.is_empty() => {}
        Some(Value::String(_)) => return Err("slotId must be non-empty".to_owned()),
        Some(other) => return Err(format!("slotId must be a string, got {}", type_name(other))),
        None => return Err("slot is missing slotId".to_owned()),
    }
    match obj.get(SLOT_DESCRIPTION) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(other) => Err(format!(
            "slot description must be a string, got {}",
            type_name(other)
        )),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/fields.rs"]
mod tests;
