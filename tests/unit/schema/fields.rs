use super::*;
use crate::schema::theme::Theme;
use serde_json::json;

fn default_of(spec: &[FieldSpec], name: &str) -> Value {
    let field = spec.iter().find(|f| f.name == name).unwrap();
    match field.presence {
        Presence::Defaulted(d) => d.to_value(),
        _ => panic!("{name} has no default"),
    }
}

#[test]
fn defaults_table_matches_documented_values() {
    assert_eq!(default_of(fields_for(SceneKind::Image), "effect"), json!("none"));
    assert_eq!(default_of(fields_for(SceneKind::Video), "muted"), json!(false));
    assert_eq!(default_of(fields_for(SceneKind::Video), "volume"), json!(1.0));
    assert_eq!(
        default_of(fields_for(SceneKind::Video), "subtitleStyle"),
        json!("simple")
    );
    assert_eq!(default_of(fields_for(SceneKind::Grid), "interval"), json!(30));
    assert_eq!(
        default_of(fields_for(SceneKind::Split), "layout"),
        json!("image-right")
    );
    assert_eq!(
        default_of(fields_for(SceneKind::FeatureGrid), "layout"),
        json!("grid-left")
    );
}

#[test]
fn enum_defaults_agree_with_rust_defaults() {
    assert_eq!(
        default_of(fields_for(SceneKind::Image), "effect"),
        json!(ImageEffect::default().as_str())
    );
    assert_eq!(
        default_of(fields_for(SceneKind::Split), "layout"),
        json!(SplitLayout::default().as_str())
    );
    assert_eq!(
        default_of(fields_for(SceneKind::FeatureGrid), "layout"),
        json!(FeatureGridLayout::default().as_str())
    );
    assert_eq!(
        default_of(fields_for(SceneKind::Video), "subtitleStyle"),
        json!(SubtitleStyle::default().as_str())
    );

    let theme = serde_json::to_value(Theme::default()).unwrap();
    for field in THEME_FIELDS {
        assert_eq!(default_of(THEME_FIELDS, field.name), theme[field.name]);
    }
}

#[test]
fn every_variant_requires_duration() {
    for kind in SceneKind::ALL {
        let spec = fields_for(*kind);
        let duration = spec.iter().find(|f| f.name == "duration").unwrap();
        assert!(matches!(duration.presence, Presence::Required), "{kind}");
    }
}

#[test]
fn int_kind_accepts_negative_but_not_fractional() {
    assert!(check_value(FieldKind::Int, &json!(-5)).is_ok());
    assert!(check_value(FieldKind::Int, &json!(0)).is_ok());
    assert!(check_value(FieldKind::Int, &json!(1.5)).is_err());
    assert!(check_value(FieldKind::Int, &json!("30")).is_err());
}

#[test]
fn string_array_reports_offending_index() {
    let err = check_value(FieldKind::StringArray, &json!(["a", 2, "c"])).unwrap_err();
    assert_eq!(err.0, Some(1));
    assert!(err.1.contains("expected a string, got integer"));
}

#[test]
fn unit_number_bounds() {
    assert!(check_value(FieldKind::UnitNumber, &json!(0)).is_ok());
    assert!(check_value(FieldKind::UnitNumber, &json!(0.5)).is_ok());
    assert!(check_value(FieldKind::UnitNumber, &json!(1.5)).is_err());
    assert!(check_value(FieldKind::UnitNumber, &json!(-0.1)).is_err());
}

#[test]
fn enum_kind_lists_allowed_values() {
    let kind = FieldKind::Enum(<ImageEffect as SchemaEnum>::names);
    let err = check_value(kind, &json!("sparkle")).unwrap_err();
    assert!(err.1.contains("unknown value \"sparkle\""));
    assert!(err.1.contains("ken-burns"));
}
