use super::*;
use serde_json::json;

fn parse(v: serde_json::Value) -> Template {
    serde_json::from_value(v).unwrap()
}

fn header(items: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "wedding-classic",
        "name": "Classic",
        "resolution": {"width": 1080, "height": 1920},
        "fps": 30,
        "items": items,
    })
}

#[test]
fn parses_slots_and_literals() {
    let t = parse(header(json!([
        {"type": "image", "src": {"slotId": "hero", "description": "Couple photo"}, "duration": 90},
        {"type": "image", "src": "https://cdn.example/fixed.jpg", "duration": 60, "effect": "zoom-in"},
    ])));

    let TemplateItem::Image(first) = &t.items[0] else {
        panic!("expected image");
    };
    assert_eq!(
        first.src,
        SlotOr::Slot(Slot {
            slot_id: "hero".to_owned(),
            description: Some("Couple photo".to_owned()),
        })
    );

    let TemplateItem::Image(second) = &t.items[1] else {
        panic!("expected image");
    };
    assert_eq!(second.src, SlotOr::literal("https://cdn.example/fixed.jpg"));
    assert_eq!(second.effect.as_deref(), Some("zoom-in"));
}

#[test]
fn text_tag_is_an_alias_for_quote() {
    let t = parse(header(json!([
        {"type": "text", "text": {"slotId": "q1"}, "duration": 30},
    ])));
    assert_eq!(t.items[0].kind(), SceneKind::Quote);
}

#[test]
fn unknown_item_fields_are_kept_for_the_registry() {
    let t = parse(header(json!([
        {"type": "quote", "text": "hi", "duration": 30, "sparkle": true},
    ])));
    let TemplateItem::Quote(q) = &t.items[0] else {
        panic!("expected quote");
    };
    assert_eq!(q.extra.get("sparkle"), Some(&json!(true)));
}

fn load_err(items: serde_json::Value) -> ValidationError {
    let doc = header(items).to_string();
    let err = Template::from_reader(doc.as_bytes()).unwrap_err();
    err.as_validation()
        .unwrap_or_else(|| panic!("expected a validation error, got {err}"))
        .clone()
}

#[test]
fn unknown_type_tag_fails_to_parse() {
    let r: Result<Template, _> = serde_json::from_value(header(json!([
        {"type": "carousel", "duration": 30},
    ])));
    assert!(r.unwrap_err().to_string().contains("unknown scene type"));

    let e = load_err(json!([{"type": "carousel", "duration": 30}]));
    assert_eq!(e.item, Some(0));
    assert_eq!(e.field(), Some("type"));
}

#[test]
fn wrong_primitive_kind_reports_item_and_field() {
    let e = load_err(json!([{"type": "quote", "text": "hi", "duration": "30"}]));
    assert_eq!(e.item, Some(0));
    assert_eq!(e.field(), Some("duration"));
    assert!(e.message.contains("expected an integer"));
}

#[test]
fn missing_required_field_reports_item_and_field() {
    let e = load_err(json!([{"type": "image", "src": {"slotId": "a"}}]));
    assert_eq!(e.item, Some(0));
    assert_eq!(e.field(), Some("duration"));
    assert_eq!(e.message, "missing required field");
}

#[test]
fn slot_in_non_slot_field_is_rejected() {
    let e = load_err(json!([
        {"type": "image", "src": "a.jpg", "effect": {"slotId": "e"}, "duration": 60},
    ]));
    assert_eq!(e.item, Some(0));
    assert_eq!(e.field(), Some("effect"));
    assert_eq!(e.to_string(), "$.items[0].effect: field does not accept a slot");
}

#[test]
fn malformed_slot_in_grid_reports_element_index() {
    let e = load_err(json!([
        {"type": "quote", "text": "hi", "duration": 30},
        {"type": "grid", "images": [{"slotId": "g1"}, {"slot": "g2"}], "duration": 90},
    ]));
    assert_eq!(e.item, Some(1));
    assert_eq!(e.path_string(), "$.items[1].images[1]");
}

#[test]
fn out_of_set_enum_values_load_and_fail_at_compile() {
    let doc = header(json!([
        {"type": "image", "src": "a.jpg", "effect": "sparkle", "duration": 60},
    ]))
    .to_string();
    let t = Template::from_reader(doc.as_bytes()).unwrap();
    assert_eq!(t.items.len(), 1);
}

#[test]
fn media_slot_count_ignores_literals_and_text() {
    let t = parse(header(json!([
        {"type": "image", "src": {"slotId": "a"}, "duration": 30},
        {"type": "grid", "images": [{"slotId": "g1"}, "fixed.jpg", {"slotId": "g3"}], "duration": 90},
        {"type": "quote", "text": {"slotId": "q"}, "duration": 30},
        {"type": "intro", "title": "Hi", "background": {"slotId": "bg"}, "duration": 30},
        {"type": "video", "src": {"slotId": "v"}, "duration": 120},
    ])));
    assert_eq!(t.media_slot_count(), 5);
}

#[test]
fn validate_rejects_bad_header() {
    let mut t = parse(header(json!([])));
    t.validate().unwrap();

    t.fps = Fps { num: 30, den: 0 };
    assert!(t.validate().is_err());

    let mut t = parse(header(json!([])));
    t.id = "  ".to_owned();
    assert!(t.validate().is_err());
}

#[test]
fn from_reader_reports_parse_errors() {
    let err = Template::from_reader("{not json".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("parse template JSON"));
}
