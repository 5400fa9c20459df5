use super::*;
use serde_json::json;

fn assert_wire_names<T: SchemaEnum + Serialize>() {
    for v in T::ALL {
        assert_eq!(serde_json::to_value(v).unwrap(), json!(v.as_str()));
        assert_eq!(T::parse(v.as_str()).map(|p| p.as_str()), Some(v.as_str()));
    }
}

#[test]
fn enum_wire_names_match_serde() {
    assert_wire_names::<SceneKind>();
    assert_wire_names::<ImageEffect>();
    assert_wire_names::<SplitLayout>();
    assert_wire_names::<FeatureGridLayout>();
    assert_wire_names::<SubtitleStyle>();
}

#[test]
fn scene_kind_parses_text_alias() {
    assert_eq!(SceneKind::parse("text"), Some(SceneKind::Quote));
    assert_eq!(SceneKind::parse("carousel"), None);
    assert_eq!(SceneKind::ALL.len(), 7);
}

#[test]
fn duration_and_media_cover_every_variant() {
    let grid = RenderableItem::Grid(GridScene {
        images: vec!["a".to_owned(), "b".to_owned()],
        duration: 90,
        interval: 30,
        columns: 2,
        title: None,
    });
    assert_eq!(grid.duration(), 90);
    assert_eq!(grid.media(), vec!["a", "b"]);
    assert_eq!(grid.kind(), SceneKind::Grid);

    let quote = RenderableItem::Quote(QuoteScene {
        text: "hello".to_owned(),
        author: None,
        duration: -5,
    });
    assert_eq!(quote.duration(), -5);
    assert!(quote.media().is_empty());
}

#[test]
fn serializes_with_type_tag_and_camel_case() {
    let item = RenderableItem::Video(VideoScene {
        src: "v.mp4".to_owned(),
        duration: 120,
        muted: false,
        volume: 1.0,
        start_from: None,
        subtitle: None,
        subtitle_style: SubtitleStyle::Simple,
    });
    let v = serde_json::to_value(&item).unwrap();
    assert_eq!(v["type"], json!("video"));
    assert_eq!(v["subtitleStyle"], json!("simple"));
    assert!(v.get("startFrom").is_none());
}
