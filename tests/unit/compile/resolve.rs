use super::*;
use crate::assets::pool::UserAssets;
use crate::template::dsl::{feature_grid, grid, image, image_slots, intro, quote, split, video};
use serde_json::json;

fn resolve(item: impl Into<TemplateItem>, assets: &UserAssets, cursor: AssetCursor) -> ResolvedItem {
    let pool = AssetPool::new(assets);
    resolve_item(0, &item.into(), &pool, &Placeholders::default(), cursor).unwrap()
}

#[test]
fn literal_media_is_copied_and_does_not_move_cursor() {
    let assets = UserAssets::new().with_image(1, "one.jpg");
    let r = resolve(
        image(SlotOr::literal("fixed.jpg"), 60),
        &assets,
        AssetCursor::start(),
    );
    assert_eq!(r.candidate["src"], json!("fixed.jpg"));
    assert_eq!(r.cursor.position(), 0);
    assert_eq!(r.images_bound, 0);
    assert!(r.substitutions.is_empty());
}

#[test]
fn grid_cells_resolve_in_array_order() {
    let assets = UserAssets::new()
        .with_image(1, "one.jpg")
        .with_image(2, "two.jpg")
        .with_image(3, "three.jpg");
    let r = resolve(
        grid(
            vec![SlotOr::slot("a"), SlotOr::literal("fixed.jpg"), SlotOr::slot("b")],
            90,
        ),
        &assets,
        AssetCursor::start(),
    );
    assert_eq!(r.candidate["images"], json!(["one.jpg", "fixed.jpg", "two.jpg"]));
    assert_eq!(r.cursor.position(), 2);
}

#[test]
fn starts_from_incoming_cursor() {
    let assets = UserAssets::new()
        .with_image(1, "one.jpg")
        .with_image(2, "two.jpg");
    let pool = AssetPool::new(&assets);
    let (_, after_first) = AssetCursor::start().take(&pool);

    let r = resolve(split(SlotOr::slot("s"), SlotOr::literal("Venue"), 90), &assets, after_first);
    assert_eq!(r.candidate["image"], json!("two.jpg"));
    assert_eq!(r.cursor.position(), 2);
}

#[test]
fn exhausted_pool_uses_shape_specific_placeholders() {
    let assets = UserAssets::new();
    let r = resolve(video(SlotOr::slot("v"), 120), &assets, AssetCursor::start());
    assert_eq!(r.candidate["src"], json!(SAMPLE_VIDEO_PLACEHOLDER));
    assert_eq!(r.substitutions[0].kind, AssetKind::Video);

    let r = resolve(
        feature_grid(image_slots("f", 2), SlotOr::literal("Menu"), 90),
        &assets,
        AssetCursor::start(),
    );
    assert_eq!(
        r.candidate["images"],
        json!([MISSING_IMAGE_PLACEHOLDER, MISSING_IMAGE_PLACEHOLDER])
    );
    assert_eq!(r.substitutions[1].path, "images[1]");
    assert_eq!(r.cursor.position(), 0);
}

#[test]
fn text_slots_look_up_by_slot_id() {
    let assets = UserAssets::new().with_text("names", "Ana & Ben");
    let mut item = intro(SlotOr::slot("names"), 90);
    item.subtitle = Some(SlotOr::slot("tagline"));
    let r = resolve(item, &assets, AssetCursor::start());

    assert_eq!(r.candidate["title"], json!("Ana & Ben"));
    assert_eq!(r.candidate["subtitle"], json!(DEFAULT_TEXT_PLACEHOLDER));
    assert_eq!(r.substitutions.len(), 1);
    assert_eq!(r.substitutions[0].slot_id, "tagline");
    assert_eq!(r.substitutions[0].kind, AssetKind::Text);
}

#[test]
fn text_slots_never_touch_the_image_cursor() {
    let assets = UserAssets::new().with_image(1, "one.jpg");
    let r = resolve(quote(SlotOr::slot("q"), 30), &assets, AssetCursor::start());
    assert_eq!(r.cursor.position(), 0);
}

#[test]
fn intro_background_consumes_an_image() {
    let assets = UserAssets::new().with_image(1, "one.jpg");
    let mut item = intro(SlotOr::literal("Hello"), 90);
    item.background = Some(SlotOr::slot("bg"));
    let r = resolve(item, &assets, AssetCursor::start());
    assert_eq!(r.candidate["background"], json!("one.jpg"));
    assert_eq!(r.images_bound, 1);
}

#[test]
fn optional_literals_and_extras_pass_through() {
    let mut item = video(SlotOr::literal("v.mp4"), 120);
    item.muted = Some(true);
    item.subtitle_style = Some("boxed".to_owned());
    item.extra.insert("loop".to_owned(), json!(true));
    let r = resolve(item, &UserAssets::new(), AssetCursor::start());

    assert_eq!(r.candidate["type"], json!("video"));
    assert_eq!(r.candidate["muted"], json!(true));
    assert_eq!(r.candidate["subtitleStyle"], json!("boxed"));
    assert_eq!(r.candidate["loop"], json!(true));
    assert!(r.candidate.get("volume").is_none());
}

#[test]
fn non_finite_volume_is_rejected() {
    let assets = UserAssets::new();
    let pool = AssetPool::new(&assets);
    for volume in [f64::NAN, f64::INFINITY] {
        let mut item = video(SlotOr::literal("v.mp4"), 120);
        item.volume = Some(volume);
        let item: TemplateItem = item.into();
        let placeholders = Placeholders::default();
        let err = resolve_item(0, &item, &pool, &placeholders, AssetCursor::start())
            .err()
            .unwrap();
        assert_eq!(err.field(), Some("volume"));
        assert!(err.message.contains("finite"));
    }
}

#[test]
fn finite_volume_is_copied() {
    let mut item = video(SlotOr::literal("v.mp4"), 120);
    item.volume = Some(0.25);
    let r = resolve(item, &UserAssets::new(), AssetCursor::start());
    assert_eq!(r.candidate["volume"], json!(0.25));
}
