use super::*;
use crate::compile::report::AssetKind;
use crate::compile::resolve::MISSING_IMAGE_PLACEHOLDER;
use crate::template::dsl::{TemplateBuilder, grid, image, image_slots, quote, video};
use crate::template::model::SlotOr;
use serde_json::json;

#[test]
fn report_counts_images_and_placeholders() {
    let template = TemplateBuilder::new("t", "T")
        .item(image(SlotOr::slot("a"), 60))
        .item(grid(image_slots("g", 3), 90))
        .item(quote(SlotOr::slot("q"), 30))
        .build()
        .unwrap();
    let assets = UserAssets::new()
        .with_image(1, "1.jpg")
        .with_image(2, "2.jpg");

    let c = compile_with_report(&template, &assets).unwrap();
    assert_eq!(c.items.len(), 3);
    assert_eq!(c.report.images_available, 2);
    assert_eq!(c.report.images_consumed, 2);
    assert_eq!(c.report.media_placeholder_count(), 2);
    assert_eq!(c.report.text_placeholder_count(), 1);
    assert!(!c.report.is_complete());
    assert_eq!(c.report.images_unused(), 0);

    let media: Vec<(usize, &str)> = c
        .report
        .placeholders
        .iter()
        .filter(|p| p.kind != AssetKind::Text)
        .map(|p| (p.item, p.path.as_str()))
        .collect();
    assert_eq!(media, vec![(1, "images[1]"), (1, "images[2]")]);

    let RenderableItem::Grid(g) = &c.items[1] else {
        panic!("expected grid");
    };
    assert_eq!(
        g.images,
        vec!["2.jpg", MISSING_IMAGE_PLACEHOLDER, MISSING_IMAGE_PLACEHOLDER]
    );
}

#[test]
fn custom_placeholders_are_used() {
    let template = TemplateBuilder::new("t", "T")
        .item(video(SlotOr::slot("v"), 60))
        .item(quote(SlotOr::slot("q"), 30))
        .build()
        .unwrap();
    let compiler = TemplateCompiler::new(CompileOpts {
        placeholders: Placeholders {
            image: "img.png".to_owned(),
            video: "clip.mp4".to_owned(),
            text: "Your words here".to_owned(),
        },
    });
    let c = compiler.compile(&template, &UserAssets::new()).unwrap();

    let RenderableItem::Video(v) = &c.items[0] else {
        panic!("expected video");
    };
    assert_eq!(v.src, "clip.mp4");
    let RenderableItem::Quote(q) = &c.items[1] else {
        panic!("expected quote");
    };
    assert_eq!(q.text, "Your words here");
}

#[test]
fn validation_error_carries_item_index() {
    let mut bad = image(SlotOr::literal("a.jpg"), 60);
    bad.effect = Some("sparkle".to_owned());
    let template = TemplateBuilder::new("t", "T")
        .item(quote(SlotOr::literal("ok"), 30))
        .item(bad)
        .build()
        .unwrap();

    let err = compile(&template, &UserAssets::new()).unwrap_err();
    let v = err.as_validation().unwrap();
    assert_eq!(v.item, Some(1));
    assert_eq!(v.field(), Some("effect"));
    assert!(err.to_string().contains("$.items[1].effect"));
}

#[test]
fn compile_video_passes_header_through() {
    let template = TemplateBuilder::new("t", "T")
        .fps(Fps { num: 25, den: 1 })
        .resolution(1920, 1080)
        .theme(json!({"fontFamily": "serif"}))
        .item(quote(SlotOr::literal("ok"), 50))
        .build()
        .unwrap();
    let video = TemplateCompiler::default()
        .compile_video(&template, &UserAssets::new())
        .unwrap();

    assert_eq!(video.fps, template.fps);
    assert_eq!(video.resolution, template.resolution);
    assert_eq!(video.theme.primary_color, "#ff0000");
    assert_eq!(video.timeline().total_duration, 50);
}

#[test]
fn compile_video_rejects_bad_theme() {
    let template = TemplateBuilder::new("t", "T")
        .theme(json!({"overlay": "confetti"}))
        .build()
        .unwrap();
    let err = TemplateCompiler::default()
        .compile_video(&template, &UserAssets::new())
        .unwrap_err();
    assert_eq!(err.as_validation().unwrap().path_string(), "$.theme.overlay");
}

#[test]
fn empty_template_compiles_to_empty_list() {
    let template = TemplateBuilder::new("t", "T").build().unwrap();
    let c = compile_with_report(&template, &UserAssets::new().with_image(1, "a.jpg")).unwrap();
    assert!(c.items.is_empty());
    assert_eq!(c.report.images_unused(), 1);
}

#[test]
fn nan_volume_fails_with_item_index() {
    let mut clip = video(SlotOr::literal("v.mp4"), 60);
    clip.volume = Some(f64::NAN);
    let template = TemplateBuilder::new("t", "T")
        .item(quote(SlotOr::literal("ok"), 30))
        .item(clip)
        .build()
        .unwrap();

    let err = compile(&template, &UserAssets::new()).unwrap_err();
    let v = err.as_validation().unwrap();
    assert_eq!(v.item, Some(1));
    assert_eq!(v.path_string(), "$.items[1].volume");
}
