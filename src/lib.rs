//! Invitereel compiles slot-based video templates into renderable scene lists.
//!
//! A [`Template`] is a static, author-written sequence of scenes. Some fields are [`Slot`]s that
//! must be bound from a caller-supplied [`UserAssets`] pool. The crate does two things:
//!
//! 1. **Compile**: `Template + UserAssets -> Vec<RenderableItem>`. Every slot is replaced by a
//!    literal in one left-to-right pass, then each item is validated and defaulted by the scene
//!    schema registry ([`validate_item`]).
//! 2. **Compose**: `&[RenderableItem] -> Timeline`. Each positive-duration item gets a start
//!    frame from the running total; non-positive durations are dropped.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: no IO, no shared state; equal inputs give equal outputs.
//! - **One image cursor**: image and video slots consume `image_<n>` assets in ascending `n`,
//!   across all scene variants ([`AssetCursor`]).
//! - **Graceful shortfall**: missing assets become placeholders and are reported in
//!   [`CompileReport`]; only schema violations fail a compile.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compile;
mod foundation;
mod scene;
mod schema;
mod template;
mod timeline;

pub use assets::cursor::AssetCursor;
pub use assets::pool::{AssetPool, UserAssets, image_key_index};
pub use compile::compiler::{
    CompileOpts, Compilation, CompiledVideo, TemplateCompiler, compile, compile_with_report,
};
pub use compile::fingerprint::{Fingerprint, fingerprint};
pub use compile::report::{AssetKind, CompileReport, PlaceholderUse};
pub use compile::resolve::{
    DEFAULT_TEXT_PLACEHOLDER, MISSING_IMAGE_PLACEHOLDER, Placeholders, SAMPLE_VIDEO_PLACEHOLDER,
};
pub use foundation::color::HexColor;
pub use foundation::core::{Fps, FrameIndex, FrameRange, Resolution};
pub use foundation::error::{ReelError, ReelResult};
pub use scene::model::{
    FeatureGridLayout, FeatureGridScene, GridScene, ImageEffect, ImageScene, IntroScene,
    QuoteScene, RenderableItem, SceneKind, SchemaEnum, SplitLayout, SplitScene, SubtitleStyle,
    VideoScene,
};
pub use schema::error::{SchemaPathElem, ValidationError};
pub use schema::theme::{FontFamily, GlobalFilter, Overlay, Theme, validate_theme};
pub use schema::validate::validate_item;
pub use template::dsl::{
    TemplateBuilder, feature_grid, grid, image, image_slots, intro, quote, split, video,
};
pub use template::model::{
    ExtraFields, FeatureGridItemDef, GridItemDef, ImageItemDef, IntroItemDef, QuoteItemDef, Slot,
    SlotOr, SplitItemDef, Template, TemplateItem, VideoItemDef,
};
pub use timeline::compose::{Timeline, TimelineEntry, compose};
