use crate::foundation::core::{Fps, Resolution};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::SceneKind;
use crate::schema::error::ValidationError;
use crate::schema::validate::check_authored_item;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Marker for a field whose literal value is bound from the asset pool at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Slot {
    /// Identifier used to look up text assets; informational for media slots.
    pub slot_id: String,
    /// Optional authoring hint shown in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A template field holding either a [`Slot`] or an authored literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotOr<T> {
    /// Unresolved placeholder.
    Slot(Slot),
    /// Value written by the template author.
    Literal(T),
}

impl<T> SlotOr<T> {
    /// Build a slot without a description.
    pub fn slot(slot_id: impl Into<String>) -> Self {
        Self::Slot(Slot {
            slot_id: slot_id.into(),
            description: None,
        })
    }

    /// Return `true` if the field still needs an asset.
    pub fn is_slot(&self) -> bool {
        matches!(self, Self::Slot(_))
    }
}

impl SlotOr<String> {
    /// Build a literal string field.
    pub fn literal(v: impl Into<String>) -> Self {
        Self::Literal(v.into())
    }
}

/// Static, author-defined description of an ordered scene sequence.
///
/// Templates are read-only inputs: compiling never mutates them. Deserializing checks every item
/// against the scene field tables, so authoring mistakes surface as a [`ValidationError`] with the
/// item index and field path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTemplate")]
pub struct Template {
    /// Stable template identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Target output resolution, passed through to the renderer.
    pub resolution: Resolution,
    /// Output frame rate, passed through to the renderer.
    pub fps: Fps,
    /// Raw theme object; validated and defaulted by the schema registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<serde_json::Value>,
    /// Ordered scene items.
    pub items: Vec<TemplateItem>,
}

impl Template {
    /// Parse a template from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let raw: RawTemplate = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse template JSON: {e}")))?;
        Ok(Self::try_from(raw)?)
    }

    /// Parse a template from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::serde(format!("open template JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate the template header (id, fps, resolution).
    ///
    /// Item contents are checked per item during compilation.
    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::template("template id must be non-empty"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::template("fps must have num>0 and den>0"));
        }
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(ReelError::template("resolution width/height must be > 0"));
        }
        Ok(())
    }

    /// Total number of slots across all items that consume an image or video asset.
    pub fn media_slot_count(&self) -> usize {
        self.items.iter().map(TemplateItem::media_slot_count).sum()
    }
}

/// Wire form of [`Template`] with items still untyped.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTemplate {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    resolution: Resolution,
    fps: Fps,
    #[serde(default)]
    theme: Option<serde_json::Value>,
    items: Vec<serde_json::Value>,
}

impl TryFrom<RawTemplate> for Template {
    type Error = ValidationError;

    fn try_from(raw: RawTemplate) -> Result<Self, Self::Error> {
        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(index, value)| TemplateItem::from_authored(value).map_err(|e| e.at_item(index)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            resolution: raw.resolution,
            fps: raw.fps,
            theme: raw.theme,
            items,
        })
    }
}

/// One authored scene; a closed set of seven variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TemplateItem {
    /// Single still image.
    Image(ImageItemDef),
    /// Cycling grid of images.
    Grid(GridItemDef),
    /// Quote or free text card.
    #[serde(alias = "text")]
    Quote(QuoteItemDef),
    /// Opening title card.
    Intro(IntroItemDef),
    /// Image beside a block of text.
    Split(SplitItemDef),
    /// Image grid beside a feature description.
    FeatureGrid(FeatureGridItemDef),
    /// Video clip.
    Video(VideoItemDef),
}

impl TemplateItem {
    /// Parse one authored item, checking its shape first.
    pub fn from_authored(value: serde_json::Value) -> Result<Self, ValidationError> {
        let kind = check_authored_item(&value)?;
        serde_json::from_value(value)
            .map_err(|e| ValidationError::root(format!("{kind} item does not match template: {e}")))
    }

    /// Scene kind tag of this item.
    pub fn kind(&self) -> SceneKind {
        match self {
            Self::Image(_) => SceneKind::Image,
            Self::Grid(_) => SceneKind::Grid,
            Self::Quote(_) => SceneKind::Quote,
            Self::Intro(_) => SceneKind::Intro,
            Self::Split(_) => SceneKind::Split,
            Self::FeatureGrid(_) => SceneKind::FeatureGrid,
            Self::Video(_) => SceneKind::Video,
        }
    }

    /// Number of slots in this item that consume an image or video asset.
    pub fn media_slot_count(&self) -> usize {
        fn slots<'a>(fields: impl IntoIterator<Item = &'a SlotOr<String>>) -> usize {
            fields.into_iter().filter(|f| f.is_slot()).count()
        }

        match self {
            Self::Image(d) => slots([&d.src]),
            Self::Grid(d) => slots(&d.images),
            Self::Quote(_) => 0,
            Self::Intro(d) => slots(d.background.as_ref()),
            Self::Split(d) => slots([&d.image]),
            Self::FeatureGrid(d) => slots(&d.images),
            Self::Video(d) => slots([&d.src]),
        }
    }
}

/// Fields present in the authored item but unknown to this model.
///
/// They are forwarded to the schema registry, which rejects them with a field path.
pub type ExtraFields = BTreeMap<String, serde_json::Value>;

/// Authored [`crate::ImageScene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItemDef {
    /// Image source; a slot draws the next pooled image.
    pub src: SlotOr<String>,
    /// Scene length in frames.
    pub duration: i64,
    /// Effect name, checked against the closed set at compile time. Defaults to `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    /// Caption text; a slot looks up `texts[slotId]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<SlotOr<String>>,
    /// Unrecognized keys, rejected by the registry after resolution.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Authored [`crate::GridScene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItemDef {
    /// Cells in order; each slot draws one pooled image.
    pub images: Vec<SlotOr<String>>,
    /// Scene length in frames.
    pub duration: i64,
    /// Frames per highlighted cell. Defaults to 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    /// Column count used for grid layout. Defaults to 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<i64>,
    /// Heading above the grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<SlotOr<String>>,
    /// Unrecognized keys, rejected by the registry after resolution.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Authored [`crate::QuoteScene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItemDef {
    /// Body text.
    pub text: SlotOr<String>,
    /// Attribution line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<SlotOr<String>>,
    /// Scene length in frames.
    pub duration: i64,
    /// Unrecognized keys, rejected by the registry after resolution.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Authored [`crate::IntroScene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroItemDef {
    /// Main title.
    pub title: SlotOr<String>,
    /// Line under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<SlotOr<String>>,
    /// Event date as display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<SlotOr<String>>,
    /// Background image; a slot draws the next pooled image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<SlotOr<String>>,
    /// Scene length in frames.
    pub duration: i64,
    /// Unrecognized keys, rejected by the registry after resolution.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Authored [`crate::SplitScene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitItemDef {
    /// Image half; a slot draws the next pooled image.
    pub image: SlotOr<String>,
    /// Heading of the text half.
    pub title: SlotOr<String>,
    /// Paragraph under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<SlotOr<String>>,
    /// `image-left` or `image-right` (default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Scene length in frames.
    pub duration: i64,
    /// Unrecognized keys, rejected by the registry after resolution.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Authored [`crate::FeatureGridScene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureGridItemDef {
    /// Cells in order; each slot draws one pooled image.
    pub images: Vec<SlotOr<String>>,
    /// Heading of the description.
    pub title: SlotOr<String>,
    /// Paragraph under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<SlotOr<String>>,
    /// `grid-left` (default) or `grid-right`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Scene length in frames.
    pub duration: i64,
    /// Unrecognized keys, rejected by the registry after resolution.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Authored [`crate::VideoScene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItemDef {
    /// Clip source; a slot draws the next pooled image entry.
    pub src: SlotOr<String>,
    /// Scene length in frames.
    pub duration: i64,
    /// Drop the clip's audio. Defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    /// Linear gain in `[0, 1]`. Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Source frame to start playback from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_from: Option<i64>,
    /// Subtitle text burned into the clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<SlotOr<String>>,
    /// Subtitle style name. Defaults to `simple`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_style: Option<String>,
    /// Unrecognized keys, rejected by the registry after resolution.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
