use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of string values accepted by an enum-constrained schema field.
pub trait SchemaEnum: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Wire name of this variant.
    fn as_str(self) -> &'static str;

    /// Look up a variant by its wire name.
    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    /// Wire names of every variant.
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }
}

/// The seven scene variants a template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    /// `image`
    Image,
    /// `grid`
    Grid,
    /// `quote` (alias `text`)
    Quote,
    /// `intro`
    Intro,
    /// `split`
    Split,
    /// `feature-grid`
    FeatureGrid,
    /// `video`
    Video,
}

impl SchemaEnum for SceneKind {
    const ALL: &'static [Self] = &[
        Self::Image,
        Self::Grid,
        Self::Quote,
        Self::Intro,
        Self::Split,
        Self::FeatureGrid,
        Self::Video,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Grid => "grid",
            Self::Quote => "quote",
            Self::Intro => "intro",
            Self::Split => "split",
            Self::FeatureGrid => "feature-grid",
            Self::Video => "video",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Quote),
            _ => Self::ALL.iter().copied().find(|v| v.as_str() == s),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ken-burns style motion applied to a still image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageEffect {
    /// Static image.
    #[default]
    None,
    /// Slow push towards the center.
    ZoomIn,
    /// Slow pull away from the center.
    ZoomOut,
    /// Horizontal drift to the left.
    PanLeft,
    /// Horizontal drift to the right.
    PanRight,
    /// Combined zoom and pan.
    KenBurns,
}

impl SchemaEnum for ImageEffect {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::PanLeft,
        Self::PanRight,
        Self::KenBurns,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::PanLeft => "pan-left",
            Self::PanRight => "pan-right",
            Self::KenBurns => "ken-burns",
        }
    }
}

/// Which side of a split scene holds the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitLayout {
    /// Image on the left, text on the right.
    ImageLeft,
    /// Text on the left, image on the right.
    #[default]
    ImageRight,
}

impl SchemaEnum for SplitLayout {
    const ALL: &'static [Self] = &[Self::ImageLeft, Self::ImageRight];

    fn as_str(self) -> &'static str {
        match self {
            Self::ImageLeft => "image-left",
            Self::ImageRight => "image-right",
        }
    }
}

/// Which side of a feature-grid scene holds the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureGridLayout {
    /// Grid on the left, description on the right.
    #[default]
    GridLeft,
    /// Description on the left, grid on the right.
    GridRight,
}

impl SchemaEnum for FeatureGridLayout {
    const ALL: &'static [Self] = &[Self::GridLeft, Self::GridRight];

    fn as_str(self) -> &'static str {
        match self {
            Self::GridLeft => "grid-left",
            Self::GridRight => "grid-right",
        }
    }
}

/// Presentation of burned-in video subtitles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubtitleStyle {
    /// Plain text with a drop shadow.
    #[default]
    Simple,
    /// Text on a translucent box.
    Boxed,
    /// Words highlighted as they are spoken.
    Karaoke,
    /// Letterboxed serif lines.
    Cinematic,
}

impl SchemaEnum for SubtitleStyle {
    const ALL: &'static [Self] = &[Self::Simple, Self::Boxed, Self::Karaoke, Self::Cinematic];

    fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Boxed => "boxed",
            Self::Karaoke => "karaoke",
            Self::Cinematic => "cinematic",
        }
    }
}

/// A fully resolved, defaulted, validated scene; the compiler's unit of output.
///
/// Only produced by [`crate::validate_item`]. Serializing one and validating the result again
/// yields an equal item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RenderableItem {
    /// Single still image.
    Image(ImageScene),
    /// Cycling grid of images.
    Grid(GridScene),
    /// Quote or free text card.
    #[serde(alias = "text")]
    Quote(QuoteScene),
    /// Opening title card.
    Intro(IntroScene),
    /// Image beside a block of text.
    Split(SplitScene),
    /// Image grid beside a feature description.
    FeatureGrid(FeatureGridScene),
    /// Video clip.
    Video(VideoScene),
}

impl RenderableItem {
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

    /// Duration in frames; may be zero or negative, in which case the timeline skips it.
    pub fn duration(&self) -> i64 {
        match self {
            Self::Image(s) => s.duration,
            Self::Grid(s) => s.duration,
            Self::Quote(s) => s.duration,
            Self::Intro(s) => s.duration,
            Self::Split(s) => s.duration,
            Self::FeatureGrid(s) => s.duration,
            Self::Video(s) => s.duration,
        }
    }

    /// Media references bound into this item, in field order.
    pub fn media(&self) -> Vec<&str> {
        match self {
            Self::Image(s) => vec![s.src.as_str()],
            Self::Grid(s) => s.images.iter().map(String::as_str).collect(),
            Self::Quote(_) => Vec::new(),
            Self::Intro(s) => s.background.iter().map(String::as_str).collect(),
            Self::Split(s) => vec![s.image.as_str()],
            Self::FeatureGrid(s) => s.images.iter().map(String::as_str).collect(),
            Self::Video(s) => vec![s.src.as_str()],
        }
    }
}

/// Still image scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageScene {
    /// Media reference of the image.
    pub src: String,
    /// Scene length in frames.
    pub duration: i64,
    /// Camera motion over the image.
    pub effect: ImageEffect,
    /// Text drawn under the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Grid that highlights its images one after another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridScene {
    /// Media references, in cell order.
    pub images: Vec<String>,
    /// Scene length in frames.
    pub duration: i64,
    /// Frames each image stays highlighted before the grid advances.
    pub interval: i64,
    /// Column count used for grid layout.
    pub columns: i64,
    /// Heading above the grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Quote or free text card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteScene {
    /// Body text.
    pub text: String,
    /// Attribution line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Scene length in frames.
    pub duration: i64,
}

/// Opening title card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroScene {
    /// Main title, usually the hosts' names.
    pub title: String,
    /// Line under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Event date as display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Media reference drawn behind the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Scene length in frames.
    pub duration: i64,
}

/// Image beside a block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitScene {
    /// Media reference of the image half.
    pub image: String,
    /// Heading of the text half.
    pub title: String,
    /// Paragraph under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Side the image sits on.
    pub layout: SplitLayout,
    /// Scene length in frames.
    pub duration: i64,
}

/// Image grid beside a feature description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureGridScene {
    /// Media references, in cell order.
    pub images: Vec<String>,
    /// Heading of the description.
    pub title: String,
    /// Paragraph under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Side the grid sits on.
    pub layout: FeatureGridLayout,
    /// Scene length in frames.
    pub duration: i64,
}

/// Video clip scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoScene {
    /// Media reference of the clip.
    pub src: String,
    /// Scene length in frames.
    pub duration: i64,
    /// Drop the clip's audio track.
    pub muted: bool,
    /// Linear gain in `[0, 1]`.
    pub volume: f64,
    /// Source frame to start playback from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_from: Option<i64>,
    /// Subtitle text burned into the clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// How the subtitle is drawn.
    pub subtitle_style: SubtitleStyle,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
