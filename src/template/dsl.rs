use crate::foundation::core::{Fps, Resolution};
use crate::foundation::error::ReelResult;
use crate::template::model::{
    ExtraFields, FeatureGridItemDef, GridItemDef, ImageItemDef, IntroItemDef, QuoteItemDef, SlotOr,
    SplitItemDef, Template, TemplateItem, VideoItemDef,
};

/// Builder for [`Template`].
///
/// Defaults to 30 fps at 1080x1920 (portrait) with no theme.
pub struct TemplateBuilder {
    id: String,
    name: String,
    description: String,
    fps: Fps,
    resolution: Resolution,
    theme: Option<serde_json::Value>,
    items: Vec<TemplateItem>,
}

impl TemplateBuilder {
    /// Create a builder for a new template.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            fps: Fps { num: 30, den: 1 },
            resolution: Resolution {
                width: 1080,
                height: 1920,
            },
            theme: None,
            items: Vec::new(),
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the output frame rate.
    pub fn fps(mut self, fps: Fps) -> Self {
        self.fps = fps;
        self
    }

    /// Set the output resolution.
    pub fn resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = Resolution { width, height };
        self
    }

    /// Set the raw theme object.
    pub fn theme(mut self, theme: serde_json::Value) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Append an item.
    pub fn item(mut self, item: impl Into<TemplateItem>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Build and validate the template header.
    pub fn build(self) -> ReelResult<Template> {
        let template = Template {
            id: self.id,
            name: self.name,
            description: self.description,
            resolution: self.resolution,
            fps: self.fps,
            theme: self.theme,
            items: self.items,
        };
        template.validate()?;
        Ok(template)
    }
}

/// Image item with no effect or caption.
pub fn image(src: SlotOr<String>, duration: i64) -> ImageItemDef {
    ImageItemDef {
        src,
        duration,
        effect: None,
        caption: None,
        extra: ExtraFields::new(),
    }
}

/// Grid item with default interval and columns.
pub fn grid(images: Vec<SlotOr<String>>, duration: i64) -> GridItemDef {
    GridItemDef {
        images,
        duration,
        interval: None,
        columns: None,
        title: None,
        extra: ExtraFields::new(),
    }
}

/// Quote item without an author.
pub fn quote(text: SlotOr<String>, duration: i64) -> QuoteItemDef {
    QuoteItemDef {
        text,
        author: None,
        duration,
        extra: ExtraFields::new(),
    }
}

/// Intro card with only a title.
pub fn intro(title: SlotOr<String>, duration: i64) -> IntroItemDef {
    IntroItemDef {
        title,
        subtitle: None,
        date: None,
        background: None,
        duration,
        extra: ExtraFields::new(),
    }
}

/// Split scene with the default layout.
pub fn split(image: SlotOr<String>, title: SlotOr<String>, duration: i64) -> SplitItemDef {
    SplitItemDef {
        image,
        title,
        body: None,
        layout: None,
        duration,
        extra: ExtraFields::new(),
    }
}

/// Feature grid with the default layout.
pub fn feature_grid(
    images: Vec<SlotOr<String>>,
    title: SlotOr<String>,
    duration: i64,
) -> FeatureGridItemDef {
    FeatureGridItemDef {
        images,
        title,
        description: None,
        layout: None,
        duration,
        extra: ExtraFields::new(),
    }
}

/// Video item with default audio and subtitle settings.
pub fn video(src: SlotOr<String>, duration: i64) -> VideoItemDef {
    VideoItemDef {
        src,
        duration,
        muted: None,
        volume: None,
        start_from: None,
        subtitle: None,
        subtitle_style: None,
        extra: ExtraFields::new(),
    }
}

impl From<ImageItemDef> for TemplateItem {
    fn from(d: ImageItemDef) -> Self {
        Self::Image(d)
    }
}

impl From<GridItemDef> for TemplateItem {
    fn from(d: GridItemDef) -> Self {
        Self::Grid(d)
    }
}

impl From<QuoteItemDef> for TemplateItem {
    fn from(d: QuoteItemDef) -> Self {
        Self::Quote(d)
    }
}

impl From<IntroItemDef> for TemplateItem {
    fn from(d: IntroItemDef) -> Self {
        Self::Intro(d)
    }
}

impl From<SplitItemDef> for TemplateItem {
    fn from(d: SplitItemDef) -> Self {
        Self::Split(d)
    }
}

impl From<FeatureGridItemDef> for TemplateItem {
    fn from(d: FeatureGridItemDef) -> Self {
        Self::FeatureGrid(d)
    }
}

impl From<VideoItemDef> for TemplateItem {
    fn from(d: VideoItemDef) -> Self {
        Self::Video(d)
    }
}

/// `n` image slots named `prefix_1..=prefix_n`.
pub fn image_slots(prefix: &str, n: usize) -> Vec<SlotOr<String>> {
    (1..=n)
        .map(|i| SlotOr::slot(format!("{prefix}_{i}")))
        .collect()
}
