use crate::scene::model::SchemaEnum;
use crate::schema::error::{SchemaPathElem, ValidationError};
use crate::schema::fields::THEME_FIELDS;
use crate::schema::validate::{check_object, fill_defaults};
use serde::{Deserialize, Serialize};

/// Font family applied to every text layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// Clean sans-serif face.
    #[default]
    SansSerif,
    /// Classic serif face.
    Serif,
    /// Fixed-width face.
    Monospace,
    /// Connected script face.
    Cursive,
    /// Informal hand-lettered face.
    Handwriting,
}

impl SchemaEnum for FontFamily {
    const ALL: &'static [Self] = &[
        Self::SansSerif,
        Self::Serif,
        Self::Monospace,
        Self::Cursive,
        Self::Handwriting,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Serif => "serif",
            Self::Monospace => "monospace",
            Self::Cursive => "cursive",
            Self::Handwriting => "handwriting",
        }
    }
}

/// Color grade applied to the whole output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlobalFilter {
    /// No color grade.
    #[default]
    None,
    /// Desaturated to gray.
    Grayscale,
    /// Brown monochrome tint.
    Sepia,
    /// Shifted towards orange.
    Warm,
    /// Shifted towards blue.
    Cool,
    /// Faded contrast with a yellow cast.
    Vintage,
}

impl SchemaEnum for GlobalFilter {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Grayscale,
        Self::Sepia,
        Self::Warm,
        Self::Cool,
        Self::Vintage,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Vintage => "vintage",
        }
    }
}

/// Texture composited over every scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overlay {
    /// No overlay.
    #[default]
    None,
    /// Animated film grain noise.
    FilmGrain,
    /// Darkened frame edges.
    Vignette,
    /// Drifting warm light flares.
    LightLeak,
    /// Scattered dust and scratches.
    Dust,
}

impl SchemaEnum for Overlay {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::FilmGrain,
        Self::Vignette,
        Self::LightLeak,
        Self::Dust,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FilmGrain => "film-grain",
            Self::Vignette => "vignette",
            Self::LightLeak => "light-leak",
            Self::Dust => "dust",
        }
    }
}

/// Validated, fully defaulted theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Fill behind every scene, `#RRGGBB` or `#RRGGBBAA`.
    pub background_color: String,
    /// Default text color.
    pub text_color: String,
    /// Accent color for titles and highlights.
    pub primary_color: String,
    /// Face used for every text layer.
    pub font_family: FontFamily,
    /// Color grade over the whole output.
    pub global_filter: GlobalFilter,
    /// Texture composited over every scene.
    pub overlay: Overlay,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_color: "#000000".to_owned(),
            text_color: "#ffffff".to_owned(),
            primary_color: "#ff0000".to_owned(),
            font_family: FontFamily::default(),
            global_filter: GlobalFilter::default(),
            overlay: Overlay::default(),
        }
    }
}

/// Validate a raw theme object and fill absent fields. `None` yields the default theme.
pub fn validate_theme(candidate: Option<&serde_json::Value>) -> Result<Theme, ValidationError> {
    let base = [SchemaPathElem::Field("theme".to_owned())];
    let Some(candidate) = candidate.filter(|v| !v.is_null()) else {
        return Ok(Theme::default());
    };
    let obj = candidate
        .as_object()
        .ok_or_else(|| ValidationError::at(&base, "theme must be a JSON object"))?;

    check_object(obj, THEME_FIELDS, &base)?;
    let filled = fill_defaults(obj, THEME_FIELDS);
    serde_json::from_value(serde_json::Value::Object(filled))
        .map_err(|e| ValidationError::at(&base, format!("theme does not match schema: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/schema/theme.rs"]
mod tests;
