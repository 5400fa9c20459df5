use serde::Serialize;

/// Kind of asset a slot consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Still image or grid cell, drawn from the ordered image list.
    Image,
    /// Video source, drawn from the same ordered image list.
    Video,
    /// Text looked up by slot id.
    Text,
}

/// A slot that fell back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderUse {
    /// Template item index.
    pub item: usize,
    /// Field path inside the item, e.g. `images[3]`.
    pub path: String,
    /// Slot identifier from the template.
    pub slot_id: String,
    /// What the slot wanted.
    pub kind: AssetKind,
}

/// Non-fatal diagnostics collected while compiling.
///
/// A non-empty placeholder list is the "add more photos" situation, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileReport {
    /// Orderable images in the asset pool.
    pub images_available: usize,
    /// Images bound to image or video slots.
    pub images_consumed: usize,
    /// Substitutions, in global consumption order.
    pub placeholders: Vec<PlaceholderUse>,
}

impl CompileReport {
    /// Number of slots that received a placeholder.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// Image/video slots that received a placeholder.
    pub fn media_placeholder_count(&self) -> usize {
        self.placeholders
            .iter()
            .filter(|p| p.kind != AssetKind::Text)
            .count()
    }

    /// Text slots that received a placeholder.
    pub fn text_placeholder_count(&self) -> usize {
        self.placeholders
            .iter()
            .filter(|p| p.kind == AssetKind::Text)
            .count()
    }

    /// `true` when every slot was satisfied from the asset pool.
    pub fn is_complete(&self) -> bool {
        self.placeholders.is_empty()
    }

    /// Images left over after the compile.
    pub fn images_unused(&self) -> usize {
        self.images_available.saturating_sub(self.images_consumed)
    }
}
