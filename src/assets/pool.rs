use crate::foundation::error::{ReelError, ReelResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const IMAGE_KEY_PREFIX: &str = "image_";

/// Caller-supplied media and text, fresh per compile.
///
/// `images` keys follow `image_<n>`; `n` only orders the pool. `texts` keys are slot ids.
/// Values are opaque references and are never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAssets {
    /// Media references keyed by `image_<n>`.
    #[serde(default)]
    pub images: BTreeMap<String, String>,
    /// Text snippets keyed by slot id.
    #[serde(default)]
    pub texts: BTreeMap<String, String>,
}

impl UserAssets {
    /// Empty asset pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `image_<n>`.
    pub fn with_image(mut self, n: u64, reference: impl Into<String>) -> Self {
        self.images
            .insert(format!("{IMAGE_KEY_PREFIX}{n}"), reference.into());
        self
    }

    /// Insert a text snippet for `slot_id`.
    pub fn with_text(mut self, slot_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(slot_id.into(), text.into());
        self
    }

    /// Parse assets from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r).map_err(|e| ReelError::serde(format!("parse assets JSON: {e}")))
    }

    /// Parse assets from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::serde(format!("open assets JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Image references in consumption order (ascending `n`).
    ///
    /// Keys not matching `image_<n>` are skipped. Keys with the same `n` (`image_1`,
    /// `image_01`) fall back to key order.
    pub fn ordered_images(&self) -> Vec<&str> {
        let mut keyed: Vec<(u64, &str, &str)> = Vec::with_capacity(self.images.len());
        for (key, reference) in &self.images {
            match image_key_index(key) {
                Some(n) => keyed.push((n, key.as_str(), reference.as_str())),
                None => tracing::debug!(key = %key, "ignoring image key not matching image_<n>"),
            }
        }
        keyed.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        keyed.into_iter().map(|(_, _, r)| r).collect()
    }
}

/// Parse the `<n>` suffix of an `image_<n>` key.
pub fn image_key_index(key: &str) -> Option<u64> {
    let digits = key.strip_prefix(IMAGE_KEY_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Read-only view of [`UserAssets`] prepared once per compile.
#[derive(Debug, Clone)]
pub struct AssetPool<'a> {
    images: Vec<&'a str>,
    texts: &'a BTreeMap<String, String>,
}

impl<'a> AssetPool<'a> {
    /// Order the image list and borrow the text map.
    pub fn new(assets: &'a UserAssets) -> Self {
        Self {
            images: assets.ordered_images(),
            texts: &assets.texts,
        }
    }

    /// Number of orderable images.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub(crate) fn image(&self, idx: usize) -> Option<&'a str> {
        self.images.get(idx).copied()
    }

    /// Text bound to `slot_id`, if any.
    pub fn text(&self, slot_id: &str) -> Option<&'a str> {
        self.texts.get(slot_id).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/pool.rs"]
mod tests;
