use crate::assets::cursor::AssetCursor;
use crate::assets::pool::AssetPool;
use crate::compile::report::{AssetKind, PlaceholderUse};
use crate::schema::error::{SchemaPathElem, ValidationError};
use crate::template::model::{ExtraFields, SlotOr, TemplateItem};
use serde_json::{Map, Value};

/// Placeholder substituted for a slot the asset pool cannot satisfy.
pub const MISSING_IMAGE_PLACEHOLDER: &str = "/placeholders/missing-image.png";
/// Placeholder substituted for an unsatisfied video slot.
pub const SAMPLE_VIDEO_PLACEHOLDER: &str = "/placeholders/sample-video.mp4";
/// Placeholder substituted for a text slot with no entry in `texts`.
pub const DEFAULT_TEXT_PLACEHOLDER: &str = "enter your text";

/// Fallback values, one per consuming shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholders {
    /// Used for still images and grid cells.
    pub image: String,
    /// Used for video sources.
    pub video: String,
    /// Used for text slots.
    pub text: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            image: MISSING_IMAGE_PLACEHOLDER.to_owned(),
            video: SAMPLE_VIDEO_PLACEHOLDER.to_owned(),
            text: DEFAULT_TEXT_PLACEHOLDER.to_owned(),
        }
    }
}

/// Output of resolving one template item.
#[derive(Debug)]
pub(crate) struct ResolvedItem {
    /// Slot-free candidate object, ready for the schema registry.
    pub(crate) candidate: Value,
    /// Cursor to hand to the next item.
    pub(crate) cursor: AssetCursor,
    pub(crate) substitutions: Vec<PlaceholderUse>,
    pub(crate) images_bound: usize,
}

/// Replace every slot of `item` with a literal.
///
/// Image and video slots draw from `pool` starting at `cursor`, in field then array order.
/// Literal fields are copied unchanged and never move the cursor. Fails only for literals with no
/// JSON form, such as a non-finite volume.
pub(crate) fn resolve_item(
    index: usize,
    item: &TemplateItem,
    pool: &AssetPool<'_>,
    placeholders: &Placeholders,
    cursor: AssetCursor,
) -> Result<ResolvedItem, ValidationError> {
    let mut r = ItemResolver::new(index, item, pool, placeholders, cursor);

    match item {
        TemplateItem::Image(d) => {
            r.media("src", &d.src, AssetKind::Image);
            r.set("duration", d.duration);
            r.set_opt("effect", d.effect.as_deref());
            r.opt_text("caption", d.caption.as_ref());
            r.extra(&d.extra);
        }
        TemplateItem::Grid(d) => {
            r.media_list("images", &d.images);
            r.set("duration", d.duration);
            r.set_opt("interval", d.interval);
            r.set_opt("columns", d.columns);
            r.opt_text("title", d.title.as_ref());
            r.extra(&d.extra);
        }
        TemplateItem::Quote(d) => {
            r.text("text", &d.text);
            r.opt_text("author", d.author.as_ref());
            r.set("duration", d.duration);
            r.extra(&d.extra);
        }
        TemplateItem::Intro(d) => {
            r.text("title", &d.title);
            r.opt_text("subtitle", d.subtitle.as_ref());
            r.opt_text("date", d.date.as_ref());
            if let Some(bg) = &d.background {
                r.media("background", bg, AssetKind::Image);
            }
            r.set("duration", d.duration);
            r.extra(&d.extra);
        }
        TemplateItem::Split(d) => {
            r.media("image", &d.image, AssetKind::Image);
            r.text("title", &d.title);
            r.opt_text("body", d.body.as_ref());
            r.set_opt("layout", d.layout.as_deref());
            r.set("duration", d.duration);
            r.extra(&d.extra);
        }
        TemplateItem::FeatureGrid(d) => {
            r.media_list("images", &d.images);
            r.text("title", &d.title);
            r.opt_text("description", d.description.as_ref());
            r.set_opt("layout", d.layout.as_deref());
            r.set("duration", d.duration);
            r.extra(&d.extra);
        }
        TemplateItem::Video(d) => {
            r.media("src", &d.src, AssetKind::Video);
            r.set("duration", d.duration);
            r.set_opt("muted", d.muted);
            r.number("volume", d.volume)?;
            r.set_opt("startFrom", d.start_from);
            r.opt_text("subtitle", d.subtitle.as_ref());
            r.set_opt("subtitleStyle", d.subtitle_style.as_deref());
            r.extra(&d.extra);
        }
    }

    Ok(r.finish())
}

struct ItemResolver<'r, 'a> {
    index: usize,
    pool: &'r AssetPool<'a>,
    placeholders: &'r Placeholders,
    cursor: AssetCursor,
    out: Map<String, Value>,
    substitutions: Vec<PlaceholderUse>,
    images_bound: usize,
}

impl<'r, 'a> ItemResolver<'r, 'a> {
    fn new(
        index: usize,
        item: &TemplateItem,
        pool: &'r AssetPool<'a>,
        placeholders: &'r Placeholders,
        cursor: AssetCursor,
    ) -> Self {
        let mut out = Map::new();
        out.insert("type".to_owned(), Value::from(item.kind().to_string()));
        Self {
            index,
            pool,
            placeholders,
            cursor,
            out,
            substitutions: Vec::new(),
            images_bound: 0,
        }
    }

    fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.out.insert(name.to_owned(), value.into());
    }

    fn set_opt<V: Into<Value>>(&mut self, name: &str, value: Option<V>) {
        if let Some(v) = value {
            self.set(name, v);
        }
    }

    fn number(&mut self, name: &str, value: Option<f64>) -> Result<(), ValidationError> {
        let Some(v) = value else {
            return Ok(());
        };
        // serde_json maps NaN and infinities to null, which would read as absent.
        let n = serde_json::Number::from_f64(v).ok_or_else(|| {
            ValidationError::at(
                &[SchemaPathElem::Field(name.to_owned())],
                format!("must be a finite number, got {v}"),
            )
        })?;
        self.set(name, Value::Number(n));
        Ok(())
    }

    fn take_media(&mut self, path: String, field: &SlotOr<String>, kind: AssetKind) -> String {
        let slot = match field {
            SlotOr::Literal(v) => return v.clone(),
            SlotOr::Slot(slot) => slot,
        };

        let (taken, next) = self.cursor.take(self.pool);
        self.cursor = next;
        match taken {
            Some(reference) => {
                self.images_bound += 1;
                reference.to_owned()
            }
            None => {
                let fallback = match kind {
                    AssetKind::Video => &self.placeholders.video,
                    AssetKind::Image | AssetKind::Text => &self.placeholders.image,
                };
                self.substitutions.push(PlaceholderUse {
                    item: self.index,
                    path,
                    slot_id: slot.slot_id.clone(),
                    kind,
                });
                fallback.clone()
            }
        }
    }

    fn media(&mut self, name: &str, field: &SlotOr<String>, kind: AssetKind) {
        let v = self.take_media(name.to_owned(), field, kind);
        self.set(name, v);
    }

    fn media_list(&mut self, name: &str, fields: &[SlotOr<String>]) {
        let resolved: Vec<Value> = fields
            .iter()
            .enumerate()
            .map(|(i, f)| Value::from(self.take_media(format!("{name}[{i}]"), f, AssetKind::Image)))
            .collect();
        self.set(name, Value::Array(resolved));
    }

    fn text(&mut self, name: &str, field: &SlotOr<String>) {
        let v = match field {
            SlotOr::Literal(v) => v.clone(),
            SlotOr::Slot(slot) => match self.pool.text(&slot.slot_id) {
                Some(t) => t.to_owned(),
                None => {
                    self.substitutions.push(PlaceholderUse {
                        item: self.index,
                        path: name.to_owned(),
                        slot_id: slot.slot_id.clone(),
                        kind: AssetKind::Text,
                    });
                    self.placeholders.text.clone()
                }
            },
        };
        self.set(name, v);
    }

    fn opt_text(&mut self, name: &str, field: Option<&SlotOr<String>>) {
        if let Some(f) = field {
            self.text(name, f);
        }
    }

    fn extra(&mut self, extra: &ExtraFields) {
        for (k, v) in extra {
            self.out.insert(k.clone(), v.clone());
        }
    }

    fn finish(self) -> ResolvedItem {
        ResolvedItem {
            candidate: Value::Object(self.out),
            cursor: self.cursor,
            substitutions: self.substitutions,
            images_bound: self.images_bound,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/resolve.rs"]
mod tests;
