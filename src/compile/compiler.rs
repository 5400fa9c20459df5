use crate::assets::cursor::AssetCursor;
use crate::assets::pool::{AssetPool, UserAssets};
use crate::compile::report::{CompileReport, PlaceholderUse};
use crate::compile::resolve::{Placeholders, resolve_item};
use crate::foundation::core::{Fps, Resolution};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::RenderableItem;
use crate::schema::theme::{Theme, validate_theme};
use crate::schema::validate::validate_item;
use crate::template::model::Template;
use crate::timeline::compose::{Timeline, compose};
use serde::Serialize;

/// Compiler configuration.
#[derive(Clone, Debug, Default)]
pub struct CompileOpts {
    /// Fallback values for unsatisfied slots.
    pub placeholders: Placeholders,
}

/// Resolved items plus diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Compilation {
    /// One item per template item, same order, same variant.
    pub items: Vec<RenderableItem>,
    /// Placeholder substitutions and asset usage.
    pub report: CompileReport,
}

/// Everything a downstream renderer needs for one template + asset pool.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledVideo {
    /// Source template id.
    pub template_id: String,
    /// Passed through unchanged from the template.
    pub fps: Fps,
    /// Passed through unchanged from the template.
    pub resolution: Resolution,
    /// Validated, defaulted theme.
    pub theme: Theme,
    /// Resolved scene items.
    pub items: Vec<RenderableItem>,
    /// Placeholder substitutions and asset usage.
    pub report: CompileReport,
}

impl CompiledVideo {
    /// Frame offsets for the compiled items.
    pub fn timeline(&self) -> Timeline<'_> {
        compose(&self.items)
    }
}

/// Slot resolver and template compiler.
#[derive(Clone, Debug, Default)]
pub struct TemplateCompiler {
    opts: CompileOpts,
}

impl TemplateCompiler {
    /// Create a compiler with the given options.
    pub fn new(opts: CompileOpts) -> Self {
        Self { opts }
    }

    /// Resolve every slot in a single left-to-right pass and validate each item.
    ///
    /// The image cursor is folded through the items, so consumption order is global across
    /// variants. Asset shortfall degrades to placeholders; a schema failure aborts the whole
    /// compile with the offending item index.
    #[tracing::instrument(skip_all, fields(template = %template.id, items = template.items.len()))]
    pub fn compile(&self, template: &Template, assets: &UserAssets) -> ReelResult<Compilation> {
        let pool = AssetPool::new(assets);

        let init = (
            Vec::with_capacity(template.items.len()),
            AssetCursor::start(),
            Vec::<PlaceholderUse>::new(),
            0usize,
        );
        let (items, cursor, placeholders, images_consumed) = template
            .items
            .iter()
            .enumerate()
            .try_fold(init, |(mut items, cursor, mut uses, consumed), (index, item)| {
                let resolved = resolve_item(index, item, &pool, &self.opts.placeholders, cursor)
                    .map_err(|e| e.at_item(index))?;
                let rendered = validate_item(&resolved.candidate).map_err(|e| e.at_item(index))?;
                items.push(rendered);
                uses.extend(resolved.substitutions);
                Ok::<_, ReelError>((
                    items,
                    resolved.cursor,
                    uses,
                    consumed + resolved.images_bound,
                ))
            })?;

        for p in &placeholders {
            tracing::warn!(
                item = p.item,
                path = %p.path,
                slot_id = %p.slot_id,
                kind = ?p.kind,
                "slot not satisfied by asset pool; using placeholder"
            );
        }
        tracing::debug!(
            cursor = cursor.position(),
            images = pool.image_count(),
            "template compiled"
        );

        Ok(Compilation {
            items,
            report: CompileReport {
                images_available: pool.image_count(),
                images_consumed,
                placeholders,
            },
        })
    }

    /// Compile and bundle the pass-through header and validated theme.
    pub fn compile_video(
        &self,
        template: &Template,
        assets: &UserAssets,
    ) -> ReelResult<CompiledVideo> {
        template.validate()?;
        let theme = validate_theme(template.theme.as_ref())?;
        let Compilation { items, report } = self.compile(template, assets)?;
        Ok(CompiledVideo {
            template_id: template.id.clone(),
            fps: template.fps,
            resolution: template.resolution,
            theme,
            items,
            report,
        })
    }
}

/// Compile with default options, returning only the resolved items.
pub fn compile(template: &Template, assets: &UserAssets) -> ReelResult<Vec<RenderableItem>> {
    Ok(TemplateCompiler::default().compile(template, assets)?.items)
}

/// Compile with default options, keeping the diagnostic report.
pub fn compile_with_report(template: &Template, assets: &UserAssets) -> ReelResult<Compilation> {
    TemplateCompiler::default().compile(template, assets)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
