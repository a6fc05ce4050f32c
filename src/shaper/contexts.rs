use crate::error::{ReportError, ScoreNamespace, SrResult};
use crate::model::RawResult;
use crate::shaper::categories::cmp_values;
use crate::shaper::types::ContextView;
use tracing::debug;

/// Joins every context definition with its score entry and sorts the
/// result ascending by value, weakest scenario first. Same tie and
/// failure policy as [`shape_categories`](crate::shaper::shape_categories);
/// contexts have no child collection, so there is no nested rank.
pub fn shape_contexts(raw: &RawResult) -> SrResult<Vec<ContextView>> {
    let scores = &raw.result.data;

    let mut views = Vec::with_capacity(raw.contexts.len());
    for ctx in &raw.contexts {
        let entry = scores
            .contexts
            .get(&ctx.slug)
            .ok_or_else(|| ReportError::MissingScore {
                namespace: ScoreNamespace::Context,
                slug: ctx.slug.clone(),
            })?;

        views.push(ContextView {
            id: ctx.id,
            slug: ctx.slug.clone(),
            name: ctx.name.clone(),
            description: ctx.description.clone(),
            color: entry.color.clone(),
            value: entry.value,
            labels: entry.labels.clone(),
            series: entry.series.clone(),
            missing: entry.missing.clone(),
            warnings: entry.warnings.clone(),
        });
    }
    views.sort_by(|a, b| cmp_values(a.value, b.value));

    debug!("Shaped {} contexts", views.len());
    Ok(views)
}
