//! Report-session facade over the shaping engine.
//!
//! [`ShapedReport`] is an immutable snapshot of everything the display
//! layer consumes; it is only ever built whole, so a reader observes
//! either the previous report or the new one, never a half-shaped mix.

use crate::error::SrResult;
use crate::model::RawResult;
use crate::selection::SelectionState;
use crate::shaper::{shape_categories, shape_contexts, CategoryView, ContextView, GaugeSeries};
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// One fully-shaped report: both view sequences plus the meta fields
/// the page header shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapedReport {
    pub taker_name: String,
    pub finished_at: Option<String>,
    pub categories: Vec<CategoryView>,
    pub contexts: Vec<ContextView>,
}

impl ShapedReport {
    /// Runs both shapers and assembles the snapshot. Fails whole on
    /// the first missing score entry.
    pub fn from_raw(raw: &RawResult) -> SrResult<Self> {
        let categories = shape_categories(raw)?;
        let contexts = shape_contexts(raw)?;

        Ok(Self {
            taker_name: raw.result.name.clone(),
            finished_at: raw.result.finished_at.clone(),
            categories,
            contexts,
        })
    }

    /// The category whose skill breakdown the detail view shows.
    /// Out-of-range selection resolves to `None`, not an error.
    pub fn category_detail(&self, sel: &SelectionState) -> Option<&CategoryView> {
        self.categories.get(sel.category_detail_index)
    }

    /// The category whose recommendations are open.
    pub fn recommendation(&self, sel: &SelectionState) -> Option<&CategoryView> {
        self.categories.get(sel.recommendation_index)
    }

    /// Radial-indicator series for the overview block, one per
    /// category, in shaped (weakest-first) order.
    pub fn category_gauges(&self) -> Vec<GaugeSeries> {
        self.categories.iter().map(|c| c.gauge()).collect()
    }
}

/// Holder for the current report session. Swapping in a new snapshot
/// discards the previous one's derived views wholesale; there is no
/// incremental update path.
#[derive(Default)]
pub struct ReportState {
    report: RwLock<Option<Arc<ShapedReport>>>,
}

impl ReportState {
    /// Shapes `raw` and publishes the snapshot. On failure the
    /// previously published snapshot stays in place.
    pub fn load_report(&self, raw: &RawResult) -> SrResult<Arc<ShapedReport>> {
        let shaped = match ShapedReport::from_raw(raw) {
            Ok(s) => Arc::new(s),
            Err(e) => {
                warn!("Report load failed: {e}");
                return Err(e);
            }
        };

        info!(
            "Loaded report for '{}': {} categories, {} contexts",
            shaped.taker_name,
            shaped.categories.len(),
            shaped.contexts.len()
        );

        let mut guard = match self.report.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(Arc::clone(&shaped));
        Ok(shaped)
    }

    /// The currently published snapshot, if any report has loaded.
    pub fn snapshot(&self) -> Option<Arc<ShapedReport>> {
        let guard = match self.report.read() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clone()
    }
}
