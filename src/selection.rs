//! Navigation state for one open report session.
//!
//! The state machine is deliberately dumb: transitions assign fields
//! and never validate indices. Resolving an index against the shaped
//! lists happens in [`ShapedReport`](crate::api::ShapedReport), where
//! an out-of-range index reads as "nothing selected" instead of an
//! error, so a transient data mismatch never takes the page down.

use strum_macros::{Display, EnumIter, EnumString};

/// Which of the three report views is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ReportView {
    Categories,
    Contexts,
    Recommendations,
}

/// The four content blocks of one skill's recommendation card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RecommendationTab {
    Books,
    Simulators,
    Exercises,
    More,
}

impl RecommendationTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Books => "Books",
            Self::Simulators => "Try it in the simulator",
            Self::Exercises => "Self-development exercises",
            Self::More => "More about the skill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub active_view: ReportView,
    pub category_detail_index: usize,
    pub recommendation_index: usize,
}

impl Default for SelectionState {
    // A fresh report opens on the contexts view.
    fn default() -> Self {
        Self {
            active_view: ReportView::Contexts,
            category_detail_index: 0,
            recommendation_index: 0,
        }
    }
}

impl SelectionState {
    pub fn select_view(&mut self, view: ReportView) {
        self.active_view = view;
    }

    pub fn select_category_detail(&mut self, index: usize) {
        self.category_detail_index = index;
    }

    pub fn select_recommendation(&mut self, index: usize) {
        self.recommendation_index = index;
    }
}
