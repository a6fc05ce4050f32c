use crate::model::{GapRow, Note, SeriesEntry};
use crate::selection::RecommendationTab;
use serde::Serialize;

/// One point for the radial score indicator of a category or skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeSeries {
    pub value: f32,
    pub color: String,
}

/// A skill definition merged with its score entry.
///
/// `description` and the recommendation blocks are raw rich-text
/// markup passed through unmodified; sanitizing them before rendering
/// is the display layer's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub img: String,
    pub description: String,

    pub color: String,
    pub value: f32,
    pub notes: Vec<Note>,

    pub books: String,
    pub simulators: String,
    pub exercises: String,
    pub more: String,
}

impl SkillView {
    pub fn gauge(&self) -> GaugeSeries {
        GaugeSeries {
            value: self.value,
            color: self.color.clone(),
        }
    }

    /// The rich-text block behind one recommendation tab.
    pub fn content(&self, tab: RecommendationTab) -> &str {
        match tab {
            RecommendationTab::Books => &self.books,
            RecommendationTab::Simulators => &self.simulators,
            RecommendationTab::Exercises => &self.exercises,
            RecommendationTab::More => &self.more,
        }
    }
}

/// A category definition merged with its score entry, skills ranked
/// weakest-first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub icon: String,
    pub description: String,

    pub color: String,
    pub value: f32,
    pub comment: String,

    pub skills_ranked: Vec<SkillView>,
}

impl CategoryView {
    pub fn gauge(&self) -> GaugeSeries {
        GaugeSeries {
            value: self.value,
            color: self.color.clone(),
        }
    }
}

/// A context definition merged with its score entry. The internal
/// ordering of `labels`/`series`/`missing`/`warnings` is the wire
/// ordering, untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextView {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub description: String,

    pub color: String,
    pub value: f32,
    pub labels: Vec<String>,
    pub series: Vec<SeriesEntry>,
    pub missing: Vec<GapRow>,
    pub warnings: Vec<Note>,
}

impl ContextView {
    pub fn gauge(&self) -> GaugeSeries {
        GaugeSeries {
            value: self.value,
            color: self.color.clone(),
        }
    }
}
