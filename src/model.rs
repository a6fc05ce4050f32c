//! Wire-format types for one assessment result payload.
//!
//! The payload is denormalized: `categories`/`contexts` carry the
//! content definitions, while `result.data` carries the test-taker's
//! scores in three slug-keyed namespaces. Definitions and scores are
//! only joined by the shaper.
//!
//! Description and recommendation fields hold raw rich-text markup.
//! Nothing here escapes or interprets it; that is the renderer's
//! trust boundary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResult {
    pub categories: Vec<CategoryDef>,
    pub contexts: Vec<ContextDef>,
    pub result: ResultRecord,
}

/// A top-level competency grouping and its skill definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub skills: Vec<SkillDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDef {
    pub id: u32,
    pub img: String,
    pub description: String,
    pub skill: SkillInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInfo {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub books: String,
    #[serde(default)]
    pub simulators: String,
    // Upstream payloads spell this field "excercises".
    #[serde(default, alias = "excercises")]
    pub exercises: String,
    #[serde(default)]
    pub more: String,
}

/// An application scenario where the skill set is exercised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextDef {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub description: String,
}

/// The test-taker's scoring record. `name` and `finished_at` are meta
/// for display headers; shaping never reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    #[serde(default)]
    pub finished_at: Option<String>,
    pub data: ScoreTable,
}

/// Three independent slug-keyed score namespaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTable {
    #[serde(rename = "category")]
    pub categories: HashMap<String, CategoryScore>,
    pub skills: HashMap<String, SkillScore>,
    pub contexts: HashMap<String, ContextScore>,
}

// Score values are percentages in [0, 100]. No clamping happens
// anywhere in this crate; out-of-range values pass through.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub color: String,
    pub value: f32,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillScore {
    pub color: String,
    pub value: f32,
    #[serde(default)]
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextScore {
    pub color: String,
    pub value: f32,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub series: Vec<SeriesEntry>,
    #[serde(default)]
    pub missing: Vec<GapRow>,
    #[serde(default)]
    pub warnings: Vec<Note>,
}

/// One colored alert line ("Ваш результат" blocks, context warnings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub color: String,
    pub text: String,
}

/// One labeled axis series for the context radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub name: String,
    pub data: Vec<f32>,
}

/// One row of a context's gap table: achieved vs required level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRow {
    pub title: String,
    pub value: f32,
    pub ideal_value: f32,
    pub color: String,
}
