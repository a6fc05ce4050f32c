//! The result-shaping engine: pure joins of definitions against the
//! slug-keyed scoring table, ranked ascending by score.

pub mod categories;
pub mod contexts;
pub mod types;

pub use categories::shape_categories;
pub use contexts::shape_contexts;
pub use types::{CategoryView, ContextView, GaugeSeries, SkillView};
