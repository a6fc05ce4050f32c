use crate::error::{ReportError, ScoreNamespace, SrResult};
use crate::model::{CategoryDef, RawResult, ScoreTable, SkillDef};
use crate::shaper::types::{CategoryView, SkillView};
use std::cmp::Ordering;
use tracing::debug;

/// Joins every category definition with its score entry, ranks skills
/// inside each category and then the categories themselves ascending
/// by value, weakest first.
///
/// Ties keep first-definition order (stable sort). Any slug without a
/// score entry fails the whole call; no partial output escapes.
pub fn shape_categories(raw: &RawResult) -> SrResult<Vec<CategoryView>> {
    let scores = &raw.result.data;

    let mut views = Vec::with_capacity(raw.categories.len());
    for cat in &raw.categories {
        views.push(shape_category(cat, scores)?);
    }
    views.sort_by(by_value_asc);

    debug!("Shaped {} categories", views.len());
    Ok(views)
}

fn shape_category(cat: &CategoryDef, scores: &ScoreTable) -> SrResult<CategoryView> {
    let entry = scores
        .categories
        .get(&cat.slug)
        .ok_or_else(|| ReportError::MissingScore {
            namespace: ScoreNamespace::Category,
            slug: cat.slug.clone(),
        })?;

    let mut skills = Vec::with_capacity(cat.skills.len());
    for skill in &cat.skills {
        skills.push(shape_skill(skill, scores)?);
    }
    skills.sort_by(|a, b| cmp_values(a.value, b.value));

    Ok(CategoryView {
        id: cat.id,
        slug: cat.slug.clone(),
        name: cat.name.clone(),
        icon: cat.icon.clone(),
        description: cat.description.clone(),
        color: entry.color.clone(),
        value: entry.value,
        comment: entry.comment.clone(),
        skills_ranked: skills,
    })
}

fn shape_skill(def: &SkillDef, scores: &ScoreTable) -> SrResult<SkillView> {
    let entry = scores
        .skills
        .get(&def.skill.slug)
        .ok_or_else(|| ReportError::MissingScore {
            namespace: ScoreNamespace::Skill,
            slug: def.skill.slug.clone(),
        })?;

    Ok(SkillView {
        id: def.id,
        slug: def.skill.slug.clone(),
        name: def.skill.name.clone(),
        img: def.img.clone(),
        description: def.description.clone(),
        color: entry.color.clone(),
        value: entry.value,
        notes: entry.notes.clone(),
        books: def.skill.books.clone(),
        simulators: def.skill.simulators.clone(),
        exercises: def.skill.exercises.clone(),
        more: def.skill.more.clone(),
    })
}

fn by_value_asc(a: &CategoryView, b: &CategoryView) -> Ordering {
    cmp_values(a.value, b.value)
}

// Incomparable pairs (NaN slipped through the wire) count as equal, so
// the stable sort leaves them in definition order.
pub(crate) fn cmp_values(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
