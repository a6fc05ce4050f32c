// Terminal rendering of the shaped report views. Rich-text fields are
// printed as-is; this renderer trusts the report content.
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use skillreport::api::ShapedReport;
use skillreport::selection::RecommendationTab;
use skillreport::shaper::{CategoryView, ContextView};
use strum::IntoEnumIterator;

// Score cells share one traffic-light scale across all views.
fn score_cell(value: f32) -> Cell {
    let text = format!("{value:.0}%");
    if value >= 70.0 {
        Cell::new(text).fg(Color::Green)
    } else if value >= 40.0 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text).fg(Color::Red)
    }
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_overview(report: &ShapedReport) {
    println!("\nCommunication skills assessment: {}", report.taker_name);
    if let Some(finished) = &report.finished_at {
        println!("Completed: {finished}");
    }

    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Comment").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for cat in &report.categories {
        table.add_row(vec![
            Cell::new(&cat.name).add_attribute(Attribute::Bold),
            score_cell(cat.value),
            Cell::new(&cat.comment),
        ]);
    }
    println!("\nOverall skill scores");
    println!("{table}");
}

pub fn print_skill_breakdown(cat: &CategoryView) {
    println!("\nDetailed breakdown: {}", cat.name);
    println!("{}", cat.description);

    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Skill").add_attribute(Attribute::Bold),
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Your result").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for skill in &cat.skills_ranked {
        let notes = skill
            .notes
            .iter()
            .map(|n| n.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(&skill.name).add_attribute(Attribute::Bold),
            score_cell(skill.value),
            Cell::new(notes),
        ]);
    }
    println!("{table}");
}

pub fn print_contexts(report: &ShapedReport) {
    println!("\nWhere and how the skills can be applied");

    for ctx in &report.contexts {
        print_context(ctx);
    }
}

fn print_context(ctx: &ContextView) {
    println!("\n── {} ", ctx.name);
    println!("{}", ctx.description);

    let mut score = base_table();
    score.add_row(vec![
        Cell::new("Overall fit").add_attribute(Attribute::Bold),
        score_cell(ctx.value),
    ]);
    println!("{score}");

    // Radar data: one row per series, one column per axis label.
    if !ctx.series.is_empty() {
        let mut radar = base_table();
        let mut header = vec![Cell::new("Series").add_attribute(Attribute::Bold)];
        header.extend(ctx.labels.iter().map(Cell::new));
        radar.add_row(header);

        for entry in &ctx.series {
            let mut row = vec![Cell::new(&entry.name).add_attribute(Attribute::Bold)];
            row.extend(entry.data.iter().map(|v| Cell::new(format!("{v:.0}"))));
            radar.add_row(row);
        }
        println!("{radar}");
    }

    if !ctx.missing.is_empty() {
        println!("What is missing");
        let mut gaps = base_table();
        gaps.add_row(vec![
            Cell::new("Skill").add_attribute(Attribute::Bold),
            Cell::new("Your result").add_attribute(Attribute::Bold),
            Cell::new("Required level").add_attribute(Attribute::Bold),
        ]);
        for i in 1..=2 {
            if let Some(col) = gaps.column_mut(i) {
                col.set_cell_alignment(CellAlignment::Right);
            }
        }
        for gap in &ctx.missing {
            gaps.add_row(vec![
                Cell::new(&gap.title),
                score_cell(gap.value),
                Cell::new(format!("from {:.0}%", gap.ideal_value)),
            ]);
        }
        println!("{gaps}");
    }

    for warn in &ctx.warnings {
        println!("⚠️  {}", warn.text);
    }
}

pub fn print_recommendations(cat: &CategoryView) {
    println!(
        "\nResources and exercises selected for you: {}",
        cat.name
    );

    for skill in &cat.skills_ranked {
        println!("\n── {} ({:.0}%)", skill.name, skill.value);
        println!("{}", skill.description);

        for tab in RecommendationTab::iter() {
            let content = skill.content(tab);
            if content.is_empty() {
                continue;
            }
            println!("\n[{}]", tab.label());
            println!("{content}");
        }
    }
}

pub fn print_category_nav(report: &ShapedReport, active: usize) {
    let nav = report
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == active {
                format!("[{i}: {}]", c.name)
            } else {
                format!(" {i}: {} ", c.name)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    println!("\n{nav}");
}
