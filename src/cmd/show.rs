use crate::reports;
use clap::Args;
use skillreport::api::ShapedReport;
use skillreport::selection::{ReportView, SelectionState};
use std::process;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Which report view to render: categories, contexts or
    /// recommendations.
    #[arg(short, long, default_value = "contexts")]
    pub view: String,

    /// Category index for the detailed skill breakdown.
    #[arg(long, default_value_t = 0)]
    pub category: usize,

    /// Category index for the recommendations view.
    #[arg(long, default_value_t = 0)]
    pub rec: usize,
}

pub fn run(args: ShowArgs, report: &ShapedReport) {
    let view: ReportView = args.view.parse().unwrap_or_else(|_| {
        let valid = ReportView::iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("❌ Unknown view '{}'. Valid views: {valid}", args.view);
        process::exit(2);
    });

    let mut sel = SelectionState::default();
    sel.select_view(view);
    sel.select_category_detail(args.category);
    sel.select_recommendation(args.rec);

    // The overview block renders above every view, like the page does.
    reports::print_overview(report);

    match sel.active_view {
        ReportView::Contexts => reports::print_contexts(report),
        ReportView::Categories => match report.category_detail(&sel) {
            Some(cat) => {
                reports::print_category_nav(report, sel.category_detail_index);
                reports::print_skill_breakdown(cat);
            }
            None => println!("\nNo category at index {}.", sel.category_detail_index),
        },
        ReportView::Recommendations => match report.recommendation(&sel) {
            Some(cat) => {
                reports::print_category_nav(report, sel.recommendation_index);
                reports::print_recommendations(cat);
            }
            None => println!("\nNo category at index {}.", sel.recommendation_index),
        },
    }
}
