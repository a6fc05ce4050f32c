use clap::Args;
use skillreport::api::ShapedReport;
use skillreport::error::SrResult;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Destination CSV file.
    #[arg(short, long, default_value = "scores.csv")]
    pub out: String,
}

pub fn run(args: ExportArgs, report: &ShapedReport) {
    match write_csv(&args.out, report) {
        Ok(rows) => println!("💾 Wrote {rows} score rows to {}", args.out),
        Err(e) => {
            eprintln!("❌ Export failed: {e}");
            process::exit(1);
        }
    }
}

/// One flat row per category, skill and context, in shaped order.
fn write_csv(path: &str, report: &ShapedReport) -> SrResult<usize> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["kind", "category", "slug", "name", "value", "color"])?;

    let mut rows = 0;
    for cat in &report.categories {
        let value = format!("{:.1}", cat.value);
        wtr.write_record([
            "category",
            "",
            cat.slug.as_str(),
            cat.name.as_str(),
            value.as_str(),
            cat.color.as_str(),
        ])?;
        rows += 1;

        for skill in &cat.skills_ranked {
            let value = format!("{:.1}", skill.value);
            wtr.write_record([
                "skill",
                cat.slug.as_str(),
                skill.slug.as_str(),
                skill.name.as_str(),
                value.as_str(),
                skill.color.as_str(),
            ])?;
            rows += 1;
        }
    }

    for ctx in &report.contexts {
        let value = format!("{:.1}", ctx.value);
        wtr.write_record([
            "context",
            "",
            ctx.slug.as_str(),
            ctx.name.as_str(),
            value.as_str(),
            ctx.color.as_str(),
        ])?;
        rows += 1;
    }

    wtr.flush()?;
    Ok(rows)
}
