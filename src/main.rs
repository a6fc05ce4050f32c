use clap::{Parser, Subcommand};
use skillreport::api::ShapedReport;
use skillreport::loader;
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/report.json")]
    input: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Show(cmd::show::ShowArgs),
    Export(cmd::export::ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    println!("\n📊 Loading report: {}", cli.input);
    let raw = match loader::load_file(&cli.input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("❌ Could not load report '{}': {}", cli.input, e);
            process::exit(1);
        }
    };

    // Shape everything up front; a slug mismatch fails the whole load
    // instead of rendering a partially-populated report.
    let report = match ShapedReport::from_raw(&raw) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("\n❌ FATAL: report data is inconsistent:");
            eprintln!("   {e}");
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Show(args) => cmd::show::run(args, &report),
        Commands::Export(args) => cmd::export::run(args, &report),
    }
}
