use anyhow::Result;
use clap::Parser;
use doc_lint::config::{Args, LinterConfig, OutputFormat};
use doc_lint::{reporter, suite};
use std::process;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = match &args.root_dir {
        Some(dir) => LinterConfig::from_root(dir),
        None => match LinterConfig::discover() {
            Some(c) => c,
            None => {
                eprintln!("Error: Could not find repository root. Run from within a git repository or use --root-dir.");
                process::exit(2);
            }
        },
    };
    log::debug!("repository root: {}", config.root_dir.display());

    let groups = doc_lint::planned_groups(&args.selected_targets());
    let text = args.format == OutputFormat::Text;
    if text {
        reporter::print_header();
    }

    // Run groups and print results as they complete (streaming)
    let debug_timing = std::env::var("DOC_LINT_TIMING").is_ok();
    let mut reports = Vec::new();
    for group in groups {
        let start = std::time::Instant::now();
        let report = suite::run_group(group, &config);
        if debug_timing {
            eprintln!("  [{:>6.0?}] {}", start.elapsed(), report.title);
        }
        if text {
            reporter::print_group(&report);
        }
        reports.push(report);
    }

    let all_passed = match args.format {
        OutputFormat::Text => reporter::print_summary(&reports),
        OutputFormat::Json => {
            println!("{}", reporter::render_json(&reports)?);
            suite::all_passed(&reports)
        }
    };

    process::exit(if all_passed { 0 } else { 1 });
}
