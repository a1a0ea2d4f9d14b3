//! codemap — writes an interactive HTML map of a directory tree.
//!
//! Thin binary entry point. All logic lives in the `codemap-core`
//! and `codemap-report` crates.
use anyhow::Context;
use clap::{Parser, ValueEnum};
use codemap_core::scanner::scan;
use codemap_report::export::{write_csv, write_json, write_report};
use codemap_report::{render_with, ReportOptions, ThemeMode, OUTPUT_FILE_NAME};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "codemap",
    version,
    about = "Scan a directory and write a searchable, self-contained HTML map of it"
)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Where to write the report
    #[arg(short, long, default_value = OUTPUT_FILE_NAME)]
    output: PathBuf,

    /// Do not open the report in the default viewer
    #[arg(long)]
    no_open: bool,

    /// Also write the per-extension breakdown as CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Also write the tree and statistics as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Number of extensions shown in the size chart
    #[arg(long, default_value_t = codemap_core::analysis::DEFAULT_TOP_EXTENSIONS)]
    top: usize,

    /// Colour theme of the report
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Theme {
    Dark,
    Light,
}

impl From<Theme> for ThemeMode {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => ThemeMode::Dark,
            Theme::Light => ThemeMode::Light,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Structured logging on stderr; stdout carries only the result lines.
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Resolve to an absolute path so `.` is named after the real directory.
    // A root that cannot be resolved is still scanned and yields an empty report.
    let root = args.path.canonicalize().unwrap_or_else(|err| {
        warn!("Could not resolve {}: {err}", args.path.display());
        args.path.clone()
    });

    let result = scan(&root);

    let options = ReportOptions {
        top_extensions: args.top,
        theme: args.theme.into(),
        ..Default::default()
    };
    let html = render_with(&result.root, &result.stats, &options)
        .context("failed to render report")?;

    write_report(&args.output, &html).context("failed to write report")?;
    if let Some(path) = &args.csv {
        write_csv(path, &result.stats).context("failed to write CSV export")?;
    }
    if let Some(path) = &args.json {
        write_json(path, &result.root, &result.stats).context("failed to write JSON export")?;
    }

    let output = std::path::absolute(&args.output).unwrap_or_else(|_| args.output.clone());
    println!("✅ Generated {}", output.display());
    println!(
        "📊 {} files, {} directories",
        result.stats.file_count, result.stats.dir_count
    );

    if !args.no_open {
        if let Err(err) = open::that_detached(&output) {
            warn!("Could not open {} in a viewer: {err}", output.display());
        }
    }

    Ok(())
}
