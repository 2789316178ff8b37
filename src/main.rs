//! CLI entry point for bmtc-gtfs.
//!
//! Converts a BMTC bus-schedule Excel workbook into `routes_info.csv` and
//! `schedules_info.csv` in the given output folder.

use bmtc_gtfs::{ExtractError, ExtractorBuilder, FeedTables, SheetSelector};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bmtc-gtfs")]
#[command(about = "Convert BMTC Bus Schedule Excel file to GTFS route and schedule tables", long_about = None)]
struct Cli {
    /// Path to the BMTC Bus Schedule Excel file
    #[arg(value_name = "FILE_PATH")]
    file_path: PathBuf,

    /// Path to the output folder for the CSV files
    #[arg(value_name = "OUTPUT_FOLDER")]
    output_folder: PathBuf,

    /// Select sheet by index (0-based) instead of the first sheet
    #[arg(long, conflicts_with = "sheet_name")]
    sheet_index: Option<usize>,

    /// Select sheet by name instead of the first sheet
    #[arg(long)]
    sheet_name: Option<String>,

    /// Text in column A that starts each timetable block
    #[arg(long)]
    marker: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(tables) => {
            info!(
                routes = tables.routes.len(),
                schedules = tables.schedules.len(),
                "conversion completed: {} -> {}",
                cli.file_path.display(),
                cli.output_folder.display()
            );
        }
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<FeedTables, ExtractError> {
    let sheet_selector = match (&cli.sheet_index, &cli.sheet_name) {
        (Some(index), _) => SheetSelector::Index(*index),
        (None, Some(name)) => SheetSelector::Name(name.clone()),
        (None, None) => SheetSelector::First,
    };

    let mut builder = ExtractorBuilder::new().with_sheet_selector(sheet_selector);
    if let Some(marker) = &cli.marker {
        builder = builder.with_start_marker(marker.as_str());
    }
    let extractor = builder.build()?;

    extractor.convert_file(&cli.file_path, &cli.output_folder)
}

fn handle_error(error: ExtractError) {
    match error {
        ExtractError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to read it.");
        }
        ExtractError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid Excel file or may be corrupted.");
        }
        ExtractError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check your sheet selection and marker text.");
        }
        ExtractError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
            eprintln!("The file violates security constraints (e.g., file size limit).");
        }
        ExtractError::OutputWrite { path, source } => {
            eprintln!("Output Error: could not write {}: {}", path.display(), source);
            eprintln!("Please check that the output folder exists and is writable.");
        }
    }
}
