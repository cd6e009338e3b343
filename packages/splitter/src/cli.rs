//! Command-line interface for the splitter.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    SplitterConfig, CATEGORIES_FILENAME, DEFAULT_HADITH_BOOKS, DEFAULT_HADITH_OUTPUT_DIR,
    DEFAULT_HADITH_SOURCE_DIR,
};
use crate::document::load_document;
use crate::error::{Result, SplitterError};
use crate::hadith::process_hadith_books;
use crate::split::{count_in_range, split_categories_with_progress, FileOutcome};
use crate::summary::{build_category_summary, write_category_summary};

/// Work completed, or only a help/usage message was printed.
pub const EXIT_SUCCESS: i32 = 0;

/// Input or configuration problem prevented any work.
pub const EXIT_FATAL: i32 = 1;

/// Malformed arguments to a known command; nothing was written.
pub const EXIT_USAGE: i32 = 2;

/// The run finished but some output files could not be written.
pub const EXIT_PARTIAL: i32 = 3;

/// Quran data splitter - split azkar and hadith JSON into per-category files.
#[derive(Parser)]
#[command(name = "quran-splitter")]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Azkar input document (default: $AZKAR_INPUT_PATH or azkar-data/azkar.json)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output directory (default: $AZKAR_OUTPUT_DIR or azkar-data/)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Base URL for rewritten audio paths (default: $AZKAR_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write the azkar categories summary file.
    Categories,

    /// Write one file per category whose ID is in the inclusive range.
    Split {
        /// First category ID to write
        #[arg(allow_negative_numbers = true)]
        start_id: i64,

        /// Last category ID to write
        #[arg(allow_negative_numbers = true)]
        end_id: i64,
    },

    /// Split hadith books into per-chapter files.
    Hadith {
        /// Directory containing {book}.json files
        #[arg(long, default_value = DEFAULT_HADITH_SOURCE_DIR)]
        source_dir: PathBuf,

        /// Books to process (default: all known books)
        books: Vec<String>,
    },
}

/// Run the CLI with the process arguments.
pub fn run() -> Result<i32> {
    run_from(std::env::args_os())
}

/// Run the CLI with explicit arguments, returning the exit status.
pub fn run_from<I, T>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return report_usage(&e),
    };

    match cli.command {
        Commands::Categories => {
            let config = resolve_config(cli.input, cli.output, cli.base_url.as_deref())?;
            categories_command(&config)
        }
        Commands::Split { start_id, end_id } => {
            let config = resolve_config(cli.input, cli.output, cli.base_url.as_deref())?;
            split_command(&config, start_id, end_id)
        }
        Commands::Hadith { source_dir, books } => {
            let output = cli
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HADITH_OUTPUT_DIR));
            hadith_command(&source_dir, &output, &books)
        }
    }
}

/// Map an error escaping [`run`] to a process exit status.
#[must_use]
pub fn exit_code(error: &SplitterError) -> i32 {
    if error.is_fatal() {
        EXIT_FATAL
    } else {
        EXIT_PARTIAL
    }
}

/// Print a clap help or usage message and choose the exit status.
fn report_usage(error: &clap::Error) -> Result<i32> {
    error.print()?;
    Ok(match error.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::InvalidSubcommand => EXIT_SUCCESS,
        _ => EXIT_USAGE,
    })
}

/// Environment configuration with command-line overrides applied.
fn resolve_config(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    base_url: Option<&str>,
) -> Result<SplitterConfig> {
    let mut config = SplitterConfig::from_env()?;
    if let Some(input) = input {
        config = config.with_input_path(input);
    }
    if let Some(output) = output {
        config = config.with_output_dir(output);
    }
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url)?;
    }
    Ok(config)
}

/// Execute the categories command.
fn categories_command(config: &SplitterConfig) -> Result<i32> {
    let categories = load_document(&config.input_path)?;

    println!(
        "{} {} categories",
        style("Summarizing").bold(),
        style(categories.len()).cyan()
    );

    let entries = build_category_summary(&categories);
    match write_category_summary(&entries, &config.output_dir, CATEGORIES_FILENAME) {
        Ok(path) => {
            println!("{} {}", style("Saved to:").green().bold(), path.display());
            Ok(EXIT_SUCCESS)
        }
        Err(e) if !e.is_fatal() => {
            tracing::error!(error = %e, "categories summary not written");
            eprintln!("{} {e}", style("Error:").red().bold());
            Ok(EXIT_PARTIAL)
        }
        Err(e) => Err(e),
    }
}

/// Execute the split command.
fn split_command(config: &SplitterConfig, start_id: i64, end_id: i64) -> Result<i32> {
    let categories = load_document(&config.input_path)?;
    let selected = count_in_range(&categories, start_id, end_id);

    println!(
        "{} categories {} to {} ({} selected)",
        style("Splitting").bold(),
        style(start_id).cyan(),
        style(end_id).cyan(),
        selected
    );

    let pb = ProgressBar::new(selected as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:30.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let report = split_categories_with_progress(
        &categories,
        start_id,
        end_id,
        &config.output_dir,
        &config.base_url,
        |outcome| {
            match outcome {
                FileOutcome::Written { path, .. } => {
                    pb.set_message(path.display().to_string());
                }
                FileOutcome::Failed { error, .. } => {
                    pb.println(format!("  {} {error}", style("Failed:").red()));
                }
            }
            pb.inc(1);
        },
    );
    pb.finish_and_clear();

    println!(
        "  Created: {}  Audio URLs: {}",
        style(report.files_written()).green(),
        report.audio_rewritten
    );

    if report.has_failures() {
        let ids: Vec<String> = report.failed.iter().map(|(id, _)| id.to_string()).collect();
        println!(
            "  {} {} (re-run for IDs {})",
            style("Failed:").red().bold(),
            report.failed.len(),
            ids.join(", ")
        );
        return Ok(EXIT_PARTIAL);
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        config.output_dir.display()
    );
    Ok(EXIT_SUCCESS)
}

/// Execute the hadith command.
fn hadith_command(
    source_dir: &std::path::Path,
    output_dir: &std::path::Path,
    books: &[String],
) -> Result<i32> {
    let books: Vec<String> = if books.is_empty() {
        DEFAULT_HADITH_BOOKS.iter().map(|b| (*b).to_string()).collect()
    } else {
        books.to_vec()
    };

    println!(
        "{} {} hadith books from {}",
        style("Processing").bold(),
        style(books.len()).cyan(),
        source_dir.display()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Splitting hadith books...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let reports = match process_hadith_books(source_dir, output_dir, books.as_slice()) {
        Ok(reports) => reports,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    for report in &reports {
        print!(
            "  {}: {} chapter files",
            style(&report.book_id).cyan(),
            report.chapter_files
        );
        if report.skipped_hadiths > 0 {
            print!(
                ", {} skipped",
                style(report.skipped_hadiths).yellow().bold()
            );
        }
        println!(" -> {}", report.output_dir.display());
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_dir.display()
    );
    Ok(EXIT_SUCCESS)
}
