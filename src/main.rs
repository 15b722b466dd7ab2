//! AuthSleuth — scans a directory of text logs for authentication events.
//!
//! Entry point: parses the command line, initialises structured logging,
//! runs the scan, and writes the report. Any error exits with status 1.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::Layer as _;

use authsleuth::core::event_store::EventStore;
use authsleuth::core::report::render_report;
use authsleuth::core::scanner::{FailurePolicy, LogScanner};
use authsleuth::export::{self, csv_export, json_export, text_report};
use authsleuth::util::constants;
use authsleuth::util::error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "authsleuth",
    version,
    about = "Scan a directory of log files for login and password-change events"
)]
struct Cli {
    /// Directory containing the log files to scan
    log_directory: PathBuf,

    /// Path of the text report to write
    report_file: PathBuf,

    /// Anything after the report path is accepted and ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Also export every recorded event as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Also export every recorded event as CSV to this path
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Skip unreadable log files instead of aborting the run
    #[arg(long)]
    keep_going: bool,

    /// Append debug-level diagnostics to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    init_logging(cli.log_file.as_deref());
    tracing::debug!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Run aborted: {e}");
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Scan, render, and write every requested output.
fn run(cli: &Cli) -> Result<()> {
    if !cli.extra.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", cli.extra);
    }

    // Fail fast on unusable output paths before reading any input.
    export::validate_export_path(&cli.report_file)?;
    for path in cli.json.iter().chain(cli.csv.iter()) {
        export::validate_export_path(path)?;
    }

    let policy = if cli.keep_going {
        FailurePolicy::SkipFile
    } else {
        FailurePolicy::Abort
    };
    let scanner = LogScanner::new(policy)?;

    let mut store = EventStore::new();
    let summary = scanner.scan_directory(&cli.log_directory, &mut store)?;
    tracing::info!(
        "{} events held for the report ({} files skipped)",
        store.total(),
        summary.files_skipped
    );

    let generated_at = chrono::Local::now();
    let snapshot = store.snapshot();

    let report = render_report(&snapshot, &generated_at);
    text_report::write_report(&report, &cli.report_file)?;
    println!("Report saved to {}", cli.report_file.display());

    if let Some(path) = &cli.json {
        json_export::export_json(&snapshot, &generated_at, path)?;
    }
    if let Some(path) = &cli.csv {
        csv_export::export_csv(&snapshot, path)?;
    }
    Ok(())
}

/// Rotate `log_file` aside if it exceeds the size limit.
fn rotate_log_file(log_file: &Path) {
    if let Ok(meta) = std::fs::metadata(log_file) {
        if meta.len() > constants::MAX_LOG_FILE_SIZE {
            let mut backup = log_file.as_os_str().to_owned();
            backup.push(".");
            backup.push(constants::ROTATED_LOG_SUFFIX);
            let _ = std::fs::rename(log_file, PathBuf::from(backup));
        }
    }
}

/// Initialise the dual-layer tracing subscriber.
///
/// - **stderr layer**: filtered by `RUST_LOG` env var (default: `info`).
/// - **file layer** (if `log_file` is `Some`): always writes at `debug` level
///   for post-mortem diagnostics.
fn init_logging(log_file: Option<&Path>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(log_path) = log_file {
        rotate_log_file(log_path);
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
        {
            Ok(file) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file))
                    .with_filter(tracing_subscriber::EnvFilter::new("debug"));

                tracing_subscriber::registry()
                    .with(stderr_layer.with_filter(env_filter))
                    .with(file_layer)
                    .init();
                return;
            }
            Err(e) => eprintln!("Warning: cannot open log file {}: {e}", log_path.display()),
        }
    }

    // Fallback: stderr only
    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}
