//! CLI entry point for the ticket analyzer.
//!
//! Loads a tickets JSON document, keeps the tickets of one route, and prints
//! the minimum flight time per carrier together with the gap between the
//! mean and median price.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use ticket_analyzer::analyzers::analyzer::analyze_file;
use ticket_analyzer::config::{AnalyzerConfig, DurationPolicy, Route};
use ticket_analyzer::output::{append_record, print_text, to_json};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "ticket_analyzer")]
#[command(about = "Minimum flight time per carrier and mean/median price gap for one route", long_about = None)]
struct Cli {
    /// Path to the tickets JSON document
    #[arg(value_name = "TICKETS_JSON")]
    tickets: PathBuf,

    /// Origin city name (overrides TICKET_ORIGIN and --route-config)
    #[arg(long)]
    origin: Option<String>,

    /// Destination city name (overrides TICKET_DESTINATION and --route-config)
    #[arg(long)]
    destination: Option<String>,

    /// JSON file with {"origin": ..., "destination": ...}
    #[arg(long, value_name = "FILE")]
    route_config: Option<PathBuf>,

    /// Fail when a ticket arrives before it departs
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Report format written to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// CSV file to append per-carrier results to
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage goes to stdout, no diagnostic trace.
            println!("{}", e.render());
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "Ticket analysis failed");
            eprintln!("Error: {message}");
            eprintln!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

/// Colored stderr layer plus a JSON daily rolling log file.
fn init_logging() -> WorkerGuard {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/ticket_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("ticket_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    file_guard
}

/// Directives from `var`, falling back to `default` when it is unset.
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}

fn run(cli: Cli) -> Result<()> {
    let mut route = Route::from_env();
    if let Some(path) = &cli.route_config {
        route = Route::load(path)
            .with_context(|| format!("loading route config {}", path.display()))?;
    }
    let route = route.with_overrides(cli.origin, cli.destination);

    let config = AnalyzerConfig {
        route,
        duration_policy: if cli.strict {
            DurationPolicy::RejectNegative
        } else {
            DurationPolicy::PassThrough
        },
    };
    info!(
        tickets = %cli.tickets.display(),
        origin = %config.route.origin,
        destination = %config.route.destination,
        strict = cli.strict,
        "Starting analysis"
    );

    let report = analyze_file(&cli.tickets, &config)
        .with_context(|| format!("analyzing {}", cli.tickets.display()))?;

    match cli.format {
        OutputFormat::Text => print_text(&report, io::stdout().lock())?,
        OutputFormat::Json => println!("{}", to_json(&report)?),
    }

    if let Some(path) = &cli.csv {
        append_record(path, &report)?;
        info!(path = %path.display(), "Results appended to CSV");
    }

    Ok(())
}
