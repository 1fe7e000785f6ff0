// src/main.rs
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use patent_report::config::{self, FailurePolicy, ReportConfig};
use patent_report::{utils, EXIT_FAILURE};

/// Command Line Interface for the patent search report generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the saved search result pages
    #[arg(short, long, default_value = config::DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Path of the generated HTML report
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// File name suffix of the pages to process
    #[arg(long, default_value = config::DEFAULT_EXTENSION)]
    extension: String,

    /// Abort on the first unreadable page instead of skipping it
    #[arg(long)]
    fail_fast: bool,

    /// Number of pages processed concurrently
    #[arg(short, long, default_value = "1")]
    jobs: usize,

    /// Also write the extracted data as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Debug mode - save annotated copies of each page with field matches highlighted
    #[arg(short, long)]
    debug: bool,
}

impl From<Args> for ReportConfig {
    fn from(args: Args) -> Self {
        ReportConfig {
            input_dir: args.input_dir,
            output_path: args.output,
            extension: args.extension,
            failure_policy: if args.fail_fast { FailurePolicy::Abort } else { FailurePolicy::SkipAndRecord },
            jobs: args.jobs,
            json_path: args.json,
            debug: args.debug,
        }
    }
}

/// Usage errors exit with `EXIT_FAILURE`; `--help` and `--version` print and exit 0.
fn parse_args<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(argv)
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Process the input directory and write the report
    let result = patent_report::run(ReportConfig::from(args)).await;
    match &result {
        Ok(outcome) if outcome.is_complete() => {
            tracing::info!("Processing finished. Documents: {}", outcome.records.len());
        }
        Ok(outcome) => {
            tracing::warn!(
                "Processing finished with failures. Documents: {}, Skipped: {}",
                outcome.records.len(),
                outcome.failures.len()
            );
        }
        Err(e) => tracing::error!("{}", e),
    }
    ExitCode::from(patent_report::exit_code(&result))
}
