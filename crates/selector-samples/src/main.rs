//! `selector-samples`: runs the selection samples and prints what each one picked.
//!
//! ```text
//! selector-samples                          # run every sample
//! selector-samples run single-or-default-method --product-id 870
//! selector-samples --output json run first-query
//! selector-samples list
//! ```
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG` or pass
//! `--verbose` to see each sample as it runs.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;

use selector_samples::samples::DEFAULT_PRODUCT_ID;
use selector_samples::{render, run_samples, OutputMode, Sample, SampleSettings};

#[derive(Debug, Parser)]
#[command(
    name = "selector-samples",
    version,
    about = "First, last and single selection over a product catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputMode::Text, global = true)]
    output: OutputMode,

    /// Log each sample as it runs
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one sample, or every sample when none is named
    Run {
        /// Sample to run
        #[arg(value_enum)]
        sample: Option<Sample>,

        /// Product id looked up by single-or-default-method
        #[arg(long, default_value_t = DEFAULT_PRODUCT_ID)]
        product_id: i64,
    },
    /// List the available samples
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn execute(cli: Cli) -> anyhow::Result<String> {
    let (samples, settings) = match cli.command {
        Some(Command::List) => return Ok(list_samples()),
        Some(Command::Run { sample, product_id }) => {
            let samples = sample.map_or_else(|| Sample::all().to_vec(), |s| vec![s]);
            (samples, SampleSettings { product_id })
        }
        None => (Sample::all().to_vec(), SampleSettings::default()),
    };

    debug!(
        "running {} sample(s) with product id {}",
        samples.len(),
        settings.product_id
    );
    let reports = run_samples(&samples, &settings);

    render(&reports, cli.output).with_context(|| {
        format!(
            "failed to render {} report(s) as {:?}",
            reports.len(),
            cli.output
        )
    })
}

fn list_samples() -> String {
    Sample::all()
        .iter()
        .map(|sample| format!("{:<40} {}", sample.as_str(), sample.operation()))
        .collect::<Vec<_>>()
        .join("\n")
}
