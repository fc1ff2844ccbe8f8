#![doc = include_str!("../README.md")]

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::config::{CliArgs, RunConfig, load_env_file};
use cli::telemetry::{
    init_telemetry, record_logins_fetched, record_run_duration, record_sheet_outcomes,
    shutdown_telemetry,
};
use profile_sheets::{Coordinator, DirectoryClient, PdfRenderer, Pipeline, RunSummary, Sink};
use std::{process::ExitCode, time::Instant};

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let started = Instant::now();

    // Load from .env; a missing file is fine, a broken one is not.
    load_env_file(".env")?;
    let args = CliArgs::parse();
    let config = RunConfig::try_from(args)?;

    let providers = init_telemetry()?;
    log_startup_info(&config);

    let result = run(&config).await;
    let elapsed = started.elapsed();
    record_run_duration(elapsed.as_secs_f64() * 1_000.0);

    let code = match &result {
        Ok(summary) => {
            record_logins_fetched(summary.completed() as u64);
            record_sheet_outcomes(summary.written_count() as u64, summary.failed_count() as u64);
            tracing::info!(
                written = summary.written_count(),
                failed = summary.failed_count(),
                elapsed_secs = elapsed.as_secs_f64(),
                "Process complete: profile sheets generated"
            );
            ExitCode::SUCCESS
        }
        // Reported here once; returning the error would print it again.
        Err(e) => {
            tracing::error!(elapsed_secs = elapsed.as_secs_f64(), "Run aborted: {e:#}");
            ExitCode::FAILURE
        }
    };

    shutdown_telemetry(providers);
    Ok(code)
}

async fn run(config: &RunConfig) -> anyhow::Result<RunSummary> {
    let directory = DirectoryClient::new(&config.endpoint, config.token.as_str())
        .context("failed to build directory client")?;
    let sink = Sink::new(PdfRenderer::default(), &config.output_dir);
    let pipeline = Pipeline::new(directory, Coordinator::new(sink, config.concurrency));

    pipeline
        .run(config.count)
        .await
        .context("run aborted before any profile sheet was generated")
}

fn log_startup_info(config: &RunConfig) {
    if cfg!(debug_assertions) {
        tracing::info!("Starting profile sheet run with full config: {:#?}", config);
    } else {
        tracing::info!(
            "Requesting {} logins from {} into {}",
            config.count,
            config.endpoint,
            config.output_dir.display()
        );
    }
}
