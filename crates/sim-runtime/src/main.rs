//! # Verification Lab
//!
//! Entry point for the `sim-runtime` binary.
//!
//! ## Startup Sequence
//!
//! 1. Parse command-line flags
//! 2. Initialize logging (stderr, `RUST_LOG` filter, default `info`)
//! 3. Load configuration (defaults, environment, flags) and validate it
//! 4. Simulate the population and evaluate the verifier
//! 5. Print the text or JSON report to stdout

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sim_runtime::report::{write_json_report, write_text_report};
use sim_runtime::{run, Args, RuntimeConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let config = RuntimeConfig::load(&args).context("invalid configuration")?;
    info!(
        population = config.simulation.population_size,
        malicious_ratio = config.simulation.malicious_ratio,
        mode = ?config.evaluation_mode,
        "starting verification lab"
    );

    let output = run(&config).context("simulation failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.json_output {
        write_json_report(&mut out, &output).context("failed to write JSON report")?;
    } else {
        write_text_report(&mut out, &output, config.report_samples)
            .context("failed to write report")?;
    }
    out.flush().context("failed to flush report")?;

    Ok(())
}
