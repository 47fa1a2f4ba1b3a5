use mcp_smoke::{Config, Harness, report};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so stdout only carries the run output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::default();
    tracing::debug!("Starting mcp-smoke with config: {config:?}");

    let harness = Harness::with_builtin_checks();
    let results = harness.run_all()?;
    report::summarize(&results)?;

    report::persist(&results, &config.report_path)?;
    println!("\nTest results saved to {}", config.report_path.display());

    if results.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
