use anyhow::Context;
use dotenvy::dotenv;

mod args;
mod config;
mod setup;

use args::Args;
use business::domain::guild_job::use_cases::export::ExportGuildJobsParams;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Guild jobs export entry point
///
/// Reads `<path>/firestore.json`, signs in with its custom token, fetches
/// the first jobs of the guild and writes them to `<path>/guild_jobs.json`.
/// Without `--path` there is nothing to do and the process exits cleanly.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, RUST_LOG included
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter, keeping stdout clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Read parameters
    let args = Args::from_env();
    let Some(directory) = args.path()? else {
        tracing::debug!("No --path given, nothing to export");
        return Ok(());
    };

    // 4. Load configuration and wire dependencies
    let config = AppConfig::from_env()?;
    let container = DependencyContainer::new(config);

    // 5. Export
    let summary = container
        .export_guild_jobs
        .execute(ExportGuildJobsParams {
            directory: directory.clone(),
        })
        .await
        .with_context(|| format!("Failed to export guild jobs for {}", directory.display()))?;

    tracing::info!(
        jobs = summary.job_count,
        output = %summary.output_path.display(),
        "Export finished"
    );
    Ok(())
}
