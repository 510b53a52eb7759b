use crate::adapters::gitlab::GitLabClient;
use crate::adapters::storage::LocalStorage;
use crate::config::{CliConfig, Settings};
use crate::core::engine::DomainEngine;
use crate::core::{ConfigProvider, ProgressReporter, Result, RunSummary};
use crate::utils::validation::validate_path;

/// Authenticates, then enumerates users and writes both artifacts into `output_dir`.
/// Nothing is written unless authentication succeeds.
pub async fn run(
    settings: &Settings,
    output_dir: &str,
    progress: &mut dyn ProgressReporter,
) -> Result<RunSummary> {
    validate_path("output_dir", output_dir)?;
    tracing::debug!("Connecting to {}", settings.gitlab_url());

    let client = GitLabClient::connect(settings).await?;
    let engine = DomainEngine::new(client, LocalStorage::new(output_dir));
    engine.run(progress).await
}

/// Resolves configuration from flags and `env`, then runs. No request is made
/// when the configuration is incomplete.
pub async fn run_with_env<F>(
    cli: &CliConfig,
    env: F,
    progress: &mut dyn ProgressReporter,
) -> Result<RunSummary>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = Settings::resolve(cli, env)?;
    run(&settings, &cli.output_dir, progress).await
}
