use clap::Parser;
use gitlab_domains::utils::error::ErrorCategory;
use gitlab_domains::utils::{logger, progress::LogProgress};
use gitlab_domains::{app, CliConfig, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting gitlab-domains");
    if config.verbose {
        tracing::debug!("CLI config: gitlab_url={:?}, output_dir={}", config.gitlab_url, config.output_dir);
    }

    let mut progress = LogProgress::new("Processing users");
    let settings = config
        .load_env_file()
        .and_then(|()| Settings::from_process_env(&config));
    let result = match settings {
        Ok(settings) => app::run(&settings, &config.output_dir, &mut progress).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "🚀 Process completed successfully! {} users, {} unique domains, {} skipped",
                summary.total_users,
                summary.unique_domains,
                summary.skipped_users
            );
        }
        Err(e) => {
            if e.category() == ErrorCategory::Unhandled {
                tracing::error!(
                    "❌ {} (Category: {:?}, Detail: {:?})",
                    e.user_friendly_message(),
                    e.category(),
                    e
                );
            } else {
                tracing::error!("❌ {}", e.user_friendly_message());
                tracing::debug!("Error detail: {:?}", e);
            }
            std::process::exit(e.exit_code());
        }
    }
}
