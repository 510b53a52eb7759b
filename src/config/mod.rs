pub mod settings;

use clap::Parser;
use std::path::PathBuf;

pub use settings::Settings;

#[derive(Debug, Clone, Parser)]
#[command(name = "gitlab-domains")]
#[command(about = "Extract GitLab user domains")]
pub struct CliConfig {
    #[arg(long, help = "GitLab instance URL (falls back to GITLAB_URL)")]
    pub gitlab_url: Option<String>,

    #[arg(long, help = "GitLab private token (falls back to PRIVATE_TOKEN)")]
    pub token: Option<String>,

    #[arg(long, help = "Settings file loaded into the environment (defaults to ./.env)")]
    pub env_file: Option<PathBuf>,

    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 將設定檔載入進程環境；預設的 .env 不存在時忽略
    pub fn load_env_file(&self) -> crate::Result<()> {
        match &self.env_file {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| crate::DomainsError::ConfigError {
                    message: format!("Cannot load settings file {}: {}", path.display(), e),
                })?;
                tracing::debug!("Loaded settings from {}", path.display());
            }
            None => {
                if let Ok(path) = dotenvy::dotenv() {
                    tracing::debug!("Loaded settings from {}", path.display());
                }
            }
        }
        Ok(())
    }
}
