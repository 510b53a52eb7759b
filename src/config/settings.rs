use crate::config::CliConfig;
use crate::core::ConfigProvider;
use crate::utils::error::{DomainsError, Result};
use crate::utils::validation::{validate_not_empty, Validate};

pub const GITLAB_URL_VAR: &str = "GITLAB_URL";
pub const PRIVATE_TOKEN_VAR: &str = "PRIVATE_TOKEN";

/// Effective endpoint and credential for one run.
#[derive(Clone)]
pub struct Settings {
    gitlab_url: String,
    token: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("gitlab_url", &self.gitlab_url)
            .field("token", &"***")
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Settings {
    pub fn new(gitlab_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let settings = Self {
            gitlab_url: gitlab_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Flags win over the environment; empty values count as absent.
    pub fn resolve<F>(cli: &CliConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gitlab_url = non_empty(cli.gitlab_url.clone()).or_else(|| non_empty(env(GITLAB_URL_VAR)));
        let token = non_empty(cli.token.clone()).or_else(|| non_empty(env(PRIVATE_TOKEN_VAR)));

        match (gitlab_url, token) {
            (Some(gitlab_url), Some(token)) => Self::new(gitlab_url, token),
            (gitlab_url, token) => {
                let mut fields = Vec::new();
                if gitlab_url.is_none() {
                    fields.push(GITLAB_URL_VAR.to_string());
                }
                if token.is_none() {
                    fields.push(PRIVATE_TOKEN_VAR.to_string());
                }
                Err(DomainsError::MissingConfigError { fields })
            }
        }
    }

    pub fn from_process_env(cli: &CliConfig) -> Result<Self> {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }
}

impl ConfigProvider for Settings {
    fn gitlab_url(&self) -> &str {
        &self.gitlab_url
    }

    fn token(&self) -> &str {
        &self.token
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        // URL 格式交由 HTTP 客戶端判斷，失敗屬於連線錯誤
        validate_not_empty(GITLAB_URL_VAR, &self.gitlab_url)?;
        validate_not_empty(PRIVATE_TOKEN_VAR, &self.token)?;
        Ok(())
    }
}
