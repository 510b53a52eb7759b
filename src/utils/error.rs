use thiserror::Error;

/// 錯誤分類，對應程序退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    Connectivity,
    Persistence,
    Unhandled,
}

impl ErrorCategory {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Authentication => 2,
            ErrorCategory::Connectivity => 3,
            ErrorCategory::Persistence => 6,
            ErrorCategory::Unhandled => 7,
        }
    }
}

#[derive(Error, Debug)]
pub enum DomainsError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {}", fields.join(" or "))]
    MissingConfigError { fields: Vec<String> },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Authentication rejected by {url}: {message}")]
    AuthenticationError { url: String, message: String },

    #[error("Connection error: {0}")]
    ConnectivityError(#[source] reqwest::Error),

    #[error("Connection error: cannot reach '{url}' ({reason})")]
    InvalidEndpointError { url: String, reason: String },

    #[error("GitLab API returned {status} for {url}")]
    ApiError { status: u16, url: String },

    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Error writing to {path}: {source}")]
    PersistenceError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl DomainsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DomainsError::ConfigError { .. }
            | DomainsError::MissingConfigError { .. }
            | DomainsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DomainsError::AuthenticationError { .. } => ErrorCategory::Authentication,
            DomainsError::ConnectivityError(_) | DomainsError::InvalidEndpointError { .. } => {
                ErrorCategory::Connectivity
            }
            DomainsError::PersistenceError { .. } => ErrorCategory::Persistence,
            DomainsError::ApiError { .. }
            | DomainsError::HttpError(_)
            | DomainsError::IoError(_)
            | DomainsError::SerializationError(_) => ErrorCategory::Unhandled,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DomainsError::MissingConfigError { .. } => {
                "Missing required environment variables: GITLAB_URL or PRIVATE_TOKEN.".to_string()
            }
            DomainsError::AuthenticationError { .. } => {
                "Authentication error: Check your token.".to_string()
            }
            DomainsError::ConnectivityError(e) => format!("Connection error: {}", e),
            DomainsError::InvalidEndpointError { .. } => self.to_string(),
            DomainsError::PersistenceError { path, source } => {
                format!("Error writing to {}: {}", path, source)
            }
            other if other.category() == ErrorCategory::Unhandled => {
                format!("Unexpected error: {}", other)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainsError>;
