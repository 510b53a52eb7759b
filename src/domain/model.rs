use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// A GitLab account as returned by `GET /users`; other attributes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>, email: Option<&str>) -> Self {
        Self {
            username: username.into(),
            email: email.map(str::to_string),
        }
    }

    /// The email when present and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub domains: HashSet<String>,
    /// 只計算沒有電子郵件的用戶
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total_users: usize,
    pub unique_domains: usize,
    pub skipped_users: usize,
    pub users_file: PathBuf,
    pub domains_file: PathBuf,
}
