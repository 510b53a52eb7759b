use crate::domain::model::User;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    type Writer: Write + Send;

    /// Creates (or truncates) `path` and returns a streaming writer for it.
    fn create_writer(&self, path: &str) -> Result<Self::Writer>;

    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn resolve(&self, path: &str) -> PathBuf;
}

pub trait ConfigProvider: Send + Sync {
    fn gitlab_url(&self) -> &str;
    fn token(&self) -> &str;
}

#[async_trait]
pub trait UserSource: Send + Sync {
    /// Verifies the credential, returning the authenticated user.
    async fn authenticate(&self) -> Result<User>;
    async fn list_users(&self, per_page: u32, page: u32) -> Result<Vec<User>>;
}

pub trait ProgressReporter {
    fn report(&mut self, current: usize, total: usize);
}
