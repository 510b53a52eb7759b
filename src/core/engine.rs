use crate::core::enumerator::{fetch_all_users, USERS_PER_PAGE};
use crate::core::extractor::DomainExtractor;
use crate::core::writer::save_domains;
use crate::core::{ProgressReporter, Result, RunSummary, Storage, UserSource};

pub const USERS_FILE: &str = "all_users_with_domains.txt";

/// Runs enumerate → extract → persist against an already authenticated source.
pub struct DomainEngine<U: UserSource, S: Storage> {
    source: U,
    storage: S,
    extractor: DomainExtractor,
    per_page: u32,
}

impl<U: UserSource, S: Storage> DomainEngine<U, S> {
    pub fn new(source: U, storage: S) -> Self {
        Self {
            source,
            storage,
            extractor: DomainExtractor::new(),
            per_page: USERS_PER_PAGE,
        }
    }

    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub async fn run(&self, progress: &mut dyn ProgressReporter) -> Result<RunSummary> {
        let users = fetch_all_users(&self.source, self.per_page).await?;

        // 用戶清單沒有專屬的錯誤碼，寫入失敗歸入一般錯誤
        let extraction = {
            let mut writer = self.storage.create_writer(USERS_FILE)?;
            self.extractor.extract(&users, &mut writer, progress)?
        };

        let domains_file = save_domains(&self.storage, &extraction.domains).await?;
        let users_file = self.storage.resolve(USERS_FILE);
        tracing::info!("📂 All users saved in {}", users_file.display());

        Ok(RunSummary {
            total_users: users.len(),
            unique_domains: extraction.domains.len(),
            skipped_users: extraction.skipped,
            users_file,
            domains_file,
        })
    }
}
