use crate::core::{Result, User, UserSource};

pub const USERS_PER_PAGE: u32 = 100;

/// 分頁拉取所有用戶，遇到第一個空頁即停止
pub async fn fetch_all_users<U: UserSource + ?Sized>(source: &U, per_page: u32) -> Result<Vec<User>> {
    tracing::info!("🔄 Fetching user list...");
    let mut users = Vec::new();
    let mut page = 1;

    loop {
        let batch = source.list_users(per_page, page).await?;
        tracing::debug!("Page {} returned {} users", page, batch.len());
        if batch.is_empty() {
            break;
        }
        users.extend(batch);
        page += 1;
    }

    tracing::info!("👥 Total users in GitLab: {}", users.len());
    Ok(users)
}
