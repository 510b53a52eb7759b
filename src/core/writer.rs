use crate::core::{Result, Storage};
use crate::utils::error::DomainsError;
use std::collections::HashSet;
use std::path::PathBuf;

pub const DOMAINS_FILE: &str = "unique_domains.txt";

/// Sorted, newline-joined domains with a trailing newline.
pub fn render_domains(domains: &HashSet<String>) -> String {
    let mut sorted: Vec<&str> = domains.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    let mut content = sorted.join("\n");
    content.push('\n');
    content
}

pub async fn save_domains<S: Storage>(storage: &S, domains: &HashSet<String>) -> Result<PathBuf> {
    let path = storage.resolve(DOMAINS_FILE);
    let content = render_domains(domains);

    storage
        .write_file(DOMAINS_FILE, content.as_bytes())
        .await
        .map_err(|e| {
            let source = match e {
                DomainsError::IoError(io) | DomainsError::PersistenceError { source: io, .. } => io,
                other => std::io::Error::new(std::io::ErrorKind::Other, other.to_string()),
            };
            DomainsError::PersistenceError {
                path: path.display().to_string(),
                source,
            }
        })?;

    tracing::info!("✅ Unique domains found: {}", domains.len());
    tracing::info!("📂 Unique domains saved in {}", path.display());
    Ok(path)
}
