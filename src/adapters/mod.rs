// Adapters layer: concrete implementations for external systems (GitLab HTTP API, local files).

pub mod gitlab;
pub mod storage;
