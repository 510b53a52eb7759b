pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{gitlab::GitLabClient, storage::LocalStorage};
pub use config::{CliConfig, Settings};
pub use crate::core::engine::DomainEngine;
pub use utils::error::{DomainsError, Result};
