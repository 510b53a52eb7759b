pub mod engine;
pub mod enumerator;
pub mod extractor;
pub mod writer;

pub use crate::domain::model::{Extraction, RunSummary, User};
pub use crate::domain::ports::{ConfigProvider, ProgressReporter, Storage, UserSource};
pub use crate::utils::error::Result;
