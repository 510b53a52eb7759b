use crate::core::Storage;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn prepare(&self, path: &str) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(full_path)
    }
}

impl Storage for LocalStorage {
    type Writer = BufWriter<File>;

    fn create_writer(&self, path: &str) -> Result<Self::Writer> {
        let full_path = self.prepare(path)?;
        tracing::debug!("Opening {} for writing", full_path.display());
        Ok(BufWriter::new(File::create(full_path)?))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.prepare(path)?;
        fs::write(full_path, data)?;
        Ok(())
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}
