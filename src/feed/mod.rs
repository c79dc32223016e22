pub mod records;

pub use records::{parse_snapshot, BetRecord};

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Where bet records come from. The reporter only depends on this seam, so
/// the backing store can change without touching the evaluation loop.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&mut self) -> Result<Vec<BetRecord>>;
}

/// JSON snapshot file on disk, re-read on every fetch so --watch picks up
/// edits between ticks.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotSource for FileSource {
    async fn fetch(&mut self) -> Result<Vec<BetRecord>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read snapshot: {}", self.path.display()))?;
        records::parse_snapshot(&content)
    }
}
