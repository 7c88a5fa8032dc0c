use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::post::Post;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info, warn};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Post>, DomainError>;
    async fn save_all(&self, posts: &[Post]) -> Result<(), DomainError>;

    /// Millisecond wall-clock token. Two calls within the same millisecond collide.
    fn create_id(&self) -> String {
        Utc::now().timestamp_millis().to_string()
    }
}

/// Whole-file JSON store: every read parses the full array and every write
/// replaces it.
#[derive(Debug, Clone)]
pub struct JsonFilePostRepository {
    path: PathBuf,
}

impl JsonFilePostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store used by the running server. A missing file is not created here;
    /// reads fail until it exists.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let repo = Self::new(path);
        let path = repo.path();
        if path.is_file() {
            info!(path = %path.display(), "using posts file");
        } else {
            warn!(path = %path.display(), "posts file does not exist yet");
        }
        repo
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PostRepository for JsonFilePostRepository {
    async fn load_all(&self) -> Result<Vec<Post>, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!("failed to read {}: {}", self.path.display(), e);
            DomainError::StorageRead(format!("{}: {}", self.path.display(), e))
        })?;

        let posts: Vec<Post> = serde_json::from_str(&raw).map_err(|e| {
            error!("malformed posts file {}: {}", self.path.display(), e);
            DomainError::StorageRead(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(count = posts.len(), "posts loaded");
        Ok(posts)
    }

    async fn save_all(&self, posts: &[Post]) -> Result<(), DomainError> {
        // serde_json's pretty printer indents with two spaces.
        let json = serde_json::to_string_pretty(posts)
            .map_err(|e| DomainError::StorageWrite(e.to_string()))?;

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            error!("failed to write {}: {}", self.path.display(), e);
            DomainError::StorageWrite(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(count = posts.len(), "posts saved");
        Ok(())
    }
}
