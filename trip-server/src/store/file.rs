//! Disk-based document store for saved trips.
//!
//! The store is a single JSON array of trip documents. Every operation
//! reads the file, and writes go back through the same lock, so concurrent
//! requests in this process never interleave a read-modify-write.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::Trip;
use crate::gateway::{RepositoryError, TripRepository};

/// Trip repository persisted to a JSON file.
#[derive(Debug)]
pub struct JsonFileTripRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileTripRepository {
    /// Create a repository backed by the file at `path`.
    ///
    /// The file need not exist yet; it is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Load all documents. A missing file is an empty store.
    async fn load(&self) -> Result<Vec<Trip>, RepositoryError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(RepositoryError::Backend(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            RepositoryError::Backend(format!("corrupt store {}: {}", self.path.display(), e))
        })
    }

    /// Replace the file contents with `trips`.
    ///
    /// Creates parent directories if they don't exist.
    async fn store(&self, trips: &[Trip]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RepositoryError::Backend(format!("failed to create store directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(trips)
            .map_err(|e| RepositoryError::Backend(format!("failed to serialize store: {}", e)))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| RepositoryError::Backend(format!("failed to write store file: {}", e)))
    }
}

#[async_trait]
impl TripRepository for JsonFileTripRepository {
    async fn save(&self, trip: Trip) -> Result<Trip, RepositoryError> {
        let _guard = self.lock.lock().await;

        let mut trips = self.load().await?;
        if trips.iter().any(|t| t.id == trip.id) {
            return Err(RepositoryError::DuplicateId(trip.id));
        }
        trips.push(trip.clone());
        self.store(&trips).await?;

        Ok(trip)
    }

    async fn find_all(&self) -> Result<Vec<Trip>, RepositoryError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, RepositoryError> {
        let _guard = self.lock.lock().await;

        let mut trips = self.load().await?;
        let before = trips.len();
        trips.retain(|t| t.id != id);
        if trips.len() == before {
            return Ok(false);
        }
        self.store(&trips).await?;

        Ok(true)
    }
}
