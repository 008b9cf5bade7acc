//! In-memory trip repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Trip;
use crate::gateway::{RepositoryError, TripRepository};

/// Trip repository held in process memory, in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryTripRepository {
    trips: Arc<RwLock<Vec<Trip>>>,
}

impl InMemoryTripRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn save(&self, trip: Trip) -> Result<Trip, RepositoryError> {
        let mut trips = self.trips.write().await;
        if trips.iter().any(|t| t.id == trip.id) {
            return Err(RepositoryError::DuplicateId(trip.id));
        }
        trips.push(trip.clone());
        Ok(trip)
    }

    async fn find_all(&self) -> Result<Vec<Trip>, RepositoryError> {
        Ok(self.trips.read().await.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, RepositoryError> {
        let mut trips = self.trips.write().await;
        let before = trips.len();
        trips.retain(|t| t.id != id);
        Ok(trips.len() < before)
    }
}
