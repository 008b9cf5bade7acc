//! Test doubles for the gateway traits.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{AirportCode, Trip, TripType};
use crate::error::TripError;
use crate::gateway::{CacheError, RepositoryError, TripCache, TripRepository, TripSource};

pub fn code(s: &str) -> AirportCode {
    AirportCode::parse(s).unwrap()
}

pub fn trip(id: &str, cost: f64, duration: f64) -> Trip {
    Trip {
        origin: code("ATL"),
        destination: code("LAX"),
        cost,
        duration,
        trip_type: TripType::Flight,
        id: id.to_string(),
        display_name: format!("from ATL to LAX ({id})"),
    }
}

/// Source that returns a fixed result and records each request.
pub struct RecordingSource {
    result: Result<Vec<Trip>, TripError>,
    pub calls: Mutex<Vec<(AirportCode, AirportCode)>>,
}

impl RecordingSource {
    pub fn returning(trips: Vec<Trip>) -> Self {
        Self {
            result: Ok(trips),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: TripError) -> Self {
        Self {
            result: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TripSource for RecordingSource {
    async fn fetch_trips(
        &self,
        origin: AirportCode,
        destination: AirportCode,
    ) -> Result<Vec<Trip>, TripError> {
        self.calls.lock().unwrap().push((origin, destination));
        self.result.clone()
    }
}

/// A write observed by [`ScriptedCache`].
#[derive(Debug, Clone, PartialEq)]
pub struct CacheWrite {
    pub key: String,
    pub value: String,
    pub ttl: Option<Duration>,
}

/// Cache whose reads and writes are scripted by the test.
pub struct ScriptedCache {
    stored: Result<Option<String>, CacheError>,
    write_result: Result<bool, CacheError>,
    pub reads: Mutex<Vec<String>>,
    pub writes: Mutex<Vec<CacheWrite>>,
}

impl ScriptedCache {
    pub fn empty() -> Self {
        Self::holding(None)
    }

    pub fn holding(value: Option<&str>) -> Self {
        Self {
            stored: Ok(value.map(str::to_string)),
            write_result: Ok(true),
            reads: Mutex::new(Vec::new()),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            stored: Err(CacheError::new("read refused")),
            ..Self::empty()
        }
    }

    pub fn with_write_result(mut self, result: Result<bool, CacheError>) -> Self {
        self.write_result = result;
        self
    }

    pub fn writes(&self) -> Vec<CacheWrite> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl TripCache for ScriptedCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.reads.lock().unwrap().push(key.to_string());
        self.stored.clone()
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<bool, CacheError> {
        self.writes.lock().unwrap().push(CacheWrite {
            key: key.to_string(),
            value: value.to_string(),
            ttl,
        });
        self.write_result.clone()
    }
}

/// Repository whose answers are scripted by the test.
pub struct ScriptedRepository {
    pub save_error: Option<RepositoryError>,
    pub find_all_result: Result<Vec<Trip>, RepositoryError>,
    pub delete_result: Result<bool, RepositoryError>,
    pub saved: Mutex<Vec<Trip>>,
    pub deleted: Mutex<Vec<String>>,
}

impl Default for ScriptedRepository {
    fn default() -> Self {
        Self {
            save_error: None,
            find_all_result: Ok(Vec::new()),
            delete_result: Ok(true),
            saved: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedRepository {
    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn delete_count(&self) -> usize {
        self.deleted.lock().unwrap().len()
    }
}

#[async_trait]
impl TripRepository for ScriptedRepository {
    async fn save(&self, trip: Trip) -> Result<Trip, RepositoryError> {
        self.saved.lock().unwrap().push(trip.clone());
        match &self.save_error {
            Some(err) => Err(err.clone()),
            None => Ok(trip),
        }
    }

    async fn find_all(&self) -> Result<Vec<Trip>, RepositoryError> {
        self.find_all_result.clone()
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, RepositoryError> {
        self.deleted.lock().unwrap().push(id.to_string());
        self.delete_result.clone()
    }
}
