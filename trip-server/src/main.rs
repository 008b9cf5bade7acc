use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trip_server::cache::{MemoryTripCache, RedisTripCache};
use trip_server::config::{AppConfig, CacheStoreConfig, SourceConfig, StoreConfig};
use trip_server::gateway::{TripCache, TripRepository, TripSource};
use trip_server::store::{InMemoryTripRepository, JsonFileTripRepository};
use trip_server::upstream::{HttpTripSource, MockTripSource, TripApiConfig};
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let source: Arc<dyn TripSource> = match &config.source {
        SourceConfig::Http {
            base_url,
            api_key,
            timeout_secs,
            max_concurrent,
        } => {
            if api_key.is_empty() {
                tracing::warn!("TRIPS_API_KEY not set; upstream calls will likely be rejected");
            }
            let api = TripApiConfig::new(base_url, api_key)
                .with_timeout(*timeout_secs)
                .with_max_concurrent(*max_concurrent);
            tracing::info!(%base_url, "fetching trips over HTTP");
            Arc::new(HttpTripSource::new(api)?)
        }
        SourceConfig::Mock { data_dir } => {
            let mock = MockTripSource::new(data_dir)?;
            tracing::info!(
                dir = %data_dir.display(),
                routes = mock.available_routes().len(),
                "serving mock trips"
            );
            Arc::new(mock)
        }
    };

    let cache: Arc<dyn TripCache> = match &config.cache {
        CacheStoreConfig::Memory { max_capacity } => {
            tracing::info!(max_capacity, "using in-process cache");
            Arc::new(MemoryTripCache::new(*max_capacity))
        }
        CacheStoreConfig::Redis { url } => {
            tracing::info!("using Redis cache");
            Arc::new(RedisTripCache::new(url)?)
        }
    };

    let repository: Arc<dyn TripRepository> = match &config.store {
        StoreConfig::Memory => Arc::new(InMemoryTripRepository::new()),
        StoreConfig::File { path } => {
            tracing::info!(path = %path.display(), "persisting saved trips to file");
            Arc::new(JsonFileTripRepository::new(path))
        }
    };

    let state = AppState {
        source,
        cache,
        repository,
        cache_ttl_secs: config.cache_ttl_secs,
    };
    let app = create_router(state, config.cors_origin.as_deref());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Trip planner listening on http://{}", config.listen_addr);
    tracing::info!("  GET    /trip-planner/trips?origin=&destination=&sort_by=");
    tracing::info!("  POST   /trip-planner/my-trip");
    tracing::info!("  GET    /trip-planner/my-trips");
    tracing::info!("  DELETE /trip-planner/my-trip?id=");

    axum::serve(listener, app).await?;
    Ok(())
}
