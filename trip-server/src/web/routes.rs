//! HTTP route handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::Trip;
use crate::error::{INTERNAL_ERROR_MESSAGE, TripError, ValidationError};
use crate::use_cases;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// When `cors_origin` is given, browsers on that origin may call the API.
pub fn create_router(state: AppState, cors_origin: Option<&str>) -> Router {
    let api = Router::new()
        .route("/trips", get(get_trips))
        .route("/my-trip", post(save_trip).delete(delete_trip))
        .route("/my-trips", get(list_trips));

    let router = Router::new()
        .route("/health", get(health))
        .nest("/trip-planner", api)
        .fallback(|| async { not_found() })
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors_origin.and_then(cors_layer) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match HeaderValue::from_str(origin) {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        ),
        Err(_) => {
            tracing::warn!(origin, "ignoring invalid CORS origin");
            None
        }
    }
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "Not Found".to_string(),
    });
    (StatusCode::NOT_FOUND, body).into_response()
}

/// Offers for a route, optionally sorted.
async fn get_trips(
    State(state): State<AppState>,
    query: Result<Query<GetTripsQuery>, QueryRejection>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable trips query");
        TripError::from(ValidationError::MissingEndpoint)
    })?;
    let sort_by = query.sort_by.as_deref().filter(|s| !s.is_empty());

    let trips = use_cases::get_sorted_trips(
        &query.origin,
        &query.destination,
        sort_by,
        state.source.as_ref(),
        state.cache.as_ref(),
        state.cache_ttl_secs,
    )
    .await?;

    Ok(Json(trips))
}

/// Save a trip for the user.
async fn save_trip(
    State(state): State<AppState>,
    body: Result<Json<SaveTripRequest>, JsonRejection>,
) -> Result<Json<TripResponse>, AppError> {
    let Json(req) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable trip body");
        TripError::from(ValidationError::InvalidTrip)
    })?;

    let trip = use_cases::save_trip(&req.trip, state.repository.as_ref()).await?;
    Ok(Json(TripResponse { trip }))
}

/// All saved trips.
async fn list_trips(State(state): State<AppState>) -> Result<Json<TripListResponse>, AppError> {
    let trips = use_cases::list_saved_trips(state.repository.as_ref()).await?;
    Ok(Json(TripListResponse { trips }))
}

/// Delete a saved trip by id.
async fn delete_trip(
    State(state): State<AppState>,
    query: Result<Query<DeleteTripQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable delete query");
        TripError::from(ValidationError::InvalidId)
    })?;
    let id = query.id.unwrap_or_default();

    if use_cases::delete_trip(&id, state.repository.as_ref()).await? {
        Ok(Json(MessageResponse {
            message: format!("Trip with id '{id}' deleted successfully"),
        }))
    } else {
        Err(TripError::NotFound(format!("Trip with id '{id}' not found")).into())
    }
}

/// Application error type.
#[derive(Debug)]
pub struct AppError(TripError);

impl From<TripError> for AppError {
    fn from(e: TripError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TripError::Validation(_) => StatusCode::BAD_REQUEST,
            TripError::NotFound(_) => StatusCode::NOT_FOUND,
            TripError::Conflict(_) => StatusCode::CONFLICT,
            TripError::Server(_) | TripError::UnsupportedStrategy(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match &self.0 {
            TripError::UnsupportedStrategy(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
        } else {
            tracing::debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
