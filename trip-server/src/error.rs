//! Domain error types.
//!
//! Every use case fails with a [`TripError`]. The web layer matches on it
//! exhaustively to pick a status code, so adding a variant is a compile
//! error there until it is mapped.

/// Client-facing message when the trip source fails.
pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch trips";

/// Client-facing message for any other internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Some error occurred";

/// Input rejected before any gateway was called.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Origin or destination is missing or not a supported airport code
    #[error("Origin and/or destination must be provided.")]
    MissingEndpoint,

    /// Sorting strategy token is not one of the known strategies
    #[error("Invalid sorting strategy \"{0}\".")]
    InvalidSortingStrategy(String),

    /// Trip to save failed structural validation
    #[error("Trip to save is not valid")]
    InvalidTrip,

    /// Trip id to delete is empty
    #[error("Trip id to delete is not valid")]
    InvalidId,
}

/// Errors surfaced by the trip use cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripError {
    /// Caller supplied bad input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation in the store
    #[error("{0}")]
    Conflict(String),

    /// Unexpected internal or upstream failure. The message is shown to
    /// clients, so it never carries backend detail.
    #[error("{0}")]
    Server(String),

    /// A strategy token reached the resolver without passing validation
    #[error("Sorting strategy \"{0}\" is not supported.")]
    UnsupportedStrategy(String),
}
