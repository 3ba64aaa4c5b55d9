//! Routers for the booking endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{create_booking, get_booking, list_bookings};

/// Create the open booking router.
///
/// # Routes
/// - `GET /bookings/:id` - fetch one booking
/// - `POST /bookings` - create a booking
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/bookings/:id", get(get_booking))
}

/// Create the session-only booking router; the caller layers the auth
/// middleware over it.
///
/// # Routes
/// - `GET /bookings?email=` - list a user's bookings (session + owner-match)
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/bookings", get(list_bookings))
}
