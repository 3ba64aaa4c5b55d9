//! Router for the appointment availability endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::AppState;

use super::handlers::{get_appointment_options, get_appointment_specialties};

/// Create the appointment availability router.
///
/// # Routes
/// - `GET /appointmentOptions?date=` - availability per treatment
/// - `GET /appointmentSpecialty` - distinct treatment names
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/appointmentOptions", get(get_appointment_options))
        .route("/appointmentSpecialty", get(get_appointment_specialties))
}
