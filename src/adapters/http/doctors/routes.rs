//! Router for the doctor catalog endpoints.

use axum::{
    routing::{delete, get},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{create_doctor, delete_doctor, list_doctors};

/// Create the doctor catalog router.
///
/// # Routes (all require a session with the admin role)
/// - `GET /doctors` - list the catalog
/// - `POST /doctors` - add a doctor
/// - `DELETE /doctors/:id` - remove a doctor
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/doctors", get(list_doctors).post(create_doctor))
        .route("/doctors/:id", delete(delete_doctor))
}
