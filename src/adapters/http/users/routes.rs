//! Routers for the user and token endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{check_admin, create_user, issue_token, list_users, promote_to_admin};

/// Create the open user router.
///
/// # Routes
/// - `GET /jwt?email=` - issue a token for a known user
/// - `GET /users` - list users
/// - `POST /users` - create a user
/// - `GET /users/admin/:email` - admin check projection
///
/// The admin-check path uses the same `:key` template as the promotion
/// route because the router does not allow differently-named parameters on
/// the same segment; GET reads the segment as an email, PUT as a user id.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", get(issue_token))
        .route("/users", get(list_users).post(create_user))
        .route("/users/admin/:key", get(check_admin))
}

/// Create the session-only user router; the caller layers the auth
/// middleware over it.
///
/// # Routes
/// - `PUT /users/admin/:id` - promote to admin (session + admin role)
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/users/admin/:key", put(promote_to_admin))
}
