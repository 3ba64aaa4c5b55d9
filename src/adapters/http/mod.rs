//! HTTP adapter: axum routers, handlers, and DTOs.
//!
//! Each API area gets its own routes/handlers/dto triple; the areas share
//! one [`AppState`] built at startup.

pub mod appointments;
pub mod bookings;
pub mod doctors;
pub mod error;
pub mod middleware;
pub mod payments;
pub mod users;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::ports::{
    BookingRepository, CatalogReader, DoctorRepository, PaymentProvider, SessionValidator,
    TokenIssuer, UserRepository,
};

pub use error::ApiError;

/// Shared application state containing all port implementations.
///
/// Constructed once at startup and cloned per request; every dependency is
/// Arc-wrapped, read-only, and safe to share.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogReader>,
    pub bookings: Arc<dyn BookingRepository>,
    pub users: Arc<dyn UserRepository>,
    pub doctors: Arc<dyn DoctorRepository>,
    pub payments: Arc<dyn PaymentProvider>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub session_validator: Arc<dyn SessionValidator>,
}

/// Builds the complete portal router.
///
/// Paths match the original portal's public surface. Only the routes that
/// require a session carry the auth middleware; open endpoints never look
/// at the Authorization header, so a stale token attached by the client
/// cannot break them. On the guarded routes a present-but-invalid header
/// is 403 and a missing one is 401 via the `RequireAuth` extractor.
pub fn portal_router(state: AppState) -> Router {
    let validator = state.session_validator.clone();

    let session_required = Router::new()
        .merge(bookings::session_routes())
        .merge(users::session_routes())
        .merge(doctors::routes())
        .layer(axum::middleware::from_fn_with_state(
            validator,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/", get(banner))
        .merge(appointments::routes())
        .merge(bookings::routes())
        .merge(users::routes())
        .merge(payments::routes())
        .merge(session_required)
        .with_state(state)
}

async fn banner() -> &'static str {
    "Clinic Portal Server is Running"
}
