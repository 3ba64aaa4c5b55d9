//! HTTP handlers for bookings.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::booking::{
    CreateBookingCommand, CreateBookingHandler, GetBookingHandler, GetBookingQuery,
    ListUserBookingsHandler, ListUserBookingsQuery,
};
use crate::domain::booking::CreateBookingOutcome;
use crate::domain::foundation::BookingId;

use super::dto::{BookingListParams, BookingResponse, CreateBookingRequest, CreateBookingResponse};

/// `GET /bookings?email=...` - a user's own bookings.
///
/// Requires a session; the owner-match rule turns a foreign email into 403.
pub async fn list_bookings(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Query(params): Query<BookingListParams>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let handler = ListUserBookingsHandler::new(state.bookings.clone());
    let bookings = handler
        .handle(&identity, ListUserBookingsQuery { email: params.email })
        .await?;

    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// `GET /bookings/:id` - a single booking, `null` when unknown.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<BookingId>,
) -> Result<Json<Option<BookingResponse>>, ApiError> {
    let handler = GetBookingHandler::new(state.bookings.clone());
    let booking = handler.handle(GetBookingQuery { booking_id: id }).await?;

    Ok(Json(booking.map(Into::into)))
}

/// `POST /bookings` - create a booking, enforcing the uniqueness rule.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, ApiError> {
    let handler = CreateBookingHandler::new(state.bookings.clone());
    let outcome = handler
        .handle(CreateBookingCommand {
            candidate: request.into(),
        })
        .await?;

    let response = match outcome {
        CreateBookingOutcome::Created(booking) => CreateBookingResponse::created(booking.id),
        CreateBookingOutcome::Rejected { message } => CreateBookingResponse::rejected(message),
    };

    Ok(Json(response))
}
