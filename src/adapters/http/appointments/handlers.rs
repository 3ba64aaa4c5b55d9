//! HTTP handlers for appointment availability.

use axum::extract::{Query, State};
use axum::Json;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::availability::{
    GetAvailabilityHandler, GetAvailabilityQuery, ListSpecialtiesHandler,
};

use super::dto::{AppointmentOptionResponse, AvailabilityParams, SpecialtyResponse};

/// `GET /appointmentOptions?date=...` - remaining slots per treatment.
pub async fn get_appointment_options(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<Vec<AppointmentOptionResponse>>, ApiError> {
    let handler = GetAvailabilityHandler::new(state.catalog.clone(), state.bookings.clone());
    let options = handler
        .handle(GetAvailabilityQuery { date: params.date })
        .await?;

    Ok(Json(options.into_iter().map(Into::into).collect()))
}

/// `GET /appointmentSpecialty` - distinct treatment names.
pub async fn get_appointment_specialties(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpecialtyResponse>>, ApiError> {
    let handler = ListSpecialtiesHandler::new(state.catalog.clone());
    let names = handler.handle().await?;

    Ok(Json(
        names
            .into_iter()
            .map(|name| SpecialtyResponse { name })
            .collect(),
    ))
}
