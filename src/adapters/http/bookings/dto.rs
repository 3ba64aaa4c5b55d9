//! HTTP DTOs for the booking endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::foundation::BookingId;

/// Query parameters for the user booking list.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingListParams {
    /// Email the list is scoped to; must match the verified identity.
    pub email: String,
}

/// Request body for creating a booking.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub email: String,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: String,
    pub treatment: String,
    pub slot: String,
    pub price: f64,
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(request: CreateBookingRequest) -> Self {
        NewBooking {
            email: request.email,
            appointment_date: request.appointment_date,
            treatment: request.treatment,
            slot: request.slot,
            price: request.price,
        }
    }
}

/// Response for a booking creation attempt.
///
/// `acknowledged: false` carries the rejection message for a duplicate;
/// it is a normal 200 response, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBookingResponse {
    pub acknowledged: bool,
    #[serde(rename = "insertedId", skip_serializing_if = "Option::is_none")]
    pub inserted_id: Option<BookingId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CreateBookingResponse {
    pub fn created(id: BookingId) -> Self {
        Self {
            acknowledged: true,
            inserted_id: Some(id),
            message: None,
        }
    }

    pub fn rejected(message: String) -> Self {
        Self {
            acknowledged: false,
            inserted_id: None,
            message: Some(message),
        }
    }
}

/// A booking as rendered to clients.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: BookingId,
    pub email: String,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: String,
    pub treatment: String,
    pub slot: String,
    pub price: f64,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            email: booking.email,
            appointment_date: booking.appointment_date,
            treatment: booking.treatment,
            slot: booking.slot,
            price: booking.price,
        }
    }
}
