//! Booking entity.
//!
//! At most one booking may exist for a given (email, appointment_date,
//! treatment) triple. The storage adapter enforces this atomically; the
//! domain only defines the record and the user-facing rejection message.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::BookingId;

/// A persisted appointment booking. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub email: String,
    /// Exact-match date label, not parsed as a calendar type.
    #[serde(rename = "appointmentDate")]
    pub appointment_date: String,
    /// References an `AppointmentOption.name`.
    pub treatment: String,
    /// One of that option's slot labels.
    pub slot: String,
    pub price: f64,
}

impl Booking {
    /// Assigns an identifier to a candidate, producing the record to persist.
    pub fn create(candidate: NewBooking) -> Self {
        Self {
            id: BookingId::new(),
            email: candidate.email,
            appointment_date: candidate.appointment_date,
            treatment: candidate.treatment,
            slot: candidate.slot,
            price: candidate.price,
        }
    }
}

/// Candidate booking submitted by a client, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub email: String,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: String,
    pub treatment: String,
    pub slot: String,
    pub price: f64,
}

/// Outcome of attempting to create a booking.
///
/// A duplicate is a soft, user-facing rejection carrying a message, not an
/// error: the transport returns it with an `acknowledged: false` body.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateBookingOutcome {
    Created(Booking),
    Rejected { message: String },
}

/// Human-readable rejection naming the conflicting date.
pub fn duplicate_booking_message(appointment_date: &str) -> String {
    format!("You already have a booking on {}", appointment_date)
}
