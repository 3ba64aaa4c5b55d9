//! GetBookingHandler - fetch a single booking by id.

use std::sync::Arc;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError};
use crate::ports::BookingRepository;

#[derive(Debug, Clone)]
pub struct GetBookingQuery {
    pub booking_id: BookingId,
}

pub struct GetBookingHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl GetBookingHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    /// An unknown id is not an error, the caller gets `None`.
    pub async fn handle(&self, query: GetBookingQuery) -> Result<Option<Booking>, DomainError> {
        self.bookings.find_by_id(&query.booking_id).await
    }
}
