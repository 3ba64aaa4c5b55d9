//! In-memory booking store with the same uniqueness guarantee as Postgres.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError};
use crate::ports::{BookingInsert, BookingRepository};

/// Mutex-guarded booking vector. The lock spans the duplicate check and the
/// push, which is what makes `insert_unique` atomic here.
#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert_unique(&self, booking: &Booking) -> Result<BookingInsert, DomainError> {
        let mut bookings = self.bookings.lock().unwrap();
        let duplicate = bookings.iter().any(|existing| {
            existing.email == booking.email
                && existing.appointment_date == booking.appointment_date
                && existing.treatment == booking.treatment
        });
        if duplicate {
            return Ok(BookingInsert::Duplicate);
        }
        bookings.push(booking.clone());
        Ok(BookingInsert::Inserted)
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == *id)
            .cloned())
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, DomainError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.email == email)
            .cloned()
            .collect())
    }

    async fn list_by_date(&self, date: &str) -> Result<Vec<Booking>, DomainError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.appointment_date == date)
            .cloned()
            .collect())
    }
}
