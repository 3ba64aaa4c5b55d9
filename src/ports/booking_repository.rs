//! Booking persistence port.

use async_trait::async_trait;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError};

/// Result of a conditional booking insert.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingInsert {
    /// The booking was persisted.
    Inserted,
    /// A booking for the same (email, appointment_date, treatment) triple
    /// already exists; nothing was written.
    Duplicate,
}

/// Persistence for bookings.
///
/// # Contract
///
/// `insert_unique` must be atomic with respect to the uniqueness triple:
/// two concurrent inserts for the same (email, appointment_date, treatment)
/// must yield exactly one `Inserted` and one `Duplicate`. Implementations
/// use a storage-level unique constraint or an equivalent compare-and-swap,
/// never a separate read followed by a write.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Conditionally persists `booking`, honoring the uniqueness triple.
    async fn insert_unique(&self, booking: &Booking) -> Result<BookingInsert, DomainError>;

    /// Single-record lookup; `None` for an unknown id.
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError>;

    /// All bookings held by `email`.
    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, DomainError>;

    /// All bookings whose `appointment_date` equals `date` verbatim.
    async fn list_by_date(&self, date: &str) -> Result<Vec<Booking>, DomainError>;
}
