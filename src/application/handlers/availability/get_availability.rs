//! GetAvailabilityHandler - remaining slots per treatment for a date.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::scheduling::{compute_availability, AppointmentOption};
use crate::ports::{BookingRepository, CatalogReader};

/// Query for the bookable slots on a given date.
#[derive(Debug, Clone)]
pub struct GetAvailabilityQuery {
    /// Opaque exact-match date label; passed verbatim to the booking read.
    pub date: String,
}

/// Handler computing remaining availability.
///
/// Reads the catalog and the bookings for the date, then filters each
/// option's slots through the pure domain computation. An unknown or
/// malformed date simply matches zero bookings, so nothing is filtered.
pub struct GetAvailabilityHandler {
    catalog: Arc<dyn CatalogReader>,
    bookings: Arc<dyn BookingRepository>,
}

impl GetAvailabilityHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { catalog, bookings }
    }

    pub async fn handle(
        &self,
        query: GetAvailabilityQuery,
    ) -> Result<Vec<AppointmentOption>, DomainError> {
        let catalog = self.catalog.list_options().await?;
        let booked = self.bookings.list_by_date(&query.date).await?;

        Ok(compute_availability(&catalog, &booked))
    }
}
