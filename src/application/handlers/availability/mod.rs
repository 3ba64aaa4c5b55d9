//! Availability queries.

mod get_availability;
mod list_specialties;

pub use get_availability::{GetAvailabilityHandler, GetAvailabilityQuery};
pub use list_specialties::ListSpecialtiesHandler;
