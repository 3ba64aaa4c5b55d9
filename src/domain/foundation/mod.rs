//! Foundation types shared across the domain: identifiers, errors,
//! authentication claims, and authorization rules.

mod auth;
mod authorization;
mod errors;
mod ids;

pub use auth::{AuthError, Identity};
pub use authorization::{require_admin, require_owner};
pub use errors::{DomainError, ErrorCode};
pub use ids::{BookingId, DoctorId, OptionId, UserId};
