//! Appointment catalog and slot-availability computation.

mod availability;
mod option;

pub use availability::{compute_availability, distinct_treatment_names};
pub use option::AppointmentOption;
