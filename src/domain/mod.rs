//! Domain layer: pure types and rules with no adapter dependencies.

pub mod booking;
pub mod doctor;
pub mod foundation;
pub mod scheduling;
pub mod user;
