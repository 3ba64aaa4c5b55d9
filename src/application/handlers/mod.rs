//! Command and query handlers orchestrating the ports.

pub mod availability;
pub mod booking;
pub mod doctor;
pub mod payment;
pub mod user;
