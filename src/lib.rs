//! Clinic Portal - Appointment Booking Backend
//!
//! This crate implements slot-availability computation, booking-conflict
//! prevention, token authentication with role authorization, and deposit
//! collection via a payment provider for a dental clinic portal.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
