//! Booking records and the conflict-rejection rule.

mod booking;

pub use booking::{duplicate_booking_message, Booking, CreateBookingOutcome, NewBooking};
