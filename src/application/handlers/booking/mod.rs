//! Booking commands and queries.

mod create_booking;
mod get_booking;
mod list_user_bookings;

pub use create_booking::{CreateBookingCommand, CreateBookingHandler};
pub use get_booking::{GetBookingHandler, GetBookingQuery};
pub use list_user_bookings::{ListUserBookingsHandler, ListUserBookingsQuery};
