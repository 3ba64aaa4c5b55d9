//! In-memory port implementations.
//!
//! Mutex-guarded vectors standing in for the Postgres adapter in unit and
//! integration tests, honoring the same port contracts (in particular the
//! atomic conditional booking insert).

mod booking_repository;
mod catalog;
mod doctor_repository;
mod user_repository;

pub use booking_repository::InMemoryBookingRepository;
pub use catalog::InMemoryCatalog;
pub use doctor_repository::InMemoryDoctorRepository;
pub use user_repository::InMemoryUserRepository;
