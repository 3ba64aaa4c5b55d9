//! PostgreSQL implementations of the persistence ports.

mod booking_repository;
mod catalog_reader;
mod doctor_repository;
mod user_repository;

pub use booking_repository::PostgresBookingRepository;
pub use catalog_reader::PostgresCatalogReader;
pub use doctor_repository::PostgresDoctorRepository;
pub use user_repository::PostgresUserRepository;
