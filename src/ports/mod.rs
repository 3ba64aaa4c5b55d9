//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogReader` - read-only appointment option catalog
//! - `BookingRepository` - booking persistence with atomic uniqueness
//! - `UserRepository` - identity store lookups and role updates
//! - `DoctorRepository` - doctor catalog CRUD
//! - `PaymentProvider` - deposit intent creation at the payment gateway
//! - `TokenIssuer` / `SessionValidator` - bearer token lifecycle

mod booking_repository;
mod catalog_reader;
mod doctor_repository;
mod payment_provider;
mod token_service;
mod user_repository;

pub use booking_repository::{BookingInsert, BookingRepository};
pub use catalog_reader::CatalogReader;
pub use doctor_repository::DoctorRepository;
pub use payment_provider::{PaymentError, PaymentErrorCode, PaymentIntent, PaymentProvider};
pub use token_service::{SessionValidator, TokenIssuer};
pub use user_repository::UserRepository;
