//! Adapters - Implementations of ports against concrete technology.

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod stripe;
