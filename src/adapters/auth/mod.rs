//! Token issuance and verification adapters.

mod jwt;

pub use jwt::JwtTokenService;
