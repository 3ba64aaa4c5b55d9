//! User records and roles.

mod user;

pub use user::{NewUser, Role, User};
