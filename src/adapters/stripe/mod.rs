//! Stripe payment adapter.

mod stripe_adapter;

pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
