//! Payment commands.

mod create_deposit_intent;

pub use create_deposit_intent::{
    to_minor_units, CreateDepositIntentCommand, CreateDepositIntentHandler,
};
