//! Appointment option catalog entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionId;

/// A bookable treatment with its flat list of time slots.
///
/// Owned by the catalog collaborator; the core only reads these. `name` is
/// the join key between bookings and availability (unique in the catalog),
/// and `slots` is an ordered sequence of opaque time labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentOption {
    pub id: OptionId,
    pub name: String,
    pub price: f64,
    pub slots: Vec<String>,
}

impl AppointmentOption {
    /// Returns a copy of this option with `slots` reduced to the labels not
    /// present in `taken`, preserving the catalog's slot ordering.
    pub fn without_slots(&self, taken: &[&str]) -> Self {
        Self {
            slots: self
                .slots
                .iter()
                .filter(|slot| !taken.contains(&slot.as_str()))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}
