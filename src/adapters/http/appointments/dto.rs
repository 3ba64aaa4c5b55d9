//! HTTP DTOs for the appointment availability endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionId;
use crate::domain::scheduling::AppointmentOption;

/// Query parameters for the availability endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityParams {
    /// Date label to compute availability for, matched verbatim.
    pub date: String,
}

/// One appointment option with its remaining slots.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentOptionResponse {
    pub id: OptionId,
    pub name: String,
    pub price: f64,
    pub slots: Vec<String>,
}

impl From<AppointmentOption> for AppointmentOptionResponse {
    fn from(option: AppointmentOption) -> Self {
        Self {
            id: option.id,
            name: option.name,
            price: option.price,
            slots: option.slots,
        }
    }
}

/// One treatment name, as listed by the specialty endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SpecialtyResponse {
    pub name: String,
}
