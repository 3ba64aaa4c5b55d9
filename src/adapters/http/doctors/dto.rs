//! HTTP DTOs for the doctor catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::doctor::{Doctor, NewDoctor};
use crate::domain::foundation::DoctorId;

/// Request body for adding a doctor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub email: String,
    pub specialty: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl From<CreateDoctorRequest> for NewDoctor {
    fn from(request: CreateDoctorRequest) -> Self {
        NewDoctor {
            name: request.name,
            email: request.email,
            specialty: request.specialty,
            image_url: request.image_url,
        }
    }
}

/// A doctor as rendered to clients.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorResponse {
    pub id: DoctorId,
    pub name: String,
    pub email: String,
    pub specialty: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            email: doctor.email,
            specialty: doctor.specialty,
            image_url: doctor.image_url,
        }
    }
}

/// Response for a doctor deletion.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteDoctorResponse {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}
