//! Doctor catalog entries.
//!
//! Flat records managed by administrators; the portal does not model
//! doctors' calendars beyond the catalog's own slot lists.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DoctorId;

/// A doctor listed in the clinic catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub email: String,
    /// Treatment name this doctor is associated with.
    pub specialty: String,
    /// Hosted portrait image, if any.
    pub image_url: Option<String>,
}

/// Candidate doctor supplied by the admin catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub image_url: Option<String>,
}

impl Doctor {
    /// Assigns an identifier to a candidate, producing the record to persist.
    pub fn create(candidate: NewDoctor) -> Self {
        Self {
            id: DoctorId::new(),
            name: candidate.name,
            email: candidate.email,
            specialty: candidate.specialty,
            image_url: candidate.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_id_and_keeps_fields() {
        let doctor = Doctor::create(NewDoctor {
            name: "Dr. Rahman".to_string(),
            email: "rahman@clinic.example".to_string(),
            specialty: "Braces".to_string(),
            image_url: None,
        });
        assert_eq!(doctor.specialty, "Braces");
        assert!(doctor.image_url.is_none());
    }
}
