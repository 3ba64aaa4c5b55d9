//! In-memory doctor catalog.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::doctor::{Doctor, NewDoctor};
use crate::domain::foundation::{DoctorId, DomainError};
use crate::ports::DoctorRepository;

#[derive(Default)]
pub struct InMemoryDoctorRepository {
    doctors: Mutex<Vec<Doctor>>,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn list(&self) -> Result<Vec<Doctor>, DomainError> {
        Ok(self.doctors.lock().unwrap().clone())
    }

    async fn insert(&self, candidate: NewDoctor) -> Result<Doctor, DomainError> {
        let doctor = Doctor::create(candidate);
        self.doctors.lock().unwrap().push(doctor.clone());
        Ok(doctor)
    }

    async fn delete(&self, id: &DoctorId) -> Result<bool, DomainError> {
        let mut doctors = self.doctors.lock().unwrap();
        let before = doctors.len();
        doctors.retain(|d| d.id != *id);
        Ok(doctors.len() != before)
    }
}
