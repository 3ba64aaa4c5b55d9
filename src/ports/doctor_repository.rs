//! Doctor catalog port.

use async_trait::async_trait;

use crate::domain::doctor::{Doctor, NewDoctor};
use crate::domain::foundation::{DoctorId, DomainError};

/// CRUD over the doctor catalog. All mutations are admin-gated upstream.
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Lists every doctor in the catalog.
    async fn list(&self) -> Result<Vec<Doctor>, DomainError>;

    /// Persists a new doctor and returns the stored record.
    async fn insert(&self, doctor: NewDoctor) -> Result<Doctor, DomainError>;

    /// Deletes the doctor with `id`; returns whether a record was removed.
    async fn delete(&self, id: &DoctorId) -> Result<bool, DomainError>;
}
