//! Catalog read port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::scheduling::AppointmentOption;

/// Read-only access to the appointment option catalog.
///
/// The catalog is owned by an external collaborator; the core never writes
/// to it.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Returns every appointment option with its full slot list.
    async fn list_options(&self) -> Result<Vec<AppointmentOption>, DomainError>;
}
