//! Fixed in-memory appointment catalog.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::scheduling::AppointmentOption;
use crate::ports::CatalogReader;

/// Catalog reader over a fixed option list.
pub struct InMemoryCatalog {
    options: Vec<AppointmentOption>,
}

impl InMemoryCatalog {
    pub fn new(options: Vec<AppointmentOption>) -> Self {
        Self { options }
    }
}

#[async_trait]
impl CatalogReader for InMemoryCatalog {
    async fn list_options(&self) -> Result<Vec<AppointmentOption>, DomainError> {
        Ok(self.options.clone())
    }
}
