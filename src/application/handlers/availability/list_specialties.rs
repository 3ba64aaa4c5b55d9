//! ListSpecialtiesHandler - distinct treatment names for choice lists.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::scheduling::distinct_treatment_names;
use crate::ports::CatalogReader;

/// Projection of the catalog down to its treatment names. No filtering.
pub struct ListSpecialtiesHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl ListSpecialtiesHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<String>, DomainError> {
        let catalog = self.catalog.list_options().await?;
        Ok(distinct_treatment_names(&catalog))
    }
}
