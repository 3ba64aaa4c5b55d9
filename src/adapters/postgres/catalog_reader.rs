//! PostgreSQL implementation of CatalogReader.
//!
//! Options and their slot labels live in two tables; slots are read in
//! their stored position order so availability preserves the catalog's
//! slot sequence.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, OptionId};
use crate::domain::scheduling::AppointmentOption;
use crate::ports::CatalogReader;

/// PostgreSQL implementation of the CatalogReader port.
pub struct PostgresCatalogReader {
    pool: PgPool,
}

impl PostgresCatalogReader {
    /// Creates a new reader over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OptionSlotRow {
    id: Uuid,
    name: String,
    price: f64,
    slot: Option<String>,
}

#[async_trait]
impl CatalogReader for PostgresCatalogReader {
    async fn list_options(&self) -> Result<Vec<AppointmentOption>, DomainError> {
        // LEFT JOIN keeps options that currently have no slots.
        let rows: Vec<OptionSlotRow> = sqlx::query_as(
            r#"
            SELECT o.id, o.name, o.price, s.slot
            FROM appointment_options o
            LEFT JOIN appointment_option_slots s ON s.option_id = o.id
            ORDER BY o.name, s.position
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to read appointment catalog: {}", e),
            )
        })?;

        let mut options: Vec<AppointmentOption> = Vec::new();
        for row in rows {
            let id = OptionId::from_uuid(row.id);
            match options.last_mut() {
                Some(option) if option.id == id => {
                    if let Some(slot) = row.slot {
                        option.slots.push(slot);
                    }
                }
                _ => options.push(AppointmentOption {
                    id,
                    name: row.name,
                    price: row.price,
                    slots: row.slot.into_iter().collect(),
                }),
            }
        }

        Ok(options)
    }
}
