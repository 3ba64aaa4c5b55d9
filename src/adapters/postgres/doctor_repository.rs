//! PostgreSQL implementation of DoctorRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::doctor::{Doctor, NewDoctor};
use crate::domain::foundation::{DoctorId, DomainError, ErrorCode};
use crate::ports::DoctorRepository;

/// PostgreSQL implementation of the DoctorRepository port.
pub struct PostgresDoctorRepository {
    pool: PgPool,
}

impl PostgresDoctorRepository {
    /// Creates a new repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a doctor.
#[derive(Debug, sqlx::FromRow)]
struct DoctorRow {
    id: Uuid,
    name: String,
    email: String,
    specialty: String,
    image_url: Option<String>,
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        Doctor {
            id: DoctorId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            specialty: row.specialty,
            image_url: row.image_url,
        }
    }
}

#[async_trait]
impl DoctorRepository for PostgresDoctorRepository {
    async fn list(&self) -> Result<Vec<Doctor>, DomainError> {
        let rows: Vec<DoctorRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, specialty, image_url
            FROM doctors
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list doctors: {}", e))
        })?;

        Ok(rows.into_iter().map(Doctor::from).collect())
    }

    async fn insert(&self, candidate: NewDoctor) -> Result<Doctor, DomainError> {
        let doctor = Doctor::create(candidate);

        sqlx::query(
            r#"
            INSERT INTO doctors (id, name, email, specialty, image_url)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(doctor.id.as_uuid())
        .bind(&doctor.name)
        .bind(&doctor.email)
        .bind(&doctor.specialty)
        .bind(&doctor.image_url)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to insert doctor: {}", e))
        })?;

        Ok(doctor)
    }

    async fn delete(&self, id: &DoctorId) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM doctors WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to delete doctor: {}", e))
        })?;

        Ok(result.rows_affected() > 0)
    }
}
