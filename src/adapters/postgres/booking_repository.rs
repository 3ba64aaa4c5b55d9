//! PostgreSQL implementation of BookingRepository.
//!
//! Uniqueness over (email, appointment_date, treatment) is enforced by a
//! unique index plus `ON CONFLICT DO NOTHING`, so the duplicate check and
//! the insert are a single atomic statement.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, ErrorCode};
use crate::ports::{BookingInsert, BookingRepository};

/// PostgreSQL implementation of the BookingRepository port.
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    /// Creates a new repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a booking.
#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    email: String,
    appointment_date: String,
    treatment: String,
    slot: String,
    price: f64,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: BookingId::from_uuid(row.id),
            email: row.email,
            appointment_date: row.appointment_date,
            treatment: row.treatment,
            slot: row.slot,
            price: row.price,
        }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn insert_unique(&self, booking: &Booking) -> Result<BookingInsert, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO bookings (id, email, appointment_date, treatment, slot, price)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email, appointment_date, treatment) DO NOTHING
            "#,
        )
        .bind(booking.id.as_uuid())
        .bind(&booking.email)
        .bind(&booking.appointment_date)
        .bind(&booking.treatment)
        .bind(&booking.slot)
        .bind(booking.price)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert booking: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            Ok(BookingInsert::Duplicate)
        } else {
            Ok(BookingInsert::Inserted)
        }
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
            SELECT id, email, appointment_date, treatment, slot, price
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find booking: {}", e),
            )
        })?;

        Ok(row.map(Booking::from))
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, DomainError> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT id, email, appointment_date, treatment, slot, price
            FROM bookings
            WHERE email = $1
            ORDER BY created_at
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list bookings for user: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn list_by_date(&self, date: &str) -> Result<Vec<Booking>, DomainError> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT id, email, appointment_date, treatment, slot, price
            FROM bookings
            WHERE appointment_date = $1
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list bookings for date: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }
}
