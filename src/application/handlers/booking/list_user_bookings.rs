//! ListUserBookingsHandler - a user's own booking history.

use std::sync::Arc;

use crate::domain::booking::Booking;
use crate::domain::foundation::{require_owner, DomainError, Identity};
use crate::ports::BookingRepository;

#[derive(Debug, Clone)]
pub struct ListUserBookingsQuery {
    /// Email the request is scoped to, as supplied by the client.
    pub email: String,
}

/// Handler applying the owner-match rule before touching the store.
pub struct ListUserBookingsHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl ListUserBookingsHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(
        &self,
        identity: &Identity,
        query: ListUserBookingsQuery,
    ) -> Result<Vec<Booking>, DomainError> {
        // The read must not execute when the rule denies.
        require_owner(identity, &query.email)?;
        self.bookings.list_by_email(&query.email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BookingId, ErrorCode};
    use crate::ports::BookingInsert;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Repository double that counts reads, to prove denial short-circuits.
    #[derive(Default)]
    struct CountingRepository {
        reads: AtomicUsize,
    }

    #[async_trait]
    impl BookingRepository for CountingRepository {
        async fn insert_unique(&self, _booking: &Booking) -> Result<BookingInsert, DomainError> {
            Ok(BookingInsert::Inserted)
        }

        async fn find_by_id(&self, _id: &BookingId) -> Result<Option<Booking>, DomainError> {
            Ok(None)
        }

        async fn list_by_email(&self, _email: &str) -> Result<Vec<Booking>, DomainError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn list_by_date(&self, _date: &str) -> Result<Vec<Booking>, DomainError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn owner_sees_own_bookings() {
        let repo = Arc::new(CountingRepository::default());
        let handler = ListUserBookingsHandler::new(repo.clone());

        let bookings = handler
            .handle(
                &Identity::new("a@x.com"),
                ListUserBookingsQuery {
                    email: "a@x.com".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(bookings.is_empty());
        assert_eq!(repo.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn mismatch_is_forbidden_and_never_reads_the_store() {
        let repo = Arc::new(CountingRepository::default());
        let handler = ListUserBookingsHandler::new(repo.clone());

        let err = handler
            .handle(
                &Identity::new("a@x.com"),
                ListUserBookingsQuery {
                    email: "b@x.com".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.message, "Forbidden access");
        assert_eq!(repo.reads.load(Ordering::SeqCst), 0);
    }
}
