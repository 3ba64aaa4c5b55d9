//! CreateBookingHandler - conditional booking creation.

use std::sync::Arc;

use crate::domain::booking::{
    duplicate_booking_message, Booking, CreateBookingOutcome, NewBooking,
};
use crate::domain::foundation::DomainError;
use crate::ports::{BookingInsert, BookingRepository};

/// Command to create a booking from a client-supplied candidate.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub candidate: NewBooking,
}

/// Handler enforcing the uniqueness rule through the repository's atomic
/// conditional insert. A duplicate is a soft rejection, not an error.
pub struct CreateBookingHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(
        &self,
        cmd: CreateBookingCommand,
    ) -> Result<CreateBookingOutcome, DomainError> {
        let booking = Booking::create(cmd.candidate);

        match self.bookings.insert_unique(&booking).await? {
            BookingInsert::Inserted => {
                tracing::info!(
                    booking_id = %booking.id,
                    treatment = %booking.treatment,
                    date = %booking.appointment_date,
                    "booking created"
                );
                Ok(CreateBookingOutcome::Created(booking))
            }
            BookingInsert::Duplicate => Ok(CreateBookingOutcome::Rejected {
                message: duplicate_booking_message(&booking.appointment_date),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBookingRepository;

    fn candidate() -> NewBooking {
        NewBooking {
            email: "a@x.com".to_string(),
            appointment_date: "2024-01-10".to_string(),
            treatment: "Braces".to_string(),
            slot: "9:00".to_string(),
            price: 99.0,
        }
    }

    #[tokio::test]
    async fn first_booking_is_created() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let handler = CreateBookingHandler::new(repo.clone());

        let outcome = handler
            .handle(CreateBookingCommand {
                candidate: candidate(),
            })
            .await
            .unwrap();

        match outcome {
            CreateBookingOutcome::Created(booking) => {
                assert_eq!(booking.email, "a@x.com");
            }
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn duplicate_triple_is_rejected_with_one_persisted_row() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let handler = CreateBookingHandler::new(repo.clone());

        let first = handler
            .handle(CreateBookingCommand {
                candidate: candidate(),
            })
            .await
            .unwrap();
        assert!(matches!(first, CreateBookingOutcome::Created(_)));

        let second = handler
            .handle(CreateBookingCommand {
                candidate: candidate(),
            })
            .await
            .unwrap();
        match second {
            CreateBookingOutcome::Rejected { message } => {
                assert_eq!(message, "You already have a booking on 2024-01-10");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }

        let stored = repo.list_by_email("a@x.com").await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn different_slot_same_triple_is_still_a_duplicate() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let handler = CreateBookingHandler::new(repo);

        handler
            .handle(CreateBookingCommand {
                candidate: candidate(),
            })
            .await
            .unwrap();

        let mut other_slot = candidate();
        other_slot.slot = "10:00".to_string();
        let outcome = handler
            .handle(CreateBookingCommand {
                candidate: other_slot,
            })
            .await
            .unwrap();

        assert!(matches!(outcome, CreateBookingOutcome::Rejected { .. }));
    }

    #[tokio::test]
    async fn different_treatment_is_not_a_duplicate() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let handler = CreateBookingHandler::new(repo);

        handler
            .handle(CreateBookingCommand {
                candidate: candidate(),
            })
            .await
            .unwrap();

        let mut whitening = candidate();
        whitening.treatment = "Whitening".to_string();
        let outcome = handler
            .handle(CreateBookingCommand {
                candidate: whitening,
            })
            .await
            .unwrap();

        assert!(matches!(outcome, CreateBookingOutcome::Created(_)));
    }
}
