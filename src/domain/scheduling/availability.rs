//! Remaining-slot computation per appointment option.

use std::collections::HashSet;

use crate::domain::booking::Booking;

use super::AppointmentOption;

/// Computes the remaining bookable slots for every catalog option.
///
/// `bookings_for_date` must already be restricted to the requested date
/// (the date is an opaque exact-match key; callers pass it verbatim to the
/// booking read). For each option, slots consumed by a booking whose
/// `treatment` equals the option's `name` are removed, regardless of which
/// email holds them. Slot ordering is preserved; a fully booked option
/// yields an empty slot list rather than an error.
pub fn compute_availability(
    catalog: &[AppointmentOption],
    bookings_for_date: &[Booking],
) -> Vec<AppointmentOption> {
    catalog
        .iter()
        .map(|option| {
            let taken: HashSet<&str> = bookings_for_date
                .iter()
                .filter(|booking| booking.treatment == option.name)
                .map(|booking| booking.slot.as_str())
                .collect();
            let taken: Vec<&str> = taken.into_iter().collect();
            option.without_slots(&taken)
        })
        .collect()
}

/// Read-only projection of the distinct treatment names in the catalog,
/// for populating choice lists. No filtering logic.
pub fn distinct_treatment_names(catalog: &[AppointmentOption]) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|option| seen.insert(option.name.as_str()))
        .map(|option| option.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::NewBooking;
    use crate::domain::foundation::OptionId;
    use proptest::prelude::*;

    fn option(name: &str, slots: &[&str]) -> AppointmentOption {
        AppointmentOption {
            id: OptionId::new(),
            name: name.to_string(),
            price: 120.0,
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn booking(email: &str, date: &str, treatment: &str, slot: &str) -> Booking {
        Booking::create(NewBooking {
            email: email.to_string(),
            appointment_date: date.to_string(),
            treatment: treatment.to_string(),
            slot: slot.to_string(),
            price: 120.0,
        })
    }

    #[test]
    fn no_bookings_returns_catalog_unchanged() {
        let catalog = vec![option("Braces", &["9:00", "10:00"])];
        let result = compute_availability(&catalog, &[]);
        assert_eq!(result, catalog);
    }

    #[test]
    fn booked_slot_is_excluded() {
        let catalog = vec![option("Braces", &["9:00", "10:00"])];
        let booked = vec![booking("a@x.com", "2024-01-10", "Braces", "9:00")];

        let result = compute_availability(&catalog, &booked);
        assert_eq!(result[0].slots, vec!["10:00"]);
    }

    #[test]
    fn exclusion_is_independent_of_booking_email() {
        let catalog = vec![option("Braces", &["9:00", "10:00"])];
        let by_a = vec![booking("a@x.com", "2024-01-10", "Braces", "9:00")];
        let by_b = vec![booking("b@x.com", "2024-01-10", "Braces", "9:00")];

        assert_eq!(
            compute_availability(&catalog, &by_a),
            compute_availability(&catalog, &by_b)
        );
    }

    #[test]
    fn bookings_for_other_treatments_do_not_filter() {
        let catalog = vec![
            option("Braces", &["9:00", "10:00"]),
            option("Whitening", &["9:00"]),
        ];
        let booked = vec![booking("a@x.com", "2024-01-10", "Whitening", "9:00")];

        let result = compute_availability(&catalog, &booked);
        assert_eq!(result[0].slots, vec!["9:00", "10:00"]);
        assert!(result[1].slots.is_empty());
    }

    #[test]
    fn fully_booked_treatment_yields_empty_slots() {
        let catalog = vec![option("Braces", &["9:00"])];
        let booked = vec![booking("a@x.com", "2024-01-10", "Braces", "9:00")];

        let result = compute_availability(&catalog, &booked);
        assert!(result[0].slots.is_empty());
    }

    #[test]
    fn distinct_names_deduplicate_in_order() {
        let catalog = vec![
            option("Braces", &[]),
            option("Whitening", &[]),
            option("Braces", &[]),
        ];
        assert_eq!(
            distinct_treatment_names(&catalog),
            vec!["Braces", "Whitening"]
        );
    }

    proptest! {
        // With zero bookings, every option's slot sequence survives untouched
        // no matter what the catalog looks like.
        #[test]
        fn empty_ledger_is_identity(
            names in proptest::collection::vec("[A-Za-z]{1,12}", 0..6),
            slots in proptest::collection::vec("[0-9]{1,2}:[0-9]{2}", 0..8),
        ) {
            let catalog: Vec<AppointmentOption> = names
                .iter()
                .map(|name| option(name, &slots.iter().map(String::as_str).collect::<Vec<_>>()))
                .collect();

            prop_assert_eq!(compute_availability(&catalog, &[]), catalog);
        }

        // Any booked (treatment, slot) pair never reappears in that
        // treatment's availability.
        #[test]
        fn booked_slots_never_resurface(pick in 0usize..3) {
            let slots = ["9:00", "10:00", "11:00"];
            let catalog = vec![option("Braces", &slots)];
            let booked = vec![booking("a@x.com", "2024-01-10", "Braces", slots[pick])];

            let result = compute_availability(&catalog, &booked);
            prop_assert!(!result[0].slots.iter().any(|s| s == slots[pick]));
            prop_assert_eq!(result[0].slots.len(), slots.len() - 1);
        }
    }
}
