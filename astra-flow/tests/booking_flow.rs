use astra_availability::launch_windows;
use astra_booking::{BookingDraft, EmergencyContact, Passenger};
use astra_catalog::Catalog;
use astra_flow::{BookingFlow, BookingStep};
use astra_shared::Masked;
use chrono::{Duration, Utc};

fn traveler(first: &str, last: &str) -> Passenger {
    Passenger {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "+44 20 7946 0000".to_string(),
        date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 7, 21),
        nationality: "British".to_string(),
        passport_number: Masked(format!("{}1928374", &first[..1])),
        passport_expiry: Some(Utc::now().date_naive() + Duration::days(3650)),
        emergency_contact: EmergencyContact {
            name: "Morgan Hale".to_string(),
            relation: "Partner".to_string(),
            phone: "+44 20 7946 0001".to_string(),
        },
        special_requirements: String::new(),
        spaceflight_consent: true,
        ..Passenger::new()
    }
}

#[test]
fn test_full_booking_walkthrough() {
    let catalog = Catalog::seeded();
    let mut draft = BookingDraft::new();
    let mut flow = BookingFlow::new();

    // Step 1: pick a package.
    draft.select_package(catalog.package("lunar-odyssey").unwrap().clone());
    assert_eq!(
        flow.go_next(&draft).unwrap(),
        BookingStep::AccommodationSelection
    );

    // Step 2: an accommodation the package does not offer is rejected
    // and the step stays incomplete until a valid one is chosen.
    let mars_habitat = catalog.accommodation("mars-surface-habitat").unwrap().clone();
    assert!(draft.select_accommodation(mars_habitat).is_err());
    assert!(flow.go_next(&draft).is_err());

    let lunar_habitat = catalog.accommodation("lunar-habitat").unwrap().clone();
    draft.select_accommodation(lunar_habitat).unwrap();
    assert_eq!(flow.go_next(&draft).unwrap(), BookingStep::DateSelection);

    // Step 3: departure date from the offered launch windows.
    let windows = launch_windows(Utc::now().date_naive(), 12, 14);
    draft.select_departure_date(windows[0]);
    assert_eq!(flow.go_next(&draft).unwrap(), BookingStep::PassengerDetails);

    // Step 4: two travelers with complete details.
    draft.add_passenger(traveler("Amara", "Okafor")).unwrap();
    draft.add_passenger(traveler("Jonas", "Lindqvist")).unwrap();
    assert_eq!(flow.go_next(&draft).unwrap(), BookingStep::BookingSummary);

    // Step 5: review and pay. (450k + 200k) x 2 travelers.
    assert_eq!(draft.total_price(), 1_300_000);
    let reference = draft.confirm("credit-card").unwrap();
    assert!(reference.starts_with("AST-"));

    assert_eq!(
        flow.go_next(&draft).unwrap(),
        BookingStep::BookingConfirmation
    );
    let booking = draft.booking().unwrap();
    assert_eq!(booking.reference, reference);
    assert_eq!(booking.passenger_count, 2);

    // Start over: both the draft and the flow return to their initial
    // state and the reference is gone.
    draft.reset();
    flow.reset();
    assert_eq!(flow.current(), BookingStep::PackageSelection);
    assert!(draft.reference().is_none());
    assert!(flow.go_next(&draft).is_err());
}

#[test]
fn test_summary_unreachable_without_confirmation() {
    let catalog = Catalog::seeded();
    let mut draft = BookingDraft::new();
    let mut flow = BookingFlow::new();

    draft.select_package(catalog.package("orbital-luxury").unwrap().clone());
    draft
        .select_accommodation(catalog.accommodation("orbital-standard").unwrap().clone())
        .unwrap();
    draft.select_departure_date(Utc::now().date_naive() + Duration::days(30));
    draft.add_passenger(traveler("Noor", "Haddad")).unwrap();

    // Jump straight to the summary: passenger details are complete.
    flow.go_to(BookingStep::BookingSummary, &draft).unwrap();

    // But the confirmation page stays gated until confirm succeeds.
    assert!(flow.go_next(&draft).is_err());
    draft.confirm("credit-card").unwrap();
    assert_eq!(
        flow.go_next(&draft).unwrap(),
        BookingStep::BookingConfirmation
    );
}
