use chrono::{NaiveDate, TimeZone, Utc};
use hotel_booking_core::date_range::parse_day;
use hotel_booking_core::{
    Action, AppConfig, AppState, BookingError, Catalog, Credentials, DayMarker, Modal,
    PaymentDetails, SortMode, Store,
};

fn day(raw: &str) -> NaiveDate {
    parse_day(raw).expect("valid test date")
}

fn card() -> PaymentDetails {
    PaymentDetails {
        card_number: "4242424242424242".to_string(),
        card_holder: "John Doe".to_string(),
        expiry: "12/27".to_string(),
        cvv: "123".to_string(),
    }
}

#[test]
fn test_search_select_pay_and_cancel() {
    let catalog = Catalog::builtin();
    let config = AppConfig::default();
    let store = Store::new(AppState::new());

    let profile = Credentials::new("guest@example.com", "secret")
        .authenticate()
        .expect("demo login succeeds");
    store.dispatch(Action::LogIn(profile));

    // Search screen
    store.dispatch(Action::ShowModal(Modal::AdvancedFilters, true));
    store.dispatch(Action::min_price_input("700"));
    store.dispatch(Action::SetSort(SortMode::PriceDescending));
    store.dispatch(Action::ShowModal(Modal::AdvancedFilters, false));

    let names: Vec<String> = store
        .read(|state| state.visible_hotels(&catalog))
        .into_iter()
        .map(|hotel| hotel.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Seaside Resort & Spa",
            "Grand Plaza Hotel",
            "Urban Boutique Hotel"
        ]
    );

    // Home screen date picker
    store.dispatch(Action::SetDestination("downtown".to_string()));
    store.dispatch(Action::TapDay(day("2024-08-08")));
    store.dispatch(Action::TapDay(day("2024-08-11")));

    let decorations = store.read(|state| state.dates.decorations());
    assert_eq!(decorations.len(), 4);
    assert_eq!(decorations[&day("2024-08-08")], DayMarker::RangeStart);
    assert_eq!(decorations[&day("2024-08-10")], DayMarker::RangeMiddle);
    assert_eq!(decorations[&day("2024-08-11")], DayMarker::RangeEnd);

    // Details screen: Book Now records the booking before any payment
    let booked = store.book_now(&catalog).expect("destination resolves");
    assert_eq!(booked, "Grand Plaza Hotel");
    assert!(store.read(|state| state.is_booked("Grand Plaza Hotel")));

    // Payment screen: an incomplete card form issues no invoice
    let incomplete = PaymentDetails {
        cvv: String::new(),
        ..card()
    };
    let issued_at = Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap();
    assert!(matches!(
        store.confirm_payment(&catalog, &incomplete, &config, issued_at),
        Err(BookingError::MissingPaymentDetails(_))
    ));
    assert!(store.read(|state| state.is_booked("Grand Plaza Hotel")));

    let invoice = store
        .confirm_payment(&catalog, &card(), &config, issued_at)
        .expect("payment confirms");
    assert_eq!(invoice.hotel_name, "Grand Plaza Hotel");
    assert_eq!(invoice.total, 850.0 * 3.0 + 50.0);
    assert_eq!(invoice.issued_label(), "August 1, 2024");
    assert!(invoice.number.starts_with("INV-"));
    assert_eq!(invoice.number.len(), 12);

    // Paying again leaves the single active booking untouched
    store
        .confirm_payment(&catalog, &card(), &config, issued_at)
        .expect("payment confirms");
    assert_eq!(store.snapshot().active_bookings, vec!["Grand Plaza Hotel"]);

    // Booking screen
    let cancelled = store.cancel_booking().expect("a hotel is selected");
    assert_eq!(cancelled, "Grand Plaza Hotel");
    assert!(store.snapshot().active_bookings.is_empty());
}

#[test]
fn test_book_now_then_cancel_without_paying() {
    let catalog = Catalog::builtin();
    let store = Store::default();
    store.dispatch(Action::SetDestination("antalya".to_string()));

    let booked = store.book_now(&catalog).expect("destination resolves");
    assert_eq!(booked, "Seaside Resort & Spa");
    assert_eq!(
        store.snapshot().selected_hotel.as_deref(),
        Some("Seaside Resort & Spa")
    );
    assert!(store.read(|state| state.is_booked("Seaside Resort & Spa")));

    // Booking screen: cancel before reaching payment
    assert_eq!(store.cancel_booking(), Ok("Seaside Resort & Spa".to_string()));
    assert!(store.snapshot().active_bookings.is_empty());
}

#[test]
fn test_payment_does_not_add_a_booking() {
    let store = Store::default();
    store.dispatch(Action::SelectHotel("Urban Boutique Hotel".to_string()));
    store
        .confirm_payment(&Catalog::builtin(), &card(), &AppConfig::default(), Utc::now())
        .expect("payment confirms");
    assert!(store.snapshot().active_bookings.is_empty());
}

#[test]
fn test_payment_without_selection_fails() {
    let store = Store::default();
    let result = store.confirm_payment(
        &Catalog::builtin(),
        &card(),
        &AppConfig::default(),
        Utc::now(),
    );
    assert_eq!(result, Err(BookingError::NoHotelSelected));
    assert_eq!(store.cancel_booking(), Err(BookingError::NoHotelSelected));
}

#[test]
fn test_custom_service_fee_flows_into_invoice() {
    let catalog = Catalog::builtin();
    let config = AppConfig {
        service_fee: 0.0,
        currency_symbol: "€".to_string(),
        ..AppConfig::default()
    };
    let store = Store::default();
    store.dispatch(Action::SelectHotel("Mountain View Lodge".to_string()));

    // No dates picked: the default two-night stay applies
    let invoice = store
        .confirm_payment(&catalog, &card(), &config, Utc::now())
        .expect("payment confirms");
    assert_eq!(invoice.total, 1300.0);
    assert_eq!(invoice.lines[0].detail, "2 nights × €650");
    assert_eq!(invoice.stay_label(), "");
}
