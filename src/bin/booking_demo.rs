// Scripted walk through the booking flow: search, pick dates, book, pay, print the invoice
use anyhow::{Context, Result};
use chrono::Utc;
use hotel_booking_core::date_range::parse_day;
use hotel_booking_core::format::format_price;
use hotel_booking_core::{
    telemetry, Action, AppConfig, AppError, AppState, Catalog, Credentials, PaymentDetails,
    SortMode, Store,
};
use tracing::info;

fn load_catalog(config: &AppConfig) -> Result<Catalog, AppError> {
    match &config.catalog_path {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::builtin()),
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from_env().context("loading configuration")?;
    telemetry::init(&config.log_level)?;

    let catalog = load_catalog(&config).context("loading catalog")?;
    info!(hotels = catalog.hotels.len(), "catalog ready");

    let store = Store::new(AppState::new());

    let profile = Credentials::new("guest@example.com", "demo-password").authenticate()?;
    store.dispatch(Action::LogIn(profile));

    store.dispatch(Action::SetSearchQuery("istanbul".to_string()));
    store.dispatch(Action::SetSort(SortMode::PriceAscending));

    let results = store.read(|state| state.visible_hotels(&catalog));
    println!("Search results ({})", results.len());
    for hotel in &results {
        println!(
            "- {} | {} | {} (was {}) | {:.1}★",
            hotel.name,
            hotel.location,
            format_price(hotel.discounted_price, &config.currency_symbol),
            format_price(hotel.original_price, &config.currency_symbol),
            hotel.rating
        );
    }

    let Some(choice) = results.first() else {
        println!("No results found");
        return Ok(());
    };
    store.dispatch(Action::SetDestination(choice.location.clone()));
    store.dispatch(Action::SaveHotel(choice.name.clone()));

    for raw in ["2024-08-08", "2024-08-10"] {
        store.dispatch(Action::TapDay(parse_day(raw)?));
    }
    let dates = store.read(|state| state.dates.label().to_string());
    println!("\nDates: {dates}");

    let booked = store.book_now(&catalog)?;
    println!("Booked: {booked}");

    let details = PaymentDetails {
        card_number: "4242 4242 4242 4242".to_string(),
        card_holder: "John Doe".to_string(),
        expiry: "12/27".to_string(),
        cvv: "123".to_string(),
    };
    let invoice = store.confirm_payment(&catalog, &details, &config, Utc::now())?;

    println!("\nInvoice {} ({})", invoice.number, invoice.issued_label());
    println!("{} - {}", invoice.hotel_name, invoice.location);
    println!("Stay: {} | {}", invoice.stay_label(), invoice.guests.summary());
    for line in &invoice.lines {
        println!(
            "- {}: {} = {}",
            line.description,
            line.detail,
            format_price(line.amount, &config.currency_symbol)
        );
    }
    println!(
        "Total Amount: {}",
        format_price(invoice.total, &config.currency_symbol)
    );

    Ok(())
}
