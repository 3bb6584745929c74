// Booking quote, simulated payment and invoice generation
use crate::catalog::HotelRecord;
use crate::date_range::DateSelection;
use crate::format::{format_date, format_price};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Stay length used when no complete date range has been picked
pub const DEFAULT_NIGHTS: u32 = 2;
pub const DEFAULT_SERVICE_FEE: f64 = 50.0;

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    #[error("Please fill in all payment details (missing: {})", .0.join(", "))]
    MissingPaymentDetails(Vec<&'static str>),

    #[error("No hotel selected")]
    NoHotelSelected,

    #[error("Hotel not found in catalog: {0}")]
    UnknownHotel(String),
}

pub fn nights_between(start: Option<NaiveDate>, end: Option<NaiveDate>) -> u32 {
    match (start, end) {
        (Some(start), Some(end)) => {
            let days = (end - start).num_days().unsigned_abs();
            u32::try_from(days).unwrap_or(u32::MAX)
        }
        _ => DEFAULT_NIGHTS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub room_rate: f64,
    pub nights: u32,
    pub service_fee: f64,
    pub subtotal: f64,
    pub total: f64,
}

impl PriceQuote {
    pub fn new(room_rate: f64, nights: u32, service_fee: f64) -> Self {
        let subtotal = room_rate * f64::from(nights);
        Self {
            room_rate,
            nights,
            service_fee,
            subtotal,
            total: subtotal + service_fee,
        }
    }

    // Quote for the hotel's discounted nightly rate over the picked dates
    pub fn for_stay(hotel: &HotelRecord, selection: &DateSelection, service_fee: f64) -> Self {
        let nights = nights_between(selection.start, selection.end);
        Self::new(hotel.discounted_price, nights, service_fee)
    }

    pub fn nights_label(&self) -> String {
        if self.nights == 1 {
            "1 night".to_string()
        } else {
            format!("{} nights", self.nights)
        }
    }
}

// Rooms-and-guests picker. Counts saturate at the picker bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCounts {
    pub rooms: u8,
    pub adults: u8,
    pub children: u8,
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self {
            rooms: 1,
            adults: 2,
            children: 0,
        }
    }
}

impl GuestCounts {
    pub const ROOMS: (u8, u8) = (1, 5);
    pub const ADULTS: (u8, u8) = (1, 10);
    pub const CHILDREN: (u8, u8) = (0, 8);

    pub fn set_rooms(&mut self, rooms: u8) {
        self.rooms = rooms.clamp(Self::ROOMS.0, Self::ROOMS.1);
    }

    pub fn set_adults(&mut self, adults: u8) {
        self.adults = adults.clamp(Self::ADULTS.0, Self::ADULTS.1);
    }

    pub fn set_children(&mut self, children: u8) {
        self.children = children.clamp(Self::CHILDREN.0, Self::CHILDREN.1);
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {} · {} {} · {} {}",
            self.rooms,
            plural(self.rooms, "room", "rooms"),
            self.adults,
            plural(self.adults, "adult", "adults"),
            self.children,
            plural(self.children, "child", "children"),
        )
    }
}

fn plural(count: u8, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub card_number: String,
    pub card_holder: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentDetails {
    // Simulated payment: every field must be filled in, nothing else is checked
    pub fn validate(&self) -> Result<(), BookingError> {
        let missing: Vec<&'static str> = [
            ("card number", &self.card_number),
            ("card holder", &self.card_holder),
            ("expiry date", &self.expiry),
            ("CVV", &self.cvv),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BookingError::MissingPaymentDetails(missing))
        }
    }

    // Last four digits for receipts, e.g. "•••• 4242"
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("•••• {tail}")
    }
}

// Groups card digits in blocks of four as the user types
pub fn format_card_number(raw: &str) -> String {
    let cleaned: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    cleaned
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub description: String,
    pub detail: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub number: String,
    pub issued_on: NaiveDate,
    pub hotel_name: String,
    pub location: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: GuestCounts,
    pub lines: Vec<InvoiceLine>,
    pub total: f64,
}

impl Invoice {
    pub fn issue(
        hotel: &HotelRecord,
        selection: &DateSelection,
        guests: GuestCounts,
        quote: &PriceQuote,
        issued_at: DateTime<Utc>,
        currency_symbol: &str,
    ) -> Self {
        let lines = vec![
            InvoiceLine {
                description: "Room Rate (per night)".to_string(),
                detail: format!(
                    "{} × {}",
                    quote.nights_label(),
                    format_price(quote.room_rate, currency_symbol)
                ),
                amount: quote.subtotal,
            },
            InvoiceLine {
                description: "Service Fee".to_string(),
                detail: "Booking service".to_string(),
                amount: quote.service_fee,
            },
        ];

        Self {
            number: invoice_number(issued_at),
            issued_on: issued_at.date_naive(),
            hotel_name: hotel.name.clone(),
            location: hotel.location.clone(),
            check_in: selection.start,
            check_out: selection.end,
            guests,
            lines,
            total: quote.total,
        }
    }

    // e.g. "August 8, 2024"
    pub fn issued_label(&self) -> String {
        self.issued_on.format("%B %-d, %Y").to_string()
    }

    pub fn stay_label(&self) -> String {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                format!("{} - {}", format_date(check_in), format_date(check_out))
            }
            (Some(check_in), None) => format_date(check_in),
            _ => String::new(),
        }
    }

    pub fn share_message(&self) -> String {
        format!("Invoice {} - {}", self.number, self.hotel_name)
    }
}

// "INV-" followed by the last eight digits of the millisecond timestamp
pub fn invoice_number(issued_at: DateTime<Utc>) -> String {
    format!(
        "INV-{:08}",
        issued_at.timestamp_millis().rem_euclid(100_000_000)
    )
}
