// Core library for the hotel booking demo app

// Catalog data and the pure search/date logic
pub mod catalog;
pub mod date_range;
pub mod format;
pub mod hotel_filter;

// Booking flow, simulated sign-in and the shared application state
pub mod auth;
pub mod booking;
pub mod state;

// Ambient plumbing
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export key types for convenience
pub use auth::{AuthError, Credentials, ProfileUpdate, Registration, UserProfile};
pub use booking::{BookingError, GuestCounts, Invoice, PaymentDetails, PriceQuote};
pub use catalog::{Amenity, Catalog, CatalogError, HotelRecord, LoyaltyProgram, Offer, TravelIdea};
pub use config::{AppConfig, ConfigError};
pub use date_range::{DateRangeSelector, DateSelection, DayMarker, Decorations};
pub use error::AppError;
pub use hotel_filter::{FilterCriteria, HotelFilterEngine, SortMode};
pub use state::{Action, AppState, Modal, Store};
