// Application state shared by every screen. The composition root owns one
// Store and hands clones of it to the screens; state only changes through
// AppState::apply (AppState + Action -> apply() -> AppState'). Screens read
// derived views such as visible_hotels or quote from a snapshot or Store::read.
use crate::auth::{ProfileUpdate, UserProfile};
use crate::booking::{BookingError, GuestCounts, Invoice, PaymentDetails, PriceQuote};
use crate::catalog::{Amenity, Catalog, HotelRecord};
use crate::config::AppConfig;
use crate::date_range::DateRangeSelector;
use crate::hotel_filter::{
    parse_max_price, parse_min_price, FilterCriteria, HotelFilterEngine, SortMode,
    DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
};
use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    AdvancedFilters,
    DatePicker,
    RoomsAndGuests,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalFlags {
    pub advanced_filters: bool,
    pub date_picker: bool,
    pub rooms_and_guests: bool,
}

impl ModalFlags {
    fn set(&mut self, modal: Modal, visible: bool) {
        match modal {
            Modal::AdvancedFilters => self.advanced_filters = visible,
            Modal::DatePicker => self.date_picker = visible,
            Modal::RoomsAndGuests => self.rooms_and_guests = visible,
        }
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::AdvancedFilters => self.advanced_filters,
            Modal::DatePicker => self.date_picker,
            Modal::RoomsAndGuests => self.rooms_and_guests,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Also fills the destination field
    SelectHotel(String),
    SetDestination(String),
    TapDay(NaiveDate),
    ClearDates,
    SetRooms(u8),
    SetAdults(u8),
    SetChildren(u8),
    SetSearchQuery(String),
    SetSort(SortMode),
    SetMinPrice(f64),
    SetMaxPrice(f64),
    SetMinRating(u8),
    ToggleAmenity(Amenity),
    SetAmenities(BTreeSet<Amenity>),
    ShowModal(Modal, bool),
    SaveHotel(String),
    UnsaveHotel(String),
    AddActiveBooking(String),
    RemoveActiveBooking(String),
    LogIn(UserProfile),
    LogOut,
    UpdateProfile(ProfileUpdate),
    ClearFilters,
    ClearAll,
}

impl Action {
    // Price text boxes dispatch raw input; unparsable text falls back to the default bound
    pub fn min_price_input(text: &str) -> Self {
        Action::SetMinPrice(parse_min_price(text))
    }

    pub fn max_price_input(text: &str) -> Self {
        Action::SetMaxPrice(parse_max_price(text))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub selected_hotel: Option<String>,
    pub destination: String,
    pub dates: DateRangeSelector,
    pub guests: GuestCounts,
    pub search_query: String,
    pub sort: SortMode,
    pub min_price: f64,
    pub max_price: f64,
    pub min_rating: u8,
    pub amenities: BTreeSet<Amenity>,
    pub modals: ModalFlags,
    // Hotel names, insertion ordered, no duplicates
    pub saved_hotels: Vec<String>,
    pub active_bookings: Vec<String>,
    pub user: Option<UserProfile>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_hotel: None,
            destination: String::new(),
            dates: DateRangeSelector::new(),
            guests: GuestCounts::default(),
            search_query: String::new(),
            sort: SortMode::None,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            min_rating: 0,
            amenities: BTreeSet::new(),
            modals: ModalFlags::default(),
            saved_hotels: Vec::new(),
            active_bookings: Vec::new(),
            user: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: Action) {
        debug!(?action, "applying action");

        match action {
            Action::SelectHotel(name) => {
                self.destination = name.clone();
                self.selected_hotel = Some(name);
            }
            Action::SetDestination(destination) => self.destination = destination,
            Action::TapDay(day) => {
                self.dates.on_day_tap(day);
            }
            Action::ClearDates => self.dates.clear(),
            Action::SetRooms(rooms) => self.guests.set_rooms(rooms),
            Action::SetAdults(adults) => self.guests.set_adults(adults),
            Action::SetChildren(children) => self.guests.set_children(children),
            Action::SetSearchQuery(query) => self.search_query = query,
            Action::SetSort(sort) => self.sort = sort,
            Action::SetMinPrice(price) => self.min_price = price,
            Action::SetMaxPrice(price) => self.max_price = price,
            Action::SetMinRating(rating) => self.min_rating = rating.min(5),
            Action::ToggleAmenity(amenity) => {
                if !self.amenities.remove(&amenity) {
                    self.amenities.insert(amenity);
                }
            }
            Action::SetAmenities(amenities) => self.amenities = amenities,
            Action::ShowModal(modal, visible) => self.modals.set(modal, visible),
            Action::SaveHotel(name) => push_unique(&mut self.saved_hotels, name),
            Action::UnsaveHotel(name) => self.saved_hotels.retain(|saved| *saved != name),
            Action::AddActiveBooking(name) => push_unique(&mut self.active_bookings, name),
            Action::RemoveActiveBooking(name) => {
                self.active_bookings.retain(|booked| *booked != name)
            }
            Action::LogIn(profile) => {
                info!(user_id = %profile.id, "user signed in");
                self.user = Some(profile);
            }
            Action::LogOut => {
                info!("user signed out");
                self.user = None;
            }
            Action::UpdateProfile(update) => match self.user.as_mut() {
                Some(profile) => update.apply_to(profile),
                None => debug!("profile update ignored, nobody is signed in"),
            },
            Action::ClearFilters => self.clear_filters(),
            Action::ClearAll => {
                // Saved hotels, bookings and the signed-in user survive
                let saved_hotels = std::mem::take(&mut self.saved_hotels);
                let active_bookings = std::mem::take(&mut self.active_bookings);
                let user = self.user.take();
                *self = Self {
                    saved_hotels,
                    active_bookings,
                    user,
                    ..Self::default()
                };
            }
        }
    }

    fn clear_filters(&mut self) {
        self.sort = SortMode::None;
        self.min_price = DEFAULT_MIN_PRICE;
        self.max_price = DEFAULT_MAX_PRICE;
        self.min_rating = 0;
        self.amenities.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_saved(&self, hotel_name: &str) -> bool {
        self.saved_hotels.iter().any(|saved| saved == hotel_name)
    }

    pub fn is_booked(&self, hotel_name: &str) -> bool {
        self.active_bookings.iter().any(|booked| booked == hotel_name)
    }

    pub fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.search_query.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_rating: self.min_rating,
            amenities: self.amenities.clone(),
            sort: self.sort,
        }
    }

    pub fn visible_hotels(&self, catalog: &Catalog) -> Vec<HotelRecord> {
        HotelFilterEngine::new().filter_and_sort(&catalog.hotels, &self.filter_criteria())
    }

    // Saved screen lists saved hotels in catalog order
    pub fn saved_hotel_records<'a>(&self, catalog: &'a Catalog) -> Vec<&'a HotelRecord> {
        catalog
            .hotels
            .iter()
            .filter(|hotel| self.is_saved(&hotel.name))
            .collect()
    }

    // Hotel shown on the details screen for the current destination
    pub fn destination_hotel<'a>(&self, catalog: &'a Catalog) -> Option<&'a HotelRecord> {
        catalog.hotel_for_destination(&self.destination)
    }

    pub fn selected_hotel_record<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Result<&'a HotelRecord, BookingError> {
        let name = self
            .selected_hotel
            .as_deref()
            .ok_or(BookingError::NoHotelSelected)?;
        catalog
            .hotel_by_name(name)
            .ok_or_else(|| BookingError::UnknownHotel(name.to_string()))
    }

    pub fn quote(&self, catalog: &Catalog, service_fee: f64) -> Result<PriceQuote, BookingError> {
        let hotel = self.selected_hotel_record(catalog)?;
        Ok(PriceQuote::for_stay(hotel, self.dates.selection(), service_fee))
    }
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.contains(&name) {
        names.push(name);
    }
}

// Cloneable handle to the single AppState owned by the composition root
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub fn dispatch(&self, action: Action) {
        self.state.write().apply(action);
    }

    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.read())
    }

    // Details screen "Book Now": select the destination hotel and record an
    // active booking for it. Payment happens later and separately.
    pub fn book_now(&self, catalog: &Catalog) -> Result<String, BookingError> {
        let mut state = self.state.write();
        let name = state
            .destination_hotel(catalog)
            .map(|hotel| hotel.name.clone())
            .ok_or_else(|| BookingError::UnknownHotel(state.destination.clone()))?;

        state.apply(Action::SelectHotel(name.clone()));
        state.apply(Action::AddActiveBooking(name.clone()));
        info!(hotel = %name, "hotel booked");
        Ok(name)
    }

    // Payment screen: validate the card form and issue the invoice for the
    // selected hotel. Active bookings are left alone.
    pub fn confirm_payment(
        &self,
        catalog: &Catalog,
        details: &PaymentDetails,
        config: &AppConfig,
        issued_at: DateTime<Utc>,
    ) -> Result<Invoice, BookingError> {
        details.validate()?;

        let state = self.state.read();
        let hotel = state.selected_hotel_record(catalog)?;
        let quote = PriceQuote::for_stay(hotel, state.dates.selection(), config.service_fee);

        let invoice = Invoice::issue(
            hotel,
            state.dates.selection(),
            state.guests,
            &quote,
            issued_at,
            &config.currency_symbol,
        );
        info!(
            invoice = %invoice.number,
            hotel = %hotel.name,
            total = quote.total,
            "booking confirmed"
        );
        Ok(invoice)
    }

    // Booking screen: drop the active booking for the selected hotel
    pub fn cancel_booking(&self) -> Result<String, BookingError> {
        let mut state = self.state.write();
        let name = state
            .selected_hotel
            .clone()
            .ok_or(BookingError::NoHotelSelected)?;
        state.apply(Action::RemoveActiveBooking(name.clone()));
        info!(hotel = %name, "booking cancelled");
        Ok(name)
    }
}
