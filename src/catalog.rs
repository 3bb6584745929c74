// Static demo catalog: weekend hotels, offers, loyalty programs and travel ideas
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown amenity id: {0}")]
    UnknownAmenity(String),
}

// One bookable property. Prices are in the catalog currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    pub id: u32,
    pub name: String,
    pub rating: f64,
    pub image: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub discount: u32,
    pub validity: String,
    pub conditions: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyProgram {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelIdea {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub image: String,
    pub rating: f64,
    // Display string, e.g. "₺2,500"
    pub price: String,
    pub description: String,
}

// Amenities offered in the advanced filter panel. Hotel records carry no
// amenity data, so a non-empty amenity requirement never matches anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Parking,
    Breakfast,
    Pool,
    Gym,
    Spa,
    Bar,
    #[serde(rename = "shuttle")]
    AirportShuttle,
}

impl Amenity {
    pub const ALL: [Amenity; 8] = [
        Amenity::Wifi,
        Amenity::Parking,
        Amenity::Breakfast,
        Amenity::Pool,
        Amenity::Gym,
        Amenity::Spa,
        Amenity::Bar,
        Amenity::AirportShuttle,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Parking => "parking",
            Amenity::Breakfast => "breakfast",
            Amenity::Pool => "pool",
            Amenity::Gym => "gym",
            Amenity::Spa => "spa",
            Amenity::Bar => "bar",
            Amenity::AirportShuttle => "shuttle",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Amenity::Wifi => "WiFi",
            Amenity::Parking => "Parking",
            Amenity::Breakfast => "Breakfast",
            Amenity::Pool => "Pool",
            Amenity::Gym => "Gym",
            Amenity::Spa => "Spa",
            Amenity::Bar => "Bar",
            Amenity::AirportShuttle => "Airport Shuttle",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Amenity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Amenity::ALL
            .into_iter()
            .find(|amenity| amenity.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownAmenity(wanted.to_string()))
    }
}

// Read-only datasets handed to the screens once at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Catalog {
    pub hotels: Vec<HotelRecord>,
    pub offers: Vec<Offer>,
    pub loyalty_programs: Vec<LoyaltyProgram>,
    pub ideas: Vec<TravelIdea>,
}

impl Catalog {
    // The fixed demo dataset
    pub fn builtin() -> Self {
        Self {
            hotels: weekend_hotels(),
            offers: offers(),
            loyalty_programs: loyalty_programs(),
            ideas: travel_ideas(),
        }
    }

    // Parse a catalog document with the same shape as the builtin dataset
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        debug!(
            hotels = catalog.hotels.len(),
            offers = catalog.offers.len(),
            loyalty_programs = catalog.loyalty_programs.len(),
            ideas = catalog.ideas.len(),
            "parsed catalog document"
        );
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(path = %path.display(), hotels = catalog.hotels.len(), "loaded catalog");
        Ok(catalog)
    }

    // Screens refer to the selected hotel by name
    pub fn hotel_by_name(&self, name: &str) -> Option<&HotelRecord> {
        self.hotels.iter().find(|hotel| hotel.name == name)
    }

    pub fn hotel_by_id(&self, id: u32) -> Option<&HotelRecord> {
        self.hotels.iter().find(|hotel| hotel.id == id)
    }

    // Details screen: first hotel whose name or location contains the
    // destination, ignoring case, else the first hotel in the catalog
    pub fn hotel_for_destination(&self, destination: &str) -> Option<&HotelRecord> {
        let wanted = destination.to_lowercase();
        let found = self.hotels.iter().find(|hotel| {
            hotel.name.to_lowercase().contains(&wanted)
                || hotel.location.to_lowercase().contains(&wanted)
        });
        if found.is_none() {
            debug!(destination, "no hotel matches destination, using the first one");
        }
        found.or_else(|| self.hotels.first())
    }
}

const HOTEL_VALIDITY: &str = "8-10 August";

fn hotel(
    id: u32,
    name: &str,
    rating: f64,
    image: &str,
    (original_price, discounted_price, discount): (f64, f64, u32),
    conditions: &str,
    location: &str,
) -> HotelRecord {
    HotelRecord {
        id,
        name: name.to_string(),
        rating,
        image: image.to_string(),
        original_price,
        discounted_price,
        discount,
        validity: HOTEL_VALIDITY.to_string(),
        conditions: conditions.to_string(),
        location: location.to_string(),
    }
}

pub fn weekend_hotels() -> Vec<HotelRecord> {
    vec![
        hotel(
            1,
            "Grand Plaza Hotel",
            4.8,
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=400",
            (1200.0, 850.0, 29),
            "Free cancellation • Breakfast included",
            "Downtown Istanbul",
        ),
        hotel(
            2,
            "Seaside Resort & Spa",
            4.6,
            "https://images.unsplash.com/photo-1571896349842-33c89424de2d?w=400",
            (1800.0, 1200.0, 33),
            "Non-refundable • All inclusive",
            "Antalya Coast",
        ),
        hotel(
            3,
            "Mountain View Lodge",
            4.4,
            "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=400",
            (950.0, 650.0, 32),
            "Free cancellation • Parking included",
            "Bolu Mountains",
        ),
        hotel(
            4,
            "Urban Boutique Hotel",
            4.7,
            "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=400",
            (1100.0, 750.0, 32),
            "Free cancellation • WiFi included",
            "Kadıköy, Istanbul",
        ),
    ]
}

pub fn offers() -> Vec<Offer> {
    vec![Offer {
        id: 1,
        title: "Summer Sale".to_string(),
        description: "Up to 50% off on summer bookings.".to_string(),
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=400".to_string(),
    }]
}

pub fn loyalty_programs() -> Vec<LoyaltyProgram> {
    let program = |id: u32, name: &str, description: &str, benefits: &[&str]| LoyaltyProgram {
        id,
        name: name.to_string(),
        description: description.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
    };

    vec![
        program(
            1,
            "Loyalty Program A",
            "Earn points with every booking.",
            &["Free breakfast", "Late checkout", "Room upgrades"],
        ),
        program(
            2,
            "Loyalty Program B",
            "Exclusive discounts for members.",
            &["10% off bookings", "Priority support"],
        ),
        program(
            3,
            "Loyalty Program C",
            "Special offers and rewards.",
            &["Free nights", "Gift vouchers"],
        ),
        program(
            4,
            "Loyalty Program D",
            "Personalized travel experiences.",
            &["Custom itineraries", "Exclusive events"],
        ),
        program(
            5,
            "Loyalty Program E",
            "Access to premium services.",
            &["Concierge service", "Airport transfers"],
        ),
    ]
}

pub fn travel_ideas() -> Vec<TravelIdea> {
    let idea = |id: u32, name: &str, country: &str, image: &str, rating: f64, price: &str, description: &str| {
        TravelIdea {
            id,
            name: name.to_string(),
            country: country.to_string(),
            image: image.to_string(),
            rating,
            price: price.to_string(),
            description: description.to_string(),
        }
    };

    vec![
        idea(
            1,
            "Santorini",
            "Greece",
            "https://images.unsplash.com/photo-1570077188670-e3a8d69ac5ff?w=400",
            4.9,
            "₺2,500",
            "Stunning sunsets and white architecture",
        ),
        idea(
            2,
            "Bali",
            "Indonesia",
            "https://images.unsplash.com/photo-1537953773345-d172ccf13cf1?w=400",
            4.8,
            "₺3,200",
            "Tropical paradise with rich culture",
        ),
        idea(
            3,
            "Tokyo",
            "Japan",
            "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=400",
            4.7,
            "₺4,500",
            "Modern city with traditional charm",
        ),
        idea(
            4,
            "New York",
            "USA",
            "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?w=400",
            4.6,
            "₺5,800",
            "The city that never sleeps",
        ),
        idea(
            5,
            "Paris",
            "France",
            "https://images.unsplash.com/photo-1502602898534-861c1a3c1b4b?w=400",
            4.9,
            "₺3,900",
            "City of love and lights",
        ),
        idea(
            6,
            "Dubai",
            "UAE",
            "https://images.unsplash.com/photo-1512453979798-5ea266f8880c?w=400",
            4.5,
            "₺4,200",
            "Luxury shopping and modern architecture",
        ),
    ]
}
