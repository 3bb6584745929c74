// Search screen filtering: text query, price window, rating floor, amenities and sort order
use crate::catalog::{Amenity, HotelRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 5000.0;

// Sort choice from the filter chips. Serialized with the chip tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "all")]
    None,
    #[serde(rename = "lowToHigh")]
    PriceAscending,
    #[serde(rename = "highToLow")]
    PriceDescending,
    #[serde(rename = "rating")]
    RatingDescending,
}

impl SortMode {
    pub const fn label(self) -> &'static str {
        match self {
            SortMode::None => "All",
            SortMode::PriceAscending => "Price: Low to High",
            SortMode::PriceDescending => "Price: High to Low",
            SortMode::RatingDescending => "Top Rated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub query: String,
    pub min_price: f64,
    pub max_price: f64,
    // 0 disables the rating filter
    pub min_rating: u8,
    pub amenities: BTreeSet<Amenity>,
    pub sort: SortMode,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            min_rating: 0,
            amenities: BTreeSet::new(),
            sort: SortMode::None,
        }
    }
}

impl FilterCriteria {
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    pub fn with_price_range(self, min_price: f64, max_price: f64) -> Self {
        Self {
            min_price,
            max_price,
            ..self
        }
    }

    pub fn with_min_rating(self, min_rating: u8) -> Self {
        Self { min_rating, ..self }
    }

    pub fn with_amenities(self, amenities: impl IntoIterator<Item = Amenity>) -> Self {
        Self {
            amenities: amenities.into_iter().collect(),
            ..self
        }
    }

    pub fn with_sort(self, sort: SortMode) -> Self {
        Self { sort, ..self }
    }
}

// Price text fields fall back to the default bounds when the input is not a number
pub fn parse_min_price(text: &str) -> f64 {
    parse_price_or(text, DEFAULT_MIN_PRICE)
}

pub fn parse_max_price(text: &str) -> f64 {
    parse_price_or(text, DEFAULT_MAX_PRICE)
}

fn parse_price_or(text: &str, fallback: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => fallback,
    }
}

// Derives the hotel list shown on the search and home screens. Stateless,
// every call re-evaluates the full criteria against the input.
#[derive(Debug, Default, Clone, Copy)]
pub struct HotelFilterEngine;

impl HotelFilterEngine {
    pub fn new() -> Self {
        Self
    }

    // Filter then stable-sort; the input slice is never reordered
    pub fn filter_and_sort(
        &self,
        hotels: &[HotelRecord],
        criteria: &FilterCriteria,
    ) -> Vec<HotelRecord> {
        let mut filtered: Vec<HotelRecord> = hotels
            .iter()
            .filter(|hotel| self.matches(hotel, criteria))
            .cloned()
            .collect();

        // slice::sort_by is stable, equal keys keep their input order
        match criteria.sort {
            SortMode::None => {}
            SortMode::PriceAscending => {
                filtered.sort_by(|a, b| a.discounted_price.total_cmp(&b.discounted_price))
            }
            SortMode::PriceDescending => {
                filtered.sort_by(|a, b| b.discounted_price.total_cmp(&a.discounted_price))
            }
            SortMode::RatingDescending => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }

        debug!(
            total = hotels.len(),
            matched = filtered.len(),
            sort = ?criteria.sort,
            "filtered hotel list"
        );

        filtered
    }

    pub fn matches(&self, hotel: &HotelRecord, criteria: &FilterCriteria) -> bool {
        matches_query(hotel, &criteria.query)
            && matches_price(hotel, criteria.min_price, criteria.max_price)
            && matches_rating(hotel, criteria.min_rating)
            && matches_amenities(&criteria.amenities)
    }
}

fn matches_query(hotel: &HotelRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    hotel.name.to_lowercase().contains(&query) || hotel.location.to_lowercase().contains(&query)
}

fn matches_price(hotel: &HotelRecord, min_price: f64, max_price: f64) -> bool {
    hotel.discounted_price >= min_price && hotel.discounted_price <= max_price
}

// Compares the whole-star part of the rating against the selected floor as
// "at most N stars". The chip reads "N+ Stars"; the comparison is kept as-is.
fn matches_rating(hotel: &HotelRecord, min_rating: u8) -> bool {
    min_rating == 0 || hotel.rating.floor() <= f64::from(min_rating)
}

// Hotels carry no amenity data, so any requirement excludes every hotel
fn matches_amenities(required: &BTreeSet<Amenity>) -> bool {
    required.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use test_case::test_case;

    fn sample_hotel(id: u32, name: &str, location: &str, price: f64, rating: f64) -> HotelRecord {
        HotelRecord {
            id,
            name: name.to_string(),
            rating,
            image: format!("hotel{id}.jpg"),
            original_price: price * 1.4,
            discounted_price: price,
            discount: 29,
            validity: "8-10 August".to_string(),
            conditions: "Free cancellation".to_string(),
            location: location.to_string(),
        }
    }

    fn sample_hotels() -> Vec<HotelRecord> {
        vec![
            sample_hotel(1, "Grand Plaza", "Downtown Istanbul", 850.0, 4.8),
            sample_hotel(2, "Seaside", "Antalya Coast", 1200.0, 4.6),
            sample_hotel(3, "Mountain View Lodge", "Bolu Mountains", 650.0, 3.4),
            sample_hotel(4, "Urban Boutique", "Kadıköy, Istanbul", 850.0, 4.7),
        ]
    }

    fn ids(hotels: &[HotelRecord]) -> Vec<u32> {
        hotels.iter().map(|h| h.id).collect()
    }

    #[test_case(FilterCriteria::default(), vec![1, 2, 3, 4]; "#1 defaults keep input order")]
    #[test_case(FilterCriteria::default().with_query("istanbul"), vec![1, 4]; "#2 query matches location")]
    #[test_case(FilterCriteria::default().with_query("SEASIDE"), vec![2]; "#3 query is case insensitive")]
    #[test_case(FilterCriteria::default().with_query("KÖY"), vec![4]; "#4 query folds non-ascii case")]
    #[test_case(FilterCriteria::default().with_price_range(850.0, 850.0), vec![1, 4]; "#5 price bounds inclusive")]
    #[test_case(FilterCriteria::default().with_price_range(900.0, 500.0), vec![]; "#6 inverted bounds match nothing")]
    #[test_case(FilterCriteria::default().with_min_rating(3), vec![3]; "#7 rating floor compares at most")]
    #[test_case(FilterCriteria::default().with_min_rating(4), vec![1, 2, 3, 4]; "#8 rating floor four")]
    #[test_case(FilterCriteria::default().with_amenities([Amenity::Pool]), vec![]; "#9 amenity requirement excludes all")]
    #[test_case(FilterCriteria::default().with_sort(SortMode::PriceAscending), vec![3, 1, 4, 2]; "#10 price ascending stable")]
    #[test_case(FilterCriteria::default().with_sort(SortMode::PriceDescending), vec![2, 1, 4, 3]; "#11 price descending stable")]
    #[test_case(FilterCriteria::default().with_sort(SortMode::RatingDescending), vec![1, 4, 2, 3]; "#12 rating descending")]
    #[test_case(FilterCriteria::default().with_query("istanbul").with_sort(SortMode::RatingDescending).with_price_range(0.0, 1000.0), vec![1, 4]; "#13 combined filters")]
    fn test_criteria_filter_and_sort(criteria: FilterCriteria, expected_ids: Vec<u32>) {
        let engine = HotelFilterEngine::new();
        let results = engine.filter_and_sort(&sample_hotels(), &criteria);
        assert_eq!(ids(&results), expected_ids);
    }

    #[test]
    fn test_rating_sort_keeps_tie_order() {
        let engine = HotelFilterEngine::new();
        let hotels = vec![
            sample_hotel(1, "Harbour Inn", "Izmir", 420.0, 4.2),
            sample_hotel(2, "Old Town Suites", "Bursa", 610.0, 4.7),
            sample_hotel(3, "Bosphorus House", "Istanbul", 980.0, 4.9),
            sample_hotel(4, "Cliffside Retreat", "Kas", 720.0, 4.7),
            sample_hotel(5, "Vineyard Rooms", "Urla", 540.0, 4.2),
        ];

        let by_rating = FilterCriteria::default().with_sort(SortMode::RatingDescending);
        let results = engine.filter_and_sort(&hotels, &by_rating);
        assert_eq!(ids(&results), vec![3, 2, 4, 1, 5]);

        let reversed: Vec<HotelRecord> = hotels.into_iter().rev().collect();
        let results = engine.filter_and_sort(&reversed, &by_rating);
        assert_eq!(ids(&results), vec![3, 4, 2, 5, 1]);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let engine = HotelFilterEngine::new();
        assert!(engine
            .filter_and_sort(&[], &FilterCriteria::default())
            .is_empty());
    }

    #[test]
    fn test_price_scenarios() {
        let engine = HotelFilterEngine::new();
        let hotels = vec![
            sample_hotel(1, "Grand Plaza", "Downtown Istanbul", 850.0, 4.8),
            sample_hotel(2, "Seaside", "Antalya Coast", 1200.0, 4.6),
        ];

        let ascending = FilterCriteria::default().with_sort(SortMode::PriceAscending);
        let results = engine.filter_and_sort(&hotels, &ascending);
        assert_eq!(ids(&results), vec![1, 2]);

        let from_900 = ascending.with_price_range(900.0, 5000.0);
        let results = engine.filter_and_sort(&hotels, &from_900);
        assert_eq!(ids(&results), vec![2]);
        assert_eq!(results[0].discounted_price, 1200.0);
    }

    #[test]
    fn test_results_are_subset_without_duplicates() {
        let engine = HotelFilterEngine::new();
        let hotels = Catalog::builtin().hotels;
        let criteria = FilterCriteria::default()
            .with_price_range(700.0, 1500.0)
            .with_sort(SortMode::PriceDescending);

        let results = engine.filter_and_sort(&hotels, &criteria);
        for hotel in &results {
            assert!(hotels.contains(hotel));
            assert!(engine.matches(hotel, &criteria));
            assert_eq!(results.iter().filter(|h| h.id == hotel.id).count(), 1);
        }
        let rejected = hotels.iter().filter(|h| !results.contains(h));
        for hotel in rejected {
            assert!(!engine.matches(hotel, &criteria));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let engine = HotelFilterEngine::new();
        for sort in [
            SortMode::None,
            SortMode::PriceAscending,
            SortMode::PriceDescending,
            SortMode::RatingDescending,
        ] {
            let criteria = FilterCriteria::default().with_query("a").with_sort(sort);
            let once = engine.filter_and_sort(&sample_hotels(), &criteria);
            let twice = engine.filter_and_sort(&once, &criteria);
            assert_eq!(once, twice, "not idempotent for {sort:?}");
        }
    }

    #[test]
    fn test_empty_query_matches_any_name() {
        let engine = HotelFilterEngine::new();
        let hotels = vec![sample_hotel(9, "", "", 100.0, 1.0)];
        assert_eq!(
            engine.filter_and_sort(&hotels, &FilterCriteria::default()).len(),
            1
        );
    }

    #[test]
    fn test_price_text_coercion() {
        assert_eq!(parse_min_price("250"), 250.0);
        assert_eq!(parse_min_price("abc"), 0.0);
        assert_eq!(parse_min_price(""), 0.0);
        assert_eq!(parse_max_price(" 1500 "), 1500.0);
        assert_eq!(parse_max_price("lots"), 5000.0);
        assert_eq!(parse_max_price("0"), 5000.0);
    }

    #[test]
    fn test_sort_mode_uses_chip_tags() {
        assert_eq!(
            serde_json::to_string(&SortMode::PriceAscending).unwrap(),
            "\"lowToHigh\""
        );
        let parsed: SortMode = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, SortMode::None);
        assert!(serde_json::from_str::<SortMode>("\"distance\"").is_err());
    }
}
