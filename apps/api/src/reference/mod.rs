//! Static reference data: curated regions with coordinates, per-country crop
//! price tables, and agricultural land statistics.
//!
//! Everything here is a process-wide `'static` constant — read-only after
//! startup and safe for unsynchronized concurrent reads. The region key set
//! is the single source of truth for which requests are accepted.

use serde::Serialize;

/// Countries covered by the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Country {
    Pakistan,
    India,
}

impl Country {
    pub fn as_str(self) -> &'static str {
        match self {
            Country::Pakistan => "Pakistan",
            Country::India => "India",
        }
    }

    /// Derives the country from a region key by substring match: any key
    /// containing "Pakistan" maps to Pakistan, everything else to India.
    /// Safe for the curated key set because every key embeds exactly one
    /// country name.
    pub fn from_region_key(region: &str) -> Self {
        if region.contains("Pakistan") {
            Country::Pakistan
        } else {
            Country::India
        }
    }
}

/// One row of a per-country crop price table. Prices are five-year averages
/// in the country's customary market unit.
#[derive(Debug, Clone, Copy)]
pub struct CropPrice {
    pub crop: &'static str,
    pub price: u32,
    pub unit: &'static str,
}

const PAKISTAN_PRICES: [CropPrice; 8] = [
    CropPrice { crop: "Wheat", price: 1500, unit: "PKR/40kg" },
    CropPrice { crop: "Cotton", price: 4200, unit: "PKR/40kg" },
    CropPrice { crop: "Mustard", price: 3600, unit: "PKR/40kg" },
    CropPrice { crop: "Sugarcane", price: 180, unit: "PKR/40kg" },
    CropPrice { crop: "Rice", price: 2200, unit: "PKR/40kg" },
    CropPrice { crop: "Maize", price: 1800, unit: "PKR/40kg" },
    CropPrice { crop: "Chickpeas", price: 3000, unit: "PKR/40kg" },
    CropPrice { crop: "Potatoes", price: 1200, unit: "PKR/40kg" },
];

const INDIA_PRICES: [CropPrice; 8] = [
    CropPrice { crop: "Wheat", price: 2200, unit: "INR/Quintal" },
    CropPrice { crop: "Cotton", price: 6200, unit: "INR/Quintal" },
    CropPrice { crop: "Mustard", price: 5500, unit: "INR/Quintal" },
    CropPrice { crop: "Sugarcane", price: 315, unit: "INR/Quintal" },
    CropPrice { crop: "Rice", price: 2000, unit: "INR/Quintal" },
    CropPrice { crop: "Maize", price: 1850, unit: "INR/Quintal" },
    CropPrice { crop: "Soybeans", price: 4000, unit: "INR/Quintal" },
    CropPrice { crop: "Turmeric", price: 7500, unit: "INR/Quintal" },
];

/// Curated region keys and their (latitude, longitude).
const REGION_COORDINATES: [(&str, f64, f64); 9] = [
    ("Punjab, Pakistan", 31.1471, 75.3412),
    ("Sindh, Pakistan", 25.8943, 68.5247),
    ("Balochistan, Pakistan", 29.4202, 65.5943),
    ("Khyber Pakhtunkhwa, Pakistan", 34.9526, 72.3311),
    ("Gujarat, India", 22.2587, 71.1924),
    ("Maharashtra, India", 19.7515, 75.7139),
    ("Punjab, India", 31.1471, 75.3412),
    ("Tamil Nadu, India", 11.1271, 78.6569),
    ("Rajasthan, India", 27.0238, 74.2179),
];

/// Share of each country's land area that is agricultural.
const AGRICULTURAL_LAND_PERCENT: [(Country, f64); 2] =
    [(Country::Pakistan, 47.6), (Country::India, 60.5)];

/// Looks up the coordinates for a curated region key.
pub fn coordinates(region: &str) -> Option<(f64, f64)> {
    REGION_COORDINATES
        .iter()
        .find(|(key, _, _)| *key == region)
        .map(|(_, lat, lon)| (*lat, *lon))
}

/// All curated region keys, in table order.
pub fn region_keys() -> Vec<&'static str> {
    REGION_COORDINATES.iter().map(|(key, _, _)| *key).collect()
}

fn prices_for(country: Country) -> &'static [CropPrice] {
    match country {
        Country::Pakistan => &PAKISTAN_PRICES,
        Country::India => &INDIA_PRICES,
    }
}

/// Renders the per-country price table as one comma-joined summary line,
/// e.g. "Average market prices in Pakistan: Wheat: 1500 PKR/40kg, ...".
pub fn market_price_summary(country: Country) -> String {
    let prices = prices_for(country)
        .iter()
        .map(|p| format!("{}: {} {}", p.crop, p.price, p.unit))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Average market prices in {}: {}", country.as_str(), prices)
}

fn agricultural_land_percent(country: Country) -> Option<f64> {
    AGRICULTURAL_LAND_PERCENT
        .iter()
        .find(|(c, _)| *c == country)
        .map(|(_, percent)| *percent)
}

/// Renders the land statistic, e.g. "Agricultural land: 47.6%". A country
/// missing from the stats table degrades to "N/A" rather than failing.
pub fn land_stat_summary(country: Country) -> String {
    match agricultural_land_percent(country) {
        Some(percent) => format!("Agricultural land: {percent}%"),
        None => "Agricultural land: N/A%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pakistan_substring_always_selects_pakistan() {
        assert_eq!(
            Country::from_region_key("Punjab, Pakistan"),
            Country::Pakistan
        );
        assert_eq!(
            Country::from_region_key("Khyber Pakhtunkhwa, Pakistan"),
            Country::Pakistan
        );
        // Any key containing the substring draws from the Pakistan table,
        // regardless of the exact region string.
        assert_eq!(
            Country::from_region_key("Somewhere, Pakistan (new)"),
            Country::Pakistan
        );
    }

    #[test]
    fn test_non_pakistan_keys_default_to_india() {
        assert_eq!(Country::from_region_key("Gujarat, India"), Country::India);
        assert_eq!(Country::from_region_key("Punjab, India"), Country::India);
    }

    #[test]
    fn test_market_summary_draws_from_the_right_table() {
        let pk = market_price_summary(Country::Pakistan);
        assert!(pk.starts_with("Average market prices in Pakistan:"));
        assert!(pk.contains("Wheat: 1500 PKR/40kg"));
        assert!(pk.contains("Chickpeas: 3000 PKR/40kg"));
        assert!(!pk.contains("INR/Quintal"));

        let ind = market_price_summary(Country::India);
        assert!(ind.contains("Turmeric: 7500 INR/Quintal"));
        assert!(!ind.contains("PKR/40kg"));
    }

    #[test]
    fn test_coordinates_known_and_unknown() {
        assert_eq!(coordinates("Sindh, Pakistan"), Some((25.8943, 68.5247)));
        assert_eq!(coordinates("Atlantis"), None);
    }

    #[test]
    fn test_region_keys_cover_both_countries() {
        let keys = region_keys();
        assert_eq!(keys.len(), 9);
        assert!(keys.iter().any(|k| k.contains("Pakistan")));
        assert!(keys.iter().any(|k| k.contains("India")));
    }

    #[test]
    fn test_land_stat_rendering() {
        assert_eq!(
            land_stat_summary(Country::Pakistan),
            "Agricultural land: 47.6%"
        );
        assert_eq!(land_stat_summary(Country::India), "Agricultural land: 60.5%");
    }
}
