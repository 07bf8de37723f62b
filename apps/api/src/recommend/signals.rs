//! Context aggregation — collects the market, weather, and land-statistic
//! summaries for one region before prompt construction.

use tracing::warn;

use crate::reference::{self, Country};
use crate::weather::WeatherClient;

/// Sentinel substituted when the weather lookup fails. Weather is an
/// enrichment input, never correctness-critical.
pub const WEATHER_UNAVAILABLE: &str = "Weather data unavailable";

/// The three rendered signal strings for one request. Recomputed per
/// request, never persisted.
#[derive(Debug, Clone)]
pub struct RegionalSignals {
    pub market_prices: String,
    pub weather: String,
    pub land_stats: String,
}

/// Gathers all regional signals for a validated region key.
///
/// The caller has already checked the region against the coordinate table,
/// so the lookups here cannot miss; a weather failure degrades to the
/// sentinel string and the pipeline proceeds.
pub async fn gather_signals(region: &str, weather: &WeatherClient) -> RegionalSignals {
    let country = Country::from_region_key(region);

    let weather_summary = match reference::coordinates(region) {
        Some((lat, lon)) => match weather.current(lat, lon).await {
            Ok(observation) => observation.summary(),
            Err(e) => {
                warn!("Weather lookup failed for {region}: {e} — continuing without it");
                WEATHER_UNAVAILABLE.to_string()
            }
        },
        None => {
            // Unreachable for validated requests; degrade the same way.
            warn!("No coordinates for {region} — continuing without weather");
            WEATHER_UNAVAILABLE.to_string()
        }
    };

    RegionalSignals {
        market_prices: reference::market_price_summary(country),
        weather: weather_summary,
        land_stats: reference::land_stat_summary(country),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Network-free coverage: a client pointed at an unroutable key fails the
    // HTTP call, which must degrade to the sentinel without erroring.
    #[tokio::test]
    async fn test_weather_failure_degrades_to_sentinel() {
        let client = WeatherClient::new("invalid-key".to_string());
        let signals = gather_signals("Punjab, Pakistan", &client).await;

        assert_eq!(signals.weather, WEATHER_UNAVAILABLE);
        assert!(signals
            .market_prices
            .starts_with("Average market prices in Pakistan:"));
        assert_eq!(signals.land_stats, "Agricultural land: 47.6%");
    }

    #[tokio::test]
    async fn test_india_region_draws_india_tables() {
        let client = WeatherClient::new("invalid-key".to_string());
        let signals = gather_signals("Tamil Nadu, India", &client).await;

        assert!(signals
            .market_prices
            .starts_with("Average market prices in India:"));
        assert!(signals.market_prices.contains("INR/Quintal"));
        assert_eq!(signals.land_stats, "Agricultural land: 60.5%");
    }

    #[tokio::test]
    async fn test_uncurated_region_still_yields_signals() {
        let client = WeatherClient::new("invalid-key".to_string());
        let signals = gather_signals("Nowhere", &client).await;

        assert_eq!(signals.weather, WEATHER_UNAVAILABLE);
        // Substring derivation defaults to India for non-Pakistan keys.
        assert!(signals
            .market_prices
            .starts_with("Average market prices in India:"));
    }
}
