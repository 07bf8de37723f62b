//! Weather client — wraps the OpenWeather current-conditions endpoint.
//!
//! Callers treat weather as enrichment: the aggregation layer converts any
//! `WeatherError` into a sentinel string instead of failing the request.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response missing field: {0}")]
    MissingField(&'static str),
}

/// Current conditions at one coordinate, already unit-converted (metric).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub temperature_celsius: f64,
    pub humidity_percent: u32,
    pub description: String,
}

impl WeatherObservation {
    /// Fixed-order human-readable summary embedded into prompts.
    pub fn summary(&self) -> String {
        format!(
            "Temperature: {}°C, Humidity: {}%, Conditions: {}",
            self.temperature_celsius, self.humidity_percent, self.description
        )
    }
}

#[derive(Debug, Deserialize)]
struct WeatherBody {
    main: WeatherMain,
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

/// The single OpenWeather client used for all weather lookups.
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Fetches current conditions for a coordinate, in metric units.
    pub async fn current(&self, lat: f64, lon: f64) -> Result<WeatherObservation, WeatherError> {
        let response = self
            .client
            .get(OPENWEATHER_API_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: WeatherBody = response.json().await?;
        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingField("weather[0]"))?;

        let observation = WeatherObservation {
            temperature_celsius: body.main.temp,
            humidity_percent: body.main.humidity,
            description: condition.description,
        };

        debug!(
            "Weather fetched for ({lat}, {lon}): {}",
            observation.summary()
        );

        Ok(observation)
    }
}
