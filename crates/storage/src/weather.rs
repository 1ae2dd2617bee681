use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use yatra_core::{is_known_city, WeatherSnapshot};

use crate::{LookupError, WeatherProvider};

const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Fixed readings per city, used when no weather API key is configured.
#[derive(Debug, Clone, Default)]
pub struct MockWeather;

impl MockWeather {
    fn reading(city: &str) -> Option<(f32, u8, f32, &'static str)> {
        let reading = match city {
            "ranchi" => (24.5, 62, 9.0, "Partly cloudy"),
            "jamshedpur" => (28.0, 58, 7.5, "Sunny"),
            "dhanbad" => (29.5, 55, 8.0, "Hazy sunshine"),
            "bokaro" => (28.5, 57, 7.0, "Clear sky"),
            "deoghar" => (30.0, 50, 6.5, "Sunny"),
            "hazaribagh" => (23.0, 65, 10.5, "Light breeze, scattered clouds"),
            "netarhat" => (19.5, 72, 12.0, "Misty and cool"),
            "giridih" => (27.0, 60, 8.5, "Partly cloudy"),
            "dumka" => (28.0, 63, 6.0, "Humid with passing clouds"),
            "daltonganj" => (31.0, 45, 9.5, "Hot and dry"),
            _ => return None,
        };
        Some(reading)
    }
}

impl WeatherProvider for MockWeather {
    fn provider_name(&self) -> &'static str {
        "mock"
    }

    async fn snapshot(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        let key = city.trim().to_lowercase();
        let (temperature, humidity, wind_speed, description) =
            Self::reading(&key).ok_or_else(|| LookupError::UnknownCity(city.to_string()))?;

        Ok(WeatherSnapshot {
            temperature,
            humidity,
            wind_speed,
            description: description.to_string(),
        })
    }
}

/// OpenWeatherMap-compatible current-weather client.
#[derive(Debug, Clone)]
pub struct HttpWeather {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: CurrentWeatherMain,
    wind: Option<CurrentWeatherWind>,
    #[serde(default)]
    weather: Vec<CurrentWeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherMain {
    temp: f32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherWind {
    speed: f32,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherCondition {
    description: String,
}

impl HttpWeather {
    pub fn new(api_key: String, base_url: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(8))
            .build()
            .context("failed to build weather HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url
                .map(|value| value.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string()),
            api_key,
        })
    }
}

impl WeatherProvider for HttpWeather {
    fn provider_name(&self) -> &'static str {
        "http"
    }

    async fn snapshot(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        let query = format!("{},IN", city.trim());
        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", query.as_str()),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::UnknownCity(city.to_string()));
        }

        let body = response
            .error_for_status()?
            .json::<CurrentWeatherResponse>()
            .await?;

        Ok(WeatherSnapshot {
            temperature: body.main.temp,
            humidity: body.main.humidity,
            // metres per second to km/h
            wind_speed: body.wind.map(|wind| wind.speed * 3.6).unwrap_or(0.0),
            description: body
                .weather
                .into_iter()
                .next()
                .map(|condition| condition.description)
                .unwrap_or_else(|| "Unavailable".to_string()),
        })
    }
}

#[derive(Clone)]
pub enum Weather {
    Mock(MockWeather),
    Http(HttpWeather),
}

impl Weather {
    pub fn mock() -> Self {
        Self::Mock(MockWeather)
    }

    pub fn http(api_key: String, base_url: Option<String>) -> Result<Self> {
        Ok(Self::Http(HttpWeather::new(api_key, base_url)?))
    }
}

impl WeatherProvider for Weather {
    fn provider_name(&self) -> &'static str {
        match self {
            Weather::Mock(provider) => provider.provider_name(),
            Weather::Http(provider) => provider.provider_name(),
        }
    }

    async fn snapshot(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        if !is_known_city(city) {
            return Err(LookupError::UnknownCity(city.to_string()));
        }

        match self {
            Weather::Mock(provider) => provider.snapshot(city).await,
            Weather::Http(provider) => provider.snapshot(city).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_reads_cities_case_insensitively() {
        let weather = Weather::mock();
        for city in ["Ranchi", "netarhat", " DUMKA "] {
            let snapshot = weather.snapshot(city).await.unwrap();
            assert!(snapshot.humidity <= 100);
            assert!(!snapshot.description.is_empty());
        }
    }

    #[tokio::test]
    async fn unknown_city_is_an_error() {
        let error = Weather::mock().snapshot("patna").await.unwrap_err();
        assert!(matches!(error, LookupError::UnknownCity(city) if city == "patna"));
    }

    #[test]
    fn http_base_url_drops_trailing_slash() {
        let provider = HttpWeather::new("key".to_string(), Some("http://localhost:9/".to_string()))
            .unwrap();
        assert_eq!(provider.base_url, "http://localhost:9");
    }
}
