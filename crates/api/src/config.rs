use std::env;
use std::time::Duration;

const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Startup settings for the HTTP service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub database_url: Option<String>,
    pub api_key: String,
    pub rate_limit_window: Duration,
    pub rate_limit_max: usize,
    pub weather_api_key: Option<String>,
    pub weather_base_url: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            database_url: None,
            api_key: "dev-yatra-key".to_string(),
            rate_limit_window: Duration::from_secs(60),
            rate_limit_max: 120,
            weather_api_key: None,
            weather_base_url: None,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind: env::var("YATRA_BIND").unwrap_or(defaults.bind),
            database_url: non_empty_var("YATRA_DATABASE_URL"),
            api_key: non_empty_var("YATRA_API_KEY").unwrap_or(defaults.api_key),
            rate_limit_window: env::var("YATRA_RATE_LIMIT_WINDOW_SECONDS")
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.rate_limit_window),
            rate_limit_max: env::var("YATRA_RATE_LIMIT_MAX")
                .ok()
                .and_then(|value| value.parse::<usize>().ok())
                .filter(|value| *value > 0)
                .unwrap_or(defaults.rate_limit_max),
            weather_api_key: non_empty_var("YATRA_WEATHER_API_KEY"),
            weather_base_url: non_empty_var("YATRA_WEATHER_BASE_URL"),
            allowed_origins: non_empty_var("YATRA_ALLOWED_ORIGINS")
                .map(|value| parse_allowed_origins(&value))
                .unwrap_or(defaults.allowed_origins),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn parse_allowed_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        let origins = parse_allowed_origins(" https://yatra.example/ ,, http://localhost:3000 ");
        assert_eq!(
            origins,
            vec!["https://yatra.example", "http://localhost:3000"]
        );
    }

    #[test]
    fn defaults_match_local_development() {
        let config = ApiConfig::default();
        assert_eq!(config.api_key, "dev-yatra-key");
        assert_eq!(config.rate_limit_max, 120);
        assert_eq!(config.rate_limit_window, Duration::from_secs(60));
        assert!(config.database_url.is_none());
        assert!(config.weather_api_key.is_none());
    }
}
