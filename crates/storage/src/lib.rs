mod catalog;
mod memory;
mod sqlite;
mod weather;

use anyhow::Result;
use thiserror::Error;
use yatra_core::{Destination, DestinationType, WeatherSnapshot};

pub use catalog::default_destinations;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use weather::{HttpWeather, MockWeather, Weather};

/// Failures raised by the destination and weather collaborators.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),
    #[error("failed to decode stored record: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid stored record: {0}")]
    InvalidRecord(String),
    #[error("no weather data for {0}")]
    UnknownCity(String),
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub trait DestinationRepository: Send + Sync {
    /// Active destinations, optionally restricted to one type, at most `limit`.
    async fn find_active_destinations(
        &self,
        type_filter: Option<DestinationType>,
        limit: usize,
        sort_by_rating_desc: bool,
    ) -> Result<Vec<Destination>, LookupError>;

    /// Best-rated active destination whose name contains `name`, ignoring case.
    async fn find_destination_by_name_fuzzy(
        &self,
        name: &str,
    ) -> Result<Option<Destination>, LookupError>;

    async fn upsert_destination(&self, destination: &Destination) -> Result<(), LookupError>;
}

pub trait WeatherProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn snapshot(&self, city: &str) -> Result<WeatherSnapshot, LookupError>;
}

#[derive(Clone)]
pub enum Store {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl Store {
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::seeded())
    }

    pub async fn sqlite(database_url: &str) -> Result<Self> {
        let sqlite = SqliteStore::connect(database_url).await?;
        sqlite.seed_if_empty(&default_destinations()).await?;
        Ok(Self::Sqlite(sqlite))
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Store::Memory(_) => "memory",
            Store::Sqlite(_) => "sqlite",
        }
    }
}

impl DestinationRepository for Store {
    async fn find_active_destinations(
        &self,
        type_filter: Option<DestinationType>,
        limit: usize,
        sort_by_rating_desc: bool,
    ) -> Result<Vec<Destination>, LookupError> {
        match self {
            Store::Memory(store) => {
                store
                    .find_active_destinations(type_filter, limit, sort_by_rating_desc)
                    .await
            }
            Store::Sqlite(store) => {
                store
                    .find_active_destinations(type_filter, limit, sort_by_rating_desc)
                    .await
            }
        }
    }

    async fn find_destination_by_name_fuzzy(
        &self,
        name: &str,
    ) -> Result<Option<Destination>, LookupError> {
        match self {
            Store::Memory(store) => store.find_destination_by_name_fuzzy(name).await,
            Store::Sqlite(store) => store.find_destination_by_name_fuzzy(name).await,
        }
    }

    async fn upsert_destination(&self, destination: &Destination) -> Result<(), LookupError> {
        match self {
            Store::Memory(store) => store.upsert_destination(destination).await,
            Store::Sqlite(store) => store.upsert_destination(destination).await,
        }
    }
}
