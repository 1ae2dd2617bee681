use anyhow::{Context, Result};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::info;
use yatra_core::{Coordinates, Destination, DestinationType, Location};

use crate::{DestinationRepository, LookupError};

const DESTINATION_COLUMNS: &str = "id, name, description, destination_type, images_json, rating, district, state, lat, lng, entry_fee, best_time_to_visit, active";

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        // Every connection to `sqlite::memory:` opens its own database.
        let max_connections = if database_url.contains(":memory:") {
            1
        } else {
            5
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .with_context(|| format!("failed connecting to sqlite at {}", database_url))?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn seed_if_empty(&self, destinations: &[Destination]) -> Result<usize> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM destinations")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            return Ok(0);
        }

        for destination in destinations {
            self.upsert_destination(destination)
                .await
                .with_context(|| format!("failed seeding destination {}", destination.id))?;
        }

        info!(count = destinations.len(), "seeded destination catalog");
        Ok(destinations.len())
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS destinations (
              id TEXT PRIMARY KEY,
              name TEXT NOT NULL,
              description TEXT NOT NULL,
              destination_type TEXT NOT NULL,
              images_json TEXT NOT NULL,
              rating REAL NOT NULL DEFAULT 0,
              district TEXT NOT NULL,
              state TEXT NOT NULL,
              lat REAL NOT NULL,
              lng REAL NOT NULL,
              entry_fee TEXT,
              best_time_to_visit TEXT,
              active INTEGER NOT NULL DEFAULT 1
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_destinations_type_rating
            ON destinations (destination_type, rating DESC);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl DestinationRepository for SqliteStore {
    async fn find_active_destinations(
        &self,
        type_filter: Option<DestinationType>,
        limit: usize,
        sort_by_rating_desc: bool,
    ) -> Result<Vec<Destination>, LookupError> {
        let order = if sort_by_rating_desc {
            "rating DESC, name ASC"
        } else {
            "name ASC"
        };
        let sql = format!(
            "SELECT {DESTINATION_COLUMNS} FROM destinations \
             WHERE active = 1 AND (?1 IS NULL OR destination_type = ?1) \
             ORDER BY {order} LIMIT ?2"
        );

        let rows = sqlx::query(&sql)
            .bind(type_filter.map(DestinationType::as_str))
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(destination_from_row).collect()
    }

    async fn find_destination_by_name_fuzzy(
        &self,
        name: &str,
    ) -> Result<Option<Destination>, LookupError> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }

        let sql = format!(
            "SELECT {DESTINATION_COLUMNS} FROM destinations \
             WHERE active = 1 AND instr(lower(name), ?1) > 0 \
             ORDER BY rating DESC LIMIT 1"
        );

        let row = sqlx::query(&sql)
            .bind(needle)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(destination_from_row).transpose()
    }

    async fn upsert_destination(&self, destination: &Destination) -> Result<(), LookupError> {
        let images_json = serde_json::to_string(&destination.images)?;

        sqlx::query(
            r#"
            INSERT INTO destinations (
              id, name, description, destination_type, images_json, rating,
              district, state, lat, lng, entry_fee, best_time_to_visit, active
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            ON CONFLICT(id) DO UPDATE SET
              name=excluded.name,
              description=excluded.description,
              destination_type=excluded.destination_type,
              images_json=excluded.images_json,
              rating=excluded.rating,
              district=excluded.district,
              state=excluded.state,
              lat=excluded.lat,
              lng=excluded.lng,
              entry_fee=excluded.entry_fee,
              best_time_to_visit=excluded.best_time_to_visit,
              active=excluded.active
            "#,
        )
        .bind(&destination.id)
        .bind(&destination.name)
        .bind(&destination.description)
        .bind(destination.destination_type.as_str())
        .bind(images_json)
        .bind(f64::from(destination.rating))
        .bind(&destination.location.district)
        .bind(&destination.location.state)
        .bind(destination.coordinates.lat)
        .bind(destination.coordinates.lng)
        .bind(&destination.entry_fee)
        .bind(&destination.best_time_to_visit)
        .bind(destination.active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn destination_from_row(row: &SqliteRow) -> Result<Destination, LookupError> {
    let raw_type: String = row.try_get("destination_type")?;
    let destination_type = DestinationType::parse(&raw_type)
        .ok_or_else(|| LookupError::InvalidRecord(format!("unknown type {raw_type}")))?;
    let images_json: String = row.try_get("images_json")?;

    Ok(Destination {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        destination_type,
        images: serde_json::from_str(&images_json)?,
        rating: row.try_get::<f64, _>("rating")? as f32,
        location: Location {
            district: row.try_get("district")?,
            state: row.try_get("state")?,
        },
        coordinates: Coordinates {
            lat: row.try_get("lat")?,
            lng: row.try_get("lng")?,
        },
        entry_fee: row.try_get("entry_fee")?,
        best_time_to_visit: row.try_get("best_time_to_visit")?,
        active: row.try_get("active")?,
    })
}
