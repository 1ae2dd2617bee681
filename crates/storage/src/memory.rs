use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use yatra_core::{Destination, DestinationType};

use crate::{default_destinations, DestinationRepository, LookupError};

#[derive(Clone, Default)]
pub struct MemoryStore {
    destinations: Arc<RwLock<HashMap<String, Destination>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::with_destinations(default_destinations())
    }

    pub fn with_destinations(destinations: Vec<Destination>) -> Self {
        let map = destinations
            .into_iter()
            .map(|destination| (destination.id.clone(), destination))
            .collect();
        Self {
            destinations: Arc::new(RwLock::new(map)),
        }
    }
}

impl DestinationRepository for MemoryStore {
    async fn find_active_destinations(
        &self,
        type_filter: Option<DestinationType>,
        limit: usize,
        sort_by_rating_desc: bool,
    ) -> Result<Vec<Destination>, LookupError> {
        let mut matches = self
            .destinations
            .read()
            .values()
            .filter(|destination| destination.active)
            .filter(|destination| {
                type_filter.map_or(true, |kind| destination.destination_type == kind)
            })
            .cloned()
            .collect::<Vec<_>>();

        if sort_by_rating_desc {
            matches.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.name.cmp(&b.name))
            });
        } else {
            matches.sort_by(|a, b| a.name.cmp(&b.name));
        }

        matches.truncate(limit);
        Ok(matches)
    }

    async fn find_destination_by_name_fuzzy(
        &self,
        name: &str,
    ) -> Result<Option<Destination>, LookupError> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }

        let best = self
            .destinations
            .read()
            .values()
            .filter(|destination| destination.active)
            .filter(|destination| destination.name.to_lowercase().contains(&needle))
            .max_by(|a, b| a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal))
            .cloned();

        Ok(best)
    }

    async fn upsert_destination(&self, destination: &Destination) -> Result<(), LookupError> {
        self.destinations
            .write()
            .insert(destination.id.clone(), destination.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn active_destinations_are_sorted_and_limited() {
        let store = MemoryStore::seeded();
        let top = store.find_active_destinations(None, 6, true).await.unwrap();

        assert_eq!(top.len(), 6);
        assert!(top.iter().all(|destination| destination.active));
        assert!(top.windows(2).all(|pair| pair[0].rating >= pair[1].rating));
        assert_eq!(top[0].name, "Baba Baidyanath Dham, Deoghar");
    }

    #[tokio::test]
    async fn type_filter_excludes_inactive_records() {
        let store = MemoryStore::seeded();
        let nature = store
            .find_active_destinations(Some(DestinationType::Nature), 10, true)
            .await
            .unwrap();

        assert!(!nature.is_empty());
        assert!(nature
            .iter()
            .all(|destination| destination.destination_type == DestinationType::Nature));
        assert!(nature.iter().all(|destination| destination.name != "Lodh Falls"));
    }

    #[tokio::test]
    async fn fuzzy_lookup_ignores_case() {
        let store = MemoryStore::seeded();
        let found = store
            .find_destination_by_name_fuzzy("DEOGHAR")
            .await
            .unwrap()
            .expect("deoghar should be in the catalog");
        assert_eq!(found.id, "baidyanath-dham");

        assert!(store
            .find_destination_by_name_fuzzy("lodh")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_destination_by_name_fuzzy("  ")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_by_id() {
        let store = MemoryStore::new();
        let mut destination = default_destinations().remove(0);
        store.upsert_destination(&destination).await.unwrap();

        destination.rating = 3.0;
        store.upsert_destination(&destination).await.unwrap();

        let all = store.find_active_destinations(None, 10, true).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].rating, 3.0);
    }
}
