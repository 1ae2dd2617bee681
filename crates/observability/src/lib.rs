use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use yatra_core::Intent;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    lookups_total: AtomicU64,
    fallback_total: AtomicU64,
    total_latency_millis: AtomicU64,
    intent_totals: [AtomicU64; Intent::ALL.len()],
}

#[derive(Debug, Clone, Serialize)]
pub struct IntentCount {
    pub intent: Intent,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub lookups_total: u64,
    pub fallback_total: u64,
    pub avg_latency_millis: f64,
    pub intents: Vec<IntentCount>,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_intent(&self, intent: Intent) {
        self.intent_totals[intent_slot(intent)].fetch_add(1, Ordering::Relaxed);
    }

    /// One collaborator read (destination catalog or weather).
    pub fn inc_lookup(&self) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.requests_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: requests,
            lookups_total: self.lookups_total.load(Ordering::Relaxed),
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            avg_latency_millis: if requests == 0 {
                0.0
            } else {
                latency as f64 / requests as f64
            },
            intents: Intent::ALL
                .iter()
                .map(|intent| IntentCount {
                    intent: *intent,
                    total: self.intent_totals[intent_slot(*intent)].load(Ordering::Relaxed),
                })
                .collect(),
        }
    }
}

fn intent_slot(intent: Intent) -> usize {
    Intent::ALL
        .iter()
        .position(|candidate| *candidate == intent)
        .unwrap_or(Intent::ALL.len() - 1)
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,yatra_api=info,yatra_agents=info,yatra_storage=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
