mod choice;

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, instrument, warn};
use yatra_core::templates::GREETINGS;
use yatra_core::{
    apology_reply, classify, culture_reply, destination_detail_reply, destination_reply,
    emergency_reply, fallback_reply, greeting_reply, normalize_text, thanks_reply, travel_reply,
    unknown_place_reply, weather_overview_reply, weather_reply, ChatResponse, ChatTurn,
    ClassificationResult, CultureTopic, Destination, DestinationType, Intent, ReplyDraft,
    SubType, TravelTopic,
};
use yatra_observability::AppMetrics;
use yatra_storage::{DestinationRepository, LookupError, WeatherProvider};

pub use choice::{ChoiceSource, FixedChoice, SeededChoice, ThreadRngChoice};

/// Number of catalog records attached to a destination answer.
pub const DESTINATION_LIMIT: usize = 6;

pub struct ChatbotService<D, W>
where
    D: DestinationRepository,
    W: WeatherProvider,
{
    destinations: Arc<D>,
    weather: Arc<W>,
    choice: Arc<dyn ChoiceSource>,
    metrics: Arc<AppMetrics>,
}

impl<D, W> Clone for ChatbotService<D, W>
where
    D: DestinationRepository,
    W: WeatherProvider,
{
    fn clone(&self) -> Self {
        Self {
            destinations: Arc::clone(&self.destinations),
            weather: Arc::clone(&self.weather),
            choice: Arc::clone(&self.choice),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl<D, W> ChatbotService<D, W>
where
    D: DestinationRepository,
    W: WeatherProvider,
{
    pub fn new(destinations: Arc<D>, weather: Arc<W>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            destinations,
            weather,
            choice: Arc::new(ThreadRngChoice),
            metrics,
        }
    }

    pub fn with_choice_source(mut self, choice: Arc<dyn ChoiceSource>) -> Self {
        self.choice = choice;
        self
    }

    pub fn destinations(&self) -> &D {
        &self.destinations
    }

    pub fn weather(&self) -> &W {
        &self.weather
    }

    pub fn classify(&self, message: &str) -> ClassificationResult {
        classify(&normalize_text(message))
    }

    /// Classifies `message` and composes the reply for it.
    ///
    /// Collaborator failures never escape: they are logged and answered with
    /// the apology reply. `user_id` is echoed back as the conversation id.
    #[instrument(skip(self, message, history), fields(history_len = history.len()))]
    pub async fn classify_and_respond(
        &self,
        message: &str,
        user_id: &str,
        history: &[ChatTurn],
    ) -> ChatResponse {
        let started = Instant::now();
        self.metrics.inc_request();

        let normalized = normalize_text(message);
        let classification = classify(&normalized);
        self.metrics.inc_intent(classification.intent);

        let draft = match self.compose(&normalized, &classification).await {
            Ok(draft) => draft,
            Err(error) => {
                self.metrics.inc_fallback();
                warn!(
                    intent = classification.intent.as_str(),
                    error = %error,
                    "collaborator read failed, answering with apology"
                );
                apology_reply()
            }
        };

        let response = draft.finish(user_id, Utc::now());
        self.metrics.observe_latency(started.elapsed());
        info!(
            intent = classification.intent.as_str(),
            sub_type = classification.sub_type.as_ref().map(SubType::label),
            kind = ?response.kind,
            "chat handled"
        );

        response
    }

    async fn compose(
        &self,
        text: &str,
        classification: &ClassificationResult,
    ) -> Result<ReplyDraft, LookupError> {
        let reply = match (classification.intent, classification.sub_type.as_ref()) {
            (Intent::Greeting, _) => greeting_reply(self.choice.pick(GREETINGS.len())),
            (Intent::DestinationQuery, sub_type) => {
                let focus = match sub_type {
                    Some(SubType::Destination(focus)) => *focus,
                    _ => None,
                };
                destination_reply(focus, self.top_destinations(focus).await?)
            }
            (Intent::WeatherQuery, Some(SubType::City(city))) => {
                self.metrics.inc_lookup();
                let snapshot = self.weather.snapshot(city).await?;
                weather_reply(city, snapshot)
            }
            (Intent::WeatherQuery, _) => weather_overview_reply(),
            (Intent::CultureQuery, Some(SubType::Culture(topic))) => culture_reply(*topic),
            (Intent::CultureQuery, _) => culture_reply(CultureTopic::General),
            (Intent::TravelQuery, Some(SubType::Travel(topic))) => travel_reply(*topic),
            (Intent::TravelQuery, _) => travel_reply(TravelTopic::Unspecified),
            (Intent::EmergencyQuery, _) => emergency_reply(),
            (Intent::SpecificDestination, Some(SubType::Place(place))) => {
                self.metrics.inc_lookup();
                match self.destinations.find_destination_by_name_fuzzy(place).await? {
                    Some(destination) => destination_detail_reply(destination),
                    None => unknown_place_reply(place, self.top_destinations(None).await?),
                }
            }
            (Intent::SpecificDestination, _) => {
                destination_reply(None, self.top_destinations(None).await?)
            }
            (Intent::Thanks, _) => thanks_reply(),
            (Intent::Default, _) => fallback_reply(text),
        };

        Ok(reply)
    }

    async fn top_destinations(
        &self,
        focus: Option<DestinationType>,
    ) -> Result<Vec<Destination>, LookupError> {
        self.metrics.inc_lookup();
        self.destinations
            .find_active_destinations(focus, DESTINATION_LIMIT, true)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use yatra_core::templates::CAPABILITY_OVERVIEW;
    use yatra_core::{ResponseData, ResponseKind, WeatherSnapshot};
    use yatra_storage::{MemoryStore, MockWeather};

    #[derive(Default)]
    struct RecordingRepository {
        inner: MemoryStore,
        calls: Mutex<Vec<(Option<DestinationType>, usize, bool)>>,
    }

    impl DestinationRepository for RecordingRepository {
        async fn find_active_destinations(
            &self,
            type_filter: Option<DestinationType>,
            limit: usize,
            sort_by_rating_desc: bool,
        ) -> Result<Vec<Destination>, LookupError> {
            self.calls
                .lock()
                .push((type_filter, limit, sort_by_rating_desc));
            self.inner
                .find_active_destinations(type_filter, limit, sort_by_rating_desc)
                .await
        }

        async fn find_destination_by_name_fuzzy(
            &self,
            name: &str,
        ) -> Result<Option<Destination>, LookupError> {
            self.inner.find_destination_by_name_fuzzy(name).await
        }

        async fn upsert_destination(&self, destination: &Destination) -> Result<(), LookupError> {
            self.inner.upsert_destination(destination).await
        }
    }

    struct UnavailableRepository;

    impl DestinationRepository for UnavailableRepository {
        async fn find_active_destinations(
            &self,
            _type_filter: Option<DestinationType>,
            _limit: usize,
            _sort_by_rating_desc: bool,
        ) -> Result<Vec<Destination>, LookupError> {
            Err(LookupError::Unavailable("connection refused".to_string()))
        }

        async fn find_destination_by_name_fuzzy(
            &self,
            _name: &str,
        ) -> Result<Option<Destination>, LookupError> {
            Err(LookupError::Unavailable("connection refused".to_string()))
        }

        async fn upsert_destination(&self, _destination: &Destination) -> Result<(), LookupError> {
            Err(LookupError::Unavailable("connection refused".to_string()))
        }
    }

    struct UnavailableWeather;

    impl WeatherProvider for UnavailableWeather {
        fn provider_name(&self) -> &'static str {
            "unavailable"
        }

        async fn snapshot(&self, _city: &str) -> Result<WeatherSnapshot, LookupError> {
            Err(LookupError::Unavailable("weather service timeout".to_string()))
        }
    }

    fn service_with<D: DestinationRepository>(
        destinations: D,
    ) -> ChatbotService<D, MockWeather> {
        ChatbotService::new(
            Arc::new(destinations),
            Arc::new(MockWeather),
            AppMetrics::shared(),
        )
        .with_choice_source(Arc::new(FixedChoice(0)))
    }

    fn seeded_service() -> ChatbotService<MemoryStore, MockWeather> {
        service_with(MemoryStore::seeded())
    }

    #[tokio::test]
    async fn greeting_uses_choice_source_and_echoes_user() {
        let service = seeded_service().with_choice_source(Arc::new(FixedChoice(1)));
        let response = service
            .classify_and_respond("Hello, namaste!", "user-42", &[])
            .await;

        assert_eq!(response.kind, ResponseKind::Greeting);
        assert_eq!(response.message, GREETINGS[1]);
        assert!(!response.suggestions.is_empty());
        assert_eq!(response.conversation_id, "user-42");
    }

    #[tokio::test]
    async fn seeded_greetings_are_reproducible() {
        let first = seeded_service().with_choice_source(Arc::new(SeededChoice::new(9)));
        let second = seeded_service().with_choice_source(Arc::new(SeededChoice::new(9)));

        for _ in 0..5 {
            let a = first.classify_and_respond("hi", "u", &[]).await;
            let b = second.classify_and_respond("hi", "u", &[]).await;
            assert_eq!(a.message, b.message);
        }
    }

    #[tokio::test]
    async fn wildlife_query_reads_six_rated_destinations_of_that_type() {
        let service = service_with(RecordingRepository {
            inner: MemoryStore::seeded(),
            ..Default::default()
        });
        let response = service
            .classify_and_respond("Tell me about wildlife parks", "u", &[])
            .await;

        assert_eq!(response.kind, ResponseKind::DestinationQuery);
        assert_eq!(
            service.destinations().calls.lock().as_slice(),
            &[(Some(DestinationType::Wildlife), DESTINATION_LIMIT, true)]
        );
        match response.data {
            Some(ResponseData::Destinations(list)) => {
                assert!(!list.is_empty());
                assert!(list
                    .iter()
                    .all(|destination| destination.destination_type == DestinationType::Wildlife));
            }
            other => panic!("unexpected data: {other:?}"),
        }
    }

    #[tokio::test]
    async fn general_destination_query_is_unfiltered() {
        let service = service_with(RecordingRepository {
            inner: MemoryStore::seeded(),
            ..Default::default()
        });
        service
            .classify_and_respond("What places can I visit?", "u", &[])
            .await;

        assert_eq!(
            service.destinations().calls.lock().as_slice(),
            &[(None, DESTINATION_LIMIT, true)]
        );
    }

    #[tokio::test]
    async fn weather_for_known_city_carries_snapshot() {
        let response = seeded_service()
            .classify_and_respond("What's the weather in ranchi?", "u", &[])
            .await;

        assert_eq!(response.kind, ResponseKind::WeatherQuery);
        assert!(response.message.contains("Ranchi"));
        match response.data {
            Some(ResponseData::Weather { city, snapshot }) => {
                assert_eq!(city, "Ranchi");
                assert!(snapshot.humidity > 0);
            }
            other => panic!("unexpected data: {other:?}"),
        }
    }

    #[tokio::test]
    async fn weather_without_city_is_overview() {
        let response = seeded_service()
            .classify_and_respond("will it rain?", "u", &[])
            .await;

        assert_eq!(response.kind, ResponseKind::WeatherQuery);
        assert!(response.data.is_none());
        assert_eq!(response.message, yatra_core::templates::WEATHER_OVERVIEW);
    }

    #[tokio::test]
    async fn weather_failure_becomes_apology() {
        let service = ChatbotService::new(
            Arc::new(MemoryStore::seeded()),
            Arc::new(UnavailableWeather),
            AppMetrics::shared(),
        );
        let response = service
            .classify_and_respond("how hot is deoghar", "u", &[])
            .await;

        assert_eq!(response.kind, ResponseKind::Error);
    }

    #[tokio::test]
    async fn specific_destination_returns_detail_card() {
        let response = seeded_service()
            .classify_and_respond("tell me about hundru", "u", &[])
            .await;

        assert_eq!(response.kind, ResponseKind::SpecificDestination);
        assert!(response.message.starts_with("Hundru Falls"));
        assert!(response.message.contains("Entry fee: Rs 20"));
        match response.data {
            Some(ResponseData::Destination(destination)) => {
                assert_eq!(destination.id, "hundru-falls")
            }
            other => panic!("unexpected data: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_catalog_record_falls_back_to_list() {
        let service = service_with(RecordingRepository::default());
        let response = service
            .classify_and_respond("dassam", "u", &[])
            .await;

        assert_eq!(response.kind, ResponseKind::SpecificDestination);
        assert!(response.message.starts_with("I couldn't find details for Dassam"));
        assert_eq!(
            service.destinations().calls.lock().as_slice(),
            &[(None, DESTINATION_LIMIT, true)]
        );
        assert!(matches!(response.data, Some(ResponseData::Destinations(_))));
    }

    #[tokio::test]
    async fn betla_national_park_is_answered_as_destination_query() {
        let response = seeded_service()
            .classify_and_respond("betla national park timings", "u", &[])
            .await;

        assert_eq!(response.kind, ResponseKind::DestinationQuery);
    }

    #[tokio::test]
    async fn catalog_failure_becomes_apology_and_is_counted() {
        let metrics = AppMetrics::shared();
        let service = ChatbotService::new(
            Arc::new(UnavailableRepository),
            Arc::new(MockWeather),
            metrics.clone(),
        );
        let response = service
            .classify_and_respond("Tell me about wildlife parks", "user-1", &[])
            .await;

        assert_eq!(response.kind, ResponseKind::Error);
        assert_eq!(
            response.suggestions,
            vec!["Try again", "Contact support", "Emergency help"]
        );
        assert_eq!(response.conversation_id, "user-1");
        assert_eq!(metrics.snapshot().fallback_total, 1);
    }

    #[tokio::test]
    async fn canned_intents_need_no_collaborator() {
        let service = ChatbotService::new(
            Arc::new(UnavailableRepository),
            Arc::new(UnavailableWeather),
            AppMetrics::shared(),
        );

        let cases = [
            ("Call the police!", ResponseKind::EmergencyQuery),
            ("thank you so much", ResponseKind::Thanks),
            ("tell me about sohrai painting", ResponseKind::CultureQuery),
            ("how do I reach by train", ResponseKind::TravelQuery),
            ("asdkjasdkj", ResponseKind::Default),
        ];
        for (message, expected) in cases {
            let response = service.classify_and_respond(message, "u", &[]).await;
            assert_eq!(response.kind, expected, "message: {message}");
        }
    }

    #[tokio::test]
    async fn unmatched_message_gets_capability_overview() {
        let history = vec![ChatTurn {
            role: yatra_core::ChatRole::User,
            content: "hello".to_string(),
        }];
        let response = seeded_service()
            .classify_and_respond("asdkjasdkj", "u", &history)
            .await;

        assert_eq!(response.kind, ResponseKind::Default);
        assert_eq!(response.message, CAPABILITY_OVERVIEW);
    }

    #[test]
    fn classify_is_idempotent() {
        let service = seeded_service();
        let message = "Any trekking spots near Parasnath?";
        assert_eq!(service.classify(message), service.classify(message));
        assert_eq!(service.classify(message).intent, Intent::DestinationQuery);
    }
}
