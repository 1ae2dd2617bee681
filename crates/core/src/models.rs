use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    DestinationQuery,
    WeatherQuery,
    CultureQuery,
    TravelQuery,
    EmergencyQuery,
    SpecificDestination,
    Thanks,
    Default,
}

impl Intent {
    pub const ALL: [Intent; 9] = [
        Intent::Greeting,
        Intent::DestinationQuery,
        Intent::WeatherQuery,
        Intent::CultureQuery,
        Intent::TravelQuery,
        Intent::EmergencyQuery,
        Intent::SpecificDestination,
        Intent::Thanks,
        Intent::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::DestinationQuery => "destination_query",
            Self::WeatherQuery => "weather_query",
            Self::CultureQuery => "culture_query",
            Self::TravelQuery => "travel_query",
            Self::EmergencyQuery => "emergency_query",
            Self::SpecificDestination => "specific_destination",
            Self::Thanks => "thanks",
            Self::Default => "default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationType {
    Wildlife,
    Nature,
    Cultural,
    Adventure,
    Religious,
}

impl DestinationType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "wildlife" | "wild" | "safari" => Some(Self::Wildlife),
            "nature" | "natural" | "waterfall" => Some(Self::Nature),
            "cultural" | "culture" | "heritage" => Some(Self::Cultural),
            "adventure" | "trek" | "trekking" => Some(Self::Adventure),
            "religious" | "temple" | "pilgrimage" => Some(Self::Religious),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wildlife => "wildlife",
            Self::Nature => "nature",
            Self::Cultural => "cultural",
            Self::Adventure => "adventure",
            Self::Religious => "religious",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CultureTopic {
    Festivals,
    Food,
    Crafts,
    General,
}

impl CultureTopic {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Festivals => "festivals",
            Self::Food => "food",
            Self::Crafts => "crafts",
            Self::General => "general",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelTopic {
    Transport,
    Accommodation,
    Itinerary,
    #[serde(rename = "none")]
    Unspecified,
}

impl TravelTopic {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Accommodation => "accommodation",
            Self::Itinerary => "itinerary",
            Self::Unspecified => "none",
        }
    }
}

/// Finer-grained category attached to some intents.
///
/// A destination focus of `None` is the `general` sub-type: no type filter is
/// applied when the catalog is queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubType {
    Destination(Option<DestinationType>),
    Culture(CultureTopic),
    Travel(TravelTopic),
    City(String),
    Place(String),
}

impl SubType {
    pub fn label(&self) -> &str {
        match self {
            Self::Destination(Some(kind)) => kind.as_str(),
            Self::Destination(None) => "general",
            Self::Culture(topic) => topic.as_str(),
            Self::Travel(topic) => topic.as_str(),
            Self::City(city) => city.as_str(),
            Self::Place(place) => place.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub intent: Intent,
    pub sub_type: Option<SubType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub district: String,
    pub state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    pub images: Vec<String>,
    pub rating: f32,
    pub location: Location,
    pub coordinates: Coordinates,
    pub entry_fee: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature: f32,
    pub humidity: u8,
    pub wind_speed: f32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResponseData {
    Destinations(Vec<Destination>),
    Destination(Destination),
    Weather {
        city: String,
        snapshot: WeatherSnapshot,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Greeting,
    DestinationQuery,
    WeatherQuery,
    CultureQuery,
    TravelQuery,
    EmergencyQuery,
    SpecificDestination,
    Thanks,
    Default,
    Error,
}

impl From<Intent> for ResponseKind {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Greeting => Self::Greeting,
            Intent::DestinationQuery => Self::DestinationQuery,
            Intent::WeatherQuery => Self::WeatherQuery,
            Intent::CultureQuery => Self::CultureQuery,
            Intent::TravelQuery => Self::TravelQuery,
            Intent::EmergencyQuery => Self::EmergencyQuery,
            Intent::SpecificDestination => Self::SpecificDestination,
            Intent::Thanks => Self::Thanks,
            Intent::Default => Self::Default,
        }
    }
}

/// Response content before it is stamped with a time and conversation id.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyDraft {
    pub message: String,
    pub suggestions: Vec<String>,
    pub quick_actions: Vec<String>,
    pub data: Option<ResponseData>,
    pub kind: ResponseKind,
}

impl ReplyDraft {
    pub fn finish(self, conversation_id: &str, timestamp: DateTime<Utc>) -> ChatResponse {
        ChatResponse {
            message: self.message,
            suggestions: self.suggestions,
            quick_actions: self.quick_actions,
            data: self.data,
            kind: self.kind,
            timestamp,
            conversation_id: conversation_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub suggestions: Vec<String>,
    pub quick_actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub timestamp: DateTime<Utc>,
    pub conversation_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_response_uses_camel_case_wire_names() {
        let response = ReplyDraft {
            message: "hi".to_string(),
            suggestions: vec!["Weather".to_string()],
            quick_actions: vec!["Explore Map".to_string()],
            data: None,
            kind: ResponseKind::Error,
        }
        .finish("user-7", Utc::now());

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], json!("error"));
        assert_eq!(value["conversationId"], json!("user-7"));
        assert_eq!(value["quickActions"], json!(["Explore Map"]));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn response_kind_mirrors_intent() {
        for intent in Intent::ALL {
            let kind = ResponseKind::from(intent);
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::to_value(intent).unwrap()
            );
        }
    }

    #[test]
    fn travel_topic_unspecified_serializes_as_none() {
        assert_eq!(
            serde_json::to_value(TravelTopic::Unspecified).unwrap(),
            json!("none")
        );
        assert_eq!(TravelTopic::Unspecified.as_str(), "none");
    }

    #[test]
    fn destination_type_parse_accepts_aliases() {
        assert_eq!(DestinationType::parse(" Safari "), Some(DestinationType::Wildlife));
        assert_eq!(DestinationType::parse("temple"), Some(DestinationType::Religious));
        assert_eq!(DestinationType::parse("beach"), None);
    }
}
