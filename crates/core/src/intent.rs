use crate::models::{
    ClassificationResult, CultureTopic, DestinationType, Intent, SubType, TravelTopic,
};

const GREETING_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "namaste",
    "namaskar",
    "johar",
    "good morning",
    "good afternoon",
    "good evening",
    "greetings",
];

const DESTINATION_KEYWORDS: &[&str] = &[
    "destination",
    "place",
    "visit",
    "see",
    "go",
    "tourist",
    "attraction",
    "spot",
    "location",
];

const WEATHER_KEYWORDS: &[&str] = &[
    "weather",
    "temperature",
    "climate",
    "rain",
    "hot",
    "cold",
    "sunny",
    "cloudy",
    "mausam",
];

const CULTURE_KEYWORDS: &[&str] = &[
    "culture",
    "festival",
    "tribe",
    "tribal",
    "tradition",
    "custom",
    "art",
    "craft",
    "food",
    "cuisine",
    "sanskriti",
];

const TRAVEL_KEYWORDS: &[&str] = &[
    "travel",
    "trip",
    "plan",
    "itinerary",
    "hotel",
    "stay",
    "transport",
    "bus",
    "train",
    "flight",
];

const EMERGENCY_KEYWORDS: &[&str] = &[
    "emergency",
    "help",
    "police",
    "hospital",
    "doctor",
    "accident",
    "danger",
    "problem",
];

const DESTINATION_GAZETTEER: &[&str] = &[
    "betla",
    "hundru",
    "netarhat",
    "deoghar",
    "ranchi",
    "hazaribagh",
    "parasnath",
    "dassam",
];

const THANKS_KEYWORDS: &[&str] = &["thank", "thanks", "dhanyawad", "appreciate", "helpful"];

const CITY_GAZETTEER: &[&str] = &[
    "ranchi",
    "jamshedpur",
    "dhanbad",
    "bokaro",
    "deoghar",
    "hazaribagh",
    "netarhat",
    "giridih",
    "dumka",
    "daltonganj",
];

const WILDLIFE_KEYWORDS: &[&str] = &[
    "wildlife",
    "animal",
    "tiger",
    "elephant",
    "safari",
    "betla",
    "national park",
    "sanctuary",
    "bird",
];

const NATURE_KEYWORDS: &[&str] = &[
    "nature",
    "waterfall",
    "falls",
    "hill",
    "lake",
    "valley",
    "dam",
    "scenic",
    "sunrise",
    "sunset",
];

const CULTURAL_KEYWORDS: &[&str] = &[
    "cultural",
    "heritage",
    "museum",
    "village",
    "history",
    "historical",
];

const ADVENTURE_KEYWORDS: &[&str] = &[
    "adventure",
    "trek",
    "trekking",
    "hiking",
    "climbing",
    "rafting",
    "camping",
    "paragliding",
];

const RELIGIOUS_KEYWORDS: &[&str] = &[
    "religious",
    "temple",
    "pilgrimage",
    "shrine",
    "jyotirlinga",
    "jain",
    "spiritual",
];

const FESTIVAL_KEYWORDS: &[&str] = &[
    "festival",
    "sarhul",
    "karma",
    "sohrai",
    "tusu",
    "celebration",
    "mela",
];

const FOOD_KEYWORDS: &[&str] = &[
    "food", "cuisine", "dish", "eat", "litti", "handia", "thekua", "rugra",
];

const CRAFT_KEYWORDS: &[&str] = &[
    "craft",
    "art",
    "handicraft",
    "dokra",
    "painting",
    "paitkar",
    "bamboo",
];

const TRANSPORT_KEYWORDS: &[&str] = &[
    "transport", "bus", "train", "flight", "airport", "railway", "reach", "taxi",
];

const ACCOMMODATION_KEYWORDS: &[&str] = &[
    "hotel",
    "stay",
    "homestay",
    "accommodation",
    "resort",
    "lodge",
];

const ITINERARY_KEYWORDS: &[&str] = &["itinerary", "plan", "schedule", "days", "route"];

const DESTINATION_FOCI: &[(DestinationType, &[&str])] = &[
    (DestinationType::Wildlife, WILDLIFE_KEYWORDS),
    (DestinationType::Nature, NATURE_KEYWORDS),
    (DestinationType::Cultural, CULTURAL_KEYWORDS),
    (DestinationType::Adventure, ADVENTURE_KEYWORDS),
    (DestinationType::Religious, RELIGIOUS_KEYWORDS),
];

const CULTURE_TOPICS: &[(CultureTopic, &[&str])] = &[
    (CultureTopic::Festivals, FESTIVAL_KEYWORDS),
    (CultureTopic::Food, FOOD_KEYWORDS),
    (CultureTopic::Crafts, CRAFT_KEYWORDS),
];

const TRAVEL_TOPICS: &[(TravelTopic, &[&str])] = &[
    (TravelTopic::Transport, TRANSPORT_KEYWORDS),
    (TravelTopic::Accommodation, ACCOMMODATION_KEYWORDS),
    (TravelTopic::Itinerary, ITINERARY_KEYWORDS),
];

/// Ordered intent rules. The first rule with a matching keyword group wins,
/// so the order of this table is part of the classifier's behaviour. The
/// sub-type-only groups come after every primary rule and only catch messages
/// nothing else claimed.
const INTENT_RULES: &[(Intent, &[&[&str]])] = &[
    (Intent::Greeting, &[GREETING_KEYWORDS]),
    (
        Intent::DestinationQuery,
        &[DESTINATION_KEYWORDS, WILDLIFE_KEYWORDS],
    ),
    (Intent::WeatherQuery, &[WEATHER_KEYWORDS]),
    (Intent::CultureQuery, &[CULTURE_KEYWORDS]),
    (Intent::TravelQuery, &[TRAVEL_KEYWORDS]),
    (Intent::EmergencyQuery, &[EMERGENCY_KEYWORDS]),
    (Intent::SpecificDestination, &[DESTINATION_GAZETTEER]),
    (Intent::Thanks, &[THANKS_KEYWORDS]),
    (
        Intent::DestinationQuery,
        &[
            NATURE_KEYWORDS,
            CULTURAL_KEYWORDS,
            ADVENTURE_KEYWORDS,
            RELIGIOUS_KEYWORDS,
        ],
    ),
    (
        Intent::CultureQuery,
        &[FESTIVAL_KEYWORDS, FOOD_KEYWORDS, CRAFT_KEYWORDS],
    ),
    (
        Intent::TravelQuery,
        &[TRANSPORT_KEYWORDS, ACCOMMODATION_KEYWORDS, ITINERARY_KEYWORDS],
    ),
];

/// Keywords of this length or shorter only match whole tokens.
const SHORT_KEYWORD_LEN: usize = 3;

/// Longer keywords that begin unrelated words (`help` in `helpful`).
const WHOLE_WORD_KEYWORDS: &[&str] = &["help", "custom"];

pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-cased runs of alphanumeric characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// True when every word of `keyword` starts the matching token, so `rain`
/// matches `raining`. Short and [`WHOLE_WORD_KEYWORDS`] words only take an
/// inflection suffix (`hi` never matches `ranchi`, `hot` never matches
/// `hotel`). Multi-word keywords must appear contiguously.
pub fn mentions(tokens: &[String], keyword: &str) -> bool {
    let words = keyword.split_whitespace().collect::<Vec<_>>();
    if words.is_empty() {
        return false;
    }

    tokens.windows(words.len()).any(|window| {
        window
            .iter()
            .zip(words.iter())
            .all(|(token, word)| word_matches(token, word))
    })
}

pub fn classify_intent(text: &str) -> Intent {
    classify_tokens(&tokenize(text))
}

pub fn classify(text: &str) -> ClassificationResult {
    let tokens = tokenize(text);
    let intent = classify_tokens(&tokens);

    let sub_type = match intent {
        Intent::DestinationQuery => Some(SubType::Destination(destination_focus(&tokens))),
        Intent::WeatherQuery => {
            first_mentioned(&tokens, CITY_GAZETTEER).map(|city| SubType::City(city.to_string()))
        }
        Intent::CultureQuery => Some(SubType::Culture(culture_topic(&tokens))),
        Intent::TravelQuery => Some(SubType::Travel(travel_topic(&tokens))),
        Intent::SpecificDestination => first_mentioned(&tokens, DESTINATION_GAZETTEER)
            .map(|place| SubType::Place(place.to_string())),
        _ => None,
    };

    ClassificationResult { intent, sub_type }
}

pub fn destination_focus(tokens: &[String]) -> Option<DestinationType> {
    DESTINATION_FOCI
        .iter()
        .find(|(_, keywords)| mentions_any(tokens, keywords))
        .map(|(kind, _)| *kind)
}

pub fn culture_topic(tokens: &[String]) -> CultureTopic {
    CULTURE_TOPICS
        .iter()
        .find(|(_, keywords)| mentions_any(tokens, keywords))
        .map(|(topic, _)| *topic)
        .unwrap_or(CultureTopic::General)
}

pub fn travel_topic(tokens: &[String]) -> TravelTopic {
    TRAVEL_TOPICS
        .iter()
        .find(|(_, keywords)| mentions_any(tokens, keywords))
        .map(|(topic, _)| *topic)
        .unwrap_or(TravelTopic::Unspecified)
}

pub fn extract_city(text: &str) -> Option<&'static str> {
    first_mentioned(&tokenize(text), CITY_GAZETTEER)
}

pub fn is_known_city(city: &str) -> bool {
    let city = city.trim().to_lowercase();
    CITY_GAZETTEER.contains(&city.as_str())
}

pub(crate) fn mentions_any(tokens: &[String], keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| mentions(tokens, keyword))
}

fn classify_tokens(tokens: &[String]) -> Intent {
    INTENT_RULES
        .iter()
        .find(|(_, groups)| groups.iter().any(|keywords| mentions_any(tokens, keywords)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Default)
}

fn first_mentioned(tokens: &[String], gazetteer: &[&'static str]) -> Option<&'static str> {
    gazetteer
        .iter()
        .copied()
        .find(|name| mentions(tokens, name))
}

fn word_matches(token: &str, word: &str) -> bool {
    if word.len() > SHORT_KEYWORD_LEN && !WHOLE_WORD_KEYWORDS.contains(&word) {
        return token.starts_with(word);
    }

    match token.strip_prefix(word) {
        Some("") => true,
        // Two-letter keywords (`hi`, `go`) match exactly.
        Some(_) if word.len() < SHORT_KEYWORD_LEN => false,
        Some(suffix) => matches!(suffix, "s" | "es" | "ing" | "ed"),
        None => false,
    }
}
