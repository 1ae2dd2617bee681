use crate::intent::{mentions, tokenize};
use crate::models::{
    CultureTopic, Destination, DestinationType, ReplyDraft, ResponseData, ResponseKind,
    TravelTopic, WeatherSnapshot,
};
use crate::templates;

pub fn greeting_reply(choice: usize) -> ReplyDraft {
    let message = templates::GREETINGS[choice % templates::GREETINGS.len()];
    draft(
        ResponseKind::Greeting,
        message.to_string(),
        templates::GREETING_SUGGESTIONS,
        None,
    )
}

pub fn destination_reply(
    focus: Option<DestinationType>,
    destinations: Vec<Destination>,
) -> ReplyDraft {
    draft(
        ResponseKind::DestinationQuery,
        templates::destination_message(focus).to_string(),
        templates::DESTINATION_SUGGESTIONS,
        Some(ResponseData::Destinations(destinations)),
    )
}

/// Detail card for one catalog record found by name.
pub fn destination_detail_reply(destination: Destination) -> ReplyDraft {
    let entry_fee = destination
        .entry_fee
        .clone()
        .unwrap_or_else(|| "Free".to_string());
    let best_time = destination
        .best_time_to_visit
        .clone()
        .unwrap_or_else(|| "All year round".to_string());

    let message = format!(
        "{}\n\n{}\n\nRating: {:.1}/5\nDistrict: {}\nEntry fee: {}\nBest time to visit: {}",
        destination.name,
        destination.description,
        destination.rating,
        destination.location.district,
        entry_fee,
        best_time,
    );

    let suggestions = vec![
        format!("How to reach {}", destination.name),
        format!("Stays near {}", destination.name),
        "Show on map".to_string(),
        "Similar places".to_string(),
    ];

    ReplyDraft {
        message,
        suggestions,
        quick_actions: to_strings(templates::QUICK_ACTIONS),
        data: Some(ResponseData::Destination(destination)),
        kind: ResponseKind::SpecificDestination,
    }
}

/// When a named place is not in the catalog the reply keeps the
/// specific-destination kind but carries the general list.
pub fn unknown_place_reply(place: &str, destinations: Vec<Destination>) -> ReplyDraft {
    let message = format!(
        "I couldn't find details for {} right now. {}",
        title_case(place),
        templates::destination_message(None)
    );
    draft(
        ResponseKind::SpecificDestination,
        message,
        templates::DESTINATION_SUGGESTIONS,
        Some(ResponseData::Destinations(destinations)),
    )
}

pub fn weather_reply(city: &str, snapshot: WeatherSnapshot) -> ReplyDraft {
    let city = title_case(city);
    let message = format!(
        "Current weather in {}:\nTemperature: {:.1}°C\nHumidity: {}%\nWind: {:.1} km/h\nConditions: {}",
        city, snapshot.temperature, snapshot.humidity, snapshot.wind_speed, snapshot.description,
    );

    draft(
        ResponseKind::WeatherQuery,
        message,
        templates::WEATHER_SUGGESTIONS,
        Some(ResponseData::Weather { city, snapshot }),
    )
}

pub fn weather_overview_reply() -> ReplyDraft {
    draft(
        ResponseKind::WeatherQuery,
        templates::WEATHER_OVERVIEW.to_string(),
        templates::WEATHER_SUGGESTIONS,
        None,
    )
}

pub fn culture_reply(topic: CultureTopic) -> ReplyDraft {
    draft(
        ResponseKind::CultureQuery,
        templates::culture_message(topic).to_string(),
        templates::CULTURE_SUGGESTIONS,
        None,
    )
}

pub fn travel_reply(topic: TravelTopic) -> ReplyDraft {
    draft(
        ResponseKind::TravelQuery,
        templates::travel_message(topic).to_string(),
        templates::TRAVEL_SUGGESTIONS,
        None,
    )
}

pub fn emergency_reply() -> ReplyDraft {
    ReplyDraft {
        message: templates::EMERGENCY_MESSAGE.to_string(),
        suggestions: to_strings(templates::EMERGENCY_SUGGESTIONS),
        quick_actions: to_strings(templates::EMERGENCY_QUICK_ACTIONS),
        data: None,
        kind: ResponseKind::EmergencyQuery,
    }
}

pub fn thanks_reply() -> ReplyDraft {
    draft(
        ResponseKind::Thanks,
        templates::THANKS_MESSAGE.to_string(),
        templates::DEFAULT_SUGGESTIONS,
        None,
    )
}

/// Answers from the second-tier FAQ table, else the capability overview.
pub fn fallback_reply(text: &str) -> ReplyDraft {
    let tokens = tokenize(text);
    let message = templates::FAQ_ANSWERS
        .iter()
        .find(|(keyword, _)| mentions(&tokens, keyword))
        .map(|(_, answer)| *answer)
        .unwrap_or(templates::CAPABILITY_OVERVIEW);

    draft(
        ResponseKind::Default,
        message.to_string(),
        templates::DEFAULT_SUGGESTIONS,
        None,
    )
}

pub fn apology_reply() -> ReplyDraft {
    ReplyDraft {
        message: templates::APOLOGY_MESSAGE.to_string(),
        suggestions: to_strings(templates::APOLOGY_SUGGESTIONS),
        quick_actions: Vec::new(),
        data: None,
        kind: ResponseKind::Error,
    }
}

pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn draft(
    kind: ResponseKind,
    message: String,
    suggestions: &[&str],
    data: Option<ResponseData>,
) -> ReplyDraft {
    ReplyDraft {
        message,
        suggestions: to_strings(suggestions),
        quick_actions: to_strings(templates::QUICK_ACTIONS),
        data,
        kind,
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
