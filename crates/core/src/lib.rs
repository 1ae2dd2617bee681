pub mod composer;
pub mod intent;
pub mod models;
pub mod templates;

pub use composer::{
    apology_reply, culture_reply, destination_detail_reply, destination_reply, emergency_reply,
    fallback_reply, greeting_reply, thanks_reply, travel_reply, unknown_place_reply,
    weather_overview_reply, weather_reply,
};
pub use intent::{classify, classify_intent, extract_city, is_known_city, normalize_text};
pub use models::*;
