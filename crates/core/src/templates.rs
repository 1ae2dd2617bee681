//! Canned content used by the composer. Facts in here (festival months,
//! helpline numbers, fares) are editorial content, not logic.

use crate::models::{CultureTopic, DestinationType, TravelTopic};

pub const GREETINGS: &[&str] = &[
    "Johar! Welcome to Jharkhand, the land of forests. I can help you find destinations, check the weather, explore tribal culture and plan your trip.",
    "Namaste! I'm your Jharkhand travel guide. Ask me about waterfalls, wildlife, festivals or how to get around.",
    "Hello and welcome! From Betla's tigers to Hundru's waterfalls, I can help you discover Jharkhand. What would you like to know?",
    "Hi there! Planning a trip to Jharkhand? Ask me about places to visit, local food, weather or travel tips.",
];

pub const GREETING_SUGGESTIONS: &[&str] = &[
    "Show me popular destinations",
    "What's the weather like?",
    "Tell me about tribal festivals",
    "Help me plan a trip",
];

pub const THANKS_MESSAGE: &str = "You're most welcome! Dhanyawad for exploring Jharkhand with me. Ask any time you need more help with your journey.";

pub const CAPABILITY_OVERVIEW: &str = "I can help you with:\n\
- Destinations: waterfalls, wildlife parks, hill stations and temples\n\
- Weather: current conditions for Ranchi, Deoghar, Netarhat and other cities\n\
- Culture: tribal festivals, local food and handicrafts\n\
- Travel: getting here, where to stay and sample itineraries\n\
- Emergency: helpline numbers for police, ambulance and tourist support\n\
\n\
Try asking \"Show me waterfalls near Ranchi\" or \"What's the weather in Deoghar?\"";

pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Popular destinations",
    "Weather update",
    "Tribal culture",
    "Plan my trip",
];

pub const APOLOGY_MESSAGE: &str = "I'm sorry, I'm having trouble processing your request right now. Please try again in a moment.";

pub const APOLOGY_SUGGESTIONS: &[&str] = &["Try again", "Contact support", "Emergency help"];

pub const EMERGENCY_MESSAGE: &str = "Emergency contacts in Jharkhand:\n\
- Police: 100\n\
- Ambulance: 108\n\
- Fire: 101\n\
- Women helpline: 1091\n\
- National emergency number: 112\n\
- Tourist helpline (toll free): 1800-11-1363\n\
\n\
Major hospitals: RIMS Ranchi (0651-2541533), Tata Main Hospital Jamshedpur (0657-2424444). Stay where you are and share your location if you need assistance.";

pub const EMERGENCY_SUGGESTIONS: &[&str] = &[
    "Nearest hospital",
    "Police stations",
    "Tourist helpline",
];

pub const WEATHER_OVERVIEW: &str = "Jharkhand has a pleasant plateau climate:\n\
- Winter (Oct-Feb): 10-25°C, the best season for sightseeing\n\
- Summer (Mar-May): 25-40°C, hill stations like Netarhat stay cooler\n\
- Monsoon (Jun-Sep): heavy rain, waterfalls are at their most spectacular\n\
\n\
Ask about a city, for example \"weather in Ranchi\", for current conditions.";

pub const WEATHER_SUGGESTIONS: &[&str] = &[
    "Weather in Ranchi",
    "Best time to visit",
    "Monsoon travel tips",
];

pub const DESTINATION_SUGGESTIONS: &[&str] = &[
    "Show on map",
    "Best time to visit",
    "How to reach",
    "Nearby stays",
];

pub const CULTURE_SUGGESTIONS: &[&str] = &[
    "Upcoming festivals",
    "Local food",
    "Handicrafts to buy",
];

pub const TRAVEL_SUGGESTIONS: &[&str] = &[
    "How to reach Ranchi",
    "Find homestays",
    "3-day itinerary",
];

pub const QUICK_ACTIONS: &[&str] = &["Explore Map", "Weather", "Plan Trip", "Emergency"];

pub const EMERGENCY_QUICK_ACTIONS: &[&str] = &["Call 112", "Call 108", "Share Location"];

/// Second-tier answers for messages no intent rule recognised.
pub const FAQ_ANSWERS: &[(&str, &str)] = &[
    (
        "booking",
        "Most destinations need no advance booking. Forest rest houses at Betla and Netarhat, and jungle safaris, should be booked through Jharkhand Tourism or the Forest Department a few days ahead.",
    ),
    (
        "cost",
        "Jharkhand is budget friendly: entry fees are usually Rs 10-100, homestays start around Rs 800 per night and a day taxi around Ranchi costs about Rs 2,000-2,500.",
    ),
    (
        "best time",
        "October to March is the best time to visit: cool, dry weather for sightseeing. July to September is ideal for waterfalls, while April to June suits Netarhat and other hill stations.",
    ),
    (
        "distance",
        "Distances from Ranchi: Hundru Falls 45 km, Dassam Falls 40 km, Netarhat 155 km, Betla National Park 170 km, Deoghar 250 km.",
    ),
    (
        "permit",
        "Indian visitors need no special permits. Forest areas such as Betla require an entry ticket, and some tribal villages expect you to ask the local gram sabha before visiting.",
    ),
];

pub fn destination_message(focus: Option<DestinationType>) -> &'static str {
    match focus {
        Some(DestinationType::Wildlife) => "Jharkhand's wildlife is remarkable:\n\
- Betla National Park: tigers, elephants, bison and jeep safaris inside Palamau Tiger Reserve\n\
- Hazaribagh Wildlife Sanctuary: sambar, nilgai and watchtowers over dense sal forest\n\
- Dalma Wildlife Sanctuary: wild elephant herds near Jamshedpur\n\
\n\
Safaris run best from November to April.",
        Some(DestinationType::Nature) => "Jharkhand is known as the land of waterfalls:\n\
- Hundru Falls (98 m) on the Subarnarekha river\n\
- Dassam Falls, a 44 m cascade near Taimara\n\
- Jonha Falls, reached by nearly 700 steps\n\
- Netarhat, the Queen of Chotanagpur, famous for its sunrise and sunset points\n\
- Patratu Valley with its winding roads and reservoir",
        Some(DestinationType::Cultural) => "Discover Jharkhand's heritage:\n\
- Tribal Research Institute museum in Ranchi\n\
- Maluti temples, a cluster of terracotta temples in Dumka\n\
- Santhal and Munda villages with Sohrai wall paintings\n\
- Palamu forts deep in the forests of Latehar",
        Some(DestinationType::Adventure) => "For adventure seekers:\n\
- Trekking to Parasnath Hill, the highest peak in Jharkhand (1,350 m)\n\
- Rock climbing and rappelling at Tagore Hill and Dimna\n\
- Paragliding at Ranchi and Hazaribagh during the festival season\n\
- Camping and water sports at Patratu and Getalsud dams",
        Some(DestinationType::Religious) => "Sacred places in Jharkhand:\n\
- Baba Baidyanath Dham, Deoghar: one of the twelve Jyotirlingas\n\
- Parasnath (Shikharji): the holiest Jain pilgrimage site\n\
- Jagannath Temple, Ranchi: built in 1691 on a hillock\n\
- Rajrappa: Chhinnamasta temple at the Damodar-Bhairavi confluence",
        None => "Jharkhand has something for every traveller:\n\
- Waterfalls: Hundru, Dassam, Jonha\n\
- Wildlife: Betla National Park, Hazaribagh, Dalma\n\
- Hill stations: Netarhat, Patratu Valley\n\
- Pilgrimage: Baidyanath Dham, Parasnath\n\
\n\
Here are some of the top-rated places right now.",
    }
}

pub fn culture_message(topic: CultureTopic) -> &'static str {
    match topic {
        CultureTopic::Festivals => "Jharkhand's tribal festivals follow nature's cycle:\n\
- Sarhul (March-April): worship of the sal tree marking the new year\n\
- Karma (August-September): dances around karam branches for prosperity\n\
- Sohrai (October-November): harvest festival with painted mud walls\n\
- Tusu (January): harvest songs along the Subarnarekha\n\
- Shravani Mela (July-August): lakhs of pilgrims walk to Deoghar",
        CultureTopic::Food => "Taste Jharkhand:\n\
- Litti chokha: roasted wheat balls with mashed vegetables\n\
- Dhuska: deep-fried rice and lentil bread\n\
- Rugra: wild mushroom curry of the monsoon season\n\
- Thekua and pitha: festive sweets\n\
- Handia: traditional rice beer offered at festivals",
        CultureTopic::Crafts => "Jharkhand's crafts are living traditions:\n\
- Dokra: lost-wax metal casting from Khunti and Dumka\n\
- Sohrai and Khovar paintings from Hazaribagh\n\
- Paitkar scroll paintings of Amadubi village\n\
- Bamboo and tussar silk work sold at Jharcraft outlets",
        CultureTopic::General => "Jharkhand is home to 32 tribal communities, including the Santhal, Munda, Oraon and Ho. Their culture lives in Sarhul and Karma dances, nagpuri songs, Sohrai paintings, dokra crafts and food like dhuska and rugra. Ask me about festivals, food or crafts to learn more.",
    }
}

pub fn travel_message(topic: TravelTopic) -> &'static str {
    match topic {
        TravelTopic::Transport => "Getting to and around Jharkhand:\n\
- By air: Birsa Munda Airport, Ranchi, with flights from Delhi, Mumbai, Kolkata and Bengaluru\n\
- By rail: Ranchi, Tatanagar, Dhanbad and Jasidih (for Deoghar) are major stations\n\
- By road: JSRTC and private buses connect all districts; taxis are best for waterfalls and Netarhat",
        TravelTopic::Accommodation => "Where to stay:\n\
- Jharkhand Tourism hotels and forest rest houses at Betla and Netarhat\n\
- Tribal homestays near Ranchi and Khunti for an authentic village stay\n\
- Budget and premium hotels in Ranchi, Jamshedpur and Deoghar\n\
\n\
Book forest lodges early in winter.",
        TravelTopic::Itinerary => "A sample 5-day itinerary:\n\
- Day 1: Ranchi (Jagannath Temple, Rock Garden, Tagore Hill)\n\
- Day 2: Hundru, Jonha and Dassam falls\n\
- Day 3: Drive to Netarhat for the sunset point\n\
- Day 4: Betla National Park morning safari\n\
- Day 5: Return via Patratu Valley",
        TravelTopic::Unspecified => "I can help you plan your Jharkhand trip: how to get here, where to stay and day-by-day itineraries. October to March is the most comfortable season. What would you like to start with?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_keys_are_lowercase() {
        for (key, answer) in FAQ_ANSWERS {
            assert_eq!(*key, key.to_lowercase());
            assert!(!answer.is_empty());
        }
    }

    #[test]
    fn apology_suggestions_are_fixed() {
        assert_eq!(
            APOLOGY_SUGGESTIONS,
            &["Try again", "Contact support", "Emergency help"]
        );
    }
}
