use yatra_core::{Coordinates, Destination, DestinationType, Location};

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    kind: DestinationType,
    rating: f32,
    district: &'static str,
    lat: f64,
    lng: f64,
    entry_fee: Option<&'static str>,
    best_time: Option<&'static str>,
    active: bool,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "betla-national-park",
        name: "Betla National Park",
        description: "Part of Palamau Tiger Reserve with tigers, elephants, gaur and the ruins of the Palamu forts. Jeep and elephant safaris start from the Betla gate.",
        kind: DestinationType::Wildlife,
        rating: 4.5,
        district: "Latehar",
        lat: 23.8870,
        lng: 84.1920,
        entry_fee: Some("Rs 100 per vehicle, safari extra"),
        best_time: Some("November to April"),
        active: true,
    },
    Seed {
        id: "hazaribagh-wildlife-sanctuary",
        name: "Hazaribagh Wildlife Sanctuary",
        description: "Rolling sal forest with sambar, nilgai and leopards, crossed by a scenic drive with watchtowers.",
        kind: DestinationType::Wildlife,
        rating: 4.1,
        district: "Hazaribagh",
        lat: 24.1020,
        lng: 85.3630,
        entry_fee: Some("Rs 50"),
        best_time: Some("October to March"),
        active: true,
    },
    Seed {
        id: "dalma-wildlife-sanctuary",
        name: "Dalma Wildlife Sanctuary",
        description: "Hill forest near Jamshedpur known for its wild elephant herds and the Dalma top viewpoint.",
        kind: DestinationType::Wildlife,
        rating: 4.2,
        district: "East Singhbhum",
        lat: 22.8780,
        lng: 86.2000,
        entry_fee: Some("Rs 30"),
        best_time: Some("November to May"),
        active: true,
    },
    Seed {
        id: "hundru-falls",
        name: "Hundru Falls",
        description: "The Subarnarekha river drops 98 metres into a rocky pool, one of the highest waterfalls in the state.",
        kind: DestinationType::Nature,
        rating: 4.6,
        district: "Ranchi",
        lat: 23.4510,
        lng: 85.6650,
        entry_fee: Some("Rs 20"),
        best_time: Some("July to October"),
        active: true,
    },
    Seed {
        id: "dassam-falls",
        name: "Dassam Falls",
        description: "The Kanchi river cascades 44 metres through a forested gorge near Taimara village.",
        kind: DestinationType::Nature,
        rating: 4.4,
        district: "Ranchi",
        lat: 23.1450,
        lng: 85.4640,
        entry_fee: Some("Rs 20"),
        best_time: Some("July to November"),
        active: true,
    },
    Seed {
        id: "netarhat",
        name: "Netarhat Hill Station",
        description: "The Queen of Chotanagpur: pine forests, Magnolia Point sunsets and cool summers at 1,128 metres.",
        kind: DestinationType::Nature,
        rating: 4.7,
        district: "Latehar",
        lat: 23.4800,
        lng: 84.2670,
        entry_fee: None,
        best_time: Some("October to June"),
        active: true,
    },
    Seed {
        id: "rock-garden-ranchi",
        name: "Rock Garden, Ranchi",
        description: "Sculptures carved into Gonda Hill beside Kanke Dam, a favourite evening spot in the capital.",
        kind: DestinationType::Cultural,
        rating: 4.0,
        district: "Ranchi",
        lat: 23.3930,
        lng: 85.3180,
        entry_fee: Some("Rs 10"),
        best_time: None,
        active: true,
    },
    Seed {
        id: "baidyanath-dham",
        name: "Baba Baidyanath Dham, Deoghar",
        description: "One of the twelve Jyotirlingas and the destination of the Shravani Mela kanwar pilgrimage.",
        kind: DestinationType::Religious,
        rating: 4.8,
        district: "Deoghar",
        lat: 24.4920,
        lng: 86.7000,
        entry_fee: None,
        best_time: Some("October to March, July for Shravani Mela"),
        active: true,
    },
    Seed {
        id: "parasnath-hill",
        name: "Parasnath Hill",
        description: "Shikharji, the holiest Jain pilgrimage site and the highest peak in Jharkhand, reached by a 27 km trek.",
        kind: DestinationType::Adventure,
        rating: 4.6,
        district: "Giridih",
        lat: 23.9620,
        lng: 86.1290,
        entry_fee: None,
        best_time: Some("October to March"),
        active: true,
    },
    Seed {
        id: "patratu-valley",
        name: "Patratu Valley",
        description: "Hairpin bends above the Patratu reservoir with boating and sunset viewpoints.",
        kind: DestinationType::Nature,
        rating: 4.3,
        district: "Ramgarh",
        lat: 23.6330,
        lng: 85.2870,
        entry_fee: None,
        best_time: Some("September to February"),
        active: true,
    },
    Seed {
        id: "maluti-temples",
        name: "Maluti Temples",
        description: "A village of 72 surviving terracotta temples built by the Baj Basanta kings.",
        kind: DestinationType::Cultural,
        rating: 4.2,
        district: "Dumka",
        lat: 24.1600,
        lng: 87.6700,
        entry_fee: None,
        best_time: Some("October to March"),
        active: true,
    },
    Seed {
        id: "lodh-falls",
        name: "Lodh Falls",
        description: "The highest waterfall in Jharkhand at 143 metres, deep in the Latehar forests. Access closed during road repairs.",
        kind: DestinationType::Nature,
        rating: 4.5,
        district: "Latehar",
        lat: 23.5150,
        lng: 84.0480,
        entry_fee: Some("Rs 20"),
        best_time: Some("July to October"),
        active: false,
    },
];

/// Built-in catalog used to seed a fresh store.
pub fn default_destinations() -> Vec<Destination> {
    SEEDS
        .iter()
        .map(|seed| Destination {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            destination_type: seed.kind,
            images: vec![format!("/images/destinations/{}.jpg", seed.id)],
            rating: seed.rating,
            location: Location {
                district: seed.district.to_string(),
                state: "Jharkhand".to_string(),
            },
            coordinates: Coordinates {
                lat: seed.lat,
                lng: seed.lng,
            },
            entry_fee: seed.entry_fee.map(ToString::to_string),
            best_time_to_visit: seed.best_time.map(ToString::to_string),
            active: seed.active,
        })
        .collect()
}
