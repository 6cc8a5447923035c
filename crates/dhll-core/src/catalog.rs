//! Option catalogs (tones, cultures, circumstances) and circumstance
//! auto-detection from free text.

/// A selectable option: display label and wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub label: &'static str,
    pub value: &'static str,
}

const fn item(label: &'static str, value: &'static str) -> CatalogItem {
    CatalogItem { label, value }
}

/// A named group of circumstance tags.
#[derive(Debug, Clone, Copy)]
pub struct CircumstanceGroup {
    pub key: &'static str,
    pub label: &'static str,
    pub items: &'static [CatalogItem],
}

pub const TONES: &[CatalogItem] = &[
    item("Neutral", "neutral"),
    item("Friendly", "friendly"),
    item("Clear & Simple", "clear_simple"),
    item("Poetic", "poetic"),
    item("Humorous", "humorous"),
    item("Reflective", "reflective"),
    item("Professional", "professional"),
    item("Empathetic", "empathetic"),
    item("Solemn", "solemn"),
    item("Celebratory", "celebratory"),
    item("Persuasive", "persuasive"),
    item("Clinical", "clinical"),
    item("Casual", "casual"),
    item("Formal", "formal"),
    item("Inspirational", "inspirational"),
    item("Authoritative", "authoritative"),
    item("Compassionate", "compassionate"),
    item("Reassuring", "reassuring"),
    item("Urgent", "urgent"),
];

/// Culture value meaning "no cultural context".
pub const CULTURE_NONE: &str = "NONE";

pub const CULTURE_REGIONS: &[CatalogItem] = &[
    item("West Africa", "west_africa"),
    item("East Africa", "east_africa"),
    item("Southern Africa", "southern_africa"),
    item("Latin America", "latin_america"),
    item("Western Europe", "western_europe"),
    item("Eastern Europe", "eastern_europe"),
    item("Southeast Asia", "south_east_asia"),
    item("South Asia", "south_asia"),
    item("East Asia", "east_asia"),
    item("Middle East", "middle_east"),
    item("North America", "north_america"),
];

pub const CULTURE_FAITH: &[CatalogItem] = &[
    item("Muslim", "muslim"),
    item("Christian", "christian"),
    item("Jewish", "jewish"),
    item("Hindu", "hindu"),
    item("Buddhist", "buddhist"),
];

pub const CULTURE_COUNTRIES: &[CatalogItem] = &[
    item("United States", "us"),
    item("Japan", "jp"),
    item("Mexico", "mx"),
    item("France", "fr"),
    item("Nigeria", "ng"),
    item("South Africa", "za"),
    item("Kenya", "ke"),
    item("Brazil", "br"),
    item("India", "in"),
    item("Indonesia", "id"),
];

pub const CIRCUMSTANCE_GROUPS: &[CircumstanceGroup] = &[
    CircumstanceGroup {
        key: "time",
        label: "Time of Day",
        items: &[
            item("Dawn", "time_dawn"),
            item("Morning", "time_morning"),
            item("Noon", "time_noon"),
            item("Dusk", "time_dusk"),
            item("Night", "time_night"),
        ],
    },
    CircumstanceGroup {
        key: "weather",
        label: "Weather",
        items: &[
            item("Sunshine", "weather_sunshine"),
            item("Rain", "weather_rain"),
            item("Snow", "weather_snow"),
            item("Storm", "weather_storm"),
            item("Fog", "weather_fog"),
            item("Windy", "weather_windy"),
        ],
    },
    CircumstanceGroup {
        key: "location",
        label: "Location",
        items: &[
            item("Indoors", "loc_indoors"),
            item("Outdoors", "loc_outdoors"),
            item("Beach", "loc_beach"),
            item("Mountain", "loc_mountain"),
            item("Forest", "loc_forest"),
            item("City Street", "loc_city"),
            item("Stadium", "loc_stadium"),
            item("Office", "loc_office"),
            item("House of Worship", "loc_worship"),
        ],
    },
    CircumstanceGroup {
        key: "occasion",
        label: "Occasion / Event",
        items: &[
            item("Wedding", "occ_wedding"),
            item("Funeral", "occ_funeral"),
            item("Baptism", "occ_baptism"),
            item("Business Meetings", "occ_business"),
            item("Customer Service Emails", "occ_customer_service_email"),
            item("Job Application Emails", "occ_job_application_email"),
            item("Product Tagline", "occ_product_tagline"),
            item("Resume Bullet", "occ_resume_bullet"),
            item("Casual", "occ_casual"),
            item("Party", "occ_party"),
            item("Conference", "occ_conference"),
            item("Graduation", "occ_graduation"),
            item("Festival", "occ_festival"),
            item("Sports Game", "occ_sports_game"),
            item("Concert", "occ_concert"),
        ],
    },
];

/// Keyword → circumstance tags. Matching is substring on lower-cased text,
/// scanned in this order.
pub const KEYWORD_TAGS: &[(&str, &[&str])] = &[
    ("dawn", &["time_dawn"]),
    ("morning", &["time_morning"]),
    ("noon", &["time_noon"]),
    ("dusk", &["time_dusk"]),
    ("night", &["time_night"]),
    ("sunny", &["weather_sunshine"]),
    ("sunshine", &["weather_sunshine"]),
    ("rain", &["weather_rain"]),
    ("snow", &["weather_snow"]),
    ("storm", &["weather_storm"]),
    ("fog", &["weather_fog"]),
    ("wind", &["weather_windy"]),
    ("windy", &["weather_windy"]),
    ("indoor", &["loc_indoors"]),
    ("indoors", &["loc_indoors"]),
    ("inside", &["loc_indoors"]),
    ("outdoor", &["loc_outdoors"]),
    ("outdoors", &["loc_outdoors"]),
    ("outside", &["loc_outdoors"]),
    ("beach", &["loc_beach", "loc_outdoors"]),
    ("mountain", &["loc_mountain", "loc_outdoors"]),
    ("forest", &["loc_forest", "loc_outdoors"]),
    ("city", &["loc_city", "loc_outdoors"]),
    ("street", &["loc_city", "loc_outdoors"]),
    ("stadium", &["loc_stadium", "loc_outdoors"]),
    ("office", &["loc_office", "loc_indoors"]),
    ("church", &["loc_worship", "loc_indoors"]),
    ("mosque", &["loc_worship", "loc_indoors"]),
    ("temple", &["loc_worship", "loc_indoors"]),
    ("wedding", &["occ_wedding"]),
    ("funeral", &["occ_funeral"]),
    ("baptism", &["occ_baptism"]),
    ("business", &["occ_business"]),
    ("casual", &["occ_casual"]),
    ("party", &["occ_party"]),
    ("conference", &["occ_conference"]),
    ("graduation", &["occ_graduation"]),
    ("festival", &["occ_festival"]),
    ("concert", &["occ_concert"]),
    ("game", &["occ_sports_game"]),
    ("soccer", &["occ_sports_game"]),
    ("football", &["occ_sports_game"]),
    ("business meeting", &["occ_business"]),
    ("business meetings", &["occ_business"]),
    ("customer service", &["occ_customer_service_email"]),
    ("customer service email", &["occ_customer_service_email"]),
    ("customer support", &["occ_customer_service_email"]),
    ("job application", &["occ_job_application_email"]),
    ("job application email", &["occ_job_application_email"]),
    ("product tagline", &["occ_product_tagline"]),
    ("tagline", &["occ_product_tagline"]),
    ("resume bullet", &["occ_resume_bullet"]),
    ("resume bullets", &["occ_resume_bullet"]),
];

#[must_use]
pub fn is_known_tone(value: &str) -> bool {
    TONES.iter().any(|t| t.value == value)
}

#[must_use]
pub fn is_known_culture(value: &str) -> bool {
    value == CULTURE_NONE
        || [CULTURE_REGIONS, CULTURE_FAITH, CULTURE_COUNTRIES]
            .iter()
            .any(|group| group.iter().any(|c| c.value == value))
}

#[must_use]
pub fn is_known_circumstance(tag: &str) -> bool {
    CIRCUMSTANCE_GROUPS
        .iter()
        .any(|group| group.items.iter().any(|i| i.value == tag))
}

/// Tags implied by keywords in `text`, deduplicated in first-seen order.
#[must_use]
pub fn detect_circumstances(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();
    for (keyword, tags) in KEYWORD_TAGS {
        if !lowered.contains(keyword) {
            continue;
        }
        for tag in *tags {
            if !found.iter().any(|t| t == tag) {
                found.push((*tag).to_string());
            }
        }
    }
    found
}

/// Append `detected` tags not already in `selected`.
#[must_use]
pub fn merge_circumstances(selected: &[String], detected: &[String]) -> Vec<String> {
    let mut merged = selected.to_vec();
    for tag in detected {
        if !merged.contains(tag) {
            merged.push(tag.clone());
        }
    }
    merged
}
