//! Keys of the persisted settings store.

pub const PARENTAL_ENABLED: &str = "dhll_parental_enabled";
/// `"true"` once a PIN has been set.
pub const PARENTAL_PIN_SET: &str = "dhll_parental_pin_set";
pub const PARENTAL_PIN_HASH: &str = "dhll_parental_pin_hash";
pub const PARENTAL_MAX_RATING: &str = "dhll_parental_max_rating";
pub const ACTIVE_RATING: &str = "dhll_active_rating";
/// JSON array of audit entries, newest first.
pub const SESSION_AUDIT: &str = "dhll_session_audit";
pub const API_BASE: &str = "dhll_api_base";
