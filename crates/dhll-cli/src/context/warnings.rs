use dhll_config::DhllConfig;
use dhll_core::catalog::{is_known_circumstance, is_known_culture, is_known_tone};

/// Warn about `DHLL_API_*` env vars that were ignored for lack of a double
/// underscore.
pub fn warn_unconfigured(config: &DhllConfig) {
    let keys = std::env::vars().map(|(key, _)| key);
    for warning in collect_unconfigured_warnings(config, keys) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings(
    config: &DhllConfig,
    env_keys: impl IntoIterator<Item = String>,
) -> Vec<String> {
    let stray = env_keys
        .into_iter()
        .any(|key| key.starts_with("DHLL_API") && !key.starts_with("DHLL_API__"));
    if !config.api.is_configured() && stray {
        vec![
            "API base looks unset while DHLL_API* env vars exist. Use double underscores (example: DHLL_API__BASE_URL)."
                .to_string(),
        ]
    } else {
        Vec::new()
    }
}

/// Values outside the catalogs are still sent, with a warning.
pub fn warn_unknown_options(tone: &str, culture: &str, environment: &[String]) {
    for warning in collect_option_warnings(tone, culture, environment) {
        tracing::warn!("{warning}");
    }
}

fn collect_option_warnings(tone: &str, culture: &str, environment: &[String]) -> Vec<String> {
    let mut warnings = Vec::new();
    if !is_known_tone(tone) {
        warnings.push(format!("unknown tone '{tone}'"));
    }
    if !is_known_culture(culture) {
        warnings.push(format!("unknown culture '{culture}'"));
    }
    for tag in environment.iter().filter(|tag| !is_known_circumstance(tag)) {
        warnings.push(format!("unknown circumstance tag '{tag}'"));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_underscore_env_key_is_flagged() {
        let warnings =
            collect_unconfigured_warnings(&DhllConfig::default(), ["DHLL_API_BASE_URL".to_string()]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("DHLL_API__BASE_URL"));
    }

    #[test]
    fn double_underscore_env_key_is_fine() {
        let warnings =
            collect_unconfigured_warnings(&DhllConfig::default(), ["DHLL_API__TIMEOUT_SECS".to_string()]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn unknown_options_are_listed() {
        let warnings = collect_option_warnings(
            "sarcastic",
            "jp",
            &["occ_party".to_string(), "moon_base".to_string()],
        );
        assert_eq!(
            warnings,
            vec!["unknown tone 'sarcastic'", "unknown circumstance tag 'moon_base'"]
        );
    }
}
