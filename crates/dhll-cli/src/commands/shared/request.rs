use dhll_config::DefaultsConfig;
use dhll_core::catalog::{detect_circumstances, merge_circumstances};
use dhll_core::enums::RatingCode;
use dhll_core::wire::{EnhanceOptions, EnhanceRequest};

use crate::cli::root_commands::EnhanceOptionArgs;
use crate::context::warn_unknown_options;

/// Assemble an `/enhance` body from flags, falling back to configured
/// defaults. Detected circumstance tags are appended after the selected ones.
pub fn build_enhance_request(
    text: &str,
    args: &EnhanceOptionArgs,
    defaults: &DefaultsConfig,
    age_rating: Option<RatingCode>,
) -> EnhanceRequest {
    let tone = args.tone.clone().unwrap_or_else(|| defaults.tone.clone());
    let culture = args
        .culture
        .clone()
        .unwrap_or_else(|| defaults.culture.clone());

    let environment = if args.no_auto_detect || !defaults.auto_detect {
        args.env.clone()
    } else {
        let detected = detect_circumstances(text);
        if !detected.is_empty() {
            tracing::debug!(?detected, "circumstances detected in text");
        }
        merge_circumstances(&args.env, &detected)
    };

    warn_unknown_options(&tone, &culture, &environment);

    EnhanceRequest {
        text: text.to_string(),
        mode: args.mode.unwrap_or(defaults.policy_mode),
        culture,
        options: EnhanceOptions {
            tone,
            environment,
            dhll_mode: args.ui_mode.unwrap_or(defaults.ui_mode),
            age_rating,
        },
    }
}

#[cfg(test)]
mod tests {
    use dhll_core::enums::{CreativeMode, PolicyMode};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_fill_missing_flags() {
        let request = build_enhance_request(
            "plain words",
            &EnhanceOptionArgs::default(),
            &DefaultsConfig::default(),
            None,
        );
        assert_eq!(request.mode, PolicyMode::Advisory);
        assert_eq!(request.culture, "NONE");
        assert_eq!(request.options.tone, "neutral");
        assert_eq!(request.options.dhll_mode, CreativeMode::Full);
        assert!(request.options.environment.is_empty());
        assert_eq!(request.options.age_rating, None);
    }

    #[test]
    fn detected_tags_follow_selected_ones() {
        let args = EnhanceOptionArgs {
            env: vec!["occ_party".into()],
            ..EnhanceOptionArgs::default()
        };
        let request = build_enhance_request(
            "Rainy night party",
            &args,
            &DefaultsConfig::default(),
            Some(RatingCode::Thirteen),
        );
        let expected = merge_circumstances(&args.env, &detect_circumstances("Rainy night party"));
        assert_eq!(request.options.environment, expected);
        assert_eq!(request.options.environment[0], "occ_party");
        assert_eq!(request.options.age_rating, Some(RatingCode::Thirteen));
    }

    #[test]
    fn auto_detect_can_be_switched_off() {
        let args = EnhanceOptionArgs {
            no_auto_detect: true,
            ..EnhanceOptionArgs::default()
        };
        let request =
            build_enhance_request("Rainy night party", &args, &DefaultsConfig::default(), None);
        assert!(request.options.environment.is_empty());

        let defaults = DefaultsConfig {
            auto_detect: false,
            ..DefaultsConfig::default()
        };
        let request =
            build_enhance_request("Rainy night party", &EnhanceOptionArgs::default(), &defaults, None);
        assert!(request.options.environment.is_empty());
    }
}
