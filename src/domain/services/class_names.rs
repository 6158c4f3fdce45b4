use crate::domain::models::button::{ButtonConfig, ButtonSize};
use crate::shared::constants::{
    BASE_CLASS, BLOCK_CLASS, DISABLED_CLASS, LARGE_CLASS, OUTLINE_VARIANT_PREFIX, SMALL_CLASS,
    VARIANT_PREFIX,
};

/// Class list for the `<button>` element.
///
/// Tokens in order: base, variant (plain or outline), size (none for
/// medium), block, disabled (also set while loading), then the caller's
/// extra class verbatim. Empty tokens are skipped so the result never has
/// doubled or surrounding spaces. No de-duplication.
pub fn compose_class_names(config: &ButtonConfig) -> String {
    let variant_class = if config.outline {
        format!("{OUTLINE_VARIANT_PREFIX}{}", config.variant.as_str())
    } else {
        format!("{VARIANT_PREFIX}{}", config.variant.as_str())
    };

    let size_class = match config.size {
        ButtonSize::Small => SMALL_CLASS,
        ButtonSize::Medium => "",
        ButtonSize::Large => LARGE_CLASS,
    };

    let block_class = if config.block { BLOCK_CLASS } else { "" };
    let disabled_class = if config.is_inactive() { DISABLED_CLASS } else { "" };

    [
        BASE_CLASS,
        variant_class.as_str(),
        size_class,
        block_class,
        disabled_class,
        config.extra_class.trim(),
    ]
    .into_iter()
    .filter(|token| !token.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::button::ButtonVariant;

    fn tokens(config: &ButtonConfig) -> Vec<String> {
        compose_class_names(config)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_default_config() {
        assert_eq!(compose_class_names(&ButtonConfig::default()), "btn btn-primary");
    }

    #[test]
    fn test_base_token_always_present() {
        for variant in ButtonVariant::ALL {
            for outline in [false, true] {
                let config = ButtonConfig {
                    variant,
                    outline,
                    ..Default::default()
                };
                assert_eq!(tokens(&config)[0], "btn");
            }
        }
    }

    #[test]
    fn test_variant_token_is_plain_or_outline_never_both() {
        for variant in ButtonVariant::ALL {
            let plain = tokens(&ButtonConfig {
                variant,
                ..Default::default()
            });
            let outlined = tokens(&ButtonConfig {
                variant,
                outline: true,
                ..Default::default()
            });
            let plain_token = format!("btn-{variant}");
            let outline_token = format!("btn-outline-{variant}");

            assert!(plain.contains(&plain_token));
            assert!(!plain.contains(&outline_token));
            assert!(outlined.contains(&outline_token));
            assert!(!outlined.contains(&plain_token));
        }
    }

    #[test]
    fn test_medium_has_no_size_token() {
        let medium = tokens(&ButtonConfig::default());
        let small = tokens(&ButtonConfig {
            size: ButtonSize::Small,
            ..Default::default()
        });
        let large = tokens(&ButtonConfig {
            size: ButtonSize::Large,
            ..Default::default()
        });

        assert_eq!(medium.len(), 2);
        assert_eq!(small.len(), 3);
        assert_eq!(large.len(), 3);
        assert!(small.contains(&"btn-sm".to_string()));
        assert!(large.contains(&"btn-lg".to_string()));
        assert_ne!(SMALL_CLASS, LARGE_CLASS);
    }

    #[test]
    fn test_disabled_token_for_disabled_or_loading() {
        for (disabled, loading) in [(false, false), (true, false), (false, true), (true, true)] {
            let config = ButtonConfig {
                disabled,
                loading,
                ..Default::default()
            };
            let has_token = tokens(&config).contains(&"disabled".to_string());
            assert_eq!(has_token, disabled || loading);
        }
    }

    #[test]
    fn test_danger_outline_large_block() {
        let config = ButtonConfig {
            variant: ButtonVariant::Danger,
            outline: true,
            size: ButtonSize::Large,
            block: true,
            ..Default::default()
        };
        assert_eq!(
            compose_class_names(&config),
            "btn btn-outline-danger btn-lg btn-block"
        );
    }

    #[test]
    fn test_extra_class_appended_without_stray_spaces() {
        let config = ButtonConfig {
            extra_class: " shadow  rounded-pill ".to_string(),
            ..Default::default()
        };
        let class = compose_class_names(&config);
        assert_eq!(class, "btn btn-primary shadow  rounded-pill");
        assert!(!class.starts_with(' ') && !class.ends_with(' '));
    }

    #[test]
    fn test_no_deduplication() {
        let config = ButtonConfig {
            extra_class: "btn".to_string(),
            ..Default::default()
        };
        assert_eq!(compose_class_names(&config), "btn btn-primary btn");
    }
}
