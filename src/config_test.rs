use super::*;
use crate::state::theme::Theme;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_documented_values() {
    let config = ThemeConfig::default();
    assert_eq!(config.night_start_hour, 18);
    assert_eq!(config.night_end_hour, 6);
    assert!(config.auto_switch);
    assert_eq!(config.auto_switch_interval, 60_000);
    assert_eq!(config.dark_mode_class, "dark-mode");
    assert_eq!(config.light_mode_class, "light-mode");
    assert_eq!(config.storage_key, "theme-preference");
    assert_eq!(config.toggle_selector, ".theme-toggle");
    assert_eq!(config.fixed_toggle_selector, ".fixed-theme-toggle");
    assert!(config.create_fixed_toggle);
    assert!(config.validate().is_ok());
}

#[test]
fn class_for_maps_each_theme() {
    let config = ThemeConfig::default();
    assert_eq!(config.class_for(Theme::Dark), "dark-mode");
    assert_eq!(config.class_for(Theme::Light), "light-mode");
}

// =============================================================
// JSON parsing
// =============================================================

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = ThemeConfig::from_json(r#"{"nightStartHour": 19, "autoSwitch": false}"#).unwrap();
    assert_eq!(config.night_start_hour, 19);
    assert_eq!(config.night_end_hour, 6);
    assert!(!config.auto_switch);
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}

#[test]
fn from_json_accepts_zero_hours() {
    let config = ThemeConfig::from_json(r#"{"nightEndHour": 0}"#).unwrap();
    assert_eq!(config.night_end_hour, 0);
}

#[test]
fn from_json_reads_nested_labels() {
    let config = ThemeConfig::from_json(r#"{"labels": {"switchToDark": "Go dark"}}"#).unwrap();
    assert_eq!(config.labels.switch_to_dark, "Go dark");
    assert_eq!(config.labels.switch_to_light, "Switch to light mode");
}

#[test]
fn from_json_reports_malformed_input() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_rejects_out_of_range_hours() {
    let err = ThemeConfig::from_json(r#"{"nightStartHour": 24}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(msg) if msg.contains("nightStartHour")));

    let config = ThemeConfig { night_end_hour: 30, ..ThemeConfig::default() };
    assert!(matches!(config.validate(), Err(ThemeError::InvalidConfig(msg)) if msg.contains("nightEndHour")));
}

#[test]
fn validate_rejects_zero_interval() {
    let config = ThemeConfig { auto_switch_interval: 0, ..ThemeConfig::default() };
    assert!(matches!(config.validate(), Err(ThemeError::InvalidConfig(_))));
}

#[test]
fn validate_rejects_identical_or_empty_classes() {
    let same = ThemeConfig { light_mode_class: "dark-mode".into(), ..ThemeConfig::default() };
    assert!(same.validate().is_err());

    let empty = ThemeConfig { dark_mode_class: " ".into(), ..ThemeConfig::default() };
    assert!(empty.validate().is_err());
}

#[test]
fn validate_rejects_class_names_with_whitespace() {
    let config = ThemeConfig { dark_mode_class: "dark mode".into(), ..ThemeConfig::default() };
    assert!(matches!(config.validate(), Err(ThemeError::InvalidConfig(msg)) if msg.contains("darkModeClass")));

    let config = ThemeConfig { light_mode_class: "light\tmode".into(), ..ThemeConfig::default() };
    assert!(matches!(config.validate(), Err(ThemeError::InvalidConfig(msg)) if msg.contains("lightModeClass")));
}

#[test]
fn validate_rejects_blank_selectors() {
    let config = ThemeConfig { toggle_selector: String::new(), ..ThemeConfig::default() };
    assert!(matches!(config.validate(), Err(ThemeError::InvalidConfig(msg)) if msg.contains("toggleSelector")));

    let err = ThemeConfig::from_json(r#"{"fixedToggleSelector": " "}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(msg) if msg.contains("fixedToggleSelector")));
}

#[test]
fn validate_accepts_non_wrapping_window() {
    let config = ThemeConfig { night_start_hour: 6, night_end_hour: 18, ..ThemeConfig::default() };
    assert!(config.validate().is_ok());
}

// =============================================================
// Fixed toggle class
// =============================================================

#[test]
fn fixed_toggle_class_extracts_simple_selectors() {
    assert_eq!(ThemeConfig::default().fixed_toggle_class(), Some("fixed-theme-toggle"));

    let custom = ThemeConfig { fixed_toggle_selector: " .corner_toggle ".into(), ..ThemeConfig::default() };
    assert_eq!(custom.fixed_toggle_class(), Some("corner_toggle"));
}

#[test]
fn fixed_toggle_class_rejects_compound_selectors() {
    for selector in ["#toggle", "button.toggle", ".a .b", ".a.b", "."] {
        let config = ThemeConfig { fixed_toggle_selector: selector.into(), ..ThemeConfig::default() };
        assert_eq!(config.fixed_toggle_class(), None, "{selector}");
    }
}
