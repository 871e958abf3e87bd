use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_names_round_trip_through_from_str() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

#[test]
fn theme_parse_is_exact() {
    assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".to_owned())));
    assert!(" light".parse::<Theme>().is_err());
}

#[test]
fn opposite_flips_and_is_involutive() {
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite().opposite(), Theme::Dark);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<Theme>("\"light\"").unwrap(), Theme::Light);
}

// =============================================================
// Preference
// =============================================================

#[test]
fn preference_parse_accepts_only_known_values() {
    assert_eq!(Preference::parse(Some("dark")), Preference::new(Theme::Dark));
    assert_eq!(Preference::parse(Some("light")), Preference::new(Theme::Light));
    assert_eq!(Preference::parse(Some("sepia")), Preference::UNSET);
    assert_eq!(Preference::parse(None), Preference::UNSET);
}

#[test]
fn preference_default_is_unset() {
    assert!(!Preference::default().is_set());
    assert!(Preference::from(Theme::Light).is_set());
}

// =============================================================
// Decision
// =============================================================

#[test]
fn unset_preference_follows_the_night_flag() {
    assert_eq!(decide_theme(Preference::UNSET, true), Theme::Dark);
    assert_eq!(decide_theme(Preference::UNSET, false), Theme::Light);
}

#[test]
fn explicit_preference_overrides_time() {
    assert_eq!(decide_theme(Preference::new(Theme::Light), true), Theme::Light);
    assert_eq!(decide_theme(Preference::new(Theme::Dark), false), Theme::Dark);
}

// =============================================================
// Control view
// =============================================================

#[test]
fn dark_view_offers_the_sun_and_light_title() {
    let view = ControlView::for_theme(Theme::Dark, &ToggleLabels::default());
    assert_eq!(view.checked, "true");
    assert_eq!(view.indicator, SUN_INDICATOR);
    assert_eq!(view.fixed_title, "Switch to light mode");
}

#[test]
fn light_view_offers_the_moon_and_dark_title() {
    let view = ControlView::for_theme(Theme::Light, &ToggleLabels::default());
    assert_eq!(view.checked, "false");
    assert_eq!(view.indicator, MOON_INDICATOR);
    assert_eq!(view.fixed_title, "Switch to dark mode");
}
