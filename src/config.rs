//! Theme controller configuration.
//!
//! Field names deserialize in camelCase so a page can pass the same option
//! object it would hand to a script, e.g.
//! `{"nightStartHour": 19, "autoSwitch": false}`. Missing fields take their
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;
use crate::util::clock::{DEFAULT_NIGHT_END_HOUR, DEFAULT_NIGHT_START_HOUR};

pub const DEFAULT_STORAGE_KEY: &str = "theme-preference";
pub const DEFAULT_DARK_MODE_CLASS: &str = "dark-mode";
pub const DEFAULT_LIGHT_MODE_CLASS: &str = "light-mode";
pub const DEFAULT_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const DEFAULT_FIXED_TOGGLE_SELECTOR: &str = ".fixed-theme-toggle";
pub const DEFAULT_AUTO_SWITCH_INTERVAL_MS: u32 = 60_000;

/// Text placed on toggle controls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleLabels {
    /// `aria-label` and initial `title` of the synthesized fixed toggle.
    pub toggle: String,
    /// Fixed toggle title while dark is active.
    pub switch_to_light: String,
    /// Fixed toggle title while light is active.
    pub switch_to_dark: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            toggle: "Toggle theme".to_owned(),
            switch_to_light: "Switch to light mode".to_owned(),
            switch_to_dark: "Switch to dark mode".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub night_start_hour: u32,
    pub night_end_hour: u32,
    pub auto_switch: bool,
    pub auto_switch_interval: u32,
    pub dark_mode_class: String,
    pub light_mode_class: String,
    pub storage_key: String,
    pub toggle_selector: String,
    pub fixed_toggle_selector: String,
    pub create_fixed_toggle: bool,
    pub labels: ToggleLabels,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            night_start_hour: DEFAULT_NIGHT_START_HOUR,
            night_end_hour: DEFAULT_NIGHT_END_HOUR,
            auto_switch: true,
            auto_switch_interval: DEFAULT_AUTO_SWITCH_INTERVAL_MS,
            dark_mode_class: DEFAULT_DARK_MODE_CLASS.to_owned(),
            light_mode_class: DEFAULT_LIGHT_MODE_CLASS.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_owned(),
            fixed_toggle_selector: DEFAULT_FIXED_TOGGLE_SELECTOR.to_owned(),
            create_fixed_toggle: true,
            labels: ToggleLabels::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON option object and validate it.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot act on.
    ///
    /// Hours must lie in `0..24` and the interval must be non-zero. Class
    /// names must be single tokens and selectors non-blank. A non-wrapping
    /// night window is accepted as configured.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.night_start_hour >= 24 {
            return Err(ThemeError::InvalidConfig(format!(
                "nightStartHour must be below 24, got {}",
                self.night_start_hour
            )));
        }
        if self.night_end_hour >= 24 {
            return Err(ThemeError::InvalidConfig(format!(
                "nightEndHour must be below 24, got {}",
                self.night_end_hour
            )));
        }
        if self.auto_switch_interval == 0 {
            return Err(ThemeError::InvalidConfig("autoSwitchInterval must be positive".into()));
        }
        for (field, class) in [("darkModeClass", &self.dark_mode_class), ("lightModeClass", &self.light_mode_class)] {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(ThemeError::InvalidConfig(format!(
                    "{field} must be a single class name, got {class:?}"
                )));
            }
        }
        if self.dark_mode_class == self.light_mode_class {
            return Err(ThemeError::InvalidConfig("darkModeClass and lightModeClass must differ".into()));
        }
        // Both selectors are joined into one group when binding clicks; a
        // blank member makes the whole group match nothing.
        for (field, selector) in
            [("toggleSelector", &self.toggle_selector), ("fixedToggleSelector", &self.fixed_toggle_selector)]
        {
            if selector.trim().is_empty() {
                return Err(ThemeError::InvalidConfig(format!("{field} must not be blank")));
            }
        }
        if self.storage_key.is_empty() {
            return Err(ThemeError::InvalidConfig("storageKey must not be empty".into()));
        }
        Ok(())
    }

    /// Marker class for `theme` on the root node.
    #[must_use]
    pub fn class_for(&self, theme: crate::state::theme::Theme) -> &str {
        if theme.is_dark() { &self.dark_mode_class } else { &self.light_mode_class }
    }

    /// Class name a synthesized fixed toggle needs to match
    /// `fixed_toggle_selector`, if the selector is a single class.
    #[must_use]
    pub fn fixed_toggle_class(&self) -> Option<&str> {
        simple_class_name(&self.fixed_toggle_selector)
    }
}

fn simple_class_name(selector: &str) -> Option<&str> {
    let name = selector.trim().strip_prefix('.')?;
    let valid = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(name)
}
