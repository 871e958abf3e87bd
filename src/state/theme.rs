//! Theme values and the pure theme decision.
//!
//! DESIGN
//! ======
//! Nothing here touches storage or the page. The controller feeds the
//! persisted preference and the clock's night flag into [`decide_theme`], then
//! projects the result onto controls through [`ControlView`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ToggleLabels;

/// Indicator shown on generic toggles while dark is active.
pub const SUN_INDICATOR: &str = "<span>☀️</span>";
/// Indicator shown on generic toggles while light is active.
pub const MOON_INDICATOR: &str = "<span>🌙</span>";

/// A rendered theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Exact lowercase name match.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

/// The user's explicit choice, or unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preference(Option<Theme>);

impl Preference {
    pub const UNSET: Self = Self(None);

    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self(Some(theme))
    }

    /// Interpret a raw stored value. Anything but an exact `"light"` or
    /// `"dark"` reads as unset.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        Self(raw.and_then(Theme::from_name))
    }

    #[must_use]
    pub fn theme(self) -> Option<Theme> {
        self.0
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        self.0.is_some()
    }
}

impl From<Theme> for Preference {
    fn from(theme: Theme) -> Self {
        Self::new(theme)
    }
}

/// An explicit preference wins; otherwise night means dark.
#[must_use]
pub fn decide_theme(preference: Preference, is_night: bool) -> Theme {
    match preference.theme() {
        Some(theme) => theme,
        None if is_night => Theme::Dark,
        None => Theme::Light,
    }
}

/// What every toggle control should show for an active theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlView {
    /// Value of `aria-checked`.
    pub checked: &'static str,
    /// Inner markup for generic toggles.
    pub indicator: &'static str,
    /// Title for fixed toggles, naming the theme a click switches to.
    pub fixed_title: String,
}

impl ControlView {
    #[must_use]
    pub fn for_theme(theme: Theme, labels: &ToggleLabels) -> Self {
        match theme {
            Theme::Dark => Self {
                checked: "true",
                indicator: SUN_INDICATOR,
                fixed_title: labels.switch_to_light.clone(),
            },
            Theme::Light => Self {
                checked: "false",
                indicator: MOON_INDICATOR,
                fixed_title: labels.switch_to_dark.clone(),
            },
        }
    }
}
