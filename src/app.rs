//! Browser composition root.
//!
//! The page loads the wasm module, then calls `mountThemeSwitcher` once the
//! DOM is ready and keeps the returned `ThemeSwitcher`. There is no global
//! instance: whoever holds the handle owns the controller.
//!
//! ```js
//! import init, { mountThemeSwitcher } from "./pkg/selfpage_theme.js";
//! await init();
//! const themes = mountThemeSwitcher('{"nightStartHour": 19}');
//! ```

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::dom::BrowserSurface;
use crate::error::ThemeError;
use crate::util::clock::{
    DEFAULT_NIGHT_END_HOUR, DEFAULT_NIGHT_START_HOUR, DEFAULT_TIME_FORMAT, ShiftedClock, SystemClock,
};
use crate::util::persistence::LocalStorageStore;
use crate::util::schedule::BrowserScheduler;

/// Attribute on `<html>` holding a JSON option object.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("theme: logger already set: {err}")));
    }
}

/// Build and initialize the controller for the current page.
///
/// `options` is a JSON option object; when absent the `data-theme-config`
/// attribute of `<html>` is used, and failing that the defaults.
#[wasm_bindgen(js_name = mountThemeSwitcher)]
pub fn mount_theme_switcher(options: Option<String>) -> Result<ThemeSwitcher, JsError> {
    mount(options).map_err(|err| {
        log::error!("theme: mount failed: {err}");
        js_error(err)
    })
}

fn mount(options: Option<String>) -> Result<ThemeSwitcher, ThemeError> {
    let surface = BrowserSurface::from_window().ok_or_else(|| {
        log::error!("theme: no window document; not initializing");
        ThemeError::MissingDependency("document")
    })?;

    let raw = options.or_else(|| {
        surface
            .document()
            .document_element()
            .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE))
    });
    let config = match raw {
        Some(raw) => ThemeConfig::from_json(&raw)?,
        None => ThemeConfig::default(),
    };

    let controller = ThemeController::builder()
        .config(config)
        .clock(Rc::new(SystemClock))
        .store(Rc::new(LocalStorageStore::from_window()?))
        .surface(Rc::new(surface))
        .scheduler(Rc::new(BrowserScheduler))
        .build()?;
    controller.initialize()?;
    Ok(ThemeSwitcher { controller })
}

fn js_error(err: ThemeError) -> JsError {
    JsError::new(&format!("{}: {err}", err.error_code()))
}

/// Page-held handle to the mounted controller.
#[wasm_bindgen]
pub struct ThemeSwitcher {
    controller: ThemeController,
}

#[wasm_bindgen]
impl ThemeSwitcher {
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> Result<String, JsError> {
        self.controller.toggle_theme().map(|theme| theme.as_str().to_owned()).map_err(js_error)
    }

    #[wasm_bindgen(js_name = applyTheme)]
    pub fn apply_theme(&self) -> String {
        self.controller.apply_theme().as_str().to_owned()
    }

    #[wasm_bindgen(js_name = startAutoSwitch)]
    pub fn start_auto_switch(&self) {
        self.controller.start_auto_switch();
    }

    #[wasm_bindgen(js_name = stopAutoSwitch)]
    pub fn stop_auto_switch(&self) {
        self.controller.stop_auto_switch();
    }

    #[wasm_bindgen(js_name = resetPreference)]
    pub fn reset_preference(&self) -> Result<(), JsError> {
        self.controller.reset_preference().map_err(js_error)
    }

    #[wasm_bindgen(js_name = createFixedToggleButton)]
    pub fn create_fixed_toggle_button(&self) -> bool {
        self.controller.create_fixed_toggle_button()
    }

    #[wasm_bindgen(getter, js_name = activeTheme)]
    pub fn active_theme(&self) -> Option<String> {
        self.controller.active_theme().map(|theme| theme.as_str().to_owned())
    }

    #[wasm_bindgen(getter)]
    pub fn preference(&self) -> Option<String> {
        self.controller.preference().theme().map(|theme| theme.as_str().to_owned())
    }

    #[wasm_bindgen(getter, js_name = autoSwitching)]
    pub fn auto_switching(&self) -> bool {
        self.controller.is_auto_switching()
    }
}

// =============================================================================
// CLOCK EXPORTS
// =============================================================================

#[wasm_bindgen(js_name = formattedShiftedTime)]
pub fn formatted_shifted_time(template: Option<String>) -> String {
    SystemClock.formatted_shifted_time(template.as_deref().unwrap_or(DEFAULT_TIME_FORMAT))
}

#[wasm_bindgen(js_name = isNightTime)]
pub fn is_night_time(night_start_hour: Option<u32>, night_end_hour: Option<u32>) -> bool {
    SystemClock.is_night_time(
        night_start_hour.unwrap_or(DEFAULT_NIGHT_START_HOUR),
        night_end_hour.unwrap_or(DEFAULT_NIGHT_END_HOUR),
    )
}

#[wasm_bindgen(js_name = currentHour)]
pub fn current_hour() -> u32 {
    SystemClock.current_hour()
}

#[wasm_bindgen]
pub fn greeting() -> String {
    SystemClock.greeting().as_str().to_owned()
}
