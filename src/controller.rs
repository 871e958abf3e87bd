//! Theme controller: owns the active theme and keeps the page in sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller is built per page by the composition root. It reads the
//! persisted preference, renders a theme onto the [`Surface`], optionally
//! re-checks the clock on a repeating task while no preference exists, and
//! flips the theme when a bound control is clicked.
//!
//! DESIGN
//! ======
//! The theme decision itself is [`decide_theme`]; this module only sequences
//! it with storage and surface effects. State sits behind a `RefCell` and no
//! borrow is held across a call into the surface, the store or the scheduler.
//! Timer ticks and click handlers hold a `Weak` reference, so dropping the
//! last controller handle cancels the timer and turns stale handlers into
//! no-ops.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::ThemeConfig;
use crate::dom::Surface;
use crate::dom::fixed_toggle::fixed_toggle_button;
use crate::error::ThemeError;
use crate::state::theme::{ControlView, Preference, Theme, decide_theme};
use crate::util::clock::{Clock, ShiftedClock};
use crate::util::persistence::{PreferenceStore, clear_preference, load_preference, save_preference};
use crate::util::schedule::{Scheduler, TaskHandle};

#[derive(Default)]
struct ControllerState {
    preference: Preference,
    active_theme: Option<Theme>,
    timer: Option<Box<dyn TaskHandle>>,
    initialized: bool,
}

struct Inner {
    config: ThemeConfig,
    clock: Rc<dyn Clock>,
    store: Rc<dyn PreferenceStore>,
    surface: Rc<dyn Surface>,
    scheduler: Rc<dyn Scheduler>,
    state: RefCell<ControllerState>,
}

/// Cheaply clonable handle; clones share one controller.
#[derive(Clone)]
pub struct ThemeController {
    inner: Rc<Inner>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("ThemeController")
            .field("preference", &state.preference)
            .field("active_theme", &state.active_theme)
            .field("auto_switching", &state.timer.is_some())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    #[must_use]
    pub fn builder() -> ThemeControllerBuilder {
        ThemeControllerBuilder::default()
    }

    fn from_weak(weak: &Weak<Inner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.inner.config
    }

    /// The rendered theme; `None` until the first apply.
    #[must_use]
    pub fn active_theme(&self) -> Option<Theme> {
        self.inner.state.borrow().active_theme
    }

    #[must_use]
    pub fn preference(&self) -> Preference {
        self.inner.state.borrow().preference
    }

    #[must_use]
    pub fn is_auto_switching(&self) -> bool {
        self.inner.state.borrow().timer.as_ref().is_some_and(|timer| timer.is_active())
    }

    /// Load the preference, synthesize the fixed toggle, render, start the
    /// auto-switch and bind toggle controls.
    ///
    /// Runs once; later calls return `Ok` without touching the page.
    pub fn initialize(&self) -> Result<(), ThemeError> {
        if self.inner.state.borrow().initialized {
            log::debug!("theme: controller already initialized");
            return Ok(());
        }
        let config = &self.inner.config;
        let preference = load_preference(&*self.inner.store, &config.storage_key)?;
        self.inner.state.borrow_mut().preference = preference;

        if config.create_fixed_toggle {
            self.create_fixed_toggle_button();
        }
        self.apply_theme();
        if config.auto_switch {
            self.start_auto_switch();
        }
        self.bind_toggle_controls();

        self.inner.state.borrow_mut().initialized = true;
        log::debug!("theme: initialized with preference {preference:?}");
        Ok(())
    }

    /// Append the fixed toggle unless an element already matches
    /// `fixed_toggle_selector`. Returns whether a button was created.
    pub fn create_fixed_toggle_button(&self) -> bool {
        let config = &self.inner.config;
        let surface = &self.inner.surface;
        if surface.count(&config.fixed_toggle_selector) > 0 {
            return false;
        }
        let Some(class_name) = config.fixed_toggle_class() else {
            log::warn!(
                "theme: cannot synthesize a fixed toggle for selector {:?}; use a single class selector",
                config.fixed_toggle_selector
            );
            return false;
        };
        surface.append_button(&fixed_toggle_button(class_name, &config.labels.toggle));
        true
    }

    /// Render the preferred theme, or the time-based one when unset.
    pub fn apply_theme(&self) -> Theme {
        let preference = self.preference();
        let config = &self.inner.config;
        let is_night = !preference.is_set()
            && self.inner.clock.is_night_time(config.night_start_hour, config.night_end_hour);
        let theme = decide_theme(preference, is_night);
        self.render(theme);
        theme
    }

    /// Flip the active theme and persist it as the preference.
    ///
    /// Storage is written first; on failure nothing else changes. The
    /// auto-switch task is left running and stops itself on its next tick.
    pub fn toggle_theme(&self) -> Result<Theme, ThemeError> {
        let current = match self.active_theme() {
            Some(theme) => theme,
            None => self.apply_theme(),
        };
        let next = current.opposite();
        save_preference(&*self.inner.store, &self.inner.config.storage_key, next)?;
        self.inner.state.borrow_mut().preference = Preference::new(next);
        self.render(next);
        log::debug!("theme: toggled to {next}");
        Ok(next)
    }

    /// Re-apply the time-based theme now and keep doing so every
    /// `auto_switch_interval` ms. No-op while a preference is set; an
    /// already running task is kept rather than duplicated.
    pub fn start_auto_switch(&self) {
        if self.preference().is_set() {
            return;
        }
        self.apply_theme();
        if self.is_auto_switching() {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let interval_ms = self.inner.config.auto_switch_interval;
        let handle = self.inner.scheduler.every(
            interval_ms,
            Box::new(move || {
                if let Some(controller) = Self::from_weak(&weak) {
                    controller.on_tick();
                }
            }),
        );
        self.inner.state.borrow_mut().timer = Some(handle);
        log::debug!("theme: auto-switch armed every {interval_ms}ms");
    }

    /// Cancel the auto-switch task, if any.
    pub fn stop_auto_switch(&self) {
        let timer = self.inner.state.borrow_mut().timer.take();
        if let Some(mut timer) = timer {
            timer.cancel();
            log::debug!("theme: auto-switch stopped");
        }
    }

    /// Forget the stored preference and fall back to the clock.
    pub fn reset_preference(&self) -> Result<(), ThemeError> {
        clear_preference(&*self.inner.store, &self.inner.config.storage_key)?;
        self.inner.state.borrow_mut().preference = Preference::UNSET;
        if self.inner.config.auto_switch {
            self.start_auto_switch();
        } else {
            self.apply_theme();
        }
        Ok(())
    }

    fn on_tick(&self) {
        if self.preference().is_set() {
            self.stop_auto_switch();
            return;
        }
        self.apply_theme();
    }

    fn render(&self, theme: Theme) {
        let config = &self.inner.config;
        let surface = &self.inner.surface;
        self.inner.state.borrow_mut().active_theme = Some(theme);

        surface.set_root_class(config.class_for(theme), config.class_for(theme.opposite()));

        let view = ControlView::for_theme(theme, &config.labels);
        surface.set_attribute_all(&config.toggle_selector, "aria-checked", view.checked);
        surface.set_inner_html_all(&config.toggle_selector, view.indicator);
        surface.set_attribute_all(&config.fixed_toggle_selector, "aria-checked", view.checked);
        surface.set_attribute_all(&config.fixed_toggle_selector, "title", &view.fixed_title);
    }

    fn bind_toggle_controls(&self) {
        let config = &self.inner.config;
        let weak = Rc::downgrade(&self.inner);
        // One group selector so an element matching both gets one handler.
        let selector = format!("{}, {}", config.toggle_selector, config.fixed_toggle_selector);
        self.inner.surface.on_click_all(
            &selector,
            Rc::new(move || {
                let Some(controller) = Self::from_weak(&weak) else {
                    log::debug!("theme: toggle clicked after the controller was dropped");
                    return;
                };
                if let Err(err) = controller.toggle_theme() {
                    log::warn!("theme: toggle failed: {err}");
                }
            }),
        );
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Collects the controller's collaborators. [`build`](Self::build) refuses
/// to proceed while any is missing.
#[derive(Default)]
pub struct ThemeControllerBuilder {
    config: ThemeConfig,
    clock: Option<Rc<dyn Clock>>,
    store: Option<Rc<dyn PreferenceStore>>,
    surface: Option<Rc<dyn Surface>>,
    scheduler: Option<Rc<dyn Scheduler>>,
}

impl fmt::Debug for ThemeControllerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeControllerBuilder")
            .field("config", &self.config)
            .field("clock", &self.clock.is_some())
            .field("store", &self.store.is_some())
            .field("surface", &self.surface.is_some())
            .field("scheduler", &self.scheduler.is_some())
            .finish()
    }
}

impl ThemeControllerBuilder {
    #[must_use]
    pub fn config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn store(mut self, store: Rc<dyn PreferenceStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn surface(mut self, surface: Rc<dyn Surface>) -> Self {
        self.surface = Some(surface);
        self
    }

    #[must_use]
    pub fn scheduler(mut self, scheduler: Rc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn build(self) -> Result<ThemeController, ThemeError> {
        let clock = required(self.clock, "clock")?;
        let store = required(self.store, "preference store")?;
        let surface = required(self.surface, "surface")?;
        let scheduler = required(self.scheduler, "scheduler")?;
        self.config.validate()?;

        Ok(ThemeController {
            inner: Rc::new(Inner {
                config: self.config,
                clock,
                store,
                surface,
                scheduler,
                state: RefCell::new(ControllerState::default()),
            }),
        })
    }
}

fn required<T>(value: Option<T>, name: &'static str) -> Result<T, ThemeError> {
    value.ok_or_else(|| {
        log::error!("theme: controller needs a {name}; not initializing");
        ThemeError::MissingDependency(name)
    })
}
