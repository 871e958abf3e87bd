//! Repeating task scheduling.
//!
//! A [`Scheduler`] arms a callback at a fixed interval and returns a
//! [`TaskHandle`]. Cancelling a handle is idempotent and immediate: once
//! `cancel` returns, the callback never runs again. Dropping a handle cancels
//! it. A callback may cancel its own handle while it is running.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked on every tick.
pub type Tick = Box<dyn FnMut()>;

pub trait TaskHandle {
    fn cancel(&mut self);
    fn is_active(&self) -> bool;
}

pub trait Scheduler {
    fn every(&self, interval_ms: u32, tick: Tick) -> Box<dyn TaskHandle>;
}

// =============================================================================
// MANUAL
// =============================================================================

struct ManualTask {
    interval_ms: u32,
    active: Rc<Cell<bool>>,
    tick: Rc<RefCell<Tick>>,
}

/// Scheduler whose ticks only happen when [`ManualScheduler::fire`] is
/// called. Clones share the same task list.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    tasks: Rc<RefCell<Vec<ManualTask>>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one tick of every active task; returns how many ran.
    pub fn fire(&self) -> usize {
        let due = self
            .tasks
            .borrow()
            .iter()
            .filter(|task| task.active.get())
            .map(|task| (Rc::clone(&task.active), Rc::clone(&task.tick)))
            .collect::<Vec<_>>();

        let mut ran = 0;
        for (active, tick) in due {
            // An earlier tick in this round may have cancelled this task.
            if !active.get() {
                continue;
            }
            (&mut *tick.borrow_mut())();
            ran += 1;
        }
        ran
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.borrow().iter().filter(|task| task.active.get()).count()
    }

    /// Number of tasks ever armed, cancelled or not.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    #[must_use]
    pub fn last_interval_ms(&self) -> Option<u32> {
        self.tasks.borrow().last().map(|task| task.interval_ms)
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("armed", &self.armed_count())
            .field("active", &self.active_count())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, interval_ms: u32, tick: Tick) -> Box<dyn TaskHandle> {
        let active = Rc::new(Cell::new(true));
        self.tasks.borrow_mut().push(ManualTask {
            interval_ms,
            active: Rc::clone(&active),
            tick: Rc::new(RefCell::new(tick)),
        });
        Box::new(ManualHandle { active })
    }
}

struct ManualHandle {
    active: Rc<Cell<bool>>,
}

impl TaskHandle for ManualHandle {
    fn cancel(&mut self) {
        self.active.set(false);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `setInterval` through `gloo-timers`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn every(&self, interval_ms: u32, mut tick: Tick) -> Box<dyn TaskHandle> {
        let interval = gloo_timers::callback::Interval::new(interval_ms, move || tick());
        Box::new(BrowserTask { interval: Some(interval) })
    }
}

#[cfg(feature = "hydrate")]
struct BrowserTask {
    interval: Option<gloo_timers::callback::Interval>,
}

#[cfg(feature = "hydrate")]
impl TaskHandle for BrowserTask {
    fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            let closure = interval.cancel();
            // The JS closure may be the one currently executing; release it
            // only after this callback has returned.
            wasm_bindgen_futures::spawn_local(async move { drop(closure) });
        }
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(feature = "hydrate")]
impl Drop for BrowserTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
