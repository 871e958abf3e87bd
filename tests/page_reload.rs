//! Page-level flows across reloads, through the public API only.

use std::rc::Rc;

use selfpage_theme::dom::HeadlessSurface;
use selfpage_theme::util::clock::FixedClock;
use selfpage_theme::util::persistence::MemoryStore;
use selfpage_theme::util::schedule::ManualScheduler;
use selfpage_theme::{Theme, ThemeConfig, ThemeController};

struct Page {
    surface: Rc<HeadlessSurface>,
    scheduler: ManualScheduler,
    controller: ThemeController,
}

fn load_page(store: &Rc<MemoryStore>, clock: &Rc<FixedClock>) -> Page {
    let surface = Rc::new(HeadlessSurface::new());
    surface.add_element("button", "theme-toggle");
    let scheduler = ManualScheduler::new();
    let controller = ThemeController::builder()
        .config(ThemeConfig::default())
        .clock(clock.clone())
        .store(store.clone())
        .surface(surface.clone())
        .scheduler(Rc::new(scheduler.clone()))
        .build()
        .unwrap();
    controller.initialize().unwrap();
    Page { surface, scheduler, controller }
}

#[test]
fn toggled_choice_survives_a_reload() {
    let store = Rc::new(MemoryStore::new());
    let clock = Rc::new(FixedClock::at_shifted_hour(21, 0));

    let first = load_page(&store, &clock);
    assert_eq!(first.controller.active_theme(), Some(Theme::Dark));
    let toggle = first.surface.matching(".theme-toggle")[0];
    first.surface.click(toggle);
    assert_eq!(first.controller.active_theme(), Some(Theme::Light));
    drop(first);

    let second = load_page(&store, &clock);
    assert_eq!(second.controller.active_theme(), Some(Theme::Light));
    assert!(!second.controller.is_auto_switching());
    assert_eq!(second.scheduler.armed_count(), 0);
    assert!(second.surface.root_has_class("light-mode"));
}

#[test]
fn reset_choice_lets_the_next_load_follow_the_clock() {
    let store = Rc::new(MemoryStore::new());
    let clock = Rc::new(FixedClock::at_shifted_hour(9, 0));

    let first = load_page(&store, &clock);
    first.controller.toggle_theme().unwrap();
    first.controller.reset_preference().unwrap();
    drop(first);

    clock.set_shifted_hour(23, 0);
    let second = load_page(&store, &clock);
    assert_eq!(second.controller.active_theme(), Some(Theme::Dark));
    assert!(second.controller.is_auto_switching());
}

#[test]
fn each_load_synthesizes_one_fixed_toggle() {
    let store = Rc::new(MemoryStore::new());
    let clock = Rc::new(FixedClock::at_shifted_hour(12, 0));

    let page = load_page(&store, &clock);
    assert!(!page.controller.create_fixed_toggle_button());
    assert_eq!(page.surface.matching(".fixed-theme-toggle").len(), 1);
}
