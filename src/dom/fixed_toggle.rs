//! Markup for the synthesized fixed toggle.
//!
//! The button carries both icons. Which one is visible is left to the page's
//! stylesheet, keyed off the root marker class.

use super::ButtonSpec;

pub const SUN_ICON_CLASS: &str = "icon-sun";
pub const MOON_ICON_CLASS: &str = "icon-moon";

const SVG_ATTRS: &str = r#"xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#;

const SUN_PATHS: &str = concat!(
    r#"<circle cx="12" cy="12" r="5"></circle>"#,
    r#"<line x1="12" y1="1" x2="12" y2="3"></line>"#,
    r#"<line x1="12" y1="21" x2="12" y2="23"></line>"#,
    r#"<line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>"#,
    r#"<line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>"#,
    r#"<line x1="1" y1="12" x2="3" y2="12"></line>"#,
    r#"<line x1="21" y1="12" x2="23" y2="12"></line>"#,
    r#"<line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>"#,
    r#"<line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>"#,
);

const MOON_PATHS: &str = r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>"#;

/// Inner markup: a sun icon followed by a moon icon.
#[must_use]
pub fn icons_markup() -> String {
    format!(
        r#"<svg class="{SUN_ICON_CLASS}" {SVG_ATTRS}>{SUN_PATHS}</svg><svg class="{MOON_ICON_CLASS}" {SVG_ATTRS}>{MOON_PATHS}</svg>"#
    )
}

/// The fixed toggle button with class `class_name`, labelled `label`.
#[must_use]
pub fn fixed_toggle_button(class_name: &str, label: &str) -> ButtonSpec {
    ButtonSpec {
        class_name: class_name.to_owned(),
        attributes: vec![
            ("type".to_owned(), "button".to_owned()),
            ("aria-label".to_owned(), label.to_owned()),
            ("title".to_owned(), label.to_owned()),
        ],
        inner_html: icons_markup(),
    }
}
