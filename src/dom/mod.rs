//! Presentation and control surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches the DOM directly. It speaks to a [`Surface`]:
//! swap the marker class on the root node, address every control matching a
//! selector, and append the synthesized fixed toggle. Per-selector operations
//! over an empty match set are no-ops.
//!
//! [`HeadlessSurface`] is an in-memory page used by tests and non-browser
//! builds; `BrowserSurface` (under `hydrate`) drives the real document.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod fixed_toggle;
pub mod headless;

use std::rc::Rc;

#[cfg(feature = "hydrate")]
pub use browser::BrowserSurface;
pub use headless::{ElementId, HeadlessSurface};

/// Invoked when a bound control is clicked.
pub type ClickHandler = Rc<dyn Fn()>;

/// A button to append to the page body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonSpec {
    pub class_name: String,
    pub attributes: Vec<(String, String)>,
    pub inner_html: String,
}

pub trait Surface {
    /// Leave `add` as the only one of the two marker classes on the root node.
    fn set_root_class(&self, add: &str, remove: &str);

    /// Number of elements matching `selector`.
    fn count(&self, selector: &str) -> usize;

    fn set_attribute_all(&self, selector: &str, name: &str, value: &str);

    fn set_inner_html_all(&self, selector: &str, html: &str);

    /// Attach `handler` to the click event of every matching element.
    fn on_click_all(&self, selector: &str, handler: ClickHandler);

    fn append_button(&self, button: &ButtonSpec);
}
