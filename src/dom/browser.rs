//! `web-sys` backed [`Surface`] over the live document.
//!
//! The root node is `document.body`. Failed DOM calls are logged at debug
//! level and otherwise ignored, the same way a missing element is.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::{ButtonSpec, ClickHandler, Surface};

#[derive(Debug, Clone)]
pub struct BrowserSurface {
    document: Document,
}

impl BrowserSurface {
    /// The current window's document, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("theme: selector {selector:?} rejected: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }
}

fn report(action: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::debug!("theme: {action} failed: {err:?}");
    }
}

impl Surface for BrowserSurface {
    fn set_root_class(&self, add: &str, remove: &str) {
        let Some(body) = self.body() else {
            log::debug!("theme: document has no body");
            return;
        };
        let classes = body.class_list();
        report("remove root class", classes.remove_1(remove));
        report("add root class", classes.add_1(add));
    }

    fn count(&self, selector: &str) -> usize {
        self.query_all(selector).len()
    }

    fn set_attribute_all(&self, selector: &str, name: &str, value: &str) {
        for element in self.query_all(selector) {
            report("set attribute", element.set_attribute(name, value));
        }
    }

    fn set_inner_html_all(&self, selector: &str, html: &str) {
        for element in self.query_all(selector) {
            element.set_inner_html(html);
        }
    }

    fn on_click_all(&self, selector: &str, handler: ClickHandler) {
        for element in self.query_all(selector) {
            let handler = handler.clone();
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| handler());
            report(
                "add click listener",
                element.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref()),
            );
            // Listeners live as long as the page.
            listener.forget();
        }
    }

    fn append_button(&self, button: &ButtonSpec) {
        let Some(body) = self.body() else {
            log::debug!("theme: document has no body");
            return;
        };
        let element = match self.document.create_element("button") {
            Ok(element) => element,
            Err(err) => {
                log::debug!("theme: create button failed: {err:?}");
                return;
            }
        };
        element.set_class_name(&button.class_name);
        for (name, value) in &button.attributes {
            report("set attribute", element.set_attribute(name, value));
        }
        element.set_inner_html(&button.inner_html);
        report("append button", body.append_child(&element).map(drop));
    }
}
