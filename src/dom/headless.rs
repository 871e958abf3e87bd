//! In-memory page for tests and non-browser builds.
//!
//! Selector support is deliberately small: comma-separated groups of
//! `tag`, `.class`, `#id` and their compounds (`button.theme-toggle`).
//! Anything with a combinator matches nothing.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{ButtonSpec, ClickHandler, Surface};

/// Index of an element in a [`HeadlessSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Default)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    inner_html: String,
    handlers: Vec<ClickHandler>,
}

#[derive(Default)]
struct Page {
    root_classes: BTreeSet<String>,
    elements: Vec<Element>,
}

#[derive(Default)]
pub struct HeadlessSurface {
    page: RefCell<Page>,
}

impl std::fmt::Debug for HeadlessSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let page = self.page.borrow();
        f.debug_struct("HeadlessSurface")
            .field("root_classes", &page.root_classes)
            .field("elements", &page.elements.len())
            .finish()
    }
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with a whitespace-separated class list.
    pub fn add_element(&self, tag: &str, class_list: &str) -> ElementId {
        let mut page = self.page.borrow_mut();
        page.elements.push(Element {
            tag: tag.to_ascii_lowercase(),
            classes: class_list.split_whitespace().map(str::to_owned).collect(),
            ..Element::default()
        });
        ElementId(page.elements.len() - 1)
    }

    /// Set an attribute on a single element (`id` included).
    pub fn set_attribute(&self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.page.borrow_mut().elements.get_mut(id.0) {
            element.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    /// Dispatch a click to `id`'s handlers, in attachment order.
    pub fn click(&self, id: ElementId) {
        let handlers = self
            .page
            .borrow()
            .elements
            .get(id.0)
            .map(|element| element.handlers.clone())
            .unwrap_or_default();
        for handler in handlers {
            handler();
        }
    }

    #[must_use]
    pub fn matching(&self, selector: &str) -> Vec<ElementId> {
        let page = self.page.borrow();
        matching_indices(&page, selector).into_iter().map(ElementId).collect()
    }

    #[must_use]
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<String> {
        self.page.borrow().elements.get(id.0)?.attributes.get(name).cloned()
    }

    #[must_use]
    pub fn inner_html(&self, id: ElementId) -> Option<String> {
        self.page.borrow().elements.get(id.0).map(|element| element.inner_html.clone())
    }

    #[must_use]
    pub fn handler_count(&self, id: ElementId) -> usize {
        self.page.borrow().elements.get(id.0).map_or(0, |element| element.handlers.len())
    }

    #[must_use]
    pub fn root_has_class(&self, class_name: &str) -> bool {
        self.page.borrow().root_classes.contains(class_name)
    }

    #[must_use]
    pub fn root_classes(&self) -> Vec<String> {
        self.page.borrow().root_classes.iter().cloned().collect()
    }

    fn for_each_match(&self, selector: &str, mut apply: impl FnMut(&mut Element)) {
        let mut page = self.page.borrow_mut();
        for index in matching_indices(&page, selector) {
            apply(&mut page.elements[index]);
        }
    }
}

impl Surface for HeadlessSurface {
    fn set_root_class(&self, add: &str, remove: &str) {
        let mut page = self.page.borrow_mut();
        page.root_classes.remove(remove);
        page.root_classes.insert(add.to_owned());
    }

    fn count(&self, selector: &str) -> usize {
        matching_indices(&self.page.borrow(), selector).len()
    }

    fn set_attribute_all(&self, selector: &str, name: &str, value: &str) {
        self.for_each_match(selector, |element| {
            element.attributes.insert(name.to_owned(), value.to_owned());
        });
    }

    fn set_inner_html_all(&self, selector: &str, html: &str) {
        self.for_each_match(selector, |element| html.clone_into(&mut element.inner_html));
    }

    fn on_click_all(&self, selector: &str, handler: ClickHandler) {
        self.for_each_match(selector, |element| element.handlers.push(handler.clone()));
    }

    fn append_button(&self, button: &ButtonSpec) {
        let id = self.add_element("button", &button.class_name);
        let mut page = self.page.borrow_mut();
        let element = &mut page.elements[id.0];
        for (name, value) in &button.attributes {
            element.attributes.insert(name.clone(), value.clone());
        }
        element.inner_html.clone_from(&button.inner_html);
    }
}

// =============================================================================
// SELECTORS
// =============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
struct Compound<'a> {
    tag: Option<&'a str>,
    id: Option<&'a str>,
    classes: Vec<&'a str>,
}

fn matching_indices(page: &Page, selector: &str) -> Vec<usize> {
    let Some(groups) = parse_selector(selector) else {
        log::debug!("headless surface: unsupported selector {selector:?}");
        return Vec::new();
    };
    page.elements
        .iter()
        .enumerate()
        .filter(|(_, element)| groups.iter().any(|group| compound_matches(group, element)))
        .map(|(index, _)| index)
        .collect()
}

fn compound_matches(compound: &Compound<'_>, element: &Element) -> bool {
    compound.tag.is_none_or(|tag| tag == "*" || element.tag.eq_ignore_ascii_case(tag))
        && compound
            .id
            .is_none_or(|id| element.attributes.get("id").is_some_and(|value| value == id))
        && compound
            .classes
            .iter()
            .all(|class| element.classes.iter().any(|have| have == class))
}

fn parse_selector(selector: &str) -> Option<Vec<Compound<'_>>> {
    selector.split(',').map(|group| parse_compound(group.trim())).collect()
}

fn parse_compound(group: &str) -> Option<Compound<'_>> {
    if group.is_empty() {
        return None;
    }
    let mut compound = Compound::default();
    let mut rest = group;

    let tag_len = rest.find(['.', '#']).unwrap_or(rest.len());
    if tag_len > 0 {
        let tag = &rest[..tag_len];
        if !is_ident(tag) && tag != "*" {
            return None;
        }
        compound.tag = Some(tag);
        rest = &rest[tag_len..];
    }

    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let len = body.find(['.', '#']).unwrap_or(body.len());
        let name = &body[..len];
        if !is_ident(name) {
            return None;
        }
        match marker {
            '.' => compound.classes.push(name),
            '#' if compound.id.is_none() => compound.id = Some(name),
            _ => return None,
        }
        rest = &body[len..];
    }
    Some(compound)
}

fn is_ident(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
