// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM adapters for the [`radial_core::module`] traits.

use alloc::format;
use alloc::string::String;

use radial_core::module::{ContainerLookup, HtmlSurface, InputSource};
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Looks up containers in a `Document`.
#[derive(Clone, Debug)]
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    /// Wraps `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ContainerLookup for DomDocument {
    type Container = DomContainer;

    fn element_by_id(&self, id: &str) -> Option<DomContainer> {
        self.document.get_element_by_id(id).map(DomContainer::new)
    }
}

/// An element the UI module renders into.
#[derive(Clone, Debug)]
pub struct DomContainer {
    element: Element,
}

impl DomContainer {
    /// Wraps `element`.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl HtmlSurface for DomContainer {
    fn set_inner_html(&self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn set_region_html(&self, region_id: &str, html: &str) -> bool {
        // Region ids are plain identifiers, so `#id` is a valid selector.
        match self.element.query_selector(&format!("#{region_id}")) {
            Ok(Some(region)) => {
                region.set_inner_html(html);
                true
            }
            _ => false,
        }
    }

    fn set_control_values(&self, attributes: &[(&str, &str)], value: &str) -> usize {
        let mut selector = String::from("input");
        for (name, attr_value) in attributes {
            selector.push_str(&format!("[{name}=\"{attr_value}\"]"));
        }
        let Ok(controls) = self.element.query_selector_all(&selector) else {
            return 0;
        };
        let focused = self
            .element
            .owner_document()
            .and_then(|document| document.active_element());

        let mut updated = 0;
        for i in 0..controls.length() {
            let Some(input) = controls
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            else {
                continue;
            };
            if focused.as_ref().is_some_and(|el| el == input.unchecked_ref::<Element>()) {
                continue;
            }
            input.set_value(value);
            updated += 1;
        }
        updated
    }
}

/// The target of an `input` event.
#[derive(Clone, Debug)]
pub struct ElementInput {
    element: Element,
}

impl ElementInput {
    /// Wraps `element`.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl InputSource for ElementInput {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn value(&self) -> Option<String> {
        let el = &self.element;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            Some(area.value())
        } else {
            el.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
        }
    }
}
