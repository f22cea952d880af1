// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract between the page glue and the UI module.
//!
//! The page does not know how the application state is represented or how it
//! is rendered. It only needs four operations from the module:
//!
//! - **init**: Creates the opaque application handle. Called once.
//! - **mount**: Renders the handle into the container for the first time.
//! - **update**: Applies one edited number to the state and reports whether
//!   anything changed. Never touches the DOM.
//! - **rerender**: Brings the container in line with the current state.
//!
//! Platform crates supply the other side of the contract: how to find the
//! container ([`ContainerLookup`]), how to read an edited element
//! ([`InputSource`]), and how to put markup into the page ([`HtmlSurface`]).
//!
//! # Crate boundaries
//!
//! `radial_core` owns this contract, the dispatcher, and the bootstrap
//! sequence. Module crates implement [`UiModule`]; platform crates implement
//! the DOM traits. Application code depends on all three and wires them
//! together.

use alloc::rc::Rc;
use alloc::string::String;

/// The UI module driven by the page.
///
/// Both the browser build and native test doubles implement this trait, so
/// the dispatcher can be exercised without a DOM.
///
/// # Event loop pseudocode
///
/// ```rust,ignore
/// let handle = module.init();
/// module.mount(&container, &handle);
///
/// on_input(|target| {
///     let changed = module.update(&mut handle, &id, &field, value);
///     if changed {
///         module.rerender(&container, &handle);
///     }
/// });
/// ```
pub trait UiModule {
    /// Opaque application state owned by the page for its whole lifetime.
    type Handle;

    /// The element the module renders into.
    type Container;

    /// Creates a fresh application handle.
    fn init(&self) -> Self::Handle;

    /// Performs the initial render of `handle` into `container`.
    fn mount(&self, container: &Self::Container, handle: &Self::Handle);

    /// Sets `field` of the element identified by `element_id` to `value`.
    ///
    /// Returns `true` if the state actually changed.
    fn update(
        &self,
        handle: &mut Self::Handle,
        element_id: &str,
        field: &str,
        value: f64,
    ) -> bool;

    /// Re-renders `container` from the current state of `handle`.
    fn rerender(&self, container: &Self::Container, handle: &Self::Handle);
}

/// The element that fired an `input` event.
pub trait InputSource {
    /// Returns the value of attribute `name`, or `None` if it is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Returns the element's current value, or `None` if it has no value
    /// (e.g. a `contenteditable` element).
    fn value(&self) -> Option<String>;
}

/// Finds elements of the page by identifier.
pub trait ContainerLookup {
    /// The element type returned by the lookup.
    type Container;

    /// Returns the element whose `id` is `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Container>;
}

/// A container that accepts rendered markup.
pub trait HtmlSurface {
    /// Replaces the whole content of the container.
    fn set_inner_html(&self, html: &str);

    /// Replaces the content of the descendant whose `id` is `region_id`.
    ///
    /// Returns `false` if no such descendant exists, in which case nothing
    /// is modified.
    fn set_region_html(&self, region_id: &str, html: &str) -> bool;

    /// Sets the `value` of every form control carrying all of `attributes`
    /// (name, value pairs), except the one that currently has focus.
    ///
    /// Returns the number of controls updated.
    fn set_control_values(&self, attributes: &[(&str, &str)], value: &str) -> usize;
}

impl<S: HtmlSurface + ?Sized> HtmlSurface for &S {
    fn set_inner_html(&self, html: &str) {
        (**self).set_inner_html(html);
    }

    fn set_region_html(&self, region_id: &str, html: &str) -> bool {
        (**self).set_region_html(region_id, html)
    }

    fn set_control_values(&self, attributes: &[(&str, &str)], value: &str) -> usize {
        (**self).set_control_values(attributes, value)
    }
}

impl<S: HtmlSurface + ?Sized> HtmlSurface for Rc<S> {
    fn set_inner_html(&self, html: &str) {
        (**self).set_inner_html(html);
    }

    fn set_region_html(&self, region_id: &str, html: &str) -> bool {
        (**self).set_region_html(region_id, html)
    }

    fn set_control_values(&self, attributes: &[(&str, &str)], value: &str) -> usize {
        (**self).set_control_values(attributes, value)
    }
}
