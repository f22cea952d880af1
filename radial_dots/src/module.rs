// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radial dots editor as a [`UiModule`].

use alloc::format;
use core::fmt;
use core::marker::PhantomData;

use radial_core::module::{HtmlSurface, UiModule};

use crate::app::DotsApp;
use crate::view::{FIELD_ATTRIBUTE, ID_ATTRIBUTE, RENDERER_ID, numeric_fields};

/// Drives a [`DotsApp`] rendered into any [`HtmlSurface`].
///
/// Mount writes the whole editor. Re-render replaces only the diagram region
/// and pushes the current values into the other controls, so the slider and
/// number box of a field agree while the control being edited keeps its
/// focus. If the region has gone missing the whole editor is written again.
pub struct DotsModule<C> {
    _container: PhantomData<fn(&C)>,
}

impl<C> DotsModule<C> {
    /// Creates the module.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _container: PhantomData,
        }
    }
}

impl<C> Default for DotsModule<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for DotsModule<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for DotsModule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DotsModule")
    }
}

impl<C: HtmlSurface> UiModule for DotsModule<C> {
    type Handle = DotsApp;
    type Container = C;

    fn init(&self) -> DotsApp {
        DotsApp::default()
    }

    fn mount(&self, container: &C, handle: &DotsApp) {
        container.set_inner_html(&handle.render_html());
    }

    fn update(&self, handle: &mut DotsApp, element_id: &str, field: &str, value: f64) -> bool {
        handle.update_default(element_id, field, value)
    }

    fn rerender(&self, container: &C, handle: &DotsApp) {
        if !container.set_region_html(RENDERER_ID, &handle.render_diagram()) {
            container.set_inner_html(&handle.render_html());
            return;
        }
        for (element_id, field, value) in numeric_fields(handle) {
            container.set_control_values(
                &[(ID_ATTRIBUTE, element_id), (FIELD_ATTRIBUTE, field)],
                &format!("{value}"),
            );
        }
    }
}
