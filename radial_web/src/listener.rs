// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level `input` listener.
//!
//! `input` events bubble, so one listener on the document sees every edit,
//! including edits to controls rendered after the listener was registered.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget};

use crate::dom::ElementInput;

type InputClosure = Closure<dyn FnMut(Event)>;

/// An `input` listener that forwards each event target to a callback.
///
/// The listener is removed when this value is dropped. Pages that keep it
/// for their whole lifetime call [`forget`](Self::forget).
pub struct InputListener {
    target: EventTarget,
    closure: Option<InputClosure>,
}

impl InputListener {
    /// Registers `callback` for `input` events bubbling to `target`.
    ///
    /// Events whose target is not an element are dropped.
    pub fn register(
        target: EventTarget,
        mut callback: impl FnMut(ElementInput) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(element) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            callback(ElementInput::new(element));
        }) as Box<dyn FnMut(Event)>);

        target.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            closure: Some(closure),
        })
    }

    /// Keeps the listener registered for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        }
    }
}

impl core::fmt::Debug for InputListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InputListener")
            .field("registered", &self.closure.is_some())
            .finish_non_exhaustive()
    }
}
