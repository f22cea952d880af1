// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A module loader that waits for the document to finish parsing.

use alloc::format;
use alloc::string::String;
use core::fmt;

use js_sys::{Function, Promise};
use radial_core::bootstrap::ModuleLoader;
use radial_core::module::UiModule;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Errors from [`DocumentReady`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// There is no global `window` (e.g. inside a worker).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// Waiting for `DOMContentLoaded` failed.
    Js(String),
}

impl LoadError {
    fn from_js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => f.write_str("no global window"),
            Self::NoDocument => f.write_str("window has no document"),
            Self::Js(msg) => write!(f, "JavaScript error: {msg}"),
        }
    }
}

impl core::error::Error for LoadError {}

/// Resolves `module` once the document has been parsed.
///
/// If the document is still loading, the load waits for `DOMContentLoaded`;
/// otherwise it resolves on the next poll.
#[derive(Clone, Debug, Default)]
pub struct DocumentReady<M> {
    module: M,
}

impl<M> DocumentReady<M> {
    /// Wraps `module`.
    #[must_use]
    pub const fn new(module: M) -> Self {
        Self { module }
    }
}

impl<M: UiModule> ModuleLoader for DocumentReady<M> {
    type Module = M;
    type Error = LoadError;

    async fn load(self) -> Result<M, LoadError> {
        let window = web_sys::window().ok_or(LoadError::NoWindow)?;
        let document = window.document().ok_or(LoadError::NoDocument)?;

        if document.ready_state() == "loading" {
            let ready = Promise::new(&mut |resolve: Function, reject: Function| {
                if let Err(err) =
                    document.add_event_listener_with_callback("DOMContentLoaded", &resolve)
                {
                    let _ = reject.call1(&JsValue::NULL, &err);
                }
            });
            JsFuture::from(ready)
                .await
                .map_err(|err| LoadError::from_js(&err))?;
        }
        Ok(self.module)
    }
}
