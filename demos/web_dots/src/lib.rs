// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the radial dots editor.
//!
//! [`start`] registers the document `input` listener and mounts
//! [`DotsModule`] into `#application-container`. Nothing runs when the wasm
//! module is instantiated; the page calls `start()` itself. Two query
//! parameters adjust the page:
//!
//! - `?invalid=pass` hands unparsable numbers to the module as `NaN` instead
//!   of rejecting them.
//! - `?trace=verbose` logs every dispatched event to the console.
//!
//! The module's operations are also exported to JavaScript (`init_app`,
//! `mount`, `action_update_default_dot`, `rerender_app`) for hosts that drive
//! the editor themselves. Such hosts must not also call `start`, or the page
//! ends up with two editors and two listeners, each with its own state.
//!
//! Build with: `wasm-pack build --target web demos/web_dots`
//!
//! Then serve `demos/web_dots/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use radial_core::config::{Config, InvalidNumber};
use radial_core::module::UiModule as _;
use radial_dots::{DotsApp, DotsModule};
use radial_web::{ConsoleSink, DocumentReady, DomContainer, query_param};

type Module = DotsModule<DomContainer>;

/// Mounts the editor and starts forwarding `input` events to it.
///
/// Call once, after the wasm module has been initialized.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global window");
    let search = window.location().search().unwrap_or_default();
    let verbose = query_param(&search, "trace") == Some("verbose");

    let listener = radial_web::start(
        DocumentReady::new(Module::new()),
        config_from_query(&search),
        ConsoleSink::new(verbose),
    )?;

    // Keep the listener alive; the page never unmounts the editor.
    listener.forget();

    Ok(())
}

fn config_from_query(search: &str) -> Config {
    let mut config = Config::radial_dots();
    if query_param(search, "invalid") == Some("pass") {
        config.dispatch = config
            .dispatch
            .with_invalid_number(InvalidNumber::PassThrough);
    }
    config
}

/// Editor state handed to JavaScript.
#[wasm_bindgen]
#[derive(Debug)]
pub struct App {
    state: DotsApp,
}

/// Creates a fresh editor state.
#[wasm_bindgen]
#[must_use]
pub fn init_app() -> App {
    App {
        state: Module::new().init(),
    }
}

/// Renders the whole editor into `container`.
#[wasm_bindgen]
pub fn mount(container: &Element, app: &App) {
    Module::new().mount(&DomContainer::new(container.clone()), &app.state);
}

/// Sets `field` of the default dot or arc named `element_id`.
///
/// Returns whether the state changed.
#[wasm_bindgen]
pub fn action_update_default_dot(app: &mut App, element_id: &str, field: &str, value: f64) -> bool {
    Module::new().update(&mut app.state, element_id, field, value)
}

/// Redraws the diagram inside `container`.
#[wasm_bindgen]
pub fn rerender_app(container: &Element, app: &App) {
    Module::new().rerender(&DomContainer::new(container.clone()), &app.state);
}
