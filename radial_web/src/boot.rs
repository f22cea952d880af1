// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page startup: listener first, then the asynchronous bootstrap.

use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use radial_core::bootstrap::{ModuleLoader, bootstrap};
use radial_core::config::Config;
use radial_core::dispatch::InputDispatcher;
use radial_core::module::UiModule;
use radial_core::trace::{TraceSink, Tracer};
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::dom::{DomContainer, DomDocument};
use crate::listener::InputListener;

/// Starts the page.
///
/// The `input` listener is registered on the document right away with an
/// unmounted dispatcher, so edits made before the module is ready are
/// dropped rather than queued. The bootstrap then runs on the browser's
/// microtask queue and attaches the module when it succeeds. A bootstrap
/// failure is reported through `sink` and never reaches the page as an
/// exception.
///
/// `sink` is cloned: one copy traces the bootstrap, the other every
/// dispatched event.
///
/// Fails only if the page has no document or the listener cannot be
/// registered.
pub fn start<L, S>(loader: L, config: Config, sink: S) -> Result<InputListener, JsValue>
where
    L: ModuleLoader + 'static,
    L::Module: UiModule<Container = DomContainer> + 'static,
    S: TraceSink + Clone + 'static,
{
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let dispatcher = Rc::new(RefCell::new(InputDispatcher::<L::Module>::new(
        config.dispatch,
    )));

    let listener = {
        let dispatcher = Rc::clone(&dispatcher);
        let mut sink = sink.clone();
        InputListener::register(document.clone().into(), move |target| {
            dispatcher
                .borrow_mut()
                .dispatch(&target, &mut Tracer::new(&mut sink));
        })?
    };

    let mut sink = sink;
    let document = DomDocument::new(document);
    wasm_bindgen_futures::spawn_local(async move {
        let booted = bootstrap(loader, &document, &config.boot, &mut Tracer::new(&mut sink)).await;
        // Failures were already traced by the bootstrap.
        if let Ok(mounted) = booted
            && let Err(err) = dispatcher.borrow_mut().attach(mounted)
        {
            console::error_1(&JsValue::from_str(&format!("[boot] {err}")));
        }
    });

    Ok(listener)
}
