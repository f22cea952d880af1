// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace output to the browser console.

use alloc::format;
use alloc::string::String;

use radial_core::trace::{
    BootFailedEvent, InputIgnoredEvent, MountedEvent, RerenderEvent, TraceSink, UpdateEvent,
    ValueRejectedEvent,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`TraceSink`] that writes to `console`.
///
/// Boot failures go to `console.error` and rejected values to
/// `console.warn`, always. Everything else is written with `console.debug`
/// only when `verbose` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink; `verbose` enables per-event debug lines.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Writes the line built by `line` with `console.debug` when verbose.
    ///
    /// The line is not formatted at all otherwise.
    fn debug(&self, line: impl FnOnce() -> String) {
        if self.verbose {
            console::debug_1(&JsValue::from_str(&line()));
        }
    }
}

impl TraceSink for ConsoleSink {
    fn on_module_loaded(&mut self) {
        self.debug(|| String::from("[boot] module loaded"));
    }

    fn on_boot_failed(&mut self, e: &BootFailedEvent<'_>) {
        let line = format!("[boot] {:?} failed: {}", e.stage, e.error);
        console::error_1(&JsValue::from_str(&line));
    }

    fn on_mounted(&mut self, e: &MountedEvent<'_>) {
        self.debug(|| format!("[boot] mounted into #{}", e.container_id));
    }

    fn on_input_ignored(&mut self, e: &InputIgnoredEvent<'_>) {
        self.debug(|| {
            format!(
                "[input #{}] ignored {:?} id={:?}",
                e.sequence, e.reason, e.element_id
            )
        });
    }

    fn on_value_rejected(&mut self, e: &ValueRejectedEvent<'_>) {
        let line = format!(
            "[input #{}] {}.{} rejected: {}",
            e.sequence, e.element_id, e.field, e.error
        );
        console::warn_1(&JsValue::from_str(&line));
    }

    fn on_update(&mut self, e: &UpdateEvent<'_>) {
        self.debug(|| {
            format!(
                "[input #{}] {}.{} = {} changed={}",
                e.sequence, e.element_id, e.field, e.value, e.changed
            )
        });
    }

    fn on_rerender(&mut self, e: &RerenderEvent) {
        self.debug(|| format!("[input #{}] rerendered", e.sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_sink_never_builds_debug_lines() {
        let mut sink = ConsoleSink::new(false);
        sink.debug(|| unreachable!("line built while quiet"));
        sink.on_module_loaded();
        sink.on_update(&UpdateEvent {
            sequence: 1,
            element_id: "default-one",
            field: "ring_radius",
            value: 3.5,
            changed: true,
        });
        sink.on_rerender(&RerenderEvent { sequence: 1 });
    }
}
