// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording and JSON export.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps an owned
//! [`RecordedEvent`] per callback, so the log outlives the borrowed event
//! data. [`RecorderSink::to_json`] turns the log into a JSON array, one
//! object per event, tagged by `"event"`.

use std::io::{self, Write};

use serde_json::{Value, json};

use radial_core::dispatch::{IgnoreReason, ValueError};
use radial_core::trace::{
    BootFailedEvent, BootStage, InputIgnoredEvent, MountedEvent, RerenderEvent, TraceSink,
    UpdateEvent, ValueRejectedEvent,
};

/// An owned copy of one trace callback.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// The UI module resolved.
    ModuleLoaded,
    /// The bootstrap stopped early.
    BootFailed {
        /// Step that failed.
        stage: BootStage,
        /// Rendered cause.
        message: String,
    },
    /// The module rendered into its container.
    Mounted {
        /// `id` of the container element.
        container_id: String,
    },
    /// An `input` event was dropped before reaching the module.
    InputIgnored {
        /// Dispatcher event counter.
        sequence: u64,
        /// Why it was dropped.
        reason: IgnoreReason,
        /// Identifier of the target, if any.
        element_id: Option<String>,
    },
    /// A value was refused by the invalid-number policy.
    ValueRejected {
        /// Dispatcher event counter.
        sequence: u64,
        /// Identifier of the target.
        element_id: String,
        /// Field being edited.
        field: String,
        /// Parse failure.
        error: ValueError,
    },
    /// The module's update returned.
    Update {
        /// Dispatcher event counter.
        sequence: u64,
        /// Identifier of the target.
        element_id: String,
        /// Field that was edited.
        field: String,
        /// Value handed to the module.
        value: f64,
        /// What the module reported.
        changed: bool,
    },
    /// The module re-rendered.
    Rerender {
        /// Dispatcher event counter.
        sequence: u64,
    },
}

impl RecordedEvent {
    /// Returns the event as a JSON object.
    ///
    /// Non-finite values become `null`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::ModuleLoaded => json!({ "event": "module_loaded" }),
            Self::BootFailed { stage, message } => json!({
                "event": "boot_failed",
                "stage": format!("{stage:?}"),
                "message": message,
            }),
            Self::Mounted { container_id } => json!({
                "event": "mounted",
                "container_id": container_id,
            }),
            Self::InputIgnored {
                sequence,
                reason,
                element_id,
            } => json!({
                "event": "input_ignored",
                "sequence": sequence,
                "reason": format!("{reason:?}"),
                "element_id": element_id,
            }),
            Self::ValueRejected {
                sequence,
                element_id,
                field,
                error,
            } => json!({
                "event": "value_rejected",
                "sequence": sequence,
                "element_id": element_id,
                "field": field,
                "error": error.to_string(),
            }),
            Self::Update {
                sequence,
                element_id,
                field,
                value,
                changed,
            } => json!({
                "event": "update",
                "sequence": sequence,
                "element_id": element_id,
                "field": field,
                "value": value,
                "changed": changed,
            }),
            Self::Rerender { sequence } => json!({
                "event": "rerender",
                "sequence": sequence,
            }),
        }
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the log as a JSON array.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Array(self.events.iter().map(RecordedEvent::to_json).collect())
    }

    /// Writes the log as pretty-printed JSON.
    pub fn write_json(&self, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.to_json())?;
        writeln!(writer)
    }
}

impl TraceSink for RecorderSink {
    fn on_module_loaded(&mut self) {
        self.events.push(RecordedEvent::ModuleLoaded);
    }

    fn on_boot_failed(&mut self, e: &BootFailedEvent<'_>) {
        self.events.push(RecordedEvent::BootFailed {
            stage: e.stage,
            message: e.error.to_string(),
        });
    }

    fn on_mounted(&mut self, e: &MountedEvent<'_>) {
        self.events.push(RecordedEvent::Mounted {
            container_id: e.container_id.to_owned(),
        });
    }

    fn on_input_ignored(&mut self, e: &InputIgnoredEvent<'_>) {
        self.events.push(RecordedEvent::InputIgnored {
            sequence: e.sequence,
            reason: e.reason,
            element_id: e.element_id.map(str::to_owned),
        });
    }

    fn on_value_rejected(&mut self, e: &ValueRejectedEvent<'_>) {
        self.events.push(RecordedEvent::ValueRejected {
            sequence: e.sequence,
            element_id: e.element_id.to_owned(),
            field: e.field.to_owned(),
            error: e.error,
        });
    }

    fn on_update(&mut self, e: &UpdateEvent<'_>) {
        self.events.push(RecordedEvent::Update {
            sequence: e.sequence,
            element_id: e.element_id.to_owned(),
            field: e.field.to_owned(),
            value: e.value,
            changed: e.changed,
        });
    }

    fn on_rerender(&mut self, e: &RerenderEvent) {
        self.events
            .push(RecordedEvent::Rerender { sequence: e.sequence });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use radial_core::trace::Tracer;

    fn sample_update(value: f64) -> UpdateEvent<'static> {
        UpdateEvent {
            sequence: 3,
            element_id: "default-one",
            field: "ring_radius",
            value,
            changed: true,
        }
    }

    #[test]
    fn records_through_tracer() {
        let mut sink = RecorderSink::new();
        let mut tracer = Tracer::new(&mut sink);
        tracer.module_loaded();
        tracer.update(&sample_update(2.5));
        tracer.rerender(&RerenderEvent { sequence: 3 });
        drop(tracer);

        assert_eq!(
            sink.events(),
            [
                RecordedEvent::ModuleLoaded,
                RecordedEvent::Update {
                    sequence: 3,
                    element_id: "default-one".to_owned(),
                    field: "ring_radius".to_owned(),
                    value: 2.5,
                    changed: true,
                },
                RecordedEvent::Rerender { sequence: 3 },
            ]
        );
    }

    #[test]
    fn boot_failure_keeps_rendered_message() {
        let mut sink = RecorderSink::new();
        let cause = "no element with id `application-container`";
        sink.on_boot_failed(&BootFailedEvent {
            stage: BootStage::Container,
            error: &cause,
        });

        assert_eq!(
            sink.into_events(),
            [RecordedEvent::BootFailed {
                stage: BootStage::Container,
                message: cause.to_owned(),
            }]
        );
    }

    #[test]
    fn ignored_event_without_id() {
        let mut sink = RecorderSink::new();
        sink.on_input_ignored(&InputIgnoredEvent {
            sequence: 0,
            reason: IgnoreReason::MissingId,
            element_id: None,
        });

        let json = sink.to_json();
        assert_eq!(json[0]["event"], "input_ignored");
        assert_eq!(json[0]["reason"], "MissingId");
        assert!(json[0]["element_id"].is_null());
    }

    #[test]
    fn json_export_covers_every_event() {
        let mut sink = RecorderSink::new();
        sink.on_module_loaded();
        sink.on_mounted(&MountedEvent {
            container_id: "application-container",
        });
        sink.on_value_rejected(&ValueRejectedEvent {
            sequence: 1,
            element_id: "default-3",
            field: "radius",
            error: ValueError::NotANumber,
        });
        sink.on_update(&sample_update(f64::NAN));

        let json = sink.to_json();
        let names: Vec<&str> = json
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|e| e["event"].as_str())
            .collect();
        assert_eq!(names, ["module_loaded", "mounted", "value_rejected", "update"]);
        assert_eq!(json[2]["error"], "value is not a number");
        assert!(json[3]["value"].is_null(), "NaN exports as null");
    }

    #[test]
    fn write_json_round_trips() {
        let mut sink = RecorderSink::new();
        sink.on_rerender(&RerenderEvent { sequence: 9 });

        let mut buf = Vec::new();
        sink.write_json(&mut buf).expect("write to Vec");
        let parsed: Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(parsed, sink.to_json());

        sink.clear();
        assert!(sink.events().is_empty());
    }
}
