// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Bootstrap
//! lines are tagged `[boot]`, dispatcher lines `[input #n]` where `n` is the
//! dispatcher's event counter.

use std::io::Write;

use radial_core::dispatch::IgnoreReason;
use radial_core::trace::{
    BootFailedEvent, BootStage, InputIgnoredEvent, MountedEvent, RerenderEvent, TraceSink,
    UpdateEvent, ValueRejectedEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    /// Whether ignored events are printed too.
    verbose: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    ///
    /// Ignored `input` events are skipped; see [`verbose`](Self::verbose).
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            verbose: false,
        }
    }

    /// Also print events that never reached the module.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn stage_name(stage: BootStage) -> &'static str {
    match stage {
        BootStage::Load => "load",
        BootStage::Container => "container",
    }
}

fn reason_name(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::MissingId => "no id",
        IgnoreReason::Unmanaged => "unmanaged",
        IgnoreReason::NotMounted => "not mounted",
        IgnoreReason::MissingField => "no field",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_module_loaded(&mut self) {
        let _ = writeln!(self.writer, "[boot] module loaded");
    }

    fn on_boot_failed(&mut self, e: &BootFailedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[boot] FAILED at {}: {}",
            stage_name(e.stage),
            e.error,
        );
    }

    fn on_mounted(&mut self, e: &MountedEvent<'_>) {
        let _ = writeln!(self.writer, "[boot] mounted into #{}", e.container_id);
    }

    fn on_input_ignored(&mut self, e: &InputIgnoredEvent<'_>) {
        if !self.verbose {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[input #{}] ignored ({}) id={}",
            e.sequence,
            reason_name(e.reason),
            e.element_id.unwrap_or("-"),
        );
    }

    fn on_value_rejected(&mut self, e: &ValueRejectedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[input #{}] rejected {}.{}: {}",
            e.sequence, e.element_id, e.field, e.error,
        );
    }

    fn on_update(&mut self, e: &UpdateEvent<'_>) {
        let changed = if e.changed { "changed" } else { "unchanged" };
        let _ = writeln!(
            self.writer,
            "[input #{}] {}.{} = {} ({changed})",
            e.sequence, e.element_id, e.field, e.value,
        );
    }

    fn on_rerender(&mut self, e: &RerenderEvent) {
        let _ = writeln!(self.writer, "[input #{}] rerendered", e.sequence);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use radial_core::dispatch::ValueError;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn boot_lines() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_module_loaded();
        sink.on_mounted(&MountedEvent {
            container_id: "application-container",
        });
        let cause = "network error";
        sink.on_boot_failed(&BootFailedEvent {
            stage: BootStage::Load,
            error: &cause,
        });

        assert_eq!(
            output(sink),
            "[boot] module loaded\n\
             [boot] mounted into #application-container\n\
             [boot] FAILED at load: network error\n"
        );
    }

    #[test]
    fn input_lines() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_update(&UpdateEvent {
            sequence: 4,
            element_id: "default-arc",
            field: "radius",
            value: 12.5,
            changed: true,
        });
        sink.on_rerender(&RerenderEvent { sequence: 4 });
        sink.on_value_rejected(&ValueRejectedEvent {
            sequence: 5,
            element_id: "default-3",
            field: "radius",
            error: ValueError::Empty,
        });

        assert_eq!(
            output(sink),
            "[input #4] default-arc.radius = 12.5 (changed)\n\
             [input #4] rerendered\n\
             [input #5] rejected default-3.radius: value is empty\n"
        );
    }

    #[test]
    fn ignored_events_only_when_verbose() {
        let event = InputIgnoredEvent {
            sequence: 0,
            reason: IgnoreReason::Unmanaged,
            element_id: Some("custom-1"),
        };

        let mut quiet = PrettyPrintSink::with_writer(Vec::new());
        quiet.on_input_ignored(&event);
        assert!(output(quiet).is_empty());

        let mut loud = PrettyPrintSink::with_writer(Vec::new()).verbose(true);
        loud.on_input_ignored(&event);
        assert_eq!(output(loud), "[input #0] ignored (unmanaged) id=custom-1\n");
    }
}
