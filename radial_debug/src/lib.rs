// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for radial dots diagnostics.
//!
//! This crate provides [`TraceSink`](radial_core::trace::TraceSink)
//! implementations for native hosts and tests:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: owned copies of every event, with JSON
//!   export for post-mortem analysis.

pub mod pretty;
pub mod recorder;

pub use pretty::PrettyPrintSink;
pub use recorder::{RecordedEvent, RecorderSink};
