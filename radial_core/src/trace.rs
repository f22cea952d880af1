// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for bootstrap and dispatch.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! bootstrap and the dispatcher call at each step. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use core::fmt;

use crate::dispatch::{IgnoreReason, ValueError};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which bootstrap step failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BootStage {
    /// Resolving the UI module.
    Load,
    /// Locating the container element.
    Container,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the bootstrap cannot complete.
#[derive(Clone, Copy)]
pub struct BootFailedEvent<'a> {
    /// Step that failed.
    pub stage: BootStage,
    /// Human-readable cause.
    pub error: &'a dyn fmt::Display,
}

impl fmt::Debug for BootFailedEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootFailedEvent")
            .field("stage", &self.stage)
            .field("error", &format_args!("{}", self.error))
            .finish()
    }
}

/// Emitted once the module has rendered into its container.
#[derive(Clone, Copy, Debug)]
pub struct MountedEvent<'a> {
    /// `id` of the container element.
    pub container_id: &'a str,
}

/// Emitted when an `input` event is not forwarded to the module.
#[derive(Clone, Copy, Debug)]
pub struct InputIgnoredEvent<'a> {
    /// Dispatcher event counter.
    pub sequence: u64,
    /// Why the event was dropped.
    pub reason: IgnoreReason,
    /// Identifier of the target, if it had one.
    pub element_id: Option<&'a str>,
}

/// Emitted when a value does not parse and the policy is to reject it.
#[derive(Clone, Copy, Debug)]
pub struct ValueRejectedEvent<'a> {
    /// Dispatcher event counter.
    pub sequence: u64,
    /// Identifier of the target.
    pub element_id: &'a str,
    /// Field that was being edited.
    pub field: &'a str,
    /// Parse failure.
    pub error: ValueError,
}

/// Emitted after the module's update operation returns.
#[derive(Clone, Copy, Debug)]
pub struct UpdateEvent<'a> {
    /// Dispatcher event counter.
    pub sequence: u64,
    /// Identifier of the target.
    pub element_id: &'a str,
    /// Field that was edited.
    pub field: &'a str,
    /// Value handed to the module.
    pub value: f64,
    /// What the module reported.
    pub changed: bool,
}

/// Emitted after the module re-rendered its container.
#[derive(Clone, Copy, Debug)]
pub struct RerenderEvent {
    /// Dispatcher event counter.
    pub sequence: u64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the bootstrap and the dispatcher.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the UI module has been resolved.
    fn on_module_loaded(&mut self) {}

    /// Called when the bootstrap stops early.
    fn on_boot_failed(&mut self, e: &BootFailedEvent<'_>) {
        _ = e;
    }

    /// Called after the initial render.
    fn on_mounted(&mut self, e: &MountedEvent<'_>) {
        _ = e;
    }

    /// Called when an `input` event is dropped before reaching the module.
    fn on_input_ignored(&mut self, e: &InputIgnoredEvent<'_>) {
        _ = e;
    }

    /// Called when a value is rejected by the invalid-number policy.
    fn on_value_rejected(&mut self, e: &ValueRejectedEvent<'_>) {
        _ = e;
    }

    /// Called after each module update.
    fn on_update(&mut self, e: &UpdateEvent<'_>) {
        _ = e;
    }

    /// Called after each re-render.
    fn on_rerender(&mut self, e: &RerenderEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Reports that the module resolved.
    #[inline]
    pub fn module_loaded(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_module_loaded();
        }
    }

    /// Emits a [`BootFailedEvent`].
    #[inline]
    pub fn boot_failed(&mut self, e: &BootFailedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_boot_failed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MountedEvent`].
    #[inline]
    pub fn mounted(&mut self, e: &MountedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mounted(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`InputIgnoredEvent`].
    #[inline]
    pub fn input_ignored(&mut self, e: &InputIgnoredEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_input_ignored(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ValueRejectedEvent`].
    #[inline]
    pub fn value_rejected(&mut self, e: &ValueRejectedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_value_rejected(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`UpdateEvent`].
    #[inline]
    pub fn update(&mut self, e: &UpdateEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_update(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RerenderEvent`].
    #[inline]
    pub fn rerender(&mut self, e: &RerenderEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rerender(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
