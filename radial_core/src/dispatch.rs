// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forwarding of `input` events to the UI module.
//!
//! [`InputDispatcher`] is registered once for the lifetime of the page. It
//! starts **unmounted**; the bootstrap hands it a [`Mounted`] module via
//! [`attach`](InputDispatcher::attach). From then on every `input` event whose
//! target carries a managed identifier goes through one independent
//! update-then-maybe-rerender cycle:
//!
//! ```text
//!   target ──► id attribute? ──► managed prefix? ──► mounted?
//!                                                       │
//!          field attribute? ──► parse value ◄───────────┘
//!                                   │
//!                              update(handle, id, field, value)
//!                                   │ changed
//!                                   ▼
//!                              rerender(container, handle)
//! ```
//!
//! Every early exit is a normal [`DispatchOutcome`], never a fault.

use core::fmt;

use crate::config::{DispatchConfig, InvalidNumber};
use crate::module::{InputSource, UiModule};
use crate::trace::{InputIgnoredEvent, RerenderEvent, Tracer, UpdateEvent, ValueRejectedEvent};

/// Why an `input` event was not forwarded to the module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The target has no identifier attribute.
    MissingId,
    /// The identifier does not start with the managed prefix.
    Unmanaged,
    /// The module has not been mounted (yet, or ever).
    NotMounted,
    /// The target has no field-name attribute.
    MissingField,
}

/// Why an element value could not be turned into a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueError {
    /// The element exposes no value at all.
    Missing,
    /// The value is empty or whitespace.
    Empty,
    /// The value is not a decimal number.
    NotANumber,
    /// The value parsed to NaN or an infinity.
    NotFinite,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("element has no value"),
            Self::Empty => f.write_str("value is empty"),
            Self::NotANumber => f.write_str("value is not a number"),
            Self::NotFinite => f.write_str("value is not finite"),
        }
    }
}

impl core::error::Error for ValueError {}

/// Returned by [`InputDispatcher::attach`] when a module is already mounted.
///
/// The existing handle is kept; the rejected one is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlreadyMounted;

impl fmt::Display for AlreadyMounted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a module is already mounted")
    }
}

impl core::error::Error for AlreadyMounted {}

/// What happened to one `input` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event was dropped before reaching the module.
    Ignored(IgnoreReason),
    /// The value did not parse and the policy is [`InvalidNumber::Reject`].
    Rejected(ValueError),
    /// The module was updated and reported no change.
    Unchanged,
    /// The module was updated, reported a change, and re-rendered.
    Rerendered,
}

/// Parses an element value into a finite number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are refused even
/// though they are valid `f64` literals.
pub fn parse_value(text: &str) -> Result<f64, ValueError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValueError::Empty);
    }
    let value: f64 = text.parse().map_err(|_| ValueError::NotANumber)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValueError::NotFinite)
    }
}

/// A module that has been initialized and rendered into its container.
///
/// Produced by [`bootstrap`](crate::bootstrap::bootstrap); the handle inside
/// is the only one ever created for the page.
pub struct Mounted<M: UiModule> {
    module: M,
    handle: M::Handle,
    container: M::Container,
}

impl<M: UiModule> Mounted<M> {
    pub(crate) fn new(module: M, handle: M::Handle, container: M::Container) -> Self {
        Self {
            module,
            handle,
            container,
        }
    }

    /// Returns the module.
    #[must_use]
    pub fn module(&self) -> &M {
        &self.module
    }

    /// Returns the application handle.
    #[must_use]
    pub fn handle(&self) -> &M::Handle {
        &self.handle
    }

    /// Returns the container the module is mounted into.
    #[must_use]
    pub fn container(&self) -> &M::Container {
        &self.container
    }
}

impl<M: UiModule> fmt::Debug for Mounted<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mounted").finish_non_exhaustive()
    }
}

enum Lifecycle<M: UiModule> {
    Unmounted,
    Mounted(Mounted<M>),
}

/// Routes `input` events from managed elements to a [`UiModule`].
///
/// Create with [`InputDispatcher::new`], register it with the page's `input`
/// events, then [`attach`](Self::attach) the module once the bootstrap
/// completes. Events arriving before that are reported as
/// [`IgnoreReason::NotMounted`].
pub struct InputDispatcher<M: UiModule> {
    config: DispatchConfig,
    state: Lifecycle<M>,
    /// Number of events seen so far (becomes the trace `sequence`).
    sequence: u64,
}

impl<M: UiModule> fmt::Debug for InputDispatcher<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputDispatcher")
            .field("config", &self.config)
            .field("mounted", &self.is_mounted())
            .field("sequence", &self.sequence)
            .finish()
    }
}

impl<M: UiModule> InputDispatcher<M> {
    /// Creates an unmounted dispatcher.
    #[must_use]
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            state: Lifecycle::Unmounted,
            sequence: 0,
        }
    }

    /// Returns the dispatcher configuration.
    #[must_use]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Returns `true` once a module has been attached.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        matches!(self.state, Lifecycle::Mounted(_))
    }

    /// Returns the mounted module, if any.
    #[must_use]
    pub fn mounted(&self) -> Option<&Mounted<M>> {
        match &self.state {
            Lifecycle::Mounted(mounted) => Some(mounted),
            Lifecycle::Unmounted => None,
        }
    }

    /// Returns the number of events passed to [`dispatch`](Self::dispatch).
    #[must_use]
    pub fn events_seen(&self) -> u64 {
        self.sequence
    }

    /// Moves the dispatcher into the mounted state.
    ///
    /// Fails if a module is already attached; the existing handle is never
    /// replaced.
    pub fn attach(&mut self, mounted: Mounted<M>) -> Result<(), AlreadyMounted> {
        if self.is_mounted() {
            return Err(AlreadyMounted);
        }
        self.state = Lifecycle::Mounted(mounted);
        Ok(())
    }

    /// Handles one `input` event fired on `target`.
    pub fn dispatch(
        &mut self,
        target: &impl InputSource,
        tracer: &mut Tracer<'_>,
    ) -> DispatchOutcome {
        let sequence = self.sequence;
        self.sequence += 1;

        let ignore = |tracer: &mut Tracer<'_>, reason: IgnoreReason, element_id: Option<&str>| {
            tracer.input_ignored(&InputIgnoredEvent {
                sequence,
                reason,
                element_id,
            });
            DispatchOutcome::Ignored(reason)
        };

        let Some(element_id) = target.attribute(self.config.id_attribute) else {
            return ignore(tracer, IgnoreReason::MissingId, None);
        };
        if !element_id.starts_with(self.config.managed_prefix) {
            return ignore(tracer, IgnoreReason::Unmanaged, Some(&element_id));
        }
        let Lifecycle::Mounted(mounted) = &mut self.state else {
            return ignore(tracer, IgnoreReason::NotMounted, Some(&element_id));
        };
        let Some(field) = target.attribute(self.config.field_attribute) else {
            return ignore(tracer, IgnoreReason::MissingField, Some(&element_id));
        };

        let parsed = target
            .value()
            .ok_or(ValueError::Missing)
            .and_then(|text| parse_value(&text));
        let value = match (parsed, self.config.invalid_number) {
            (Ok(value), _) => value,
            (Err(_), InvalidNumber::PassThrough) => f64::NAN,
            (Err(error), InvalidNumber::Reject) => {
                tracer.value_rejected(&ValueRejectedEvent {
                    sequence,
                    element_id: &element_id,
                    field: &field,
                    error,
                });
                return DispatchOutcome::Rejected(error);
            }
        };

        let changed = mounted
            .module
            .update(&mut mounted.handle, &element_id, &field, value);
        tracer.update(&UpdateEvent {
            sequence,
            element_id: &element_id,
            field: &field,
            value,
            changed,
        });
        if !changed {
            return DispatchOutcome::Unchanged;
        }

        mounted.module.rerender(&mounted.container, &mounted.handle);
        tracer.rerender(&RerenderEvent { sequence });
        DispatchOutcome::Rerendered
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Init,
        Mount(u32),
        Update(u32, String, String, f64),
        Rerender(u32),
    }

    /// Module double that records every call and reports a fixed result
    /// from `update`.
    struct ScriptedModule {
        calls: Rc<RefCell<Vec<Call>>>,
        changed: bool,
    }

    impl UiModule for ScriptedModule {
        type Handle = u32;
        type Container = ();

        fn init(&self) -> u32 {
            self.calls.borrow_mut().push(Call::Init);
            7
        }

        fn mount(&self, _container: &(), handle: &u32) {
            self.calls.borrow_mut().push(Call::Mount(*handle));
        }

        fn update(&self, handle: &mut u32, element_id: &str, field: &str, value: f64) -> bool {
            self.calls.borrow_mut().push(Call::Update(
                *handle,
                element_id.to_string(),
                field.to_string(),
                value,
            ));
            self.changed
        }

        fn rerender(&self, _container: &(), handle: &u32) {
            self.calls.borrow_mut().push(Call::Rerender(*handle));
        }
    }

    struct FakeInput {
        attributes: Vec<(&'static str, &'static str)>,
        value: Option<&'static str>,
    }

    impl FakeInput {
        fn managed(id: &'static str, field: &'static str, value: &'static str) -> Self {
            Self {
                attributes: vec![("data_dot_id", id), ("name", field)],
                value: Some(value),
            }
        }
    }

    impl InputSource for FakeInput {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_string())
        }

        fn value(&self) -> Option<String> {
            self.value.map(ToString::to_string)
        }
    }

    fn mounted_dispatcher(
        changed: bool,
        config: DispatchConfig,
    ) -> (InputDispatcher<ScriptedModule>, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let module = ScriptedModule {
            calls: Rc::clone(&calls),
            changed,
        };
        let handle = module.init();
        module.mount(&(), &handle);
        let mut dispatcher = InputDispatcher::new(config);
        dispatcher
            .attach(Mounted::new(module, handle, ()))
            .expect("fresh dispatcher accepts a module");
        (dispatcher, calls)
    }

    fn updates(calls: &[Call]) -> usize {
        calls
            .iter()
            .filter(|c| matches!(c, Call::Update(..)))
            .count()
    }

    #[test]
    fn parse_value_accepts_decimals() {
        assert_eq!(parse_value("12.5"), Ok(12.5));
        assert_eq!(parse_value(" -3 "), Ok(-3.0));
        assert_eq!(parse_value("1e2"), Ok(100.0));
    }

    #[test]
    fn parse_value_reports_failures() {
        assert_eq!(parse_value(""), Err(ValueError::Empty));
        assert_eq!(parse_value("   "), Err(ValueError::Empty));
        assert_eq!(parse_value("abc"), Err(ValueError::NotANumber));
        assert_eq!(parse_value("NaN"), Err(ValueError::NotFinite));
        assert_eq!(parse_value("inf"), Err(ValueError::NotFinite));
    }

    #[test]
    fn parse_value_needs_the_whole_text() {
        assert_eq!(parse_value("12.5px"), Err(ValueError::NotANumber));
        assert_eq!(parse_value("0x10"), Err(ValueError::NotANumber));
    }

    #[test]
    fn managed_input_reaches_update_with_parsed_value() {
        let (mut dispatcher, calls) = mounted_dispatcher(false, DispatchConfig::radial_dots());
        let outcome = dispatcher.dispatch(
            &FakeInput::managed("default-3", "radius", "12.5"),
            &mut Tracer::none(),
        );

        assert_eq!(outcome, DispatchOutcome::Unchanged);
        assert_eq!(
            calls.borrow().last(),
            Some(&Call::Update(
                7,
                "default-3".to_string(),
                "radius".to_string(),
                12.5
            ))
        );
    }

    #[test]
    fn unmanaged_input_never_reaches_update() {
        let (mut dispatcher, calls) = mounted_dispatcher(true, DispatchConfig::radial_dots());
        let outcome = dispatcher.dispatch(
            &FakeInput::managed("custom-1", "radius", "1"),
            &mut Tracer::none(),
        );

        assert_eq!(outcome, DispatchOutcome::Ignored(IgnoreReason::Unmanaged));
        assert_eq!(updates(&calls.borrow()), 0);
    }

    #[test]
    fn missing_id_is_ignored() {
        let (mut dispatcher, calls) = mounted_dispatcher(true, DispatchConfig::radial_dots());
        let target = FakeInput {
            attributes: vec![("name", "radius")],
            value: Some("1"),
        };
        let outcome = dispatcher.dispatch(&target, &mut Tracer::none());

        assert_eq!(outcome, DispatchOutcome::Ignored(IgnoreReason::MissingId));
        assert_eq!(updates(&calls.borrow()), 0);
    }

    #[test]
    fn missing_field_is_ignored() {
        let (mut dispatcher, calls) = mounted_dispatcher(true, DispatchConfig::radial_dots());
        let target = FakeInput {
            attributes: vec![("data_dot_id", "default-one")],
            value: Some("1"),
        };
        let outcome = dispatcher.dispatch(&target, &mut Tracer::none());

        assert_eq!(outcome, DispatchOutcome::Ignored(IgnoreReason::MissingField));
        assert_eq!(updates(&calls.borrow()), 0);
    }

    #[test]
    fn unmounted_dispatcher_is_inert() {
        let mut dispatcher = InputDispatcher::<ScriptedModule>::new(DispatchConfig::radial_dots());
        let outcome = dispatcher.dispatch(
            &FakeInput::managed("default-one", "ring_radius", "2"),
            &mut Tracer::none(),
        );

        assert_eq!(outcome, DispatchOutcome::Ignored(IgnoreReason::NotMounted));
        assert!(!dispatcher.is_mounted());
        assert_eq!(dispatcher.events_seen(), 1);
    }

    #[test]
    fn unchanged_update_skips_rerender() {
        let (mut dispatcher, calls) = mounted_dispatcher(false, DispatchConfig::radial_dots());
        dispatcher.dispatch(
            &FakeInput::managed("default-one", "ring_radius", "2"),
            &mut Tracer::none(),
        );

        assert!(
            !calls.borrow().iter().any(|c| matches!(c, Call::Rerender(_))),
            "no rerender expected"
        );
    }

    #[test]
    fn changed_update_rerenders_once_after_update() {
        let (mut dispatcher, calls) = mounted_dispatcher(true, DispatchConfig::radial_dots());
        let outcome = dispatcher.dispatch(
            &FakeInput::managed("default-one", "ring_radius", "2"),
            &mut Tracer::none(),
        );

        assert_eq!(outcome, DispatchOutcome::Rerendered);
        let calls = calls.borrow();
        assert_eq!(calls.len(), 4, "init, mount, update, rerender: {calls:?}");
        assert_eq!(calls[0], Call::Init);
        assert_eq!(calls[1], Call::Mount(7));
        assert!(matches!(calls[2], Call::Update(7, ..)));
        assert_eq!(calls[3], Call::Rerender(7));
    }

    #[test]
    fn every_event_gets_its_own_cycle() {
        let (mut dispatcher, calls) = mounted_dispatcher(true, DispatchConfig::radial_dots());
        for value in ["1", "2", "3"] {
            dispatcher.dispatch(
                &FakeInput::managed("default-zero", "circle_radius", value),
                &mut Tracer::none(),
            );
        }

        let calls = calls.borrow();
        let tail: Vec<_> = calls[2..]
            .iter()
            .map(|c| matches!(c, Call::Update(..)))
            .collect();
        assert_eq!(tail, [true, false, true, false, true, false]);
        assert_eq!(dispatcher.events_seen(), 3);
    }

    #[test]
    fn invalid_value_is_rejected_by_default() {
        let (mut dispatcher, calls) = mounted_dispatcher(true, DispatchConfig::radial_dots());
        let outcome = dispatcher.dispatch(
            &FakeInput::managed("default-3", "radius", "abc"),
            &mut Tracer::none(),
        );

        assert_eq!(outcome, DispatchOutcome::Rejected(ValueError::NotANumber));
        assert_eq!(updates(&calls.borrow()), 0);
    }

    #[test]
    fn missing_value_is_rejected() {
        let (mut dispatcher, _calls) = mounted_dispatcher(true, DispatchConfig::radial_dots());
        let target = FakeInput {
            attributes: vec![("data_dot_id", "default-one"), ("name", "ring_radius")],
            value: None,
        };
        let outcome = dispatcher.dispatch(&target, &mut Tracer::none());

        assert_eq!(outcome, DispatchOutcome::Rejected(ValueError::Missing));
    }

    #[test]
    fn invalid_value_passes_through_as_nan() {
        let config =
            DispatchConfig::radial_dots().with_invalid_number(InvalidNumber::PassThrough);
        let (mut dispatcher, calls) = mounted_dispatcher(false, config);
        let outcome = dispatcher.dispatch(
            &FakeInput::managed("default-3", "radius", "abc"),
            &mut Tracer::none(),
        );

        assert_eq!(outcome, DispatchOutcome::Unchanged);
        let calls = calls.borrow();
        match calls.last() {
            Some(Call::Update(7, id, field, value)) => {
                assert_eq!(id, "default-3");
                assert_eq!(field, "radius");
                assert!(value.is_nan(), "expected NaN, got {value}");
            }
            other => panic!("expected an update, got {other:?}"),
        }
    }

    #[test]
    fn attach_twice_keeps_first_handle() {
        let (mut dispatcher, calls) = mounted_dispatcher(true, DispatchConfig::radial_dots());
        let second = ScriptedModule {
            calls: Rc::clone(&calls),
            changed: false,
        };

        assert_eq!(
            dispatcher.attach(Mounted::new(second, 99, ())),
            Err(AlreadyMounted)
        );
        assert_eq!(dispatcher.mounted().map(|m| *m.handle()), Some(7));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn trace_reports_each_step() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Steps(Vec<&'static str>);
        impl TraceSink for Steps {
            fn on_input_ignored(&mut self, _: &InputIgnoredEvent<'_>) {
                self.0.push("ignored");
            }
            fn on_value_rejected(&mut self, _: &ValueRejectedEvent<'_>) {
                self.0.push("rejected");
            }
            fn on_update(&mut self, _: &UpdateEvent<'_>) {
                self.0.push("update");
            }
            fn on_rerender(&mut self, _: &RerenderEvent) {
                self.0.push("rerender");
            }
        }

        let (mut dispatcher, _calls) = mounted_dispatcher(true, DispatchConfig::radial_dots());
        let mut steps = Steps::default();
        let mut tracer = Tracer::new(&mut steps);
        dispatcher.dispatch(&FakeInput::managed("custom-1", "x", "1"), &mut tracer);
        dispatcher.dispatch(&FakeInput::managed("default-1", "x", "?"), &mut tracer);
        dispatcher.dispatch(&FakeInput::managed("default-1", "x", "1"), &mut tracer);
        drop(tracer);

        assert_eq!(steps.0, ["ignored", "rejected", "update", "rerender"]);
    }
}
