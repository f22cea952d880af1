// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for the bootstrap and the input dispatcher.

/// What the dispatcher does with a value that does not parse to a finite
/// number.
///
/// Passed to the dispatcher via [`DispatchConfig::invalid_number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidNumber {
    /// Do not call the module; report the event as rejected.
    Reject,
    /// Call the module with `f64::NAN` and let it decide.
    ///
    /// The whole trimmed value must parse as a number. There is no leading
    /// prefix reading, so `"12.5px"` and `"0x10"` also become `NaN` rather
    /// than `12.5` and `0`.
    PassThrough,
}

/// Configuration for the [`InputDispatcher`](crate::dispatch::InputDispatcher).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Attribute holding the element identifier.
    pub id_attribute: &'static str,
    /// Attribute holding the name of the edited field.
    pub field_attribute: &'static str,
    /// Identifiers starting with this prefix are forwarded to the module.
    pub managed_prefix: &'static str,
    /// Policy for values that are not finite numbers.
    pub invalid_number: InvalidNumber,
}

impl DispatchConfig {
    /// Configuration matching the markup produced by the radial dots editor.
    #[must_use]
    pub const fn radial_dots() -> Self {
        Self {
            id_attribute: "data_dot_id",
            field_attribute: "name",
            managed_prefix: "default",
            invalid_number: InvalidNumber::Reject,
        }
    }

    /// Returns a copy with `invalid_number` replaced.
    #[must_use]
    pub const fn with_invalid_number(mut self, policy: InvalidNumber) -> Self {
        self.invalid_number = policy;
        self
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::radial_dots()
    }
}

/// Configuration for [`bootstrap`](crate::bootstrap::bootstrap).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootConfig {
    /// `id` of the element the module is mounted into.
    pub container_id: &'static str,
}

impl BootConfig {
    /// Configuration matching the radial dots host page.
    #[must_use]
    pub const fn radial_dots() -> Self {
        Self {
            container_id: "application-container",
        }
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::radial_dots()
    }
}

/// Complete page configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Bootstrap settings.
    pub boot: BootConfig,
    /// Dispatcher settings.
    pub dispatch: DispatchConfig,
}

impl Config {
    /// Configuration matching the radial dots host page.
    #[must_use]
    pub const fn radial_dots() -> Self {
        Self {
            boot: BootConfig::radial_dots(),
            dispatch: DispatchConfig::radial_dots(),
        }
    }
}
