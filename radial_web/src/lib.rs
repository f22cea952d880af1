// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser glue for radial dots.
//!
//! This crate connects [`radial_core`] to the DOM:
//!
//! - [`DomDocument`], [`DomContainer`], [`ElementInput`]: the
//!   [`radial_core::module`] traits over `web_sys` types.
//! - [`InputListener`]: the document-level `input` listener.
//! - [`DocumentReady`]: a module loader that waits for `DOMContentLoaded`.
//! - [`ConsoleSink`]: trace events written to the browser console.
//! - [`start`]: registers the listener and runs the bootstrap.

#![no_std]

extern crate alloc;

mod boot;
mod console;
mod dom;
mod listener;
mod loader;

pub use boot::start;
pub use console::ConsoleSink;
pub use dom::{DomContainer, DomDocument, ElementInput};
pub use listener::InputListener;
pub use loader::{DocumentReady, LoadError};

/// Reads `key` from a URL query string such as `?invalid=pass&trace=verbose`.
///
/// The leading `?` is optional. Returns the first match; values are not
/// percent-decoded.
#[must_use]
pub fn query_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| match pair.split_once('=') {
            Some((k, value)) if k == key => Some(value),
            _ => None,
        })
}
