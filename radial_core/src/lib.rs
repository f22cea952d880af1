// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Module contract, input dispatch, and bootstrap for the radial dots editor.
//!
//! `radial_core` is the platform-independent glue between a page and the UI
//! module that owns the application state. It is `no_std` compatible (with
//! `alloc`) so the same logic runs in the browser and in native tests.
//!
//! # Architecture
//!
//! ```text
//!   ModuleLoader::load() ──(await)──► UiModule
//!                                        │ init() + mount()
//!                                        ▼
//!                                     Mounted ──► InputDispatcher::attach()
//!                                                        │
//!   `input` event ──► InputSource ──► InputDispatcher::dispatch()
//!                                        │ update()
//!                                        ▼
//!                                     changed? ──► rerender()
//! ```
//!
//! **[`module`]**: The [`UiModule`](module::UiModule) trait with the four
//! operations the page needs, plus the DOM-facing traits
//! ([`InputSource`](module::InputSource),
//! [`ContainerLookup`](module::ContainerLookup),
//! [`HtmlSurface`](module::HtmlSurface)) that platform crates implement.
//!
//! **[`dispatch`]**: [`InputDispatcher`](dispatch::InputDispatcher), an
//! explicit `Unmounted → Mounted` lifecycle that filters events, parses
//! values, and drives update/rerender.
//!
//! **[`bootstrap`]**: The async load-init-mount sequence.
//!
//! **[`config`]**: Attribute names, managed prefix, container id, and the
//! invalid-number policy.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod bootstrap;
pub mod config;
pub mod dispatch;
pub mod module;
pub mod trace;
