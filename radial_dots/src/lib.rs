// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial binary-dot diagram editor.
//!
//! Text is turned into bits, and each bit is drawn as a dot placed around a
//! circular arc: a "one" dot or a "zero" dot, each with its own circle and
//! ring. Several lines of text become concentric paths of one diagram.
//!
//! - [`bits`]: ASCII text to bit sequences.
//! - [`style`]: dot, arc, and colour styles.
//! - [`text_path`] and [`diagram`]: geometry and SVG output.
//! - [`view`]: the editor markup (diagram plus controls).
//! - [`app`]: the editable application state.
//! - [`module`]: [`DotsModule`], the
//!   [`UiModule`](radial_core::module::UiModule) implementation driven by the
//!   page.

#![no_std]

extern crate alloc;

pub mod app;
pub mod bits;
pub mod diagram;
pub mod module;
pub mod style;
pub mod svg;
pub mod text_path;
pub mod view;

pub use app::DotsApp;
pub use module::DotsModule;
