// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete diagram: concentric text paths on a square background.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::style::DrawingStyle;
use crate::svg::{self, SvgDrawable};
use crate::text_path::TextPath;

/// Smallest radius a diagram is laid out for, even with no paths.
const MIN_RADIUS: f64 = 1.0;

/// Text paths sharing one centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    /// Paths, innermost first.
    pub paths: Vec<TextPath>,
    /// Space between the outermost dot and the edge of the background.
    pub padding: f64,
}

impl Diagram {
    /// Returns the square the diagram occupies, with its origin at `(0, 0)`.
    #[must_use]
    pub fn bounding_rect(&self, style: &DrawingStyle) -> Rect {
        let radius = self
            .paths
            .iter()
            .map(|path| path.bounding_radius(style))
            .fold(MIN_RADIUS, f64::max);
        let side = 2.0 * (radius + self.padding);
        Rect::new(0.0, 0.0, side, side)
    }

    /// Returns one line of text per path, joined by newlines.
    #[must_use]
    pub fn text(&self) -> String {
        let lines: Vec<&str> = self.paths.iter().map(|p| p.text.as_str()).collect();
        lines.join("\n")
    }
}

impl SvgDrawable for Diagram {
    /// Returns a standalone `<svg>` element whose `viewBox` is the bounding
    /// rect, with every path centred in it.
    fn to_svg(&self, style: &DrawingStyle) -> String {
        let bounds = self.bounding_rect(style);
        let centre = bounds.center().to_vec2();

        let mut body = svg::rect(bounds, &style.background_color);
        for path in &self.paths {
            body.push_str(&svg::translate(&path.to_svg(style), centre));
        }

        format!(
            "<svg xmlns='http://www.w3.org/2000/svg' viewBox='{} {} {} {}'>{body}</svg>",
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height()
        )
    }
}
