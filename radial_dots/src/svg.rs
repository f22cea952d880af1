// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG fragment helpers.

use alloc::format;
use alloc::string::String;

use kurbo::{Rect, Vec2};

use crate::style::{Dot, DrawingStyle};

/// Something that can be drawn as an SVG fragment.
pub trait SvgDrawable {
    /// Returns the SVG markup for `self`, centred on the origin.
    fn to_svg(&self, style: &DrawingStyle) -> String;
}

/// Wraps `content` in a group translated by `offset`.
#[must_use]
pub fn translate(content: &str, offset: Vec2) -> String {
    format!(
        "<g transform=\"translate({}, {})\">{content}</g>",
        offset.x, offset.y
    )
}

/// Returns a filled `<rect>` covering `rect`.
#[must_use]
pub fn rect(rect: Rect, fill: &str) -> String {
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\"/>",
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    )
}

impl SvgDrawable for Dot {
    fn to_svg(&self, style: &DrawingStyle) -> String {
        format!(
            concat!(
                "<circle r=\"{circle}\" fill=\"{stroke}\" />",
                "<circle r=\"{ring}\" fill=\"transparent\" ",
                "stroke=\"{stroke}\" stroke-width=\"{width}\" />",
            ),
            circle = self.circle_radius,
            ring = self.ring_radius,
            width = self.ring_stroke_width,
            stroke = style.stroke_color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_wraps_in_group() {
        assert_eq!(
            translate("<x/>", Vec2::new(1.5, -2.0)),
            "<g transform=\"translate(1.5, -2)\"><x/></g>"
        );
    }

    #[test]
    fn rect_uses_origin_and_size() {
        assert_eq!(
            rect(Rect::new(0.0, 0.0, 4.0, 3.0), "#EEEEEE"),
            "<rect x=\"0\" y=\"0\" width=\"4\" height=\"3\" fill=\"#EEEEEE\"/>"
        );
    }

    #[test]
    fn dot_draws_circle_and_ring() {
        let style = DrawingStyle::default();
        let svg = style.default_zero_dot.to_svg(&style);
        assert_eq!(
            svg,
            "<circle r=\"1\" fill=\"#333333\" />\
             <circle r=\"2\" fill=\"transparent\" stroke=\"#333333\" stroke-width=\"0.1\" />"
        );
    }
}
