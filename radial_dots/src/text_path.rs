// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One line of text drawn as dots around an arc.

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::Vec2;

use crate::bits::text_to_bits;
use crate::style::{ArcStyle, Dot, DrawingStyle};
use crate::svg::{SvgDrawable, translate};

/// A line of text with optional per-path style overrides.
///
/// Any style left as `None` falls back to the default in [`DrawingStyle`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextPath {
    /// The encoded text (ASCII only; anything else draws nothing).
    pub text: String,
    /// Override for `0` bits.
    pub zero_dot: Option<Dot>,
    /// Override for `1` bits.
    pub one_dot: Option<Dot>,
    /// Override for the arc.
    pub arc: Option<ArcStyle>,
}

impl TextPath {
    /// Creates a path that uses the default styles.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            zero_dot: None,
            one_dot: None,
            arc: None,
        }
    }

    /// Returns the arc in effect for this path.
    #[must_use]
    pub fn arc_style<'a>(&'a self, style: &'a DrawingStyle) -> &'a ArcStyle {
        self.arc.as_ref().unwrap_or(&style.default_arc)
    }

    /// Returns the `0` dot in effect for this path.
    #[must_use]
    pub fn zero_dot_style<'a>(&'a self, style: &'a DrawingStyle) -> &'a Dot {
        self.zero_dot.as_ref().unwrap_or(&style.default_zero_dot)
    }

    /// Returns the `1` dot in effect for this path.
    #[must_use]
    pub fn one_dot_style<'a>(&'a self, style: &'a DrawingStyle) -> &'a Dot {
        self.one_dot.as_ref().unwrap_or(&style.default_one_dot)
    }

    /// Radius of the circle around the origin containing the whole path.
    #[must_use]
    pub fn bounding_radius(&self, style: &DrawingStyle) -> f64 {
        let dots = self
            .one_dot_style(style)
            .bounding_radius()
            .max(self.zero_dot_style(style).bounding_radius());
        self.arc_style(style).radius + dots / 2.0
    }

    /// Returns the centre of every dot, in bit order.
    ///
    /// Dot `i` of `n` sits at angle `offset + (i + 1) / n * sweep`, so the
    /// last dot closes the arc.
    #[must_use]
    pub fn dot_positions(&self, style: &DrawingStyle) -> Vec<(bool, Vec2)> {
        let Some(bits) = text_to_bits(&self.text) else {
            return Vec::new();
        };
        let arc = self.arc_style(style);
        let start = arc.arc_offset_percentage * TAU;
        let sweep = arc.arc_percentage * TAU;
        let count = bits.len() as f64;

        bits.into_iter()
            .enumerate()
            .map(|(i, bit)| {
                let angle = start + (i + 1) as f64 / count * sweep;
                let offset = Vec2::new(
                    arc.radius * libm::cos(angle),
                    arc.radius * libm::sin(angle),
                );
                (bit, offset)
            })
            .collect()
    }
}

impl SvgDrawable for TextPath {
    fn to_svg(&self, style: &DrawingStyle) -> String {
        let zero = self.zero_dot_style(style).to_svg(style);
        let one = self.one_dot_style(style).to_svg(style);

        let mut out = String::new();
        for (bit, offset) in self.dot_positions(style) {
            let dot = if bit { &one } else { &zero };
            out.push_str(&translate(dot, offset));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn overrides_take_precedence() {
        let style = DrawingStyle::default();
        let mut path = TextPath::new("a");
        assert_eq!(path.arc_style(&style), &style.default_arc);

        let arc = ArcStyle {
            radius: 9.0,
            arc_percentage: 0.5,
            arc_offset_percentage: 0.25,
        };
        path.arc = Some(arc);
        assert_eq!(path.arc_style(&style), &arc);
        assert_eq!(path.zero_dot_style(&style), &style.default_zero_dot);
    }

    #[test]
    fn bounding_radius_adds_half_the_largest_dot() {
        let style = DrawingStyle::default();
        // arc 5.0, zero dot bounds 2.05, one dot bounds 2.0
        assert!(close(
            TextPath::new("x").bounding_radius(&style),
            5.0 + 2.05 / 2.0
        ));
    }

    #[test]
    fn full_arc_ends_where_it_starts() {
        let style = DrawingStyle::default();
        let positions = TextPath::new("a").dot_positions(&style);
        assert_eq!(positions.len(), 8);

        let (bit, last) = positions[7];
        assert!(!bit, "top bit of 'a' is zero");
        assert!(close(last.x, 5.0) && close(last.y, 0.0), "got {last:?}");

        let (_, quarter) = positions[1];
        assert!(close(quarter.x, 0.0) && close(quarter.y, 5.0), "got {quarter:?}");
    }

    #[test]
    fn svg_has_one_group_per_bit() {
        let style = DrawingStyle::default();
        let svg = TextPath::new("he").to_svg(&style);
        assert_eq!(svg.matches("<g transform").count(), 16);
    }

    #[test]
    fn non_ascii_or_empty_text_draws_nothing() {
        let style = DrawingStyle::default();
        assert!(TextPath::new("").to_svg(&style).is_empty());
        assert!(TextPath::new("\u{e9}").to_svg(&style).is_empty());
    }
}
