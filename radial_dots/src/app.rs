// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editable application state.

use alloc::string::String;
use alloc::vec;

use crate::diagram::Diagram;
use crate::style::{ArcStyle, Dot, DrawingStyle};
use crate::svg::SvgDrawable as _;
use crate::text_path::TextPath;
use crate::view;

/// Identifier of the editor for the default `1` dot.
pub const ONE_DOT_ID: &str = "default-one";
/// Identifier of the editor for the default `0` dot.
pub const ZERO_DOT_ID: &str = "default-zero";
/// Identifier of the editor for the default arc.
pub const ARC_ID: &str = "default-arc";

/// Everything the editor shows: the style and the diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct DotsApp {
    /// Colours and default dot/arc styles.
    pub style: DrawingStyle,
    /// The diagram being edited.
    pub diagram: Diagram,
}

impl Default for DotsApp {
    fn default() -> Self {
        Self {
            style: DrawingStyle::default(),
            diagram: Diagram {
                padding: 5.0,
                paths: vec![
                    TextPath::new("he"),
                    TextPath::new("ll"),
                    TextPath::new("o"),
                ],
            },
        }
    }
}

impl DotsApp {
    /// Sets one field of a default style.
    ///
    /// `element_id` is one of [`ONE_DOT_ID`], [`ZERO_DOT_ID`], or [`ARC_ID`].
    /// Dots accept `circle_radius`, `ring_radius`, and `ring_stroke_width`;
    /// the arc accepts `radius`, `arc_percentage`, and
    /// `arc_offset_percentage`.
    ///
    /// Returns `false` without touching the state if the id or field is
    /// unknown, if `value` is not finite, or if it is out of range (negative
    /// sizes, arc coverage outside `0.0..=1.0`). Otherwise returns whether
    /// the stored value changed.
    pub fn update_default(&mut self, element_id: &str, field: &str, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match element_id {
            ONE_DOT_ID => update_dot(&mut self.style.default_one_dot, field, value),
            ZERO_DOT_ID => update_dot(&mut self.style.default_zero_dot, field, value),
            ARC_ID => update_arc(&mut self.style.default_arc, field, value),
            _ => false,
        }
    }

    /// Returns the standalone SVG of the diagram.
    #[must_use]
    pub fn render_diagram(&self) -> String {
        self.diagram.to_svg(&self.style)
    }

    /// Returns the markup of the whole editor.
    #[must_use]
    pub fn render_html(&self) -> String {
        view::render_app(self)
    }
}

fn update_dot(dot: &mut Dot, field: &str, value: f64) -> bool {
    if value < 0.0 {
        return false;
    }
    match field {
        "circle_radius" => replace(&mut dot.circle_radius, value),
        "ring_radius" => replace(&mut dot.ring_radius, value),
        "ring_stroke_width" => replace(&mut dot.ring_stroke_width, value),
        _ => false,
    }
}

fn update_arc(arc: &mut ArcStyle, field: &str, value: f64) -> bool {
    match field {
        "radius" if value >= 0.0 => replace(&mut arc.radius, value),
        "arc_percentage" if (0.0..=1.0).contains(&value) => replace(&mut arc.arc_percentage, value),
        "arc_offset_percentage" => replace(&mut arc.arc_offset_percentage, value),
        _ => false,
    }
}

/// Stores `value` in `slot`, returning whether it differed.
fn replace(slot: &mut f64, value: f64) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
