// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot, arc, and colour styles.

use alloc::string::{String, ToString as _};

/// Appearance of a single dot: a filled circle inside a stroked ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Radius of the filled inner circle.
    pub circle_radius: f64,
    /// Radius of the ring.
    pub ring_radius: f64,
    /// Stroke width of the ring.
    pub ring_stroke_width: f64,
}

impl Dot {
    /// Radius of the smallest circle around the origin containing the dot.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        let ring = self.ring_radius + self.ring_stroke_width / 2.0;
        self.circle_radius.max(ring)
    }
}

/// Placement of dots along a circular arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcStyle {
    /// Radius of the arc.
    pub radius: f64,
    /// Fraction of a full turn covered by the arc (0.0–1.0).
    pub arc_percentage: f64,
    /// Starting angle as a fraction of a full turn.
    pub arc_offset_percentage: f64,
}

/// Diagram-wide style and the defaults paths fall back to.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawingStyle {
    /// Colour used for dots and rings.
    pub stroke_color: String,
    /// Fill of the diagram background.
    pub background_color: String,
    /// Dot drawn for `0` bits unless a path overrides it.
    pub default_zero_dot: Dot,
    /// Dot drawn for `1` bits unless a path overrides it.
    pub default_one_dot: Dot,
    /// Arc used unless a path overrides it.
    pub default_arc: ArcStyle,
}

impl Default for DrawingStyle {
    fn default() -> Self {
        Self {
            stroke_color: "#333333".to_string(),
            background_color: "#EEEEEE".to_string(),
            default_zero_dot: Dot {
                circle_radius: 1.0,
                ring_radius: 2.0,
                ring_stroke_width: 0.1,
            },
            default_one_dot: Dot {
                circle_radius: 0.5,
                ring_radius: 2.0,
                ring_stroke_width: 0.0,
            },
            default_arc: ArcStyle {
                radius: 5.0,
                arc_percentage: 1.0,
                arc_offset_percentage: 0.0,
            },
        }
    }
}
