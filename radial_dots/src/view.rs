// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor markup.
//!
//! The page is split in two: the rendered diagram on one side and a control
//! bar on the other. Every numeric control carries a `data_dot_id` attribute
//! naming the style it edits and a `name` attribute naming the field, which is
//! what the input dispatcher reads back when the user drags a slider.
//!
//! ```text
//! div.app-split
//! ├── div#dots-renderer        (replaced on every re-render)
//! └── div.control-bar
//!     ├── textarea.ring-text-area
//!     └── div.style-editor     (dot, arc, and colour editors)
//! ```

use alloc::string::String;
use core::fmt::Write as _;

use crate::app::{ARC_ID, DotsApp, ONE_DOT_ID, ZERO_DOT_ID};
use crate::style::{ArcStyle, Dot};

/// `id` of the element holding the diagram SVG.
pub const RENDERER_ID: &str = "dots-renderer";

/// Attribute naming the style a control edits.
pub const ID_ATTRIBUTE: &str = "data_dot_id";

/// Attribute naming the field a control edits.
pub const FIELD_ATTRIBUTE: &str = "name";

/// Every numeric field the editor shows, as `(style id, field, value)`.
///
/// Each of them is drawn as a slider and a number box.
#[must_use]
pub fn numeric_fields(app: &DotsApp) -> [(&'static str, &'static str, f64); 9] {
    let style = &app.style;
    let (one, zero, arc) = (
        &style.default_one_dot,
        &style.default_zero_dot,
        &style.default_arc,
    );
    [
        (ONE_DOT_ID, "circle_radius", one.circle_radius),
        (ONE_DOT_ID, "ring_radius", one.ring_radius),
        (ONE_DOT_ID, "ring_stroke_width", one.ring_stroke_width),
        (ZERO_DOT_ID, "circle_radius", zero.circle_radius),
        (ZERO_DOT_ID, "ring_radius", zero.ring_radius),
        (ZERO_DOT_ID, "ring_stroke_width", zero.ring_stroke_width),
        (ARC_ID, "radius", arc.radius),
        (ARC_ID, "arc_percentage", arc.arc_percentage),
        (ARC_ID, "arc_offset_percentage", arc.arc_offset_percentage),
    ]
}

/// Range and step shared by every numeric control.
#[derive(Clone, Copy)]
struct Slider {
    min: f64,
    max: f64,
    step: f64,
}

const SIZE: Slider = Slider {
    min: 0.0,
    max: 10.0,
    step: 0.1,
};

const RADIUS: Slider = Slider {
    min: 0.0,
    max: 50.0,
    step: 0.5,
};

const FRACTION: Slider = Slider {
    min: 0.0,
    max: 1.0,
    step: 0.01,
};

/// Renders the whole editor for `app`.
#[must_use]
pub fn render_app(app: &DotsApp) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"app-split\">");
    let _ = write!(
        out,
        "<div id=\"{RENDERER_ID}\" class=\"dots-renderer\">{}</div>",
        app.render_diagram()
    );
    render_controls(&mut out, app);
    out.push_str("</div>");
    out
}

fn render_controls(out: &mut String, app: &DotsApp) {
    out.push_str("<div class=\"control-bar\">");
    out.push_str("<textarea class=\"ring-text-area\">");
    escape_into(out, &app.diagram.text());
    out.push_str("</textarea>");
    out.push_str("<hr class=\"controls-divider\" />");

    let style = &app.style;
    out.push_str("<div class=\"style-editor\">");
    subheader(out, "Default One Dot");
    dot_editor(out, ONE_DOT_ID, &style.default_one_dot);
    subheader(out, "Default Zero Dot");
    dot_editor(out, ZERO_DOT_ID, &style.default_zero_dot);
    subheader(out, "Arc");
    arc_editor(out, ARC_ID, &style.default_arc);
    color_editor(out, "Stroke Color", "color-stroke", &style.stroke_color);
    color_editor(out, "Background Color", "color-background", &style.background_color);
    out.push_str("</div>");

    out.push_str("<hr class=\"controls-divider\" />");
    out.push_str("</div>");
}

fn subheader(out: &mut String, title: &str) {
    out.push_str("<h3 class=\"style-editor-subheader\">");
    escape_into(out, title);
    out.push_str("</h3>");
}

fn dot_editor(out: &mut String, dot_id: &str, dot: &Dot) {
    out.push_str("<form class=\"dot-editor\">");
    number_field(out, dot_id, "Circle Radius", "circle_radius", dot.circle_radius, SIZE);
    number_field(out, dot_id, "Ring Radius", "ring_radius", dot.ring_radius, SIZE);
    number_field(
        out,
        dot_id,
        "Ring Stroke Width",
        "ring_stroke_width",
        dot.ring_stroke_width,
        SIZE,
    );
    out.push_str("</form>");
}

fn arc_editor(out: &mut String, arc_id: &str, arc: &ArcStyle) {
    out.push_str("<form class=\"arc-editor\">");
    number_field(out, arc_id, "Radius", "radius", arc.radius, RADIUS);
    number_field(
        out,
        arc_id,
        "Arc Coverage",
        "arc_percentage",
        arc.arc_percentage,
        FRACTION,
    );
    number_field(
        out,
        arc_id,
        "Arc Offset",
        "arc_offset_percentage",
        arc.arc_offset_percentage,
        FRACTION,
    );
    out.push_str("</form>");
}

/// A labelled slider paired with a number box editing the same field.
fn number_field(out: &mut String, id: &str, label: &str, field: &str, value: f64, s: Slider) {
    let _ = write!(out, "<label>{label}</label>");
    for kind in ["range", "number"] {
        let _ = write!(
            out,
            "<input {ID_ATTRIBUTE}=\"{id}\" {FIELD_ATTRIBUTE}=\"{field}\" type=\"{kind}\" \
             step=\"{}\" min=\"{}\" max=\"{}\" value=\"{value}\" />",
            s.step, s.min, s.max
        );
    }
}

fn color_editor(out: &mut String, label: &str, color_id: &str, value: &str) {
    let _ = write!(
        out,
        "<form class=\"color-editor\"><label>{label}</label>\
         <input {ID_ATTRIBUTE}=\"{color_id}\" {FIELD_ATTRIBUTE}=\"{color_id}\" type=\"color\" value=\""
    );
    escape_into(out, value);
    out.push_str("\" /></form>");
}

/// Appends `text` with the HTML special characters escaped.
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
