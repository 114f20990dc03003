/*
    Sectograph
    https://github.com/dbalsom/sectograph

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

use sectograph::prelude::*;

use svg::node::{
    element::{path::Data, Circle as SvgCircle, Path, Text},
    Value,
};

use crate::{LabelStyle, RingStyle};

/// Convert a [Color] to an SVG paint value. Fully transparent colors become
/// `none` to prevent rendering; colors with partial alpha become `rgba()`
/// strings and opaque colors become hex.
pub fn color_to_value(color: Color) -> Value {
    if color.a == 0 {
        Value::from("none")
    }
    else if color.a < 255 {
        Value::from(format!(
            "rgba({}, {}, {}, {:.3})",
            color.r,
            color.g,
            color.b,
            color.a as f32 / 255.0
        ))
    }
    else {
        Value::from(format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b))
    }
}

/// Convert a declarative command sequence into SVG path data. Circular arc
/// commands map to elliptical-arc segments with equal radii.
pub fn path_data(commands: &[PathCommand]) -> Data {
    let mut data = Data::new();
    for command in commands {
        data = match command {
            PathCommand::MoveTo(p) => data.move_to((p.x, p.y)),
            PathCommand::LineTo(p) => data.line_to((p.x, p.y)),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                end,
            } => data.elliptical_arc_to((
                *radius,
                *radius,
                0.0,
                if *large_arc { 1.0 } else { 0.0 },
                sweep.flag() as f32,
                end.x,
                end.y,
            )),
            PathCommand::Close => data.close(),
        };
    }
    data
}

/// Render a task arc as a filled SVG path.
pub fn render_task_arc(arc: &TaskArc, opacity: f32) -> Path {
    Path::new()
        .set("d", path_data(&arc.path))
        .set("fill", color_to_value(arc.fill))
        .set("fill-rule", "nonzero")
        .set("opacity", opacity)
        .set("data-task", arc.task_id.clone())
}

/// Render an hour-marker label as a centered SVG text node.
pub fn render_marker(marker: &HourMarker, style: &LabelStyle) -> Text {
    Text::new(marker.label.clone())
        .set("x", marker.position.x)
        .set("y", marker.position.y)
        .set("fill", color_to_value(style.color))
        .set("font-size", style.font_size)
        .set("font-weight", style.font_weight.clone())
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
}

/// Render a chrome ring as an SVG circle.
pub fn render_chrome_circle(circle: &Circle, style: &RingStyle) -> SvgCircle {
    SvgCircle::new()
        .set("cx", circle.center.x)
        .set("cy", circle.center.y)
        .set("r", circle.radius)
        .set("fill", color_to_value(style.fill))
        .set("stroke", color_to_value(style.stroke))
        .set("stroke-width", style.stroke_width)
}
