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

//! # sectograph_svg
//! An SVG backend for `sectograph` display lists. The core crate emits
//! declarative path commands; this crate turns a [DialDisplayList] into an
//! `svg::Document` - dial chrome first, then task arcs in draw order, then
//! hour labels on top.

mod render_elements;

pub use render_elements::{color_to_value, path_data};

use sectograph::prelude::*;
use svg::{node::element::Group, Document};

use crate::render_elements::{render_chrome_circle, render_marker, render_task_arc};

/// Fill/stroke styling for a chrome ring, in the spirit of an SVG
/// presentation attribute set.
#[derive(Copy, Clone, Debug)]
pub struct RingStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
}

impl Default for RingStyle {
    fn default() -> RingStyle {
        RingStyle {
            fill: Color::TRANSPARENT,
            stroke: Color::TRANSPARENT,
            stroke_width: 0.0,
        }
    }
}

/// Styling for hour-marker labels.
#[derive(Clone, Debug)]
pub struct LabelStyle {
    pub color: Color,
    pub font_size: f32,
    pub font_weight: String,
}

impl Default for LabelStyle {
    fn default() -> LabelStyle {
        LabelStyle {
            color: Color::from_rgb8(0x9e, 0x9e, 0x9e),
            font_size: 10.0,
            font_weight: "bold".to_string(),
        }
    }
}

/// Builder-style renderer from a [DialDisplayList] to an SVG document.
///
/// ```no_run
/// use sectograph::prelude::*;
/// use sectograph_svg::SvgRenderer;
///
/// let tasks = vec![Task::new("standup", "Standup", "09:00", "09:15", Color::from_rgb8(0x4c, 0xaf, 0x50))];
/// let list = layout_tasks(&tasks, &SectographParams::default()).unwrap();
/// let document = SvgRenderer::new().render(&list);
/// svg::save("dial.svg", &document).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    /// View box as (min-x, min-y, width, height). If `None`, a square view
    /// box tightly enclosing the dial chrome is derived from the list.
    view_box: Option<(f32, f32, f32, f32)>,
    /// Document background. `None` leaves the background transparent.
    background: Option<Color>,
    /// Opacity applied to task arc fills.
    arc_opacity: f32,
    surface_style: RingStyle,
    hole_style: RingStyle,
    label_style: LabelStyle,
    render_chrome: bool,
    render_labels: bool,
}

impl Default for SvgRenderer {
    fn default() -> SvgRenderer {
        SvgRenderer {
            view_box: None,
            background: None,
            // The dial traditionally paints arcs at 80% opacity so
            // overlapping tasks remain distinguishable.
            arc_opacity: 0.8,
            surface_style: RingStyle {
                fill: Color::from_rgb8(0x21, 0x21, 0x21),
                stroke: Color::from_rgb8(0x42, 0x42, 0x42),
                stroke_width: 0.0025,
            },
            hole_style: RingStyle {
                fill: Color::from_rgb8(0x12, 0x12, 0x12),
                ..RingStyle::default()
            },
            label_style: LabelStyle::default(),
            render_chrome: true,
            render_labels: true,
        }
    }
}

impl SvgRenderer {
    pub fn new() -> SvgRenderer {
        SvgRenderer::default()
    }

    pub fn with_view_box(mut self, min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        self.view_box = Some((min_x, min_y, width, height));
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_arc_opacity(mut self, opacity: f32) -> Self {
        self.arc_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_surface_style(mut self, style: RingStyle) -> Self {
        self.surface_style = style;
        self
    }

    pub fn with_hole_style(mut self, style: RingStyle) -> Self {
        self.hole_style = style;
        self
    }

    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn with_chrome(mut self, state: bool) -> Self {
        self.render_chrome = state;
        self
    }

    pub fn with_labels(mut self, state: bool) -> Self {
        self.render_labels = state;
        self
    }

    /// Render a display list to a complete SVG document.
    pub fn render(&self, list: &DialDisplayList) -> Document {
        let (min_x, min_y, width, height) = self.view_box.unwrap_or_else(|| {
            let c = list.chrome.outer.center;
            let r = list.chrome.outer.radius;
            (c.x - r, c.y - r, 2.0 * r, 2.0 * r)
        });

        let mut document = Document::new().set("viewBox", (min_x, min_y, width, height));

        if let Some(bg) = self.background {
            let rect = svg::node::element::Rectangle::new()
                .set("x", min_x)
                .set("y", min_y)
                .set("width", width)
                .set("height", height)
                .set("fill", color_to_value(bg));
            document = document.add(rect);
        }

        if self.render_chrome {
            let mut chrome = Group::new().set("class", "chrome");
            chrome = chrome.add(render_chrome_circle(&list.chrome.outer, &self.surface_style));
            chrome = chrome.add(render_chrome_circle(&list.chrome.inner, &self.hole_style));
            document = document.add(chrome);
        }

        let mut arcs = Group::new().set("class", "tasks");
        for arc in list.iter() {
            arcs = arcs.add(render_task_arc(arc, self.arc_opacity));
        }
        document = document.add(arcs);

        if self.render_labels {
            log::trace!("render(): emitting {} hour labels", list.markers.len());
            let mut labels = Group::new().set("class", "hours");
            for marker in &list.markers {
                labels = labels.add(render_marker(marker, &self.label_style));
            }
            document = document.add(labels);
        }

        document
    }
}
