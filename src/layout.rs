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

//! Render-pass assembly. [layout_tasks] runs the full pipeline - normalize,
//! map, order, build, mark - as one synchronous pure function from a task
//! list and a [SectographParams] configuration to a [DialDisplayList].
//!
//! Error propagation follows a strict split: configuration problems abort
//! the pass immediately (the caller setup is broken), while per-task data
//! problems are isolated so one bad record cannot blank the whole dial.

use crate::{
    arc::build_annular_sector,
    dial::{segment_task, ArcSegment, DEFAULT_TOP_OFFSET},
    markers::{generate_markers, MarkerCache},
    order::resolve_draw_order,
    task::Task,
    time::TimeOfDay,
    types::{
        display_list::{ArcFlags, DialChrome, DialDisplayList, TaskArc},
        point::{Circle, Point2d},
    },
    SectographError,
};

pub use crate::dial::ZeroDurationPolicy;

/// What to do when a task carries a malformed time boundary.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TimeErrorPolicy {
    /// Skip the offending task with a logged warning; valid tasks still
    /// render (default).
    #[default]
    Skip,
    /// Abort the render pass with [SectographError::InvalidTime].
    Fail,
}

/// Configuration for one dial. Radii and insets are in the caller's output
/// units; the defaults describe a dial normalized to a unit square, matching
/// the proportions of the original hand-tuned layout (outer ring at 95% of
/// the half-width, inner ring at 60% of it).
#[derive(Clone, Debug, PartialEq)]
pub struct SectographParams {
    /// Inner radius of the task ring.
    pub inner_radius: f32,
    /// Outer radius of the task ring. Must exceed `inner_radius`.
    pub outer_radius: f32,
    /// Requested corner rounding for task arcs, clamped per arc.
    pub corner_radius: f32,
    /// Dial angle of the top reference (00:00), in radians.
    pub top_offset: f32,
    /// Offset of the dial center from `(outer_radius, outer_radius)`.
    pub pos_offset: Option<Point2d<f32>>,
    /// Number of hour markers around the dial.
    pub marker_count: u32,
    /// Every n-th marker gets the long `"H:00"` label form.
    pub marker_label_every: u32,
    /// Distance of marker labels inside the inner radius.
    pub marker_inset: f32,
    /// Spans below this many degrees are widened to it, so very short tasks
    /// stay visible instead of silently vanishing at render time.
    pub min_visible_arc_degrees: f32,
    /// Treatment of tasks whose start and end coincide.
    pub zero_duration: ZeroDurationPolicy,
    /// Treatment of tasks with malformed time boundaries.
    pub time_errors: TimeErrorPolicy,
    /// Optional cap on the number of input tasks, as a resource guard; arc
    /// count drives rendering cost directly. `None` means unlimited.
    pub max_tasks: Option<usize>,
}

impl Default for SectographParams {
    fn default() -> Self {
        Self {
            inner_radius: 0.30,
            outer_radius: 0.475,
            corner_radius: 0.033,
            top_offset: DEFAULT_TOP_OFFSET,
            pos_offset: None,
            marker_count: 24,
            marker_label_every: 6,
            marker_inset: 0.055,
            min_visible_arc_degrees: 0.5,
            zero_duration: ZeroDurationPolicy::default(),
            time_errors: TimeErrorPolicy::default(),
            max_tasks: None,
        }
    }
}

impl SectographParams {
    /// Dial center point: `(outer_radius, outer_radius)` plus any position
    /// offset, so the dial fills a square of side `2 * outer_radius`.
    pub fn center(&self) -> Point2d<f32> {
        let offset = self.pos_offset.unwrap_or_default();
        Point2d::new(self.outer_radius + offset.x, self.outer_radius + offset.y)
    }

    /// Front-load every configuration check. These are programmer errors and
    /// fail the pass before any task is touched.
    pub fn validate(&self) -> Result<(), SectographError> {
        if !(self.outer_radius > self.inner_radius) {
            return Err(SectographError::InvalidGeometry(format!(
                "outer_radius ({}) must be greater than inner_radius ({})",
                self.outer_radius, self.inner_radius
            )));
        }
        if self.inner_radius < 0.0 || !self.outer_radius.is_finite() {
            return Err(SectographError::InvalidGeometry(format!(
                "radii must be finite and non-negative (inner {}, outer {})",
                self.inner_radius, self.outer_radius
            )));
        }
        if self.corner_radius < 0.0 || !self.corner_radius.is_finite() {
            return Err(SectographError::InvalidGeometry(format!(
                "corner_radius ({}) must be finite and non-negative",
                self.corner_radius
            )));
        }
        if !self.top_offset.is_finite() {
            return Err(SectographError::InvalidGeometry(format!(
                "top_offset ({}) must be finite",
                self.top_offset
            )));
        }
        if !self.marker_inset.is_finite() {
            return Err(SectographError::InvalidGeometry(format!(
                "marker_inset ({}) must be finite",
                self.marker_inset
            )));
        }
        if self.marker_count == 0 {
            return Err(SectographError::InvalidGeometry(
                "marker_count must be nonzero".to_string(),
            ));
        }
        if self.min_visible_arc_degrees < 0.0 {
            return Err(SectographError::InvalidGeometry(format!(
                "min_visible_arc_degrees ({}) must be non-negative",
                self.min_visible_arc_degrees
            )));
        }
        Ok(())
    }
}

/// Lay out a task list as a dial display list. See the module docs for the
/// stage order; markers are generated fresh each pass. Use
/// [layout_tasks_cached] to memoize markers across passes.
pub fn layout_tasks(tasks: &[Task], p: &SectographParams) -> Result<DialDisplayList, SectographError> {
    layout_inner(tasks, p, None)
}

/// [layout_tasks], but resolving hour markers through the supplied
/// [MarkerCache].
pub fn layout_tasks_cached(
    tasks: &[Task],
    p: &SectographParams,
    cache: &MarkerCache,
) -> Result<DialDisplayList, SectographError> {
    layout_inner(tasks, p, Some(cache))
}

fn layout_inner(
    tasks: &[Task],
    p: &SectographParams,
    cache: Option<&MarkerCache>,
) -> Result<DialDisplayList, SectographError> {
    p.validate()?;

    if let Some(max) = p.max_tasks {
        if tasks.len() > max {
            return Err(SectographError::TooManyTasks(max));
        }
    }

    let center = p.center();

    // Stage 1+2: normalize task boundaries and map them to angular segments.
    let mut segments: Vec<ArcSegment> = Vec::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        let boundaries = task
            .start
            .resolve()
            .and_then(|s| task.end.resolve().map(|e| (s, e)));
        let (start, end): (TimeOfDay, TimeOfDay) = match boundaries {
            Ok(b) => b,
            Err(source) => match p.time_errors {
                TimeErrorPolicy::Skip => {
                    log::warn!("layout_tasks(): skipping task {}: {}", task.id, source);
                    continue;
                }
                TimeErrorPolicy::Fail => {
                    return Err(SectographError::InvalidTime {
                        task_id: task.id.clone(),
                        source,
                    })
                }
            },
        };
        segments.extend(segment_task(
            index,
            &task.id,
            start,
            end,
            p.top_offset,
            p.zero_duration,
        ));
    }

    // Stage 3: deterministic paint order.
    resolve_draw_order(&mut segments);
    log::debug!(
        "layout_tasks(): {} tasks -> {} segments",
        tasks.len(),
        segments.len()
    );

    // Stage 4: path construction.
    let min_span = p.min_visible_arc_degrees.to_radians();
    let mut arcs = Vec::with_capacity(segments.len());
    for seg in &segments {
        let mut flags = seg.flags;
        let (start_angle, mut end_angle) = (seg.start_angle, seg.end_angle);
        if end_angle - start_angle < min_span {
            end_angle = start_angle + min_span;
            flags |= ArcFlags::MIN_SPAN;
        }

        let path = build_annular_sector(
            center,
            start_angle,
            end_angle,
            p.inner_radius,
            p.outer_radius,
            p.corner_radius,
        )?;

        let task = &tasks[seg.task_index];
        arcs.push(TaskArc {
            task_id: task.id.clone(),
            title: task.title.clone(),
            path,
            fill: task.color,
            start_angle,
            end_angle,
            flags,
        });
    }

    // Stage 5: hour markers, sharing the top reference with the arcs.
    let marker_radius = p.inner_radius - p.marker_inset;
    let markers = match cache {
        Some(cache) => cache
            .get_or_generate(p.marker_count, marker_radius, center, p.top_offset, p.marker_label_every)
            .to_vec(),
        None => generate_markers(p.marker_count, marker_radius, center, p.top_offset, p.marker_label_every),
    };

    Ok(DialDisplayList {
        arcs,
        markers,
        chrome: DialChrome {
            outer: Circle::new(center, p.outer_radius),
            inner: Circle::new(center, p.inner_radius),
        },
    })
}
