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

//! The output side of a render pass: a [DialDisplayList] of task arcs, hour
//! markers, and dial chrome, ready to be handed to a rendering surface. All
//! entries are derived data owned by the pass that produced them; titles and
//! colors are copied from the input tasks, never referenced.

use crate::types::{color::Color, path::PathCommand, point::Circle, point::Point2d};

use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct ArcFlags: u32 {
        // No flags set
        const NONE = 0b0000_0000;
        // This arc belongs to a task that crosses midnight
        const WRAPPED = 0b0000_0001;
        // This arc is the post-midnight half of a wrapped task
        const WRAP_CONTINUATION = 0b0000_0010;
        // This arc came from a zero-duration task expanded to a full turn
        const ZERO_DURATION = 0b0000_0100;
        // This arc's span was widened to the minimum-visible threshold
        const MIN_SPAN = 0b0000_1000;
    }
}

/// A [TaskArc] is the drawable geometry for one task segment: a closed
/// annular-sector path plus the fill color and identity copied from the task.
/// A task that wraps past midnight produces two of these, sharing the same
/// `task_id` and `title`.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskArc {
    pub task_id: String,
    pub title: String,
    pub path: Vec<PathCommand>,
    pub fill: Color,
    /// Dial angle at which the arc begins, in radians (unreduced).
    pub start_angle: f32,
    /// Dial angle at which the arc ends. Always `>= start_angle`.
    pub end_angle: f32,
    pub flags: ArcFlags,
}

impl TaskArc {
    /// Angular span of the arc in radians.
    #[inline]
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }
}

/// An [HourMarker] is a fixed label position on the dial. For the default
/// 24-marker configuration, `hour` runs 0..23.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct HourMarker {
    pub hour: u32,
    pub position: Point2d<f32>,
    pub label: String,
}

/// Background geometry for the dial: the outer surface disc and the inner
/// hole. Carried in the display list so a renderer can paint the dial
/// background without re-deriving the configured radii.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DialChrome {
    pub outer: Circle,
    pub inner: Circle,
}

/// A [DialDisplayList] is the complete output of one layout pass: task arcs
/// in draw order (earlier entries painted first), hour markers, and chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct DialDisplayList {
    pub arcs: Vec<TaskArc>,
    pub markers: Vec<HourMarker>,
    pub chrome: DialChrome,
}

impl DialDisplayList {
    /// Total number of drawable arc entries.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Iterate the task arcs in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaskArc> {
        self.arcs.iter()
    }

    /// Return all arcs belonging to the given task id, in draw order.
    pub fn arcs_for_task<'a>(&'a self, task_id: &'a str) -> impl Iterator<Item = &'a TaskArc> {
        self.arcs.iter().filter(move |a| a.task_id == task_id)
    }
}
