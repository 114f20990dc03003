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

//! # Sectograph
//! `sectograph` converts a list of time-ranged tasks into the radial geometry
//! of a 24-hour "day clock" - the Sectograph. Each task becomes an annular
//! sector (a donut slice) on the dial, and the 24 hours become fixed label
//! positions around it.
//!
//! The general principle is that the day is rendered on a circle where the
//! top of the dial corresponds to 00:00 and the angle increases clockwise,
//! one full turn per 24 hours. The top reference is a configurable offset,
//! not a constant baked into the mapping formula.
//!
//! The crate is a pure layout engine: it never draws. [layout_tasks] produces
//! a [DialDisplayList] of declarative path commands, fill colors, and label
//! positions, which a rendering surface (SVG, canvas, GPU) consumes. The
//! `sectograph_svg` helper crate provides an SVG backend for display lists.
//!
//! ## Pipeline stages
//! - `time` normalizes `"HH:MM"` boundaries to minute-of-day values.
//! - `dial` maps minutes to dial angles and splits tasks that wrap past
//!   midnight into two segments.
//! - `order` resolves a deterministic draw order for overlapping arcs.
//! - `arc` builds closed annular-sector paths with rounded corners.
//! - `markers` generates (and memoizes) the hour label positions.
//! - `layout` assembles the stages into a single render pass.
//!
//! Every render pass is an independent, synchronous computation. The only
//! shareable state is the read-safe [MarkerCache], which is immutable per key
//! once populated.

pub mod arc;
pub mod dial;
pub mod layout;
pub mod markers;
pub mod order;
pub mod prelude;
pub mod task;
pub mod time;
pub mod types;

use thiserror::Error;

pub use crate::{
    layout::{layout_tasks, layout_tasks_cached, SectographParams, TimeErrorPolicy, ZeroDurationPolicy},
    markers::MarkerCache,
    task::{Task, TimeSpec},
    time::{TimeFormatError, TimeOfDay, MINUTES_PER_DAY},
    types::{color::Color, display_list::DialDisplayList},
};

/// Errors that abort an entire render pass. Unlike [TimeFormatError], which is
/// a per-task data error, these indicate a broken caller configuration (or an
/// explicitly strict error policy) and are surfaced immediately.
#[derive(Debug, Error)]
pub enum SectographError {
    #[error("Invalid dial geometry: {0}")]
    InvalidGeometry(String),
    #[error("Invalid time for task {task_id}: {source}")]
    InvalidTime {
        task_id: String,
        #[source]
        source: TimeFormatError,
    },
    #[error("Task list exceeds the configured maximum of {0} tasks")]
    TooManyTasks(usize),
}
