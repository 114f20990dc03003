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

//! A convenience prelude for the common public surface of the crate.

pub use crate::{
    arc::build_annular_sector,
    dial::{angle_to_minute, minute_to_angle, ArcSegment, ZeroDurationPolicy, DEFAULT_TOP_OFFSET},
    layout::{layout_tasks, layout_tasks_cached, SectographParams, TimeErrorPolicy},
    markers::{generate_markers, MarkerCache},
    order::resolve_draw_order,
    task::{Task, TimeSpec},
    time::{TimeFormatError, TimeOfDay, MINUTES_PER_DAY},
    types::{
        color::Color,
        display_list::{ArcFlags, DialChrome, DialDisplayList, HourMarker, TaskArc},
        path::{PathCommand, Sweep},
        point::{Circle, Point2d},
    },
    SectographError,
};
