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

    tests/common/mod.rs

    Common support routines for tests
*/
#![allow(dead_code)]

use sectograph::prelude::*;

pub const ANGLE_EPSILON: f32 = 1e-5;

pub fn assert_angle_eq(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < ANGLE_EPSILON,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

/// A task with a neutral color, for tests that only care about geometry.
pub fn gray_task(id: &str, start: &str, end: &str) -> Task {
    Task::new(id, id, start, end, Color::from_rgb8(0x80, 0x80, 0x80))
}

/// Layout parameters sized for a 200x200 output, large enough that corner
/// rounding and marker insets stay well away from degenerate clamps.
pub fn test_params() -> SectographParams {
    SectographParams {
        inner_radius: 60.0,
        outer_radius: 95.0,
        corner_radius: 6.0,
        marker_inset: 11.0,
        ..SectographParams::default()
    }
}

/// Sum of the angular spans of every arc belonging to `task_id`.
pub fn total_span(list: &DialDisplayList, task_id: &str) -> f32 {
    list.arcs_for_task(task_id).map(|arc| arc.span()).sum()
}
