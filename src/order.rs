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

//! Draw-order resolution for overlapping arcs. Arcs whose angular ranges
//! intersect simply paint over one another; what matters is that the order
//! is deterministic and reproducible across callers, never dependent on the
//! insertion order of the input task list.
//!
//! Radial lane assignment for overlapping groups would be the richer
//! treatment; it is deliberately not part of this resolver.

use crate::dial::ArcSegment;

/// Sort segments into paint order: ascending start angle, ties broken by
/// ascending task id, then by ascending end angle (a wrapped task's pre- and
/// post-midnight halves share an id but never a start angle). The later
/// entry in the resulting order paints on top.
pub fn resolve_draw_order(segments: &mut [ArcSegment]) {
    segments.sort_by(|a, b| {
        a.start_angle
            .total_cmp(&b.start_angle)
            .then_with(|| a.task_id.cmp(&b.task_id))
            .then_with(|| a.end_angle.total_cmp(&b.end_angle))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dial::{segment_task, ZeroDurationPolicy, DEFAULT_TOP_OFFSET},
        time::TimeOfDay,
    };

    fn segs(entries: &[(&str, &str, &str)]) -> Vec<ArcSegment> {
        let mut out = Vec::new();
        for (i, (id, start, end)) in entries.iter().enumerate() {
            out.extend(segment_task(
                i,
                id,
                start.parse::<TimeOfDay>().unwrap(),
                end.parse::<TimeOfDay>().unwrap(),
                DEFAULT_TOP_OFFSET,
                ZeroDurationPolicy::default(),
            ));
        }
        out
    }

    #[test]
    fn orders_by_start_angle_then_id() {
        let mut segments = segs(&[
            ("a", "09:00", "10:00"),
            ("b", "09:00", "11:00"),
            ("c", "08:00", "09:30"),
        ]);
        resolve_draw_order(&mut segments);
        let ids: Vec<&str> = segments.iter().map(|s| s.task_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn order_is_independent_of_insertion_order() {
        let mut forward = segs(&[
            ("a", "09:00", "10:00"),
            ("b", "09:00", "11:00"),
            ("c", "08:00", "09:30"),
        ]);
        let mut shuffled = segs(&[
            ("b", "09:00", "11:00"),
            ("c", "08:00", "09:30"),
            ("a", "09:00", "10:00"),
        ]);
        resolve_draw_order(&mut forward);
        resolve_draw_order(&mut shuffled);
        let f: Vec<&str> = forward.iter().map(|s| s.task_id.as_str()).collect();
        let s: Vec<&str> = shuffled.iter().map(|s| s.task_id.as_str()).collect();
        assert_eq!(f, s);
    }

    #[test]
    fn wrapped_continuation_sorts_to_front() {
        // The post-midnight half of a wrapped task starts at 00:00 and draws
        // before everything later in the day.
        let mut segments = segs(&[("night", "23:00", "01:00"), ("lunch", "12:00", "13:00")]);
        resolve_draw_order(&mut segments);
        assert_eq!(segments[0].task_id, "night");
        assert_eq!(segments[0].start_minute, 0);
        assert_eq!(segments[2].task_id, "night");
        assert_eq!(segments[2].start_minute, 1380);
    }
}
