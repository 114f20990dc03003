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

//! Angle mapping. A minute-of-day maps to a dial angle with one full turn per
//! 24 hours, offset so the configured top reference carries 00:00. Tasks
//! whose end boundary is numerically at or before their start wrap through
//! midnight and are split here into two angular segments; the split is never
//! silently truncated.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::{
    time::{TimeOfDay, MINUTES_PER_DAY},
    types::display_list::ArcFlags,
};

/// Default top-reference offset: 00:00 at the top of a y-down canvas.
pub const DEFAULT_TOP_OFFSET: f32 = -FRAC_PI_2;

/// Map a minute-of-day to a dial angle in radians. Accepts fractional minutes
/// and values past 1440 (one turn past the reference), so segment endpoints
/// at exactly 24:00 map to `top_offset + TAU`. Output is unreduced; callers
/// comparing angles across turns must reduce modulo `TAU` themselves.
#[inline]
pub fn minute_to_angle(minute: f32, top_offset: f32) -> f32 {
    (minute / MINUTES_PER_DAY as f32) * TAU + top_offset
}

/// Inverse of [minute_to_angle]. Returns fractional minutes, unreduced.
#[inline]
pub fn angle_to_minute(angle: f32, top_offset: f32) -> f32 {
    ((angle - top_offset) / TAU) * MINUTES_PER_DAY as f32
}

/// Policy for tasks whose start and end boundaries are equal. The historical
/// behavior of the wraparound formula expands such a task to a full 24-hour
/// turn; callers that intend a literal zero-length task to be invisible can
/// select [ZeroDurationPolicy::Hide] instead.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ZeroDurationPolicy {
    /// Treat `start == end` as a full 24-hour span (default).
    #[default]
    FullCircle,
    /// Drop zero-duration tasks from the display list.
    Hide,
}

/// An [ArcSegment] is a task's angular range on the dial - the intermediate
/// form between time normalization and path construction. One task produces
/// one segment, or two when it wraps past midnight. The invariant
/// `end_angle >= start_angle` holds for every segment.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    /// Index of the originating task in the input slice.
    pub task_index: usize,
    /// Task id, copied for deterministic draw-order tiebreaking.
    pub task_id: String,
    /// First minute covered by the segment.
    pub start_minute: u16,
    /// One-past-the-last minute covered; may be exactly 1440 for a segment
    /// ending at midnight.
    pub end_minute: u16,
    pub start_angle: f32,
    pub end_angle: f32,
    pub flags: ArcFlags,
}

impl ArcSegment {
    fn new(
        task_index: usize,
        task_id: &str,
        start_minute: u16,
        end_minute: u16,
        top_offset: f32,
        flags: ArcFlags,
    ) -> ArcSegment {
        ArcSegment {
            task_index,
            task_id: task_id.to_string(),
            start_minute,
            end_minute,
            start_angle: minute_to_angle(start_minute as f32, top_offset),
            end_angle: minute_to_angle(end_minute as f32, top_offset),
            flags,
        }
    }

    /// Angular span in radians.
    #[inline]
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }
}

/// Split a task's time range into angular segments.
///
/// - `end > start`: one segment covering `[start, end]`.
/// - `end < start`: the task wraps through 24:00 and is split into
///   `[start, 1440)` and `[0, end]`, both flagged [ArcFlags::WRAPPED].
/// - `end == start`: per `policy`, either the full-circle wrap split or no
///   segments at all.
///
/// Returns zero, one, or two segments; never drops a nonzero span.
pub fn segment_task(
    task_index: usize,
    task_id: &str,
    start: TimeOfDay,
    end: TimeOfDay,
    top_offset: f32,
    policy: ZeroDurationPolicy,
) -> Vec<ArcSegment> {
    let s = start.minutes();
    let e = end.minutes();

    if e > s {
        return vec![ArcSegment::new(task_index, task_id, s, e, top_offset, ArcFlags::NONE)];
    }

    let mut flags = ArcFlags::WRAPPED;
    if e == s {
        match policy {
            ZeroDurationPolicy::Hide => {
                log::debug!("segment_task(): hiding zero-duration task {}", task_id);
                return Vec::new();
            }
            ZeroDurationPolicy::FullCircle => flags |= ArcFlags::ZERO_DURATION,
        }
    }

    let mut segments = Vec::with_capacity(2);
    segments.push(ArcSegment::new(
        task_index,
        task_id,
        s,
        MINUTES_PER_DAY,
        top_offset,
        flags,
    ));
    // The post-midnight half is empty when the task ends exactly at 00:00.
    if e > 0 {
        segments.push(ArcSegment::new(
            task_index,
            task_id,
            0,
            e,
            top_offset,
            flags | ArcFlags::WRAP_CONTINUATION,
        ));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn tod(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn top_reference_is_midnight() {
        assert!((minute_to_angle(0.0, DEFAULT_TOP_OFFSET) - DEFAULT_TOP_OFFSET).abs() < EPS);
        // 06:00 is a quarter turn clockwise from the top: 3 o'clock, angle 0.
        assert!(minute_to_angle(360.0, DEFAULT_TOP_OFFSET).abs() < EPS);
        // 12:00 is the bottom of the dial.
        assert!((minute_to_angle(720.0, DEFAULT_TOP_OFFSET) - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn forward_task_is_a_single_segment() {
        let segs = segment_task(
            0,
            "a",
            tod("09:00"),
            tod("10:30"),
            DEFAULT_TOP_OFFSET,
            ZeroDurationPolicy::default(),
        );
        assert_eq!(segs.len(), 1);
        assert_eq!((segs[0].start_minute, segs[0].end_minute), (540, 630));
        assert!((segs[0].span() - (90.0 / 1440.0) * TAU).abs() < EPS);
        assert_eq!(segs[0].flags, ArcFlags::NONE);
    }

    #[test]
    fn midnight_wrap_splits_into_two_segments() {
        let segs = segment_task(
            0,
            "a",
            tod("23:00"),
            tod("01:00"),
            DEFAULT_TOP_OFFSET,
            ZeroDurationPolicy::default(),
        );
        assert_eq!(segs.len(), 2);
        assert_eq!((segs[0].start_minute, segs[0].end_minute), (1380, 1440));
        assert_eq!((segs[1].start_minute, segs[1].end_minute), (0, 60));
        assert!(segs.iter().all(|s| s.flags.contains(ArcFlags::WRAPPED)));
        assert!(segs[1].flags.contains(ArcFlags::WRAP_CONTINUATION));
        // Two hours of dial angle in total.
        let total: f32 = segs.iter().map(|s| s.span()).sum();
        assert!((total - PI / 6.0).abs() < EPS);
    }

    #[test]
    fn wrap_ending_at_midnight_has_no_continuation() {
        let segs = segment_task(
            0,
            "a",
            tod("22:00"),
            tod("00:00"),
            DEFAULT_TOP_OFFSET,
            ZeroDurationPolicy::default(),
        );
        assert_eq!(segs.len(), 1);
        assert_eq!((segs[0].start_minute, segs[0].end_minute), (1320, 1440));
    }

    #[test]
    fn zero_duration_expands_to_full_turn() {
        let segs = segment_task(
            0,
            "a",
            tod("10:00"),
            tod("10:00"),
            DEFAULT_TOP_OFFSET,
            ZeroDurationPolicy::FullCircle,
        );
        let total: f32 = segs.iter().map(|s| s.span()).sum();
        assert!((total - TAU).abs() < EPS);
        assert!(segs.iter().all(|s| s.flags.contains(ArcFlags::ZERO_DURATION)));
    }

    #[test]
    fn zero_duration_hidden_when_policy_selected() {
        let segs = segment_task(
            0,
            "a",
            tod("10:00"),
            tod("10:00"),
            DEFAULT_TOP_OFFSET,
            ZeroDurationPolicy::Hide,
        );
        assert!(segs.is_empty());
    }
}
