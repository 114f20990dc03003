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

//! The task input record. Tasks arrive from an external schedule source (a
//! backing store or profile service) with clock-string boundaries; they are
//! immutable inputs to a single layout pass and are never persisted here.

use crate::time::{TimeFormatError, TimeOfDay};
use crate::types::color::Color;

/// A task time boundary as received from the caller: either a raw `"HH:MM"`
/// clock string or an already-resolved minute count. Resolution to a
/// canonical [TimeOfDay] happens inside the layout pass, so a malformed
/// boundary can be isolated to its task rather than failing at construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeSpec {
    /// An `"HH:MM"` clock string, parsed during layout.
    Clock(String),
    /// A raw minute-of-day count, range-checked during layout.
    Minutes(u16),
}

impl TimeSpec {
    /// Normalize to a canonical [TimeOfDay].
    pub fn resolve(&self) -> Result<TimeOfDay, TimeFormatError> {
        match self {
            TimeSpec::Clock(s) => s.parse(),
            TimeSpec::Minutes(m) => TimeOfDay::from_minutes(*m),
        }
    }
}

impl From<&str> for TimeSpec {
    fn from(s: &str) -> TimeSpec {
        TimeSpec::Clock(s.to_string())
    }
}

impl From<String> for TimeSpec {
    fn from(s: String) -> TimeSpec {
        TimeSpec::Clock(s)
    }
}

impl From<u16> for TimeSpec {
    fn from(minutes: u16) -> TimeSpec {
        TimeSpec::Minutes(minutes)
    }
}

impl From<TimeOfDay> for TimeSpec {
    fn from(time: TimeOfDay) -> TimeSpec {
        TimeSpec::Minutes(time.minutes())
    }
}

/// A [Task] is one scheduled entry on the dial. `id` must be unique within a
/// layout pass; it is the draw-order tiebreaker and the key for resolving
/// arcs back to tasks. `end` is conceptually after `start` within the
/// 24-hour cycle; an `end` numerically at or before `start` wraps through
/// midnight (see the `dial` module).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub start: TimeSpec,
    pub end: TimeSpec,
    pub color: Color,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: impl Into<TimeSpec>,
        end: impl Into<TimeSpec>,
        color: Color,
    ) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            start: start.into(),
            end: end.into(),
            color,
        }
    }
}
