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

//! Time normalization. A [TimeOfDay] is a canonical minute-of-day value in
//! `[0, 1440)`, parsed from either an `"HH:MM"` string or a raw minute count.
//! Parsing is a pure function with no side effects; all range checks happen
//! here so the rest of the pipeline can assume canonical input.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

/// Number of minutes in a 24-hour dial revolution.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A malformed task time. This is a data error scoped to a single task; the
/// layout pipeline isolates it per [TimeErrorPolicy](crate::TimeErrorPolicy)
/// rather than failing the whole render pass.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TimeFormatError {
    #[error("time string {0:?} does not match \"HH:MM\"")]
    Malformed(String),
    #[error("hour {0} out of range (0-23)")]
    HourOutOfRange(u16),
    #[error("minute {0} out of range (0-59)")]
    MinuteOutOfRange(u16),
    #[error("minute-of-day {0} out of range (0-1439)")]
    MinutesOutOfRange(u16),
}

/// A canonical minute-of-day in `[0, 1440)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Construct a [TimeOfDay] from a raw minute count, rejecting values
    /// outside `[0, 1440)`.
    pub fn from_minutes(minutes: u16) -> Result<TimeOfDay, TimeFormatError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeFormatError::MinutesOutOfRange(minutes));
        }
        Ok(TimeOfDay(minutes))
    }

    /// Construct a [TimeOfDay] from hour and minute fields, rejecting hours
    /// outside `[0, 23]` and minutes outside `[0, 59]`.
    pub fn from_hm(hour: u16, minute: u16) -> Result<TimeOfDay, TimeFormatError> {
        if hour > 23 {
            return Err(TimeFormatError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeFormatError::MinuteOutOfRange(minute));
        }
        Ok(TimeOfDay(hour * 60 + minute))
    }

    #[inline]
    pub fn minutes(&self) -> u16 {
        self.0
    }

    #[inline]
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeFormatError;

    /// Parse an `"HH:MM"` string. Both fields must be unsigned decimal
    /// numbers; a missing separator, empty field, or non-numeric character
    /// is rejected as [TimeFormatError::Malformed].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeFormatError::Malformed(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(malformed)?;
        if hh.is_empty() || mm.is_empty() {
            return Err(malformed());
        }
        let hour = hh.parse::<u16>().map_err(|_| malformed())?;
        let minute = mm.parse::<u16>().map_err(|_| malformed())?;
        TimeOfDay::from_hm(hour, minute)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl From<TimeOfDay> for u16 {
    fn from(time: TimeOfDay) -> u16 {
        time.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_times() {
        assert_eq!("00:00".parse::<TimeOfDay>().unwrap().minutes(), 0);
        assert_eq!("09:05".parse::<TimeOfDay>().unwrap().minutes(), 545);
        assert_eq!("23:59".parse::<TimeOfDay>().unwrap().minutes(), 1439);
        // Single-digit fields are accepted, matching lenient "H:MM" input.
        assert_eq!("9:30".parse::<TimeOfDay>().unwrap().minutes(), 570);
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", "12", "12:", ":30", "ab:cd", "12:3a", "12-30", "12:30:00"] {
            assert!(matches!(
                bad.parse::<TimeOfDay>(),
                Err(TimeFormatError::Malformed(_))
            ));
        }
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            "24:00".parse::<TimeOfDay>(),
            Err(TimeFormatError::HourOutOfRange(24))
        );
        assert_eq!(
            "12:60".parse::<TimeOfDay>(),
            Err(TimeFormatError::MinuteOutOfRange(60))
        );
        assert_eq!(
            TimeOfDay::from_minutes(1440),
            Err(TimeFormatError::MinutesOutOfRange(1440))
        );
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(TimeOfDay::from_hm(7, 5).unwrap().to_string(), "07:05");
    }
}
