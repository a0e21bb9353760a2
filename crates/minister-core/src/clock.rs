//! Back-time rounding and clock-face glyphs.
//!
//! A leave message announces an estimated return time. The estimate is
//! `now + duration` rounded *up* to the next `:00` or `:30`, and it is
//! decorated with the matching clock-face pictograph.

use std::fmt;

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How long the user expects to be away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LeaveDuration {
    HalfHour,
    OneHour,
    TwoHours,
    ThreeHours,
}

impl LeaveDuration {
    /// Menu order.
    pub const ALL: [LeaveDuration; 4] = [
        LeaveDuration::HalfHour,
        LeaveDuration::OneHour,
        LeaveDuration::TwoHours,
        LeaveDuration::ThreeHours,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            LeaveDuration::HalfHour => 30,
            LeaveDuration::OneHour => 60,
            LeaveDuration::TwoHours => 120,
            LeaveDuration::ThreeHours => 180,
        }
    }
}

impl TryFrom<u32> for LeaveDuration {
    type Error = ValidationError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        LeaveDuration::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or(ValidationError::LeaveDuration(minutes))
    }
}

impl From<LeaveDuration> for u32 {
    fn from(d: LeaveDuration) -> Self {
        d.minutes()
    }
}

impl fmt::Display for LeaveDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "about {} min", self.minutes())
    }
}

/// Estimated return time for someone leaving `minutes` after `now`.
///
/// If the minute of `now + minutes` is below 30 the result is `:30` of the
/// same hour, otherwise `:00` of the next hour. Seconds are always zero.
pub fn back_time(now: NaiveDateTime, minutes: u32) -> NaiveDateTime {
    let target = now + Duration::minutes(i64::from(minutes));
    let into_hour = Duration::seconds(i64::from(target.minute() * 60 + target.second()))
        + Duration::nanoseconds(i64::from(target.nanosecond()));
    let hour_start = target - into_hour;

    if target.minute() < 30 {
        hour_start + Duration::minutes(30)
    } else {
        hour_start + Duration::hours(1)
    }
}

const CLOCK_GLYPHS: [(&str, &str); 24] = [
    ("1:00", "🕐"),
    ("1:30", "🕜"),
    ("2:00", "🕑"),
    ("2:30", "🕝"),
    ("3:00", "🕒"),
    ("3:30", "🕞"),
    ("4:00", "🕓"),
    ("4:30", "🕟"),
    ("5:00", "🕔"),
    ("5:30", "🕠"),
    ("6:00", "🕕"),
    ("6:30", "🕡"),
    ("7:00", "🕖"),
    ("7:30", "🕢"),
    ("8:00", "🕗"),
    ("8:30", "🕣"),
    ("9:00", "🕘"),
    ("9:30", "🕤"),
    ("10:00", "🕙"),
    ("10:30", "🕥"),
    ("11:00", "🕚"),
    ("11:30", "🕦"),
    ("12:00", "🕛"),
    ("12:30", "🕧"),
];

/// Clock-face glyph for a 12-hour `h:mm` key such as `"7:30"`.
///
/// Only half-hour-aligned keys with hours 1-12 are in the table.
pub fn clock_glyph(key: &str) -> Option<&'static str> {
    CLOCK_GLYPHS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, glyph)| *glyph)
}

/// Clock-face glyph for a time, read on a 12-hour dial.
pub fn glyph_for<T: Timelike>(time: &T) -> Option<&'static str> {
    let (_pm, hour) = time.hour12();
    clock_glyph(&format!("{hour}:{:02}", time.minute()))
}
