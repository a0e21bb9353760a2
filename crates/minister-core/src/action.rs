//! The fixed set of status actions and their message templates.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clock::{back_time, glyph_for, LeaveDuration};
use crate::status::{Status, StatusIcon};

/// Which sign-off message to post. Both end the day as [`Status::Offline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoingHome {
    Weekday,
    Weekend,
}

/// A user-triggered status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Online,
    Leave { duration: LeaveDuration },
    GoodMorning,
    GoingHome { kind: GoingHome },
}

impl Action {
    /// Status recorded once the message is delivered.
    pub fn target_status(&self) -> Status {
        match self {
            Action::Online => Status::Online,
            Action::Leave { .. } | Action::GoodMorning => Status::Leave,
            Action::GoingHome { .. } => Status::Offline,
        }
    }

    /// Message text posted to the channel. Only `Leave` depends on `now`.
    pub fn message(&self, now: NaiveDateTime) -> String {
        match self {
            Action::Online => "😎 Huddle に 入室 しました".to_string(),
            Action::Leave { duration } => {
                let back = back_time(now, duration.minutes());
                let glyph = glyph_for(&back).unwrap_or_default();
                format!("{glyph} {} ごろまで 退室 します", back.format("%-H:%M"))
            }
            Action::GoodMorning => "☀️ おはようございます！".to_string(),
            Action::GoingHome {
                kind: GoingHome::Weekday,
            } => "🌙 おつかれさまでした！".to_string(),
            Action::GoingHome {
                kind: GoingHome::Weekend,
            } => "🍻 おつかれさまでした！".to_string(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Action::Online => "Online".to_string(),
            Action::Leave { duration } => duration.to_string(),
            Action::GoodMorning => "Good Morning".to_string(),
            Action::GoingHome {
                kind: GoingHome::Weekday,
            } => "Weekday".to_string(),
            Action::GoingHome {
                kind: GoingHome::Weekend,
            } => "Weekend".to_string(),
        }
    }

    pub fn icon(&self) -> StatusIcon {
        match self {
            Action::Online => StatusIcon::LightBulb,
            Action::Leave { .. } => StatusIcon::CircleProgress25,
            Action::GoodMorning => StatusIcon::Sunrise,
            Action::GoingHome {
                kind: GoingHome::Weekday,
            } => StatusIcon::Bird,
            Action::GoingHome {
                kind: GoingHome::Weekend,
            } => StatusIcon::Stars,
        }
    }
}

impl fmt::Display for GoingHome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoingHome::Weekday => f.write_str("weekday"),
            GoingHome::Weekend => f.write_str("weekend"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn targets_follow_the_action_set() {
        assert_eq!(Action::Online.target_status(), Status::Online);
        assert_eq!(Action::GoodMorning.target_status(), Status::Leave);
        for duration in LeaveDuration::ALL {
            assert_eq!(Action::Leave { duration }.target_status(), Status::Leave);
        }
        for kind in [GoingHome::Weekday, GoingHome::Weekend] {
            assert_eq!(Action::GoingHome { kind }.target_status(), Status::Offline);
        }
    }

    #[test]
    fn leave_message_carries_rounded_time_and_glyph() {
        let action = Action::Leave {
            duration: LeaveDuration::HalfHour,
        };
        assert_eq!(action.message(at(10, 5)), "🕚 11:00 ごろまで 退室 します");

        let action = Action::Leave {
            duration: LeaveDuration::TwoHours,
        };
        assert_eq!(action.message(at(13, 5)), "🕞 15:30 ごろまで 退室 します");
    }

    #[test]
    fn leave_message_hour_has_no_leading_zero() {
        let action = Action::Leave {
            duration: LeaveDuration::OneHour,
        };
        assert_eq!(action.message(at(7, 50)), "🕘 9:00 ごろまで 退室 します");
    }

    #[test]
    fn going_home_differs_only_in_text() {
        let now = at(18, 0);
        let weekday = Action::GoingHome {
            kind: GoingHome::Weekday,
        };
        let weekend = Action::GoingHome {
            kind: GoingHome::Weekend,
        };
        assert_ne!(weekday.message(now), weekend.message(now));
        assert_eq!(weekday.target_status(), weekend.target_status());
        // No calendar check: the same text regardless of the day.
        assert_eq!(weekday.message(now), weekday.message(at(9, 0)));
    }

    #[test]
    fn fixed_messages() {
        let now = at(9, 0);
        assert_eq!(Action::Online.message(now), "😎 Huddle に 入室 しました");
        assert_eq!(Action::GoodMorning.message(now), "☀️ おはようございます！");
    }
}
