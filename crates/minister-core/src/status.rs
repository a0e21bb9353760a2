//! Presence states broadcast to the team channel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's current presence. Exactly one is current at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Signed off for the day.
    #[default]
    Offline,
    /// In the huddle.
    Online,
    /// Temporarily away.
    Leave,
}

/// Icon keys shared by the menu-bar icon and the menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    LightBulb,
    LightBulbOff,
    CircleProgress25,
    Sunrise,
    Moon,
    Bird,
    Stars,
    Cog,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Offline, Status::Online, Status::Leave];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Offline => "offline",
            Status::Online => "online",
            Status::Leave => "leave",
        }
    }

    /// Lit bulb while online, unlit otherwise.
    pub fn icon(&self) -> StatusIcon {
        match self {
            Status::Online => StatusIcon::LightBulb,
            Status::Offline | Status::Leave => StatusIcon::LightBulbOff,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offline" => Ok(Status::Offline),
            "online" => Ok(Status::Online),
            "leave" => Ok(Status::Leave),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

impl StatusIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusIcon::LightBulb => "light_bulb",
            StatusIcon::LightBulbOff => "light_bulb_off",
            StatusIcon::CircleProgress25 => "circle_progress_25",
            StatusIcon::Sunrise => "sunrise",
            StatusIcon::Moon => "moon",
            StatusIcon::Bird => "bird",
            StatusIcon::Stars => "stars",
            StatusIcon::Cog => "cog",
        }
    }
}

impl fmt::Display for StatusIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
