use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const INITIAL_EASE: f64 = 2.5;
pub const MIN_EASE: f64 = 1.3;

/// Scheduling memory of one flashcard.
///
/// The engine never stores cards; callers hand a state in and get a new one back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    /// days until next due, at least 1
    pub interval: u32,
    /// successful reviews since the last lapse
    pub repetition: u32,
    pub ease: f64,
    pub due: DateTime<Utc>,
}

impl CardState {
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            interval: 1,
            repetition: 0,
            ease: INITIAL_EASE,
            due: now,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due <= now
    }

    /// `2024-01-02T00:00:00.000Z`
    pub fn due_iso(&self) -> String {
        self.due.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Self-assessed recall grade. 1 and 2 do not exist on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quality {
    Again = 0,
    Hard = 3,
    Good = 4,
    Easy = 5,
}

impl Quality {
    pub const ALL: [Quality; 4] = [Quality::Again, Quality::Hard, Quality::Good, Quality::Easy];

    pub fn is_success(self) -> bool {
        self != Quality::Again
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Quality {
    type Error = Error;

    fn try_from(q: u8) -> Result<Self> {
        match q {
            0 => Ok(Quality::Again),
            3 => Ok(Quality::Hard),
            4 => Ok(Quality::Good),
            5 => Ok(Quality::Easy),
            _ => Err(Error::InvalidQuality(q)),
        }
    }
}

impl From<Quality> for u8 {
    fn from(q: Quality) -> u8 {
        q.value()
    }
}

impl FromStr for Quality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        match &*s {
            "a" | "again" => Ok(Quality::Again),
            "h" | "hard" => Ok(Quality::Hard),
            "g" | "good" => Ok(Quality::Good),
            "e" | "easy" => Ok(Quality::Easy),
            _ => match s.parse::<u8>() {
                Ok(n) => Quality::try_from(n),
                Err(_) => Err(Error::UnknownGrade(s)),
            },
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quality::Again => "Again",
            Quality::Hard => "Hard",
            Quality::Good => "Good",
            Quality::Easy => "Easy",
        };
        f.write_str(name)
    }
}
