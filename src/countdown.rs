//! Birthday countdown
//!
//! All arithmetic is on naive local date-times; the host supplies "now" in
//! local time so this stays testable.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::settings::CountdownTarget;

/// Remaining time split for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        Self {
            days: ms / (1000 * 60 * 60 * 24),
            hours: (ms % (1000 * 60 * 60 * 24)) / (1000 * 60 * 60),
            minutes: (ms % (1000 * 60 * 60)) / (1000 * 60),
            seconds: (ms % (1000 * 60)) / 1000,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days + self.hours + self.minutes + self.seconds == 0
    }
}

/// Two-digit zero padding for the time boxes
pub fn pad2(n: i64) -> String {
    format!("{n:02}")
}

/// Countdown to the next occurrence of a yearly moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: NaiveDateTime,
}

impl Countdown {
    /// Target this year, or next year if `now` is already past it
    pub fn new(yearly: &CountdownTarget, now: NaiveDateTime) -> Self {
        let this_year = yearly.at_year(now.year());
        let target = match this_year {
            Some(t) if now <= t => t,
            // Feb 29 targets fall back to the next year that has one
            _ => (1..=8)
                .find_map(|ahead| yearly.at_year(now.year() + ahead))
                .unwrap_or(now),
        };
        Self { target }
    }

    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    pub fn remaining_ms(&self, now: NaiveDateTime) -> i64 {
        (self.target - now).num_milliseconds().max(0)
    }

    pub fn time_left(&self, now: NaiveDateTime) -> TimeLeft {
        TimeLeft::from_millis(self.remaining_ms(now))
    }

    pub fn is_done(&self, now: NaiveDateTime) -> bool {
        self.time_left(now).is_zero()
    }

    /// Percent of the way from Jan 1 of the target's year to the target
    pub fn year_progress(&self, now: NaiveDateTime) -> f64 {
        let Some(start) = NaiveDate::from_ymd_opt(self.target.year(), 1, 1) else {
            return 0.0;
        };
        let start = start.and_time(NaiveTime::MIN);
        let span = (self.target - start).num_milliseconds() as f64;
        if span <= 0.0 {
            return 100.0;
        }
        let done = (now - start).num_milliseconds() as f64;
        (done / span * 100.0).clamp(0.0, 100.0)
    }
}
