//! Page settings
//!
//! Host-tunable knobs for the countdown and the casual games. The hill climb
//! and tic-tac-toe rules are fixed behaviour and live in `consts` instead.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ArcadeError, Result};

/// Yearly moment the countdown runs to (local time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTarget {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Default for CountdownTarget {
    fn default() -> Self {
        // Sep 9, 23:59
        Self {
            month: 9,
            day: 9,
            hour: 23,
            minute: 59,
        }
    }
}

impl CountdownTarget {
    /// The target in a given year, if that date exists there
    pub fn at_year(&self, year: i32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)?.and_hms_opt(self.hour, self.minute, 0)
    }

    fn validate(&self) -> Result<()> {
        // 2024 is a leap year, so Feb 29 passes here
        if self.at_year(2024).is_none() {
            return Err(ArcadeError::InvalidSettings(format!(
                "countdown target {:02}-{:02} {:02}:{:02} is not a valid date/time",
                self.month, self.day, self.hour, self.minute
            )));
        }
        Ok(())
    }
}

/// Page settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Birthday countdown target
    pub countdown: CountdownTarget,

    // === Tap the heart ===
    /// Round length in seconds
    pub tap_round_secs: u32,
    /// Milliseconds between heart spawns
    pub tap_spawn_ms: u32,

    // === Memory match ===
    /// Number of card pairs (1-6)
    pub memory_pairs: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            countdown: CountdownTarget::default(),
            tap_round_secs: TAP_ROUND_SECS,
            tap_spawn_ms: TAP_SPAWN_MS,
            memory_pairs: MEMORY_MAX_PAIRS,
        }
    }
}

impl Settings {
    /// Parse and validate settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!("Loaded settings");
        Ok(settings)
    }

    /// Parse settings, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.countdown.validate()?;
        if self.tap_round_secs == 0 {
            return Err(ArcadeError::InvalidSettings("tap_round_secs must be > 0".into()));
        }
        if self.tap_spawn_ms == 0 {
            return Err(ArcadeError::InvalidSettings("tap_spawn_ms must be > 0".into()));
        }
        if !(1..=MEMORY_MAX_PAIRS).contains(&self.memory_pairs) {
            return Err(ArcadeError::InvalidSettings(format!(
                "memory_pairs must be 1..={}, got {}",
                MEMORY_MAX_PAIRS, self.memory_pairs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tap_round_secs, 20);
        assert_eq!(settings.tap_spawn_ms, 650);
        assert_eq!(settings.memory_pairs, 6);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"tap_round_secs": 30}"#).unwrap();
        assert_eq!(settings.tap_round_secs, 30);
        assert_eq!(settings.countdown, CountdownTarget::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.memory_pairs = 4;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{"memory_pairs": 9}"#),
            Err(ArcadeError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"tap_spawn_ms": 0}"#),
            Err(ArcadeError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"countdown": {"month": 2, "day": 30, "hour": 0, "minute": 0}}"#),
            Err(ArcadeError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"colour": "red"}"#),
            Err(ArcadeError::SettingsJson(_))
        ));
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(Settings::from_json_or_default("not json"), Settings::default());
    }

    #[test]
    fn test_leap_day_target_is_valid() {
        let target = CountdownTarget {
            month: 2,
            day: 29,
            hour: 12,
            minute: 0,
        };
        assert!(target.validate().is_ok());
        assert!(target.at_year(2026).is_none());
    }
}
