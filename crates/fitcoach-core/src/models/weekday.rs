// ABOUTME: Weekday codes used as keys of the weekly plan maps
// ABOUTME: Fixed mon..sun ordering, code parsing, and local-day lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-letter weekday code keying per-day plan data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday
    Sat,
    /// Sunday
    Sun,
}

impl Weekday {
    /// All days in the weekly screens' fixed order, Monday first
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Wire code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }

    /// Parse a wire code, case-insensitively
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|day| day.code() == code)
    }

    /// Zero-based index in the Monday-first order
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Mon => 0,
            Self::Tue => 1,
            Self::Wed => 2,
            Self::Thu => 3,
            Self::Fri => 4,
            Self::Sat => 5,
            Self::Sun => 6,
        }
    }

    /// Convert from chrono's weekday
    #[must_use]
    pub const fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Mon,
            chrono::Weekday::Tue => Self::Tue,
            chrono::Weekday::Wed => Self::Wed,
            chrono::Weekday::Thu => Self::Thu,
            chrono::Weekday::Fri => Self::Fri,
            chrono::Weekday::Sat => Self::Sat,
            chrono::Weekday::Sun => Self::Sun,
        }
    }

    /// Day of week on the device clock
    #[must_use]
    pub fn today_local() -> Self {
        Self::from_chrono(Local::now().weekday())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_in_order() {
        let codes: Vec<&str> = Weekday::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]);
        assert_eq!(Weekday::from_code("SAT"), Some(Weekday::Sat));
        assert_eq!(Weekday::from_code("monday"), None);
    }

    #[test]
    fn test_chrono_sunday_maps_to_sun() {
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sun), Weekday::Sun);
        assert_eq!(Weekday::Sun.index(), 6);
    }
}
