// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar date handling.
//!
//! Dates are exchanged everywhere as ISO `YYYY-MM-DD` strings. This module
//! wraps `time::Date` so parsing happens once at the boundary and the rest
//! of the system works with a validated value.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

/// A validated calendar date in the proleptic Gregorian calendar.
///
/// Serialized as `YYYY-MM-DD` for both storage and the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Creates a calendar date from a `time::Date`.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// Parses a date from its ISO `YYYY-MM-DD` representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the string is not a valid
    /// ISO calendar date.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let format = format_description!("[year]-[month]-[day]");
        Date::parse(s, &format)
            .map(Self)
            .map_err(|e| DomainError::InvalidDate {
                date_string: s.to_string(),
                error: e.to_string(),
            })
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the underlying `time::Date`.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.0
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
