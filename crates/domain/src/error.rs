// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors produced while validating or resolving domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The status string is not a recognized review status.
    InvalidStatus { status: String },
    /// The hour name is not one of the canonical hours.
    InvalidHourName { name: String },
    /// The element type string is not a recognized liturgical element.
    InvalidElementType { value: String },
    /// The date string could not be parsed as an ISO calendar date.
    InvalidDate { date_string: String, error: String },
    /// The requested date has no calendar entry.
    DayNotFound { date: String },
    /// The requested hour is not present on the given day.
    HourNotFound { date: String, hour: String },
    /// The requested element index does not exist within the hour.
    ElementNotFound {
        date: String,
        hour: String,
        index: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus { status } => {
                write!(f, "Invalid review status: '{status}'")
            }
            Self::InvalidHourName { name } => {
                write!(f, "Invalid hour name: '{name}'")
            }
            Self::InvalidElementType { value } => {
                write!(f, "Invalid element type: '{value}'")
            }
            Self::InvalidDate { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DayNotFound { date } => {
                write!(f, "No calendar entry for date {date}")
            }
            Self::HourNotFound { date, hour } => {
                write!(f, "Hour '{hour}' is not present on {date}")
            }
            Self::ElementNotFound { date, hour, index } => {
                write!(f, "Element {index} does not exist in hour '{hour}' on {date}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
