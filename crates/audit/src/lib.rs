// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Append-only audit trail for review changes.
//!
//! Every accepted mutation of an element produces exactly one
//! [`AuditEntry`] capturing who changed what, and the value before and
//! after. Entries are never updated or deleted; the trail is the
//! authoritative history of the review.

use horas_domain::{CalendarDate, ElementType, HourName};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::OffsetDateTime;

/// The authenticated user on whose behalf a change is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub name: String,
}

impl Actor {
    #[must_use]
    pub const fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Which mutable field of an element a change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AuditField {
    Status,
    Observations,
}

impl AuditField {
    /// Returns the wire representation of the field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "estado",
            Self::Observations => "observaciones",
        }
    }

    /// Parses a field from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns the raw string back when it names no known field.
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s {
            "estado" => Ok(Self::Status),
            "observaciones" => Ok(Self::Observations),
            _ => Err(s.to_string()),
        }
    }
}

impl std::fmt::Display for AuditField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for AuditField {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_str(&s)
    }
}

impl From<AuditField> for String {
    fn from(field: AuditField) -> Self {
        field.as_str().to_string()
    }
}

/// One recorded change to an element.
///
/// `entry_id` is `None` until the entry has been persisted; storage
/// assigns a monotonically increasing identifier that serves as the
/// final tie-break when displaying the trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub entry_id: Option<i64>,
    /// Moment the change was accepted, UTC.
    pub timestamp: OffsetDateTime,
    /// Calendar date of `timestamp`, stored separately for display
    /// grouping. `YYYY-MM-DD`.
    pub date_of_change: String,
    /// Wall-clock time of `timestamp`. `HH:MM:SS`.
    pub time_of_change: String,
    pub actor_id: i64,
    pub actor_name: String,
    /// The liturgical day whose element changed.
    pub date: CalendarDate,
    pub hour: HourName,
    pub index: u32,
    pub element_type: ElementType,
    pub field: AuditField,
    pub value_before: String,
    pub value_after: String,
}

impl AuditEntry {
    /// Ordering used when presenting the trail: newest first, with the
    /// storage identifier breaking ties between entries recorded in
    /// the same second.
    #[must_use]
    pub fn display_ordering(&self, other: &Self) -> Ordering {
        other
            .date_of_change
            .cmp(&self.date_of_change)
            .then_with(|| other.time_of_change.cmp(&self.time_of_change))
            .then_with(|| other.timestamp.cmp(&self.timestamp))
            .then_with(|| other.entry_id.cmp(&self.entry_id))
    }
}

/// Sorts entries newest-first for display.
pub fn sort_for_display(entries: &mut [AuditEntry]) {
    entries.sort_by(AuditEntry::display_ordering);
}
