// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status aggregation over a day's elements.
//!
//! A day is summarized by counting every element into exactly one of
//! four buckets, then classified with a strict precedence: any red
//! element marks the day as failed, otherwise any yellow marks it as
//! needing attention, otherwise it is complete only when nothing is
//! still pending.

use crate::review_status::ReviewStatus;
use crate::types::{Day, Element};
use serde::{Deserialize, Serialize};

/// Bucket counts for a day's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSummary {
    pub green: u32,
    pub yellow: u32,
    pub red: u32,
    pub pending: u32,
}

impl StatusSummary {
    /// Total number of counted elements.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.green + self.yellow + self.red + self.pending
    }
}

/// Aggregate verdict for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewClass {
    /// Every element reviewed, none flagged.
    Ok,
    /// At least one yellow element and no red.
    Warn,
    /// At least one red element.
    Fail,
    /// No flagged elements but review is incomplete.
    Pending,
}

/// Counts a list of elements into status buckets.
///
/// This is the aggregation unit: a single hour rolls up over its own
/// elements, a day over all of them.
#[must_use]
pub fn summarize_elements(elements: &[Element]) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for element in elements {
        match element.status {
            ReviewStatus::Green => summary.green += 1,
            ReviewStatus::Yellow => summary.yellow += 1,
            ReviewStatus::Red => summary.red += 1,
            ReviewStatus::Unset => summary.pending += 1,
        }
    }
    summary
}

/// Counts the day's elements into status buckets.
#[must_use]
pub fn summarize(day: &Day) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for hour in &day.hours {
        let hour_summary = summarize_elements(&hour.elements);
        summary.green += hour_summary.green;
        summary.yellow += hour_summary.yellow;
        summary.red += hour_summary.red;
        summary.pending += hour_summary.pending;
    }
    summary
}

/// Classifies a summary into an aggregate verdict.
///
/// Red dominates yellow, yellow dominates everything else, and a day
/// is only `Ok` once every element has a verdict.
#[must_use]
pub const fn classify(summary: &StatusSummary) -> ReviewClass {
    if summary.red > 0 {
        ReviewClass::Fail
    } else if summary.yellow > 0 {
        ReviewClass::Warn
    } else if summary.green > 0 && summary.pending == 0 {
        ReviewClass::Ok
    } else {
        ReviewClass::Pending
    }
}
