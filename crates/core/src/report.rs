// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Year report generation.
//!
//! A year report rolls every day of a year into overall bucket totals
//! and two day lists: days needing attention (any red, yellow or still
//! pending element) and days fully reviewed green. Days whose calendar
//! entry carries no elements appear in neither list.

use horas_domain::{CalendarDate, Day, ReviewClass, StatusSummary, classify, summarize};

/// Per-day line in a year report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReportLine {
    pub date: CalendarDate,
    pub liturgical_id: String,
    pub summary: StatusSummary,
}

/// Aggregated review picture of one year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YearReport {
    /// Bucket totals over every element of the year.
    pub totals: StatusSummary,
    /// Days with any red, yellow or pending element, ascending by date.
    pub days_with_failures: Vec<DayReportLine>,
    /// Days fully reviewed with no flags, ascending by date.
    pub days_complete: Vec<DayReportLine>,
}

/// Builds the report for a set of days belonging to one year.
///
/// The caller supplies the days in any order; the report lists come
/// back sorted by date.
#[must_use]
pub fn build_year_report(days: &[Day]) -> YearReport {
    let mut report = YearReport::default();

    for day in days {
        let summary = summarize(day);
        report.totals.green += summary.green;
        report.totals.yellow += summary.yellow;
        report.totals.red += summary.red;
        report.totals.pending += summary.pending;

        if day.element_count() == 0 {
            continue;
        }

        let line = DayReportLine {
            date: day.date,
            liturgical_id: day.liturgical_id.clone(),
            summary,
        };
        // An unfinished day is a problem for the report too, so only
        // fully green days land in the complete list.
        match classify(&summary) {
            ReviewClass::Ok => report.days_complete.push(line),
            ReviewClass::Fail | ReviewClass::Warn | ReviewClass::Pending => {
                report.days_with_failures.push(line);
            }
        }
    }

    report.days_with_failures.sort_by_key(|line| line.date);
    report.days_complete.sort_by_key(|line| line.date);
    report
}
