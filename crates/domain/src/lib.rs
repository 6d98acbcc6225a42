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

mod calendar_date;
mod element;
mod error;
mod hour;
mod review_status;
mod summary;
mod types;

pub use calendar_date::CalendarDate;
pub use element::ElementType;
pub use error::DomainError;
pub use hour::HourName;
pub use review_status::ReviewStatus;
pub use summary::{ReviewClass, StatusSummary, classify, summarize, summarize_elements};
pub use types::{Day, DayStructure, Element, Hour, HourStructure};
