// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horas_domain::{HourName, ReviewStatus};

/// A command represents reviewer intent as data only.
///
/// Commands are the only way to request changes to a day's review
/// state. Both commands address one element by hour and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a verdict for an element.
    SetStatus {
        hour: HourName,
        index: u32,
        status: ReviewStatus,
    },
    /// Replace the free-text observations of an element.
    SetObservations {
        hour: HourName,
        index: u32,
        observations: String,
    },
}
