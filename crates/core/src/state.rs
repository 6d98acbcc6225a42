// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horas_audit::AuditEntry;
use horas_domain::Day;

/// The outcome of applying a command to a day.
///
/// Applying never mutates the input; callers receive the new day state
/// together with the single audit entry describing the change, and
/// persist both atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The day with the command applied.
    pub new_day: Day,
    /// The audit record of the change. Not yet persisted, so its
    /// `entry_id` is `None`.
    pub audit_entry: AuditEntry,
}
