// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::TransitionResult;
use horas_audit::{Actor, AuditEntry, AuditField};
use time::OffsetDateTime;

/// Applies a command to a day, producing the new day and audit entry.
///
/// The element addressed by the command must exist; the previous value
/// of the touched field is captured into the audit entry before the
/// change is written. Writes are last-write-wins: the command's value
/// replaces whatever is there, including an identical value.
///
/// # Arguments
///
/// * `day` - The current day state (immutable)
/// * `command` - The change to apply
/// * `actor` - The authenticated user making the change
/// * `now` - The moment the change is accepted, UTC
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` when the command addresses an
/// hour or element the day does not contain.
pub fn apply(
    day: &horas_domain::Day,
    command: &Command,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let mut new_day = day.clone();

    let (hour, index, field, value_after) = match command {
        Command::SetStatus {
            hour,
            index,
            status,
        } => (*hour, *index, AuditField::Status, status.as_str().to_string()),
        Command::SetObservations {
            hour,
            index,
            observations,
        } => (*hour, *index, AuditField::Observations, observations.clone()),
    };

    let element = new_day.element_mut(hour, index)?;
    let element_type = element.element_type;
    let value_before = match field {
        AuditField::Status => element.status.as_str().to_string(),
        AuditField::Observations => element.observations.clone(),
    };

    match command {
        Command::SetStatus { status, .. } => element.status = *status,
        Command::SetObservations { observations, .. } => {
            element.observations.clone_from(observations);
        }
    }

    let audit_entry = AuditEntry {
        entry_id: None,
        timestamp: now,
        date_of_change: format!(
            "{:04}-{:02}-{:02}",
            now.year(),
            u8::from(now.month()),
            now.day()
        ),
        time_of_change: format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second()),
        actor_id: actor.id,
        actor_name: actor.name.clone(),
        date: new_day.date,
        hour,
        index,
        element_type,
        field,
        value_before,
        value_after,
    };

    Ok(TransitionResult {
        new_day,
        audit_entry,
    })
}
