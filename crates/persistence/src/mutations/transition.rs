// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transition persistence.
//!
//! A transition is one accepted change to one element together with
//! its audit entry. Both writes happen in a single transaction: either
//! the new element state and its audit record land together, or
//! neither does.

use diesel::prelude::*;
use diesel::SqliteConnection;
use horas::TransitionResult;
use time::UtcOffset;
use time::macros::format_description;
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{audit_entries, days, elements, hours};
use crate::error::PersistenceError;

/// Persists a transition result atomically.
///
/// Writes the changed element's status and observations, then appends
/// the audit entry. A failure on either side rolls back both.
///
/// # Returns
///
/// The entry ID assigned to the persisted audit entry.
///
/// # Errors
///
/// Returns `PersistenceError::DayNotFound` when the day has not been
/// seeded, `PersistenceError::NotFound` when the element row is
/// missing, or a database error when a write fails.
pub fn apply_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<i64, PersistenceError> {
    let entry = &result.audit_entry;
    let date = entry.date.to_string();

    let element = result
        .new_day
        .element(entry.hour, entry.index)
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

    // Stored with a fixed-width fraction in UTC so the column sorts
    // chronologically as text. Rfc3339 output would not: its fraction
    // is variable-width.
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z"
    );
    let timestamp = entry
        .timestamp
        .to_offset(UtcOffset::UTC)
        .format(&format)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))?;

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let day_id: i64 = days::table
            .filter(days::date.eq(&date))
            .select(days::day_id)
            .first(conn)
            .optional()?
            .ok_or_else(|| PersistenceError::DayNotFound(date.clone()))?;

        let hour_id: i64 = hours::table
            .filter(hours::day_id.eq(day_id))
            .filter(hours::name.eq(entry.hour.as_str()))
            .select(hours::hour_id)
            .first(conn)?;

        let updated = diesel::update(
            elements::table
                .filter(elements::hour_id.eq(hour_id))
                .filter(elements::element_index.eq(i32::try_from(entry.index).unwrap_or(i32::MAX))),
        )
        .set((
            elements::status.eq(element.status.as_str()),
            elements::observations.eq(&element.observations),
        ))
        .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Element {} in hour '{}' on {}",
                entry.index, entry.hour, date
            )));
        }

        diesel::insert_into(audit_entries::table)
            .values((
                audit_entries::timestamp.eq(&timestamp),
                audit_entries::date_of_change.eq(&entry.date_of_change),
                audit_entries::time_of_change.eq(&entry.time_of_change),
                audit_entries::actor_id.eq(entry.actor_id),
                audit_entries::actor_name.eq(&entry.actor_name),
                audit_entries::day_date.eq(&date),
                audit_entries::hour.eq(entry.hour.as_str()),
                audit_entries::element_index
                    .eq(i32::try_from(entry.index).unwrap_or(i32::MAX)),
                audit_entries::element_type.eq(entry.element_type.as_str()),
                audit_entries::field.eq(entry.field.as_str()),
                audit_entries::value_before.eq(&entry.value_before),
                audit_entries::value_after.eq(&entry.value_after),
            ))
            .execute(conn)?;

        let entry_id: i64 = get_last_insert_rowid(conn)?;
        debug!(entry_id, "Persisted transition for {}", date);
        Ok(entry_id)
    })
}
