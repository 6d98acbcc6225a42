// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use horas_audit::{AuditEntry, AuditField};
use horas_domain::{CalendarDate, ElementType, HourName};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::audit_entries;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_entries)]
struct AuditEntryRow {
    entry_id: i64,
    timestamp: String,
    date_of_change: String,
    time_of_change: String,
    actor_id: i64,
    actor_name: String,
    day_date: String,
    hour: String,
    element_index: i32,
    element_type: String,
    field: String,
    value_before: String,
    value_after: String,
}

fn map_row(row: AuditEntryRow) -> Result<AuditEntry, PersistenceError> {
    let timestamp: OffsetDateTime = OffsetDateTime::parse(&row.timestamp, &Rfc3339)
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;
    let index = u32::try_from(row.element_index).map_err(|_| {
        PersistenceError::ReconstructionError(format!(
            "Negative element index {} in audit entry {}",
            row.element_index, row.entry_id
        ))
    })?;

    Ok(AuditEntry {
        entry_id: Some(row.entry_id),
        timestamp,
        date_of_change: row.date_of_change,
        time_of_change: row.time_of_change,
        actor_id: row.actor_id,
        actor_name: row.actor_name,
        date: CalendarDate::parse(&row.day_date)?,
        hour: HourName::parse_str(&row.hour)?,
        index,
        element_type: ElementType::parse_str(&row.element_type)?,
        field: AuditField::parse_str(&row.field)
            .map_err(|f| PersistenceError::ReconstructionError(format!("Unknown field '{f}'")))?,
        value_before: row.value_before,
        value_after: row.value_after,
    })
}

/// Retrieves the full audit trail, newest first.
///
/// Entries recorded in the same second are disambiguated by their
/// storage identifier, so the order is total and stable.
///
/// # Errors
///
/// Returns an error if any row cannot be mapped back to an entry.
pub fn get_audit_log(conn: &mut SqliteConnection) -> Result<Vec<AuditEntry>, PersistenceError> {
    let rows: Vec<AuditEntryRow> = audit_entries::table
        .order((
            audit_entries::date_of_change.desc(),
            audit_entries::time_of_change.desc(),
            audit_entries::timestamp.desc(),
            audit_entries::entry_id.desc(),
        ))
        .select(AuditEntryRow::as_select())
        .load(conn)?;

    rows.into_iter().map(map_row).collect()
}

/// Retrieves the audit trail for one liturgical day, newest first.
///
/// # Errors
///
/// Returns an error if any row cannot be mapped back to an entry.
pub fn get_audit_log_for_day(
    conn: &mut SqliteConnection,
    date: CalendarDate,
) -> Result<Vec<AuditEntry>, PersistenceError> {
    let rows: Vec<AuditEntryRow> = audit_entries::table
        .filter(audit_entries::day_date.eq(date.to_string()))
        .order((
            audit_entries::date_of_change.desc(),
            audit_entries::time_of_change.desc(),
            audit_entries::timestamp.desc(),
            audit_entries::entry_id.desc(),
        ))
        .select(AuditEntryRow::as_select())
        .load(conn)?;

    rows.into_iter().map(map_row).collect()
}
