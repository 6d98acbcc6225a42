// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar seeding mutations.
//!
//! Seeding materializes a day's structure into rows with every element
//! unset. A day that already exists is left untouched so that
//! re-seeding a calendar never resets review work.

use diesel::prelude::*;
use diesel::SqliteConnection;
use horas_domain::DayStructure;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{days, elements, hours};
use crate::error::PersistenceError;

/// Seeds one day from its calendar structure.
///
/// Inserts the day row, its hours in calendar order and their elements
/// with empty status and observations, all within one transaction.
///
/// # Returns
///
/// `true` if the day was created, `false` if it already existed.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub fn seed_day(
    conn: &mut SqliteConnection,
    structure: &DayStructure,
) -> Result<bool, PersistenceError> {
    let date = structure.date.to_string();

    let existing: i64 = days::table
        .filter(days::date.eq(&date))
        .count()
        .get_result(conn)?;
    if existing > 0 {
        debug!("Day {} already seeded, skipping", date);
        return Ok(false);
    }

    conn.transaction::<(), PersistenceError, _>(|conn| {
        diesel::insert_into(days::table)
            .values((
                days::date.eq(&date),
                days::year.eq(structure.date.year()),
                days::liturgical_id.eq(&structure.liturgical_id),
            ))
            .execute(conn)?;
        let day_id: i64 = get_last_insert_rowid(conn)?;

        for (position, hour) in structure.hours.iter().enumerate() {
            diesel::insert_into(hours::table)
                .values((
                    hours::day_id.eq(day_id),
                    hours::name.eq(hour.name.as_str()),
                    hours::position.eq(i32::try_from(position).unwrap_or(i32::MAX)),
                ))
                .execute(conn)?;
            let hour_id: i64 = get_last_insert_rowid(conn)?;

            for (index, element_type) in hour.element_types.iter().enumerate() {
                diesel::insert_into(elements::table)
                    .values((
                        elements::hour_id.eq(hour_id),
                        elements::element_index.eq(i32::try_from(index).unwrap_or(i32::MAX)),
                        elements::element_type.eq(element_type.as_str()),
                        elements::status.eq(""),
                        elements::observations.eq(""),
                    ))
                    .execute(conn)?;
            }
        }

        Ok(())
    })?;

    info!("Seeded day {} ({})", date, structure.liturgical_id);
    Ok(true)
}
