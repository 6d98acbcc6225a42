// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day and year queries.
//!
//! Days are reconstructed from their rows with hours in seeded
//! calendar order and elements in position order.

use diesel::prelude::*;
use diesel::SqliteConnection;
use horas_domain::{
    CalendarDate, Day, Element, ElementType, Hour, HourName, ReviewStatus,
};

use crate::diesel_schema::{days, elements, hours};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = days)]
struct DayRow {
    day_id: i64,
    date: String,
    #[allow(dead_code)]
    year: i32,
    liturgical_id: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = hours)]
struct HourRow {
    hour_id: i64,
    #[allow(dead_code)]
    day_id: i64,
    name: String,
    #[allow(dead_code)]
    position: i32,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = elements)]
struct ElementRow {
    #[allow(dead_code)]
    element_id: i64,
    #[allow(dead_code)]
    hour_id: i64,
    element_index: i32,
    element_type: String,
    status: String,
    observations: String,
}

fn load_day(conn: &mut SqliteConnection, row: &DayRow) -> Result<Day, PersistenceError> {
    let date: CalendarDate = CalendarDate::parse(&row.date)?;

    let hour_rows: Vec<HourRow> = hours::table
        .filter(hours::day_id.eq(row.day_id))
        .order(hours::position.asc())
        .select(HourRow::as_select())
        .load(conn)?;

    let mut day_hours: Vec<Hour> = Vec::with_capacity(hour_rows.len());
    for hour_row in hour_rows {
        let name: HourName = HourName::parse_str(&hour_row.name)?;

        let element_rows: Vec<ElementRow> = elements::table
            .filter(elements::hour_id.eq(hour_row.hour_id))
            .order(elements::element_index.asc())
            .select(ElementRow::as_select())
            .load(conn)?;

        let mut day_elements: Vec<Element> = Vec::with_capacity(element_rows.len());
        for element_row in element_rows {
            let index = u32::try_from(element_row.element_index).map_err(|_| {
                PersistenceError::ReconstructionError(format!(
                    "Negative element index {} on {}",
                    element_row.element_index, row.date
                ))
            })?;
            day_elements.push(Element {
                element_type: ElementType::parse_str(&element_row.element_type)?,
                index,
                status: ReviewStatus::parse_str(&element_row.status)?,
                observations: element_row.observations,
            });
        }

        day_hours.push(Hour::new(name, day_elements));
    }

    Ok(Day::new(date, row.liturgical_id.clone(), day_hours))
}

/// Retrieves a day with its full review state.
///
/// # Errors
///
/// Returns `PersistenceError::DayNotFound` if the date has not been
/// seeded.
pub fn get_day(conn: &mut SqliteConnection, date: CalendarDate) -> Result<Day, PersistenceError> {
    let date_str = date.to_string();
    let row: DayRow = days::table
        .filter(days::date.eq(&date_str))
        .select(DayRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::DayNotFound(date_str))?;

    load_day(conn, &row)
}

/// Lists every year with at least one seeded day, ascending.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_years(conn: &mut SqliteConnection) -> Result<Vec<i32>, PersistenceError> {
    Ok(days::table
        .select(days::year)
        .distinct()
        .order(days::year.asc())
        .load::<i32>(conn)?)
}

/// Retrieves every day of a year, ascending by date.
///
/// # Errors
///
/// Returns an error if any day fails to load.
pub fn get_days_for_year(
    conn: &mut SqliteConnection,
    year: i32,
) -> Result<Vec<Day>, PersistenceError> {
    let rows: Vec<DayRow> = days::table
        .filter(days::year.eq(year))
        .order(days::date.asc())
        .select(DayRow::as_select())
        .load(conn)?;

    let mut result: Vec<Day> = Vec::with_capacity(rows.len());
    for row in &rows {
        result.push(load_day(conn, row)?);
    }
    Ok(result)
}
