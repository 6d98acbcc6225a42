// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Liturgical calendar file loading.
//!
//! The calendar ships as a JSON file listing each day, its liturgical
//! celebration and the element types of every hour:
//!
//! ```json
//! [
//!   {
//!     "fecha": "2025-01-06",
//!     "idLiturgico": "epifania",
//!     "horas": {
//!       "laudes": ["himno", "antifona_salmo_1", "salmo_1", "oracion"],
//!       "visperas": ["himno", "oracion"]
//!     }
//!   }
//! ]
//! ```
//!
//! Hour order inside `horas` is the celebration order and is preserved
//! through seeding and day views.

use horas_domain::{CalendarDate, DayStructure, ElementType, HourName, HourStructure};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a calendar file.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Failed to read calendar file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse calendar JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid calendar entry for '{date}': {message}")]
    InvalidEntry { date: String, message: String },
}

#[derive(Debug, Deserialize)]
struct CalendarDayFile {
    fecha: String,
    #[serde(rename = "idLiturgico")]
    id_liturgico: String,
    // serde_json's preserve_order keeps hours in file order.
    horas: serde_json::Map<String, serde_json::Value>,
}

/// Loads and validates a calendar file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or
/// names an unknown hour, element type or date.
pub fn load_calendar<P: AsRef<Path>>(path: P) -> Result<Vec<DayStructure>, CalendarError> {
    let contents = std::fs::read_to_string(path)?;
    parse_calendar(&contents)
}

/// Parses calendar JSON into day structures.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or any entry fails
/// validation.
pub fn parse_calendar(contents: &str) -> Result<Vec<DayStructure>, CalendarError> {
    let days: Vec<CalendarDayFile> = serde_json::from_str(contents)?;

    days.into_iter()
        .map(|day| {
            let date =
                CalendarDate::parse(&day.fecha).map_err(|e| CalendarError::InvalidEntry {
                    date: day.fecha.clone(),
                    message: e.to_string(),
                })?;

            let mut hours: Vec<HourStructure> = Vec::with_capacity(day.horas.len());
            for (hour_name, element_list) in &day.horas {
                let name =
                    HourName::parse_str(hour_name).map_err(|e| CalendarError::InvalidEntry {
                        date: day.fecha.clone(),
                        message: e.to_string(),
                    })?;

                let raw_elements =
                    element_list
                        .as_array()
                        .ok_or_else(|| CalendarError::InvalidEntry {
                            date: day.fecha.clone(),
                            message: format!("Hour '{hour_name}' is not an array"),
                        })?;

                let mut element_types: Vec<ElementType> = Vec::with_capacity(raw_elements.len());
                for value in raw_elements {
                    let type_str = value.as_str().ok_or_else(|| CalendarError::InvalidEntry {
                        date: day.fecha.clone(),
                        message: format!("Element in hour '{hour_name}' is not a string"),
                    })?;
                    element_types.push(ElementType::parse_str(type_str).map_err(|e| {
                        CalendarError::InvalidEntry {
                            date: day.fecha.clone(),
                            message: e.to_string(),
                        }
                    })?);
                }

                hours.push(HourStructure {
                    name,
                    element_types,
                });
            }

            Ok(DayStructure {
                date,
                liturgical_id: day.id_liturgico,
                hours,
            })
        })
        .collect()
}
