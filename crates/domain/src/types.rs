// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity graph for a liturgical day.
//!
//! A `Day` owns `Hour`s which own `Element`s. The structure of a day is
//! fixed at seeding time from the calendar definition; only each
//! element's status and observations change afterwards.

use crate::calendar_date::CalendarDate;
use crate::element::ElementType;
use crate::error::DomainError;
use crate::hour::HourName;
use crate::review_status::ReviewStatus;
use serde::{Deserialize, Serialize};

/// A reviewable text element within an hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub element_type: ElementType,
    /// Zero-based position within the owning hour.
    pub index: u32,
    pub status: ReviewStatus,
    pub observations: String,
}

impl Element {
    /// Creates an unreviewed element.
    #[must_use]
    pub const fn new(element_type: ElementType, index: u32) -> Self {
        Self {
            element_type,
            index,
            status: ReviewStatus::Unset,
            observations: String::new(),
        }
    }
}

/// A canonical hour and its elements, in celebration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hour {
    pub name: HourName,
    pub elements: Vec<Element>,
}

impl Hour {
    #[must_use]
    pub const fn new(name: HourName, elements: Vec<Element>) -> Self {
        Self { name, elements }
    }
}

/// A liturgical day with its review state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: CalendarDate,
    /// Identifier of the liturgical celebration, e.g. `"epifania"`.
    pub liturgical_id: String,
    pub hours: Vec<Hour>,
}

impl Day {
    #[must_use]
    pub const fn new(date: CalendarDate, liturgical_id: String, hours: Vec<Hour>) -> Self {
        Self {
            date,
            liturgical_id,
            hours,
        }
    }

    /// Looks up an hour by name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::HourNotFound` if the day does not contain
    /// the hour.
    pub fn hour(&self, name: HourName) -> Result<&Hour, DomainError> {
        self.hours
            .iter()
            .find(|h| h.name == name)
            .ok_or_else(|| DomainError::HourNotFound {
                date: self.date.to_string(),
                hour: name.as_str().to_string(),
            })
    }

    /// Looks up an element by hour name and position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::HourNotFound` or
    /// `DomainError::ElementNotFound` when the coordinates do not
    /// resolve.
    pub fn element(&self, hour: HourName, index: u32) -> Result<&Element, DomainError> {
        let found = self.hour(hour)?;
        found
            .elements
            .iter()
            .find(|e| e.index == index)
            .ok_or_else(|| DomainError::ElementNotFound {
                date: self.date.to_string(),
                hour: hour.as_str().to_string(),
                index,
            })
    }

    /// Mutable variant of [`Day::element`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::HourNotFound` or
    /// `DomainError::ElementNotFound` when the coordinates do not
    /// resolve.
    pub fn element_mut(&mut self, hour: HourName, index: u32) -> Result<&mut Element, DomainError> {
        let date = self.date.to_string();
        let found = self
            .hours
            .iter_mut()
            .find(|h| h.name == hour)
            .ok_or_else(|| DomainError::HourNotFound {
                date: date.clone(),
                hour: hour.as_str().to_string(),
            })?;
        found
            .elements
            .iter_mut()
            .find(|e| e.index == index)
            .ok_or_else(|| DomainError::ElementNotFound {
                date,
                hour: hour.as_str().to_string(),
                index,
            })
    }

    /// Total number of elements across all hours.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.hours.iter().map(|h| h.elements.len()).sum()
    }
}

/// Calendar definition of one hour: the element types it contains, in
/// celebration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourStructure {
    pub name: HourName,
    pub element_types: Vec<ElementType>,
}

/// Calendar definition of one day, before any review state exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStructure {
    pub date: CalendarDate,
    pub liturgical_id: String,
    pub hours: Vec<HourStructure>,
}

impl DayStructure {
    /// Materializes the structure into a day with every element unset.
    #[must_use]
    pub fn into_day(self) -> Day {
        let hours = self
            .hours
            .into_iter()
            .map(|h| {
                let elements = h
                    .element_types
                    .into_iter()
                    .enumerate()
                    .map(|(i, element_type)| {
                        Element::new(element_type, u32::try_from(i).unwrap_or(u32::MAX))
                    })
                    .collect();
                Hour::new(h.name, elements)
            })
            .collect();
        Day::new(self.date, self.liturgical_id, hours)
    }
}
