// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the canonical hours tracked for a liturgical day.
///
/// Mass is included alongside the office hours because its propers go
/// through the same review cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HourName {
    OfficeOfReadings,
    Lauds,
    Terce,
    Sext,
    None,
    Vespers,
    Compline,
    Mass,
}

impl HourName {
    /// Canonical display order of the hours within a day.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::OfficeOfReadings,
            Self::Lauds,
            Self::Terce,
            Self::Sext,
            Self::None,
            Self::Vespers,
            Self::Compline,
            Self::Mass,
        ]
    }

    /// Returns the wire representation of the hour.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OfficeOfReadings => "oficio_de_lecturas",
            Self::Lauds => "laudes",
            Self::Terce => "tercia",
            Self::Sext => "sexta",
            Self::None => "nona",
            Self::Vespers => "visperas",
            Self::Compline => "completas",
            Self::Mass => "misa",
        }
    }

    /// Parses an hour from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHourName` if the string is not one
    /// of the canonical hours.
    pub fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "oficio_de_lecturas" => Ok(Self::OfficeOfReadings),
            "laudes" => Ok(Self::Lauds),
            "tercia" => Ok(Self::Terce),
            "sexta" => Ok(Self::Sext),
            "nona" => Ok(Self::None),
            "visperas" => Ok(Self::Vespers),
            "completas" => Ok(Self::Compline),
            "misa" => Ok(Self::Mass),
            _ => Err(DomainError::InvalidHourName {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for HourName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HourName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl TryFrom<String> for HourName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_str(&s)
    }
}

impl From<HourName> for String {
    fn from(hour: HourName) -> Self {
        hour.as_str().to_string()
    }
}
