// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Review status of a single liturgical element.
///
/// Elements start unset and move through the traffic-light states as
/// reviewers work. On the wire and in storage the unset state is the
/// empty string; the set states use their Spanish names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReviewStatus {
    /// Not yet reviewed.
    #[default]
    Unset,
    /// Reviewed and correct.
    Green,
    /// Reviewed with minor issues.
    Yellow,
    /// Reviewed with serious issues.
    Red,
}

impl ReviewStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Green => "verde",
            Self::Yellow => "amarillo",
            Self::Red => "rojo",
        }
    }

    /// Parses a status from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not one of
    /// the known status values.
    pub fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "" => Ok(Self::Unset),
            "verde" => Ok(Self::Green),
            "amarillo" => Ok(Self::Yellow),
            "rojo" => Ok(Self::Red),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns `true` once a reviewer has recorded a verdict.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl TryFrom<String> for ReviewStatus {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_str(&s)
    }
}

impl From<ReviewStatus> for String {
    fn from(status: ReviewStatus) -> Self {
        status.as_str().to_string()
    }
}
