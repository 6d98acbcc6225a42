// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of liturgical text an element carries.
///
/// Biennial variants exist for readings and responsories that alternate
/// between the two-year cycle of the Office of Readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ElementType {
    InvitatoryAntiphon,
    Hymn,
    PsalmAntiphon1,
    Psalm1,
    PsalmAntiphon2,
    Psalm2,
    PsalmAntiphon3,
    Psalm3,
    Versicle,
    Reading1,
    Reading1Biennial,
    Responsory1,
    Responsory1Biennial,
    Reading2,
    Reading2Biennial,
    Responsory2,
    Responsory2Biennial,
    Prayer,
}

impl ElementType {
    /// Returns the wire representation of the element type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvitatoryAntiphon => "antifona_invitatorio",
            Self::Hymn => "himno",
            Self::PsalmAntiphon1 => "antifona_salmo_1",
            Self::Psalm1 => "salmo_1",
            Self::PsalmAntiphon2 => "antifona_salmo_2",
            Self::Psalm2 => "salmo_2",
            Self::PsalmAntiphon3 => "antifona_salmo_3",
            Self::Psalm3 => "salmo_3",
            Self::Versicle => "versiculo",
            Self::Reading1 => "lectura_1",
            Self::Reading1Biennial => "lectura_1_bienal",
            Self::Responsory1 => "responsorio_1",
            Self::Responsory1Biennial => "responsorio_1_bienal",
            Self::Reading2 => "lectura_2",
            Self::Reading2Biennial => "lectura_2_bienal",
            Self::Responsory2 => "responsorio_2",
            Self::Responsory2Biennial => "responsorio_2_bienal",
            Self::Prayer => "oracion",
        }
    }

    /// Parses an element type from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidElementType` if the string is not a
    /// known element type.
    pub fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "antifona_invitatorio" => Ok(Self::InvitatoryAntiphon),
            "himno" => Ok(Self::Hymn),
            "antifona_salmo_1" => Ok(Self::PsalmAntiphon1),
            "salmo_1" => Ok(Self::Psalm1),
            "antifona_salmo_2" => Ok(Self::PsalmAntiphon2),
            "salmo_2" => Ok(Self::Psalm2),
            "antifona_salmo_3" => Ok(Self::PsalmAntiphon3),
            "salmo_3" => Ok(Self::Psalm3),
            "versiculo" => Ok(Self::Versicle),
            "lectura_1" => Ok(Self::Reading1),
            "lectura_1_bienal" => Ok(Self::Reading1Biennial),
            "responsorio_1" => Ok(Self::Responsory1),
            "responsorio_1_bienal" => Ok(Self::Responsory1Biennial),
            "lectura_2" => Ok(Self::Reading2),
            "lectura_2_bienal" => Ok(Self::Reading2Biennial),
            "responsorio_2" => Ok(Self::Responsory2),
            "responsorio_2_bienal" => Ok(Self::Responsory2Biennial),
            "oracion" => Ok(Self::Prayer),
            _ => Err(DomainError::InvalidElementType {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl TryFrom<String> for ElementType {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_str(&s)
    }
}

impl From<ElementType> for String {
    fn from(element_type: ElementType) -> Self {
        element_type.as_str().to_string()
    }
}
