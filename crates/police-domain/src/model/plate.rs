//! Plate - License plate value objects
//!
//! A `Plate` identifies one vehicle. `InvolvedPlates` is the delimited list
//! stored on an accident record ("BG-123,NS-456").

use serde::Serialize;

use super::error::{required, ValidationError};

/// A trimmed, non-empty license plate
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    /// Parse a plate from caller input
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Ok(Self(required("vehiclePlate", raw)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Plate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a plate is matched against an accident's involved plates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlateMatch {
    /// Substring containment on the raw field.
    ///
    /// Matches existing data, but "BG-12" also matches "BG-123".
    #[default]
    Substring,
    /// Exact membership in the parsed token list
    Token,
}

/// Plates involved in an accident, kept in their stored delimited form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvolvedPlates(String);

impl InvolvedPlates {
    /// Parse the delimited field; at least one plate is required
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = required("involvedPlates", raw)?;
        if tokens(&raw).next().is_none() {
            return Err(ValidationError::MissingField {
                field: "involvedPlates",
            });
        }
        Ok(Self(raw))
    }

    /// Build the stored form from individual plates
    pub fn from_plates(plates: &[Plate]) -> Result<Self, ValidationError> {
        let joined = plates
            .iter()
            .map(Plate::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Self::parse(&joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The individual plates, in stored order
    pub fn plates(&self) -> Vec<Plate> {
        tokens(&self.0).map(|t| Plate(t.to_string())).collect()
    }

    /// Does `plate` participate under the given matching policy?
    pub fn contains(&self, plate: &Plate, mode: PlateMatch) -> bool {
        match mode {
            PlateMatch::Substring => self.0.contains(plate.as_str()),
            PlateMatch::Token => tokens(&self.0).any(|t| t == plate.as_str()),
        }
    }
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}
