//! Units of measure for products and ingredients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit of measure, serialized with the API's short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    /// The wire code for this unit (`g`, `kg`, `l`, `ml`, `pcs`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Liter => "l",
            Self::Milliliter => "ml",
            Self::Piece => "pcs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error parsing a unit code.
#[derive(Debug, Error)]
#[error("unknown unit '{0}', expected one of: g, kg, l, ml, pcs")]
pub struct ParseUnitError(String);

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(Self::Gram),
            "kg" => Ok(Self::Kilogram),
            "l" => Ok(Self::Liter),
            "ml" => Ok(Self::Milliliter),
            "pcs" => Ok(Self::Piece),
            other => Err(ParseUnitError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_wire_codes() {
        assert_eq!(serde_json::to_string(&Unit::Kilogram).ok().as_deref(), Some("\"kg\""));
        let unit: Unit = serde_json::from_str("\"pcs\"").expect("valid unit");
        assert_eq!(unit, Unit::Piece);
    }

    #[test]
    fn test_unit_parse_rejects_unknown() {
        assert!("bags".parse::<Unit>().is_err());
    }
}
