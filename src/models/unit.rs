use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical dimension a unit measures. Conversion only happens within one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Mass,
    Volume,
    Count,
}

/// Unit of measure for ingredient amounts and packaging sizes.
///
/// Unrecognised spellings are kept verbatim as `Other` and only convert to
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    Gram,
    Kilogram,
    Millilitre,
    Litre,
    #[default]
    Piece,
    Other(String),
}

impl Unit {
    /// Parse a unit spelling (case-insensitive). Empty input means pieces.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "g" | "gr" | "gramm" | "gram" => Unit::Gram,
            "kg" | "kilo" | "kilogramm" => Unit::Kilogram,
            "ml" => Unit::Millilitre,
            "l" | "liter" | "litre" => Unit::Litre,
            "" | "pcs" | "pc" | "stk" | "stück" | "piece" | "pieces" => Unit::Piece,
            _ => Unit::Other(trimmed.to_string()),
        }
    }

    /// Dimension and factor to that dimension's base unit (g, ml, pcs).
    fn base(&self) -> Option<(Dimension, f64)> {
        match self {
            Unit::Gram => Some((Dimension::Mass, 1.0)),
            Unit::Kilogram => Some((Dimension::Mass, 1000.0)),
            Unit::Millilitre => Some((Dimension::Volume, 1.0)),
            Unit::Litre => Some((Dimension::Volume, 1000.0)),
            Unit::Piece => Some((Dimension::Count, 1.0)),
            Unit::Other(_) => None,
        }
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.base().map(|(dim, _)| dim)
    }

    /// Convert `amount` expressed in `self` into `target`.
    ///
    /// Returns `None` when the units measure different dimensions or when a
    /// free-form unit is involved and the spellings differ.
    pub fn convert(&self, amount: f64, target: &Unit) -> Option<f64> {
        if self == target {
            return Some(amount);
        }
        let (from_dim, from_factor) = self.base()?;
        let (to_dim, to_factor) = target.base()?;
        if from_dim != to_dim {
            return None;
        }
        Some(amount * from_factor / to_factor)
    }

    pub fn symbol(&self) -> &str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Millilitre => "ml",
            Unit::Litre => "l",
            Unit::Piece => "pcs",
            Unit::Other(s) => s,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<String> for Unit {
    fn from(raw: String) -> Self {
        Unit::parse(&raw)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spellings() {
        assert_eq!(Unit::parse("KG"), Unit::Kilogram);
        assert_eq!(Unit::parse(" Stk "), Unit::Piece);
        assert_eq!(Unit::parse(""), Unit::Piece);
        assert_eq!(Unit::parse("Liter"), Unit::Litre);
        assert_eq!(Unit::parse("Bund"), Unit::Other("Bund".to_string()));
    }

    #[test]
    fn test_convert_same_dimension() {
        assert_eq!(Unit::Kilogram.convert(2.5, &Unit::Gram), Some(2500.0));
        assert_eq!(Unit::Millilitre.convert(250.0, &Unit::Litre), Some(0.25));
    }

    #[test]
    fn test_convert_across_dimensions_fails() {
        assert_eq!(Unit::Kilogram.convert(1.0, &Unit::Litre), None);
        assert_eq!(Unit::Piece.convert(1.0, &Unit::Gram), None);
        assert_eq!(Unit::Litre.dimension(), Some(Dimension::Volume));
        assert_eq!(Unit::parse("Bund").dimension(), None);
    }

    #[test]
    fn test_other_units_only_convert_to_themselves() {
        let bund = Unit::parse("Bund");
        assert_eq!(bund.convert(3.0, &Unit::parse("Bund")), Some(3.0));
        assert_eq!(bund.convert(3.0, &Unit::Piece), None);
    }

    #[test]
    fn test_serde_uses_symbol() {
        let json = serde_json::to_string(&Unit::Kilogram).unwrap();
        assert_eq!(json, "\"kg\"");
        let back: Unit = serde_json::from_str("\"Gramm\"").unwrap();
        assert_eq!(back, Unit::Gram);
    }
}
