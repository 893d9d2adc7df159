//! Normalized price record

use serde::{Deserialize, Serialize};

/// One product row taken from a price file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Product name exactly as it appears in the file
    pub name: String,
    /// Package price
    pub price: f64,
    /// Package weight
    pub weight: f64,
    /// Base name of the file the row came from
    pub source_file: String,
    /// Price per unit of weight, fixed at construction
    pub unit_price: f64,
}

impl Record {
    /// Create a record, deriving the unit price
    pub fn new(
        name: impl Into<String>,
        price: f64,
        weight: f64,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            weight,
            source_file: source_file.into(),
            unit_price: price / weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price_derived() {
        let record = Record::new("говядина", 450.0, 1.5, "price_0.csv");
        assert_eq!(record.unit_price, 450.0 / 1.5);
        assert_eq!(record.source_file, "price_0.csv");
    }

    #[test]
    fn test_name_kept_verbatim() {
        let record = Record::new("  Мясо Кур ", 100.0, 2.0, "price_1.csv");
        assert_eq!(record.name, "  Мясо Кур ");
    }
}
