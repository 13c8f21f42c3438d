//! Rent rate table
//!
//! Every monthly amount the pricing rules add up lives here. The defaults are
//! the published R.M rates; a JSON file may override any subset of them.

use crate::error::{QuoteError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Monthly rates and adjustments used by the pricing rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Base rent for a 1-bedroom apartment
    #[serde(default = "default_apartment_base")]
    pub apartment_base: f64,

    /// Surcharge for a 2-bedroom apartment
    #[serde(default = "default_apartment_second_bedroom")]
    pub apartment_second_bedroom: f64,

    /// Base rent for a 1-bedroom house
    #[serde(default = "default_house_base")]
    pub house_base: f64,

    /// Surcharge for a 2-bedroom house
    #[serde(default = "default_house_second_bedroom")]
    pub house_second_bedroom: f64,

    /// Garage surcharge (apartments and houses)
    #[serde(default = "default_garage")]
    pub garage: f64,

    /// Discount fraction for apartments explicitly without children (0.05 = 5%)
    #[serde(default = "default_child_free_discount")]
    pub apartment_child_free_discount: f64,

    /// Base rent for a studio
    #[serde(default = "default_studio_base")]
    pub studio_base: f64,

    /// Price of the minimum parking package (2 slots)
    #[serde(default = "default_studio_parking_package")]
    pub studio_parking_package: f64,

    /// Price of each slot beyond the package
    #[serde(default = "default_studio_extra_slot")]
    pub studio_extra_slot: f64,
}

fn default_apartment_base() -> f64 { 700.00 }
fn default_apartment_second_bedroom() -> f64 { 200.00 }
fn default_house_base() -> f64 { 900.00 }
fn default_house_second_bedroom() -> f64 { 250.00 }
fn default_garage() -> f64 { 300.00 }
fn default_child_free_discount() -> f64 { 0.05 }
fn default_studio_base() -> f64 { 1200.00 }
fn default_studio_parking_package() -> f64 { 250.00 }
fn default_studio_extra_slot() -> f64 { 60.00 }

impl Default for RateTable {
    fn default() -> Self {
        Self {
            apartment_base: 700.00,
            apartment_second_bedroom: 200.00,
            house_base: 900.00,
            house_second_bedroom: 250.00,
            garage: 300.00,
            apartment_child_free_discount: 0.05,
            studio_base: 1200.00,
            studio_parking_package: 250.00,
            studio_extra_slot: 60.00,
        }
    }
}

impl RateTable {
    /// Parse a rate table from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: RateTable = serde_json::from_str(json)
            .map_err(|e| QuoteError::invalid(format!("Tabela de valores inválida: {}", e)))?;
        table.validate()?;
        Ok(table)
    }

    /// Load a rate table from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading rate table from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        let amounts = [
            ("apartment_base", self.apartment_base),
            ("apartment_second_bedroom", self.apartment_second_bedroom),
            ("house_base", self.house_base),
            ("house_second_bedroom", self.house_second_bedroom),
            ("garage", self.garage),
            ("studio_base", self.studio_base),
            ("studio_parking_package", self.studio_parking_package),
            ("studio_extra_slot", self.studio_extra_slot),
        ];
        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(QuoteError::invalid(format!("{} deve ser um valor >= 0.", name)));
            }
        }
        let discount = self.apartment_child_free_discount;
        if !(0.0..=1.0).contains(&discount) {
            return Err(QuoteError::invalid(
                "apartment_child_free_discount deve estar entre 0 e 1.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_is_default() {
        let table = RateTable::from_json_str("{}").unwrap();
        assert_eq!(table, RateTable::default());
    }

    #[test]
    fn test_partial_override() {
        let table = RateTable::from_json_str(r#"{"garage": 350.0, "studio_extra_slot": 75.0}"#).unwrap();
        assert_eq!(table.garage, 350.0);
        assert_eq!(table.studio_extra_slot, 75.0);
        assert_eq!(table.apartment_base, 700.0);
        assert_eq!(table.studio_base, 1200.0);
    }

    #[test]
    fn test_rejects_negative_rate() {
        let err = RateTable::from_json_str(r#"{"house_base": -1.0}"#).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput(msg) if msg.contains("house_base")));
    }

    #[test]
    fn test_rejects_bad_discount_and_malformed_json() {
        assert!(matches!(
            RateTable::from_json_str(r#"{"apartment_child_free_discount": 1.5}"#),
            Err(QuoteError::InvalidInput(_))
        ));
        assert!(matches!(
            RateTable::from_json_str("{garage: 1"),
            Err(QuoteError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"apartment_base": 750.0}}"#).unwrap();
        let table = RateTable::from_json_file(file.path()).unwrap();
        assert_eq!(table.apartment_base, 750.0);

        let missing = RateTable::from_json_file("/nonexistent/dir/rates.json");
        assert!(matches!(missing, Err(QuoteError::IoFailure(_))));
    }
}
