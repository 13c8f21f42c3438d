//! Caller-supplied quote inputs

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Inputs for one quote, as entered by the caller
///
/// Fields that do not apply to the chosen property type are ignored by the
/// engine (e.g., parking slots for a house).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Raw property type, resolved through the alias table
    pub property_type: String,

    /// Bedrooms (apartments and houses: 1 or 2)
    #[serde(default = "default_bedrooms")]
    pub bedrooms: i32,

    /// Garage requested (apartments and houses)
    #[serde(default)]
    pub has_garage: bool,

    /// Children in the household (apartments); None when not answered
    #[serde(default)]
    pub has_children: Option<bool>,

    /// Parking slots requested (studios)
    #[serde(default)]
    pub parking_slots: i32,

    /// Contract installments (1 to 5)
    #[serde(default = "default_installments")]
    pub installments: i32,
}

fn default_bedrooms() -> i32 { 1 }
fn default_installments() -> i32 { 1 }

impl QuoteRequest {
    /// Request with defaults for everything but the property type
    pub fn new(property_type: impl Into<String>) -> Self {
        Self {
            property_type: property_type.into(),
            bedrooms: 1,
            has_garage: false,
            has_children: None,
            parking_slots: 0,
            installments: 1,
        }
    }
}

/// Parse a yes/no answer (s/sim/y/yes/true or n/nao/não/no/false)
pub fn parse_answer(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "s" | "sim" | "y" | "yes" | "true" => Ok(true),
        "n" | "nao" | "não" | "no" | "false" => Ok(false),
        _ => Err(QuoteError::invalid("Resposta inválida. Digite 's' ou 'n'.")),
    }
}

/// Read `;`-separated quote requests with a header row
///
/// Each row keeps its own result so one malformed row does not hide the
/// others. Missing columns take the request defaults and an empty
/// `has_children` cell stays unanswered.
pub fn read_requests<R: Read>(reader: R) -> Vec<Result<QuoteRequest>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_reader(reader);
    rdr.deserialize()
        .map(|row| {
            row.map_err(|err| {
                if err.is_io_error() {
                    QuoteError::from(err)
                } else {
                    QuoteError::invalid(format!("Linha inválida: {}", err))
                }
            })
        })
        .collect()
}
