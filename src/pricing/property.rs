//! Property types and the alias table used to recognize them

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of property being quoted; selects the pricing rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
}

/// Accepted spellings, compared after trimming and lowercasing
const ALIASES: &[(&str, PropertyType)] = &[
    ("apartamento", PropertyType::Apartment),
    ("apto", PropertyType::Apartment),
    ("casa", PropertyType::House),
    ("estudio", PropertyType::Studio),
    ("estúdio", PropertyType::Studio),
    ("studio", PropertyType::Studio),
];

/// Resolve a user-supplied property type string
pub fn normalize_type(raw: &str) -> Result<PropertyType> {
    let key = raw.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|&(_, property_type)| property_type)
        .ok_or_else(|| QuoteError::invalid("Tipo inválido. Use: Apartamento, Casa ou Estudio."))
}

impl PropertyType {
    /// Label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartamento",
            PropertyType::House => "Casa",
            PropertyType::Studio => "Estudio",
        }
    }

    /// Whether bedroom count and garage apply to this type
    pub fn has_rooms(&self) -> bool {
        matches!(self, PropertyType::Apartment | PropertyType::House)
    }
}

impl FromStr for PropertyType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        normalize_type(s)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
