//! Pricing engine: input normalization, validation and rent rules

mod property;
mod rates;
mod request;
mod engine;

pub use property::{normalize_type, PropertyType};
pub use rates::RateTable;
pub use request::{parse_answer, read_requests, QuoteRequest};
pub use engine::{parse_installments, validate_installments, PricingEngine};

// ============================================================================
// Contract Terms
// ============================================================================
// The real estate contract fee is the same for every property and is paid
// in equal installments alongside the first months of rent.

/// Total real estate contract fee (R$ 2.000,00)
pub const CONTRACT_TOTAL: f64 = 2000.00;

/// Maximum number of contract installments
pub const MAX_CONTRACT_INSTALLMENTS: u8 = 5;
