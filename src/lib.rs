//! Rent Budget - monthly rent quotes for apartments, houses and studios
//!
//! This library provides:
//! - Property-specific pricing rules (bedrooms, garage, children discount, parking)
//! - An immutable quote record with contract installment breakdown
//! - A 12-month payment schedule and its CSV export
//! - BRL currency formatting and a human-readable quote summary

pub mod error;
pub mod format;
pub mod pricing;
pub mod quote;
pub mod report;
pub mod schedule;

// Re-export commonly used types
pub use error::{QuoteError, Result};
pub use pricing::{PricingEngine, PropertyType, QuoteRequest, RateTable};
pub use quote::QuoteRecord;
pub use schedule::{generate, SchedulePeriod};
