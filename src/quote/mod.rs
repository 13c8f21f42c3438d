//! Quote record produced by the pricing engine

mod record;

pub use record::QuoteRecord;
