//! Expand a quote into its monthly payments
//!
//! Rent is paid every month. The contract fee is paid only in the first N
//! months, N being the quote's installment count, and is zero afterwards.

use crate::format::round_cents;
use crate::quote::QuoteRecord;
use chrono::NaiveDate;

/// Number of months in a schedule
pub const SCHEDULE_PERIODS: u32 = 12;

/// One month of the payment schedule
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulePeriod {
    /// 1-based month number
    pub period: u32,
    pub monthly_rent: f64,
    /// Contract installment due this month, rounded to cents
    pub contract_installment: f64,
    /// Rent plus contract installment
    pub total: f64,
    /// Reference month as YYYY-MM
    pub reference_label: String,
}

/// Build the 12-month schedule for a quote
///
/// Every row carries the anchor date's month as its reference label; the
/// label is not advanced per period.
pub fn generate(quote: &QuoteRecord, anchor: NaiveDate) -> Vec<SchedulePeriod> {
    let installment = round_cents(quote.installment_amount());
    let installments = quote.contract_installments() as u32;
    let reference_label = anchor.format("%Y-%m").to_string();

    (1..=SCHEDULE_PERIODS)
        .map(|period| {
            let contract_installment = if period <= installments { installment } else { 0.0 };
            SchedulePeriod {
                period,
                monthly_rent: quote.monthly_rent(),
                contract_installment,
                total: quote.monthly_rent() + contract_installment,
                reference_label: reference_label.clone(),
            }
        })
        .collect()
}
