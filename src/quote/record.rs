use crate::pricing::PropertyType;
use serde::Serialize;
use std::fmt;

/// A priced rent quote
///
/// Built once by [`crate::PricingEngine::compute`] after validation and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRecord {
    property_type: PropertyType,
    /// 0 for studios
    bedrooms: u8,
    has_garage: bool,
    /// Only kept for apartments
    has_children: Option<bool>,
    /// 0 unless studio
    parking_slots: u32,
    monthly_rent: f64,
    contract_total: f64,
    contract_installments: u8,
}

impl QuoteRecord {
    /// Fields must already satisfy the record invariants
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        property_type: PropertyType,
        bedrooms: u8,
        has_garage: bool,
        has_children: Option<bool>,
        parking_slots: u32,
        monthly_rent: f64,
        contract_total: f64,
        contract_installments: u8,
    ) -> Self {
        debug_assert!(bedrooms <= 2);
        debug_assert!((1..=crate::pricing::MAX_CONTRACT_INSTALLMENTS).contains(&contract_installments));
        debug_assert!(monthly_rent >= 0.0);
        Self {
            property_type,
            bedrooms,
            has_garage,
            has_children,
            parking_slots,
            monthly_rent,
            contract_total,
            contract_installments,
        }
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn bedrooms(&self) -> u8 {
        self.bedrooms
    }

    pub fn has_garage(&self) -> bool {
        self.has_garage
    }

    /// `None` means the question was not answered, which is not the same as `Some(false)`
    pub fn has_children(&self) -> Option<bool> {
        self.has_children
    }

    pub fn parking_slots(&self) -> u32 {
        self.parking_slots
    }

    pub fn monthly_rent(&self) -> f64 {
        self.monthly_rent
    }

    pub fn contract_total(&self) -> f64 {
        self.contract_total
    }

    pub fn contract_installments(&self) -> u8 {
        self.contract_installments
    }

    /// Contract fee per installment, unrounded
    pub fn installment_amount(&self) -> f64 {
        self.contract_total / self.contract_installments as f64
    }
}

impl fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::report::summary(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::CONTRACT_TOTAL;

    #[test]
    fn test_installment_amount_is_exact() {
        for n in 1..=5u8 {
            let quote = QuoteRecord::new(PropertyType::Studio, 0, false, None, 0, 1200.0, CONTRACT_TOTAL, n);
            assert_eq!(quote.installment_amount() * n as f64, CONTRACT_TOTAL);
        }
    }

    #[test]
    fn test_installment_amount_unrounded() {
        let quote = QuoteRecord::new(PropertyType::House, 1, false, None, 0, 900.0, CONTRACT_TOTAL, 3);
        approx::assert_relative_eq!(quote.installment_amount(), 666.666_666_666_666_6, epsilon = 1e-9);
        assert_ne!(quote.installment_amount(), 666.67);
    }
}
