//! Rent rules per property type

use super::{normalize_type, PropertyType, QuoteRequest, RateTable, CONTRACT_TOTAL, MAX_CONTRACT_INSTALLMENTS};
use crate::error::{QuoteError, Result};
use crate::quote::QuoteRecord;
use log::debug;

/// Slots included in the studio parking package
const STUDIO_PACKAGE_SLOTS: i32 = 2;

/// Check the contract installment count (1 to 5)
pub fn validate_installments(installments: i32) -> Result<u8> {
    if !(1..=MAX_CONTRACT_INSTALLMENTS as i32).contains(&installments) {
        return Err(QuoteError::invalid(format!(
            "Parcelas do contrato deve ser entre 1 e {}.",
            MAX_CONTRACT_INSTALLMENTS
        )));
    }
    Ok(installments as u8)
}

/// Parse and check a textual installment count; rejects non-integers like "2.5"
pub fn parse_installments(raw: &str) -> Result<u8> {
    let installments: i32 = raw
        .trim()
        .parse()
        .map_err(|_| QuoteError::invalid("Parcelas do contrato deve ser um número inteiro."))?;
    validate_installments(installments)
}

fn validate_bedrooms(property_type: PropertyType, bedrooms: i32) -> Result<u8> {
    match bedrooms {
        1 | 2 => Ok(bedrooms as u8),
        _ => Err(QuoteError::invalid(format!(
            "{}: quartos deve ser 1 ou 2.",
            property_type
        ))),
    }
}

/// Prices quotes from a rate table
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rates: RateTable,
}

impl PricingEngine {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Monthly rent for an apartment
    ///
    /// The child-free discount applies only when `has_children` is
    /// `Some(false)`; an unanswered question gets no discount.
    pub fn compute_apartment(&self, bedrooms: i32, has_garage: bool, has_children: Option<bool>) -> Result<f64> {
        validate_bedrooms(PropertyType::Apartment, bedrooms)?;
        let mut rent = self.rates.apartment_base;
        if bedrooms == 2 {
            rent += self.rates.apartment_second_bedroom;
        }
        if has_garage {
            rent += self.rates.garage;
        }
        if has_children == Some(false) {
            rent *= 1.0 - self.rates.apartment_child_free_discount;
        }
        Ok(rent)
    }

    /// Monthly rent for a house
    pub fn compute_house(&self, bedrooms: i32, has_garage: bool) -> Result<f64> {
        validate_bedrooms(PropertyType::House, bedrooms)?;
        let mut rent = self.rates.house_base;
        if bedrooms == 2 {
            rent += self.rates.house_second_bedroom;
        }
        if has_garage {
            rent += self.rates.garage;
        }
        Ok(rent)
    }

    /// Monthly rent for a studio
    ///
    /// Parking is sold as a 2-slot package, so 1 slot costs the same as 2.
    /// Each slot past the package adds the extra-slot rate.
    pub fn compute_studio(&self, parking_slots: i32) -> Result<f64> {
        if parking_slots < 0 {
            return Err(QuoteError::invalid("Estudio: vagas deve ser um inteiro >= 0."));
        }
        let rent = self.rates.studio_base;
        if parking_slots == 0 {
            return Ok(rent);
        }
        let extras = (parking_slots - STUDIO_PACKAGE_SLOTS).max(0);
        Ok(rent + self.rates.studio_parking_package + extras as f64 * self.rates.studio_extra_slot)
    }

    /// Validate a request and price it
    pub fn compute(&self, request: &QuoteRequest) -> Result<QuoteRecord> {
        let property_type = normalize_type(&request.property_type)?;
        let installments = validate_installments(request.installments)?;

        let quote = match property_type {
            PropertyType::Apartment => {
                let rent = self.compute_apartment(request.bedrooms, request.has_garage, request.has_children)?;
                QuoteRecord::new(
                    property_type,
                    request.bedrooms as u8,
                    request.has_garage,
                    request.has_children,
                    0,
                    rent,
                    CONTRACT_TOTAL,
                    installments,
                )
            }
            PropertyType::House => {
                let rent = self.compute_house(request.bedrooms, request.has_garage)?;
                QuoteRecord::new(
                    property_type,
                    request.bedrooms as u8,
                    request.has_garage,
                    None,
                    0,
                    rent,
                    CONTRACT_TOTAL,
                    installments,
                )
            }
            PropertyType::Studio => {
                let rent = self.compute_studio(request.parking_slots)?;
                QuoteRecord::new(
                    property_type,
                    0,
                    false,
                    None,
                    request.parking_slots as u32,
                    rent,
                    CONTRACT_TOTAL,
                    installments,
                )
            }
        };

        debug!(
            "Priced {} quote: rent={:.2}, installments={}",
            quote.property_type(),
            quote.monthly_rent(),
            quote.contract_installments()
        );
        Ok(quote)
    }
}
