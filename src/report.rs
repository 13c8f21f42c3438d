//! Human-readable quote summary

use crate::format::format_brl;
use crate::pricing::PropertyType;
use crate::quote::QuoteRecord;

fn yes_no(value: bool) -> &'static str {
    if value { "Sim" } else { "Não" }
}

/// Render a quote as a fixed-order label/value report
pub fn summary(quote: &QuoteRecord) -> String {
    let property_type = quote.property_type();
    let mut lines = vec![
        "==== RESUMO DO ORÇAMENTO ====".to_string(),
        format!("Tipo do imóvel: {}", property_type),
    ];

    if property_type == PropertyType::Studio {
        lines.push("Quartos: (não aplicável)".to_string());
    } else {
        lines.push(format!("Quartos: {}", quote.bedrooms()));
    }

    if property_type.has_rooms() {
        lines.push(format!("Garagem: {}", yes_no(quote.has_garage())));
    }

    // Only shown when the question was answered
    if property_type == PropertyType::Apartment {
        if let Some(has_children) = quote.has_children() {
            lines.push(format!("Possui crianças: {}", yes_no(has_children)));
        }
    }

    if property_type == PropertyType::Studio {
        lines.push(format!("Vagas (estacionamento): {}", quote.parking_slots()));
    }

    lines.push(format!("Aluguel mensal orçado: {}", format_brl(quote.monthly_rent())));
    lines.push(format!("Contrato imobiliário: {}", format_brl(quote.contract_total())));
    lines.push(format!(
        "Parcelamento do contrato: {}x de {}",
        quote.contract_installments(),
        format_brl(quote.installment_amount())
    ));
    lines.push("=============================".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PricingEngine, QuoteRequest};

    fn quote(request: QuoteRequest) -> QuoteRecord {
        PricingEngine::default().compute(&request).unwrap()
    }

    #[test]
    fn test_apartment_summary() {
        let quote = quote(QuoteRequest {
            bedrooms: 2,
            has_garage: true,
            has_children: Some(false),
            installments: 3,
            ..QuoteRequest::new("apto")
        });
        let expected = "\
==== RESUMO DO ORÇAMENTO ====
Tipo do imóvel: Apartamento
Quartos: 2
Garagem: Sim
Possui crianças: Não
Aluguel mensal orçado: R$ 1.140,00
Contrato imobiliário: R$ 2.000,00
Parcelamento do contrato: 3x de R$ 666,67
=============================";
        assert_eq!(summary(&quote), expected);
        assert_eq!(quote.to_string(), expected);
    }

    #[test]
    fn test_unknown_children_line_omitted() {
        let quote = quote(QuoteRequest::new("Apartamento"));
        let text = summary(&quote);
        assert!(!text.contains("Possui crianças"));
        assert!(text.contains("Garagem: Não"));
    }

    #[test]
    fn test_house_summary_has_no_children_line() {
        let quote = quote(QuoteRequest {
            has_children: Some(true),
            ..QuoteRequest::new("casa")
        });
        let text = summary(&quote);
        assert!(text.contains("Tipo do imóvel: Casa"));
        assert!(text.contains("Quartos: 1"));
        assert!(!text.contains("Possui crianças"));
        assert!(!text.contains("Vagas"));
    }

    #[test]
    fn test_studio_summary() {
        let quote = quote(QuoteRequest {
            parking_slots: 3,
            installments: 5,
            ..QuoteRequest::new("studio")
        });
        let expected = "\
==== RESUMO DO ORÇAMENTO ====
Tipo do imóvel: Estudio
Quartos: (não aplicável)
Vagas (estacionamento): 3
Aluguel mensal orçado: R$ 1.510,00
Contrato imobiliário: R$ 2.000,00
Parcelamento do contrato: 5x de R$ 400,00
=============================";
        assert_eq!(summary(&quote), expected);
    }
}
