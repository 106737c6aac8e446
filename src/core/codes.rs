//! Static code tables used when rendering.
//!
//! The tables are immutable and compiled in. Lookups that can miss fall
//! back to the generic code of their list (payment means "1", tax category
//! "S").

use super::types::{DocumentType, PaymentType, TaxCategory, UnitCode};

/// Payment means code used when no payment type is set.
pub const DEFAULT_PAYMENT_CODE: &str = "1";

/// Tax category code used when a category has no entry for a version.
pub const DEFAULT_TAX_CATEGORY_CODE: &str = "S";

/// UNTDID 4461 payment means codes.
static PAYMENT_CODES: &[(PaymentType, &str)] = &[
    (PaymentType::BankTransfer, "58"),
    (PaymentType::Card, "48"),
    (PaymentType::Cash, "10"),
    (PaymentType::Cheque, "20"),
    (PaymentType::DirectDebit, "59"),
];

/// Tax category codes of the ZUGFeRD 1.0 comfort profile.
static TAX_CATEGORY_CODES_V1: &[(TaxCategory, &str)] = &[
    (TaxCategory::StandardRate, "S"),
    (TaxCategory::ReverseCharge, "AE"),
    (TaxCategory::TaxExempt, "E"),
    (TaxCategory::ZeroTaxProducts, "Z"),
    (TaxCategory::UntaxedService, "O"),
    (TaxCategory::IntraCommunity, "IC"),
];

/// UNTDID 5305 tax category codes (EN 16931).
static TAX_CATEGORY_CODES_V2: &[(TaxCategory, &str)] = &[
    (TaxCategory::StandardRate, "S"),
    (TaxCategory::ReverseCharge, "AE"),
    (TaxCategory::TaxExempt, "E"),
    (TaxCategory::ZeroTaxProducts, "Z"),
    (TaxCategory::UntaxedService, "O"),
    (TaxCategory::IntraCommunity, "K"),
];

static TAX_EXEMPTION_REASONS: &[(TaxCategory, &str)] = &[
    (TaxCategory::ReverseCharge, "Reverse Charge"),
    (TaxCategory::IntraCommunity, "Intra-community transaction"),
];

/// UNTDID 1001 document type codes with the label printed by ZUGFeRD 1.0.
static DOCUMENT_TYPES: &[(DocumentType, &str, &str)] = &[
    (DocumentType::Invoice, "RECHNUNG", "380"),
    (DocumentType::CreditNote, "GUTSCHRIFTSANZEIGE", "381"),
];

/// UN/ECE Recommendation 20 unit codes.
static UNIT_CODES: &[(UnitCode, &str)] = &[
    (UnitCode::Piece, "C62"),
    (UnitCode::Day, "DAY"),
    (UnitCode::Hectare, "HAR"),
    (UnitCode::Hour, "HUR"),
    (UnitCode::Kilogram, "KGM"),
    (UnitCode::Kilometer, "KTM"),
    (UnitCode::KilowattHour, "KWH"),
    (UnitCode::LumpSum, "LS"),
    (UnitCode::Minute, "MIN"),
    (UnitCode::SquareMillimeter, "MMK"),
    (UnitCode::Millimeter, "MMT"),
    (UnitCode::SquareMeter, "MTK"),
    (UnitCode::CubicMeter, "MTQ"),
    (UnitCode::Meter, "MTR"),
    (UnitCode::ProductCount, "NAR"),
    (UnitCode::ProductPair, "NPR"),
    (UnitCode::Percent, "P1"),
    (UnitCode::Set, "SET"),
    (UnitCode::Liter, "LTR"),
    (UnitCode::Ton, "TNE"),
    (UnitCode::Week, "WEE"),
];

fn lookup<K: PartialEq + Copy>(table: &'static [(K, &'static str)], key: K) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Payment means code for an optional payment type.
pub fn payment_code(payment_type: Option<PaymentType>) -> &'static str {
    payment_type
        .and_then(|t| lookup(PAYMENT_CODES, t))
        .unwrap_or(DEFAULT_PAYMENT_CODE)
}

/// ZUGFeRD 1.0 tax category code.
pub fn tax_category_code_v1(category: TaxCategory) -> &'static str {
    lookup(TAX_CATEGORY_CODES_V1, category).unwrap_or(DEFAULT_TAX_CATEGORY_CODE)
}

/// EN 16931 tax category code.
pub fn tax_category_code_v2(category: TaxCategory) -> &'static str {
    lookup(TAX_CATEGORY_CODES_V2, category).unwrap_or(DEFAULT_TAX_CATEGORY_CODE)
}

/// Default exemption reason text for a category, if it has one.
pub fn default_exemption_reason(category: TaxCategory) -> Option<&'static str> {
    lookup(TAX_EXEMPTION_REASONS, category)
}

/// Human readable label of a document type.
pub fn document_label(document_type: DocumentType) -> &'static str {
    DOCUMENT_TYPES
        .iter()
        .find(|(t, _, _)| *t == document_type)
        .map_or("RECHNUNG", |(_, label, _)| *label)
}

/// Numeric type code of a document type.
pub fn document_type_code(document_type: DocumentType) -> &'static str {
    DOCUMENT_TYPES
        .iter()
        .find(|(t, _, _)| *t == document_type)
        .map_or("380", |(_, _, code)| *code)
}

/// Unit of measure code.
pub fn unit_code(unit: UnitCode) -> &'static str {
    lookup(UNIT_CODES, unit).unwrap_or("C62")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_code_defaults_to_one() {
        assert_eq!(payment_code(None), "1");
        assert_eq!(payment_code(Some(PaymentType::BankTransfer)), "58");
        assert_eq!(payment_code(Some(PaymentType::DirectDebit)), "59");
    }

    #[test]
    fn intra_community_code_differs_per_version() {
        assert_eq!(tax_category_code_v1(TaxCategory::IntraCommunity), "IC");
        assert_eq!(tax_category_code_v2(TaxCategory::IntraCommunity), "K");
        assert_eq!(tax_category_code_v1(TaxCategory::StandardRate), "S");
        assert_eq!(tax_category_code_v2(TaxCategory::ReverseCharge), "AE");
    }

    #[test]
    fn exemption_reasons_only_for_special_categories() {
        assert_eq!(
            default_exemption_reason(TaxCategory::ReverseCharge),
            Some("Reverse Charge")
        );
        assert_eq!(default_exemption_reason(TaxCategory::StandardRate), None);
    }

    #[test]
    fn document_types() {
        assert_eq!(document_label(DocumentType::Invoice), "RECHNUNG");
        assert_eq!(document_type_code(DocumentType::Invoice), "380");
        assert_eq!(document_label(DocumentType::CreditNote), "GUTSCHRIFTSANZEIGE");
        assert_eq!(document_type_code(DocumentType::CreditNote), "381");
    }

    #[test]
    fn unit_codes() {
        assert_eq!(unit_code(UnitCode::default()), "C62");
        assert_eq!(unit_code(UnitCode::Hour), "HUR");
        assert_eq!(unit_code(UnitCode::KilowattHour), "KWH");
    }
}
