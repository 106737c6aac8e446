use serde::{Deserialize, Serialize};

use crate::core::{InvoiceError, TaxCategory, codes};

/// Supported CII dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentVersion {
    /// ZUGFeRD 1.0, comfort profile (`rsm:CrossIndustryDocument`).
    V1,
    /// ZUGFeRD 2 / Factur-X, EN 16931 profile (`rsm:CrossIndustryInvoice`).
    V2,
}

impl DocumentVersion {
    /// Version number as used by callers (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Element names and placement rules of this dialect.
    pub fn table(self) -> &'static VersionTable {
        match self {
            Self::V1 => &V1,
            Self::V2 => &V2,
        }
    }
}

impl TryFrom<u8> for DocumentVersion {
    type Error = InvoiceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(InvoiceError::UnsupportedVersion(other)),
        }
    }
}

/// Everything that differs between the two dialects.
///
/// Element names include their namespace prefix.
#[derive(Debug)]
pub struct VersionTable {
    pub namespaces: &'static [(&'static str, &'static str)],
    pub root: &'static str,
    pub context: &'static str,
    /// Guideline URN written into the document context.
    pub guideline_id: &'static str,
    pub header: &'static str,
    pub transaction: &'static str,
    pub agreement: &'static str,
    pub delivery: &'static str,
    pub settlement: &'static str,
    pub monetary_summation: &'static str,
    /// Element holding a tax rate.
    pub percent: &'static str,
    pub line_agreement: &'static str,
    pub line_delivery: &'static str,
    pub line_settlement: &'static str,
    pub line_monetary_summation: &'static str,
    /// Header carries the document label (`ram:Name`).
    pub document_name: bool,
    /// Line items precede the header agreement instead of following the
    /// settlement.
    pub lines_first: bool,
    /// Buyer is repeated as ship-to party, without tax registration.
    pub ship_to_party: bool,
    /// Amounts carry `currencyID`. The header tax total always does.
    pub currency_on_amounts: bool,
    /// Line prices carry `BasisQuantity` and the product block comes first.
    pub detailed_lines: bool,
    pub tax_category_code: fn(TaxCategory) -> &'static str,
}

impl VersionTable {
    /// Currency attribute value for an amount element.
    pub fn amount_currency<'a>(&self, currency: &'a str) -> Option<&'a str> {
        self.currency_on_amounts.then_some(currency)
    }
}

const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

static V1: VersionTable = VersionTable {
    namespaces: &[
        (
            "xmlns:ram",
            "urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:12",
        ),
        (
            "xmlns:udt",
            "urn:un:unece:uncefact:data:standard:UnqualifiedDataType:15",
        ),
        ("xmlns:rsm", "urn:ferd:CrossIndustryDocument:invoice:1p0"),
        ("xmlns:xsi", XSI),
    ],
    root: "rsm:CrossIndustryDocument",
    context: "rsm:SpecifiedExchangedDocumentContext",
    guideline_id: "urn:ferd:CrossIndustryDocument:invoice:1p0:comfort",
    header: "rsm:HeaderExchangedDocument",
    transaction: "rsm:SpecifiedSupplyChainTradeTransaction",
    agreement: "ram:ApplicableSupplyChainTradeAgreement",
    delivery: "ram:ApplicableSupplyChainTradeDelivery",
    settlement: "ram:ApplicableSupplyChainTradeSettlement",
    monetary_summation: "ram:SpecifiedTradeSettlementMonetarySummation",
    percent: "ram:ApplicablePercent",
    line_agreement: "ram:SpecifiedSupplyChainTradeAgreement",
    line_delivery: "ram:SpecifiedSupplyChainTradeDelivery",
    line_settlement: "ram:SpecifiedSupplyChainTradeSettlement",
    line_monetary_summation: "ram:SpecifiedTradeSettlementMonetarySummation",
    document_name: true,
    lines_first: false,
    ship_to_party: false,
    currency_on_amounts: true,
    detailed_lines: false,
    tax_category_code: codes::tax_category_code_v1,
};

static V2: VersionTable = VersionTable {
    namespaces: &[
        (
            "xmlns:qdt",
            "urn:un:unece:uncefact:data:standard:QualifiedDataType:100",
        ),
        (
            "xmlns:ram",
            "urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100",
        ),
        (
            "xmlns:udt",
            "urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100",
        ),
        (
            "xmlns:rsm",
            "urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100",
        ),
        ("xmlns:xsi", XSI),
    ],
    root: "rsm:CrossIndustryInvoice",
    context: "rsm:ExchangedDocumentContext",
    guideline_id: "urn:cen.eu:en16931:2017",
    header: "rsm:ExchangedDocument",
    transaction: "rsm:SupplyChainTradeTransaction",
    agreement: "ram:ApplicableHeaderTradeAgreement",
    delivery: "ram:ApplicableHeaderTradeDelivery",
    settlement: "ram:ApplicableHeaderTradeSettlement",
    monetary_summation: "ram:SpecifiedTradeSettlementHeaderMonetarySummation",
    percent: "ram:RateApplicablePercent",
    line_agreement: "ram:SpecifiedLineTradeAgreement",
    line_delivery: "ram:SpecifiedLineTradeDelivery",
    line_settlement: "ram:SpecifiedLineTradeSettlement",
    line_monetary_summation: "ram:SpecifiedTradeSettlementLineMonetarySummation",
    document_name: false,
    lines_first: true,
    ship_to_party: true,
    currency_on_amounts: false,
    detailed_lines: true,
    tax_category_code: codes::tax_category_code_v2,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_numbers() {
        assert_eq!(DocumentVersion::try_from(1).unwrap(), DocumentVersion::V1);
        assert_eq!(DocumentVersion::try_from(2).unwrap(), DocumentVersion::V2);
        assert_eq!(DocumentVersion::V2.number(), 2);
    }

    #[test]
    fn other_numbers_are_rejected() {
        for n in [0u8, 3, 255] {
            let err = DocumentVersion::try_from(n).unwrap_err();
            assert!(matches!(err, InvoiceError::UnsupportedVersion(v) if v == n));
        }
    }

    #[test]
    fn currency_rule() {
        assert_eq!(DocumentVersion::V1.table().amount_currency("EUR"), Some("EUR"));
        assert_eq!(DocumentVersion::V2.table().amount_currency("EUR"), None);
    }

    #[test]
    fn v2_declares_qualified_data_types() {
        let has_qdt = |v: DocumentVersion| v.table().namespaces.iter().any(|(k, _)| *k == "xmlns:qdt");
        assert!(!has_qdt(DocumentVersion::V1));
        assert!(has_qdt(DocumentVersion::V2));
    }
}
