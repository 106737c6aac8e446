use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The invoice document, aggregate root of the model.
///
/// All amounts are exact decimals. The record carries no behavior of its own;
/// see [`validate`](super::validate) and the `cii` renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number.
    pub id: String,
    /// Issue date, also used as the actual delivery date.
    pub issue_date: NaiveDate,
    pub seller: TradeParty,
    pub buyer: TradeParty,
    /// Invoice lines in document order.
    pub line_items: Vec<LineItem>,
    /// ISO 4217 currency code, e.g. "EUR".
    pub currency_code: String,
    /// Payment means; `None` renders the generic code "1".
    pub payment_type: Option<PaymentType>,
    /// Free text written as payment means information.
    pub payment_info: String,
    /// Tax breakdown, one entry per tax category.
    pub taxes: Vec<Tax>,
    /// Sum of all tax breakdown amounts.
    pub tax_amount: Decimal,
    /// Sum of all line totals.
    pub basis_amount: Decimal,
    /// Basis plus tax.
    pub grand_total_amount: Decimal,
    pub due_amount: Decimal,
    pub paid_amount: Decimal,
    /// Document type; `None` is treated as [`DocumentType::Invoice`].
    pub document_type: Option<DocumentType>,
    /// Payment terms text. Terms are only written when this is set.
    pub payment_text: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl Invoice {
    /// Document type with the default applied.
    pub fn document_type(&self) -> DocumentType {
        self.document_type.unwrap_or_default()
    }
}

/// Seller or buyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeParty {
    pub name: String,
    pub street1: String,
    /// Additional address line, skipped when absent or empty.
    pub street2: Option<String>,
    pub city: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// VAT identifier, skipped when absent or empty.
    pub vat_id: Option<String>,
}

/// One tax breakdown line (all lines sharing a category), or the tax detail
/// of a single line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tax {
    pub category: TaxCategory,
    /// Rate in percent, e.g. 19.
    pub percent: Decimal,
    /// Tax amount. Not re-derived from basis and percent.
    pub amount: Decimal,
    /// Taxable amount.
    pub basis_amount: Decimal,
    /// Exemption reason; falls back to the category default when absent.
    pub exemption_reason: Option<String>,
    pub currency_code: String,
}

/// One invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name.
    pub name: String,
    pub quantity: Decimal,
    pub unit: UnitCode,
    /// Unit price before discount.
    pub gross_amount: Decimal,
    /// Unit price after discount.
    pub net_amount: Decimal,
    /// Line net amount; the invoice basis amount is the sum of these.
    pub total_amount: Decimal,
    /// Tax applied to this line.
    pub tax: Tax,
    /// Price discount per unit.
    pub discount: Option<Discount>,
    /// ISO 3166-1 alpha-2 country of origin.
    pub origin_country_code: Option<String>,
    pub currency_code: String,
}

/// Discount applied to the gross price of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub amount: Decimal,
    pub reason: String,
}

/// Tax treatment of a breakdown or line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxCategory {
    /// Standard rate.
    StandardRate,
    /// Reverse charge, the buyer pays the tax.
    ReverseCharge,
    /// Exempt from tax.
    TaxExempt,
    /// Zero rated goods.
    ZeroTaxProducts,
    /// Services outside the scope of tax.
    UntaxedService,
    /// Intra-community supply.
    IntraCommunity,
}

/// Payment means of the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    BankTransfer,
    Card,
    Cash,
    Cheque,
    DirectDebit,
}

/// Kind of document being issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[default]
    Invoice,
    CreditNote,
}

/// Unit of measure (UN/ECE Recommendation 20 subset).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCode {
    #[default]
    Piece,
    Day,
    Hectare,
    Hour,
    Kilogram,
    Kilometer,
    KilowattHour,
    LumpSum,
    Minute,
    SquareMillimeter,
    Millimeter,
    SquareMeter,
    CubicMeter,
    Meter,
    ProductCount,
    ProductPair,
    Percent,
    Set,
    Liter,
    Ton,
    Week,
}
