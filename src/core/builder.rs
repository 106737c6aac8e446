use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::InvoiceError;
use super::types::*;

/// Builder for constructing invoices.
///
/// Totals that are not set explicitly are derived from the lines and the
/// tax breakdown. Explicit totals are taken as given, so inconsistent data
/// can still be expressed and is caught by [`validate`](super::validate).
///
/// ```
/// use zugferd_cii::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("RE-2024-001", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .seller(TradePartyBuilder::new("ACME GmbH", "Hauptstr. 1", "Berlin", "10115", "DE")
///         .vat_id("DE123456789")
///         .build())
///     .buyer(TradePartyBuilder::new("Kunde AG", "Marienplatz 1", "München", "80331", "DE")
///         .build())
///     .add_line(LineItemBuilder::new("Beratung", dec!(10), dec!(150.00))
///         .unit(UnitCode::Hour)
///         .build())
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.grand_total_amount, dec!(1785.00));
/// assert!(is_valid(&invoice));
/// ```
pub struct InvoiceBuilder {
    id: String,
    issue_date: NaiveDate,
    seller: Option<TradeParty>,
    buyer: Option<TradeParty>,
    line_items: Vec<LineItem>,
    currency_code: String,
    payment_type: Option<PaymentType>,
    payment_info: String,
    taxes: Vec<Tax>,
    tax_amount: Option<Decimal>,
    basis_amount: Option<Decimal>,
    grand_total_amount: Option<Decimal>,
    due_amount: Option<Decimal>,
    paid_amount: Decimal,
    document_type: Option<DocumentType>,
    payment_text: Option<String>,
    due_date: Option<NaiveDate>,
}

impl InvoiceBuilder {
    pub fn new(id: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            issue_date,
            seller: None,
            buyer: None,
            line_items: Vec::new(),
            currency_code: "EUR".to_string(),
            payment_type: None,
            payment_info: String::new(),
            taxes: Vec::new(),
            tax_amount: None,
            basis_amount: None,
            grand_total_amount: None,
            due_amount: None,
            paid_amount: Decimal::ZERO,
            document_type: None,
            payment_text: None,
            due_date: None,
        }
    }

    pub fn seller(mut self, party: TradeParty) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: TradeParty) -> Self {
        self.buyer = Some(party);
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.line_items.push(line);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    pub fn payment_info(mut self, info: impl Into<String>) -> Self {
        self.payment_info = info.into();
        self
    }

    /// Add a tax breakdown entry. Without any, the breakdown is derived
    /// from the line taxes.
    pub fn add_tax(mut self, tax: Tax) -> Self {
        self.taxes.push(tax);
        self
    }

    pub fn tax_amount(mut self, amount: Decimal) -> Self {
        self.tax_amount = Some(amount);
        self
    }

    pub fn basis_amount(mut self, amount: Decimal) -> Self {
        self.basis_amount = Some(amount);
        self
    }

    pub fn grand_total_amount(mut self, amount: Decimal) -> Self {
        self.grand_total_amount = Some(amount);
        self
    }

    pub fn due_amount(mut self, amount: Decimal) -> Self {
        self.due_amount = Some(amount);
        self
    }

    pub fn paid_amount(mut self, amount: Decimal) -> Self {
        self.paid_amount = amount;
        self
    }

    pub fn document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = Some(document_type);
        self
    }

    pub fn payment_terms(mut self, text: impl Into<String>) -> Self {
        self.payment_text = Some(text.into());
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Build the invoice, deriving every total that was not set.
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let seller = self
            .seller
            .ok_or_else(|| InvoiceError::Builder("seller is required".into()))?;
        let buyer = self
            .buyer
            .ok_or_else(|| InvoiceError::Builder("buyer is required".into()))?;

        let taxes = if self.taxes.is_empty() {
            tax_breakdown(&self.line_items, &self.currency_code)
        } else {
            self.taxes
        };

        let basis_amount = match self.basis_amount {
            Some(amount) => amount,
            None => checked_sum(self.line_items.iter().map(|l| l.total_amount), "basis amount")?,
        };
        let tax_amount = match self.tax_amount {
            Some(amount) => amount,
            None => checked_sum(taxes.iter().map(|t| t.amount), "tax amount")?,
        };
        let grand_total_amount = match self.grand_total_amount {
            Some(amount) => amount,
            None => basis_amount
                .checked_add(tax_amount)
                .ok_or_else(|| overflow("grand total amount"))?,
        };
        let due_amount = match self.due_amount {
            Some(amount) => amount,
            None => grand_total_amount
                .checked_sub(self.paid_amount)
                .ok_or_else(|| overflow("due amount"))?,
        };

        Ok(Invoice {
            id: self.id,
            issue_date: self.issue_date,
            seller,
            buyer,
            line_items: self.line_items,
            currency_code: self.currency_code,
            payment_type: self.payment_type,
            payment_info: self.payment_info,
            taxes,
            tax_amount,
            basis_amount,
            grand_total_amount,
            due_amount,
            paid_amount: self.paid_amount,
            document_type: self.document_type,
            payment_text: self.payment_text,
            due_date: self.due_date,
        })
    }
}

fn overflow(total: &str) -> InvoiceError {
    InvoiceError::Builder(format!("{total} overflows decimal range"))
}

fn checked_sum(
    mut amounts: impl Iterator<Item = Decimal>,
    total: &str,
) -> Result<Decimal, InvoiceError> {
    amounts
        .try_fold(Decimal::ZERO, |acc, a| acc.checked_add(a))
        .ok_or_else(|| overflow(total))
}

/// Group line taxes by (category, percent) in order of first appearance.
/// Each group's amount is recomputed from its basis, rounded half up.
pub fn tax_breakdown(lines: &[LineItem], currency_code: &str) -> Vec<Tax> {
    let mut groups: Vec<Tax> = Vec::new();
    for line in lines {
        let existing = groups
            .iter_mut()
            .find(|t| t.category == line.tax.category && t.percent == line.tax.percent);
        match existing {
            Some(group) => group.basis_amount += line.total_amount,
            None => groups.push(Tax {
                category: line.tax.category,
                percent: line.tax.percent,
                amount: Decimal::ZERO,
                basis_amount: line.total_amount,
                exemption_reason: line.tax.exemption_reason.clone(),
                currency_code: currency_code.to_string(),
            }),
        }
    }
    for group in &mut groups {
        group.amount = percent_of(group.basis_amount, group.percent);
    }
    groups
}

fn percent_of(basis: Decimal, percent: Decimal) -> Decimal {
    round_half_up(basis * percent / Decimal::ONE_HUNDRED, 2)
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Builder for a seller or buyer.
pub struct TradePartyBuilder {
    name: String,
    street1: String,
    street2: Option<String>,
    city: String,
    postal_code: String,
    country_code: String,
    vat_id: Option<String>,
}

impl TradePartyBuilder {
    pub fn new(
        name: impl Into<String>,
        street1: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            street1: street1.into(),
            street2: None,
            city: city.into(),
            postal_code: postal_code.into(),
            country_code: country_code.into(),
            vat_id: None,
        }
    }

    pub fn street2(mut self, street: impl Into<String>) -> Self {
        self.street2 = Some(street.into());
        self
    }

    pub fn vat_id(mut self, id: impl Into<String>) -> Self {
        self.vat_id = Some(id.into());
        self
    }

    pub fn build(self) -> TradeParty {
        TradeParty {
            name: self.name,
            street1: self.street1,
            street2: self.street2,
            city: self.city,
            postal_code: self.postal_code,
            country_code: self.country_code,
            vat_id: self.vat_id,
        }
    }
}

/// Builder for a tax breakdown entry.
///
/// The amount defaults to `basis × percent / 100`, rounded half up to cents.
pub struct TaxBuilder {
    category: TaxCategory,
    percent: Decimal,
    basis_amount: Decimal,
    amount: Option<Decimal>,
    exemption_reason: Option<String>,
    currency_code: String,
}

impl TaxBuilder {
    pub fn new(category: TaxCategory, percent: Decimal, basis_amount: Decimal) -> Self {
        Self {
            category,
            percent,
            basis_amount,
            amount: None,
            exemption_reason: None,
            currency_code: "EUR".to_string(),
        }
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn exemption_reason(mut self, reason: impl Into<String>) -> Self {
        self.exemption_reason = Some(reason.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn build(self) -> Tax {
        Tax {
            category: self.category,
            percent: self.percent,
            amount: self
                .amount
                .unwrap_or_else(|| percent_of(self.basis_amount, self.percent)),
            basis_amount: self.basis_amount,
            exemption_reason: self.exemption_reason,
            currency_code: self.currency_code,
        }
    }
}

/// Builder for an invoice line.
///
/// Defaults: piece unit, gross price equal to net price, total
/// `quantity × net price`, standard rate 19 %.
pub struct LineItemBuilder {
    name: String,
    quantity: Decimal,
    unit: UnitCode,
    gross_amount: Option<Decimal>,
    net_amount: Decimal,
    total_amount: Option<Decimal>,
    tax_category: TaxCategory,
    tax_percent: Decimal,
    tax_amount: Option<Decimal>,
    exemption_reason: Option<String>,
    discount: Option<Discount>,
    origin_country_code: Option<String>,
    currency_code: String,
}

impl LineItemBuilder {
    pub fn new(name: impl Into<String>, quantity: Decimal, net_amount: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: UnitCode::Piece,
            gross_amount: None,
            net_amount,
            total_amount: None,
            tax_category: TaxCategory::StandardRate,
            tax_percent: Decimal::new(19, 0),
            tax_amount: None,
            exemption_reason: None,
            discount: None,
            origin_country_code: None,
            currency_code: "EUR".to_string(),
        }
    }

    pub fn unit(mut self, unit: UnitCode) -> Self {
        self.unit = unit;
        self
    }

    pub fn gross_amount(mut self, amount: Decimal) -> Self {
        self.gross_amount = Some(amount);
        self
    }

    pub fn total_amount(mut self, amount: Decimal) -> Self {
        self.total_amount = Some(amount);
        self
    }

    pub fn tax(mut self, category: TaxCategory, percent: Decimal) -> Self {
        self.tax_category = category;
        self.tax_percent = percent;
        self
    }

    pub fn tax_amount(mut self, amount: Decimal) -> Self {
        self.tax_amount = Some(amount);
        self
    }

    pub fn exemption_reason(mut self, reason: impl Into<String>) -> Self {
        self.exemption_reason = Some(reason.into());
        self
    }

    pub fn discount(mut self, amount: Decimal, reason: impl Into<String>) -> Self {
        self.discount = Some(Discount {
            amount,
            reason: reason.into(),
        });
        self
    }

    pub fn origin_country(mut self, code: impl Into<String>) -> Self {
        self.origin_country_code = Some(code.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn build(self) -> LineItem {
        let total_amount = self
            .total_amount
            .unwrap_or(self.quantity * self.net_amount);
        let tax = Tax {
            category: self.tax_category,
            percent: self.tax_percent,
            amount: self
                .tax_amount
                .unwrap_or_else(|| percent_of(total_amount, self.tax_percent)),
            basis_amount: total_amount,
            exemption_reason: self.exemption_reason,
            currency_code: self.currency_code.clone(),
        };
        LineItem {
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            gross_amount: self.gross_amount.unwrap_or(self.net_amount),
            net_amount: self.net_amount,
            total_amount,
            tax,
            discount: self.discount,
            origin_country_code: self.origin_country_code,
            currency_code: self.currency_code,
        }
    }
}
