use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

use super::error::ValidationError;
use super::types::*;

/// Check that the invoice totals are internally consistent.
///
/// Rules are checked in order and the first violation wins, so the returned
/// list holds at most one entry. An empty list means the invoice is valid.
///
/// 1. `grand_total_amount == basis_amount + tax_amount`
/// 2. `basis_amount == Σ line_items[].total_amount`
///
/// All comparisons are exact; nothing is rounded.
pub fn validate(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(calc_grand_total) = invoice.basis_amount.checked_add(invoice.tax_amount) else {
        errors.push(ValidationError::with_rule(
            "grand_total_amount",
            format!(
                "Basis amount and tax amount overflow decimal range: {} + {}",
                invoice.basis_amount, invoice.tax_amount
            ),
            "GRAND-TOTAL",
        ));
        return errors;
    };
    trace!(
        invoice = %invoice.id,
        grand_total = %invoice.grand_total_amount,
        calculated = %calc_grand_total,
        "checking grand total"
    );
    if invoice.grand_total_amount != calc_grand_total {
        errors.push(ValidationError::with_rule(
            "grand_total_amount",
            format!(
                "Grand total amount and calculated grand total amount deviate: {} / {}",
                invoice.grand_total_amount, calc_grand_total
            ),
            "GRAND-TOTAL",
        ));
        return errors;
    }

    let Some(line_item_sum) = invoice
        .line_items
        .iter()
        .try_fold(Decimal::ZERO, |acc, l| acc.checked_add(l.total_amount))
    else {
        errors.push(ValidationError::with_rule(
            "basis_amount",
            "Line item totals overflow decimal range",
            "BASIS-AMOUNT",
        ));
        return errors;
    };
    trace!(
        invoice = %invoice.id,
        basis = %invoice.basis_amount,
        line_sum = %line_item_sum,
        "checking basis amount"
    );
    if line_item_sum != invoice.basis_amount {
        errors.push(ValidationError::with_rule(
            "basis_amount",
            format!(
                "Line items do not add up to basis amount {} / {}",
                line_item_sum, invoice.basis_amount
            ),
            "BASIS-AMOUNT",
        ));
    }

    errors
}

/// `true` when [`validate`] reports no violations.
pub fn is_valid(invoice: &Invoice) -> bool {
    validate(invoice).is_empty()
}

/// Advisory check of every tax breakdown amount against
/// `basis × percent / 100`, truncated to two decimal places.
///
/// Reports all deviations. Neither [`validate`] nor rendering call this:
/// a deviating tax amount does not make an invoice invalid.
pub fn check_tax_amounts(invoice: &Invoice) -> Vec<ValidationError> {
    invoice
        .taxes
        .iter()
        .enumerate()
        .filter_map(|(i, tax)| {
            let message = match calculated_tax(tax) {
                Some(calc) if calc == tax.amount => return None,
                Some(calc) => format!(
                    "Tax amount and calculated tax amount deviate: {} / {}",
                    tax.amount, calc
                ),
                None => "Calculated tax amount overflows decimal range".to_string(),
            };
            Some(ValidationError::with_rule(
                format!("taxes[{i}].amount"),
                message,
                "TAX-AMOUNT",
            ))
        })
        .collect()
}

fn calculated_tax(tax: &Tax) -> Option<Decimal> {
    let product = tax.basis_amount.checked_mul(tax.percent)?;
    Some(
        (product / Decimal::ONE_HUNDRED).round_dp_with_strategy(2, RoundingStrategy::ToZero),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn party(name: &str) -> TradeParty {
        TradeParty {
            name: name.into(),
            street1: "Hauptstr. 1".into(),
            street2: None,
            city: "Berlin".into(),
            postal_code: "10115".into(),
            country_code: "DE".into(),
            vat_id: None,
        }
    }

    fn tax(basis: Decimal, amount: Decimal) -> Tax {
        Tax {
            category: TaxCategory::StandardRate,
            percent: dec!(19),
            amount,
            basis_amount: basis,
            exemption_reason: None,
            currency_code: "EUR".into(),
        }
    }

    fn line(total: Decimal) -> LineItem {
        LineItem {
            name: "Item".into(),
            quantity: dec!(1),
            unit: UnitCode::Piece,
            gross_amount: total,
            net_amount: total,
            total_amount: total,
            tax: tax(total, total * dec!(0.19)),
            discount: None,
            origin_country_code: None,
            currency_code: "EUR".into(),
        }
    }

    fn invoice(lines: &[Decimal], basis: Decimal, tax_amount: Decimal, grand: Decimal) -> Invoice {
        Invoice {
            id: "RE-1".into(),
            issue_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            seller: party("Seller"),
            buyer: party("Buyer"),
            line_items: lines.iter().map(|t| line(*t)).collect(),
            currency_code: "EUR".into(),
            payment_type: None,
            payment_info: String::new(),
            taxes: vec![tax(basis, tax_amount)],
            tax_amount,
            basis_amount: basis,
            grand_total_amount: grand,
            due_amount: grand,
            paid_amount: Decimal::ZERO,
            document_type: None,
            payment_text: None,
            due_date: None,
        }
    }

    #[test]
    fn consistent_invoice_is_valid() {
        let inv = invoice(&[dec!(100.00)], dec!(100.00), dec!(19.00), dec!(119.00));
        assert!(validate(&inv).is_empty());
        assert!(is_valid(&inv));
    }

    #[test]
    fn grand_total_mismatch_reports_both_values() {
        let inv = invoice(&[dec!(100.00)], dec!(100.00), dec!(19.00), dec!(120.00));
        let errors = validate(&inv);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("GRAND-TOTAL"));
        assert!(errors[0].message.contains("120.00"));
        assert!(errors[0].message.contains("119.00"));
    }

    #[test]
    fn line_sum_mismatch_reported() {
        let inv = invoice(&[dec!(60.00), dec!(30.00)], dec!(100.00), dec!(19.00), dec!(119.00));
        let errors = validate(&inv);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("BASIS-AMOUNT"));
        assert!(errors[0].message.contains("90.00 / 100.00"));
    }

    #[test]
    fn first_failure_wins() {
        // Both rules are violated; only the grand total is reported.
        let inv = invoice(&[dec!(1.00)], dec!(100.00), dec!(19.00), dec!(1.00));
        let errors = validate(&inv);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "grand_total_amount");
    }

    #[test]
    fn tenths_sum_exactly() {
        // 0.1 + 0.2 == 0.3 must hold; binary floats would fail here.
        let inv = invoice(&[dec!(0.1), dec!(0.2)], dec!(0.3), dec!(0.06), dec!(0.36));
        assert!(is_valid(&inv));
    }

    #[test]
    fn scale_does_not_matter_for_equality() {
        let inv = invoice(&[dec!(100)], dec!(100.000), dec!(19), dec!(119.0));
        assert!(is_valid(&inv));
    }

    #[test]
    fn grand_total_overflow_is_reported() {
        let inv = invoice(&[], Decimal::MAX, Decimal::ONE, Decimal::MAX);
        let errors = validate(&inv);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("GRAND-TOTAL"));
        assert!(errors[0].message.contains("overflow"));
    }

    #[test]
    fn line_sum_overflow_is_reported() {
        let mut inv = invoice(&[dec!(1), dec!(1)], Decimal::MAX, Decimal::ZERO, Decimal::MAX);
        for line in &mut inv.line_items {
            line.total_amount = Decimal::MAX;
        }
        let errors = validate(&inv);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("BASIS-AMOUNT"));
        assert!(errors[0].message.contains("overflow"));
    }

    #[test]
    fn tax_check_overflow_is_reported() {
        let mut inv = invoice(&[dec!(1)], dec!(1), dec!(0.19), dec!(1.19));
        inv.taxes[0].basis_amount = Decimal::MAX;
        let deviations = check_tax_amounts(&inv);
        assert_eq!(deviations.len(), 1);
        assert!(deviations[0].message.contains("overflow"));
    }

    #[test]
    fn tax_check_is_advisory() {
        let inv = invoice(&[dec!(100.00)], dec!(100.00), dec!(20.00), dec!(120.00));
        assert!(is_valid(&inv));
        let deviations = check_tax_amounts(&inv);
        assert_eq!(deviations.len(), 1);
        assert_eq!(deviations[0].field, "taxes[0].amount");
        assert!(deviations[0].message.contains("20.00 / 19"));
    }

    #[test]
    fn tax_check_truncates() {
        // 33.33 * 19% = 6.3327 -> 6.33
        let mut inv = invoice(&[dec!(33.33)], dec!(33.33), dec!(6.33), dec!(39.66));
        assert!(check_tax_amounts(&inv).is_empty());
        inv.taxes[0].amount = dec!(6.34);
        assert_eq!(check_tax_amounts(&inv).len(), 1);
    }
}
