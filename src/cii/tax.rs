use super::party::non_empty;
use super::version::VersionTable;
use super::xml_utils::{AMOUNT_DIGITS, XmlWriter, format_amount};
use crate::core::{InvoiceError, Tax, codes};

/// Exemption reason of a tax line: the explicit text, else the category
/// default. `None` when neither is present.
pub fn exemption_reason(tax: &Tax) -> Option<&str> {
    non_empty(tax.exemption_reason.as_deref())
        .or_else(|| codes::default_exemption_reason(tax.category))
}

/// Write one header tax breakdown block (`ram:ApplicableTradeTax`).
pub(super) fn write_tax(
    w: &mut XmlWriter,
    tax: &Tax,
    table: &VersionTable,
) -> Result<(), InvoiceError> {
    let currency = table.amount_currency(&tax.currency_code);

    w.start_element("ram:ApplicableTradeTax")?;
    w.amount_element("ram:CalculatedAmount", tax.amount, currency, AMOUNT_DIGITS)?;
    w.text_element("ram:TypeCode", "VAT")?;
    if let Some(reason) = exemption_reason(tax) {
        w.text_element("ram:ExemptionReason", reason)?;
    }
    w.amount_element("ram:BasisAmount", tax.basis_amount, currency, AMOUNT_DIGITS)?;
    w.text_element("ram:CategoryCode", (table.tax_category_code)(tax.category))?;
    w.text_element(table.percent, &format_amount(tax.percent, AMOUNT_DIGITS))?;
    w.end_element("ram:ApplicableTradeTax")?;
    Ok(())
}
