use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::line::write_line;
use super::party::write_party;
use super::tax::write_tax;
use super::version::{DocumentVersion, VersionTable};
use super::xml_utils::{AMOUNT_DIGITS, XmlResult, XmlWriter};
use crate::core::*;

/// Render an invoice for a numeric document version (1 or 2).
///
/// The version is resolved before the invoice is validated, so an
/// unsupported version is always reported as
/// [`InvoiceError::UnsupportedVersion`].
pub fn render(invoice: &Invoice, version: u8) -> XmlResult {
    let version = DocumentVersion::try_from(version)?;
    to_xml(invoice, version)
}

/// Render an invoice as CII XML in the given dialect.
///
/// The totals are validated first; on failure an
/// [`InvoiceError::Invalid`] is returned and nothing is written.
///
/// Validation compares the exact values. Each amount is rounded on its own
/// when written (see [`format_amount`](super::format_amount)), so totals with
/// more than two fraction digits may not add up in the written document.
pub fn to_xml(invoice: &Invoice, version: DocumentVersion) -> XmlResult {
    let errors = validate(invoice);
    if !errors.is_empty() {
        warn!(
            invoice = %invoice.id,
            version = version.number(),
            violations = errors.len(),
            "refusing to render inconsistent invoice"
        );
        return Err(InvoiceError::invalid(errors));
    }

    debug!(
        invoice = %invoice.id,
        version = version.number(),
        lines = invoice.line_items.len(),
        "rendering invoice"
    );

    let t = version.table();
    let mut w = XmlWriter::new()?;

    w.start_element_with_attrs(t.root, t.namespaces)?;

    w.start_element(t.context)?;
    w.start_element("ram:GuidelineSpecifiedDocumentContextParameter")?;
    w.text_element("ram:ID", t.guideline_id)?;
    w.end_element("ram:GuidelineSpecifiedDocumentContextParameter")?;
    w.end_element(t.context)?;

    let document_type = invoice.document_type();
    w.start_element(t.header)?;
    w.text_element("ram:ID", &invoice.id)?;
    if t.document_name {
        w.text_element("ram:Name", codes::document_label(document_type))?;
    }
    w.text_element("ram:TypeCode", codes::document_type_code(document_type))?;
    w.date_element("ram:IssueDateTime", &invoice.issue_date)?;
    w.end_element(t.header)?;

    w.start_element(t.transaction)?;

    if t.lines_first {
        write_lines(&mut w, invoice, t)?;
    }

    w.start_element(t.agreement)?;
    write_party(&mut w, &invoice.seller, "ram:SellerTradeParty", false)?;
    write_party(&mut w, &invoice.buyer, "ram:BuyerTradeParty", false)?;
    w.end_element(t.agreement)?;

    w.start_element(t.delivery)?;
    if t.ship_to_party {
        write_party(&mut w, &invoice.buyer, "ram:ShipToTradeParty", true)?;
    }
    w.start_element("ram:ActualDeliverySupplyChainEvent")?;
    w.date_element("ram:OccurrenceDateTime", &invoice.issue_date)?;
    w.end_element("ram:ActualDeliverySupplyChainEvent")?;
    w.end_element(t.delivery)?;

    write_settlement(&mut w, invoice, t)?;

    if !t.lines_first {
        write_lines(&mut w, invoice, t)?;
    }

    w.end_element(t.transaction)?;
    w.end_element(t.root)?;

    let xml = w.into_string()?;
    debug!(invoice = %invoice.id, bytes = xml.len(), "invoice rendered");
    Ok(xml)
}

fn write_lines(w: &mut XmlWriter, invoice: &Invoice, t: &VersionTable) -> Result<(), InvoiceError> {
    for (i, line) in invoice.line_items.iter().enumerate() {
        write_line(w, line, i + 1, t)?;
    }
    Ok(())
}

fn write_settlement(
    w: &mut XmlWriter,
    invoice: &Invoice,
    t: &VersionTable,
) -> Result<(), InvoiceError> {
    let currency_code = invoice.currency_code.as_str();
    let currency = t.amount_currency(currency_code);

    w.start_element(t.settlement)?;
    w.text_element("ram:InvoiceCurrencyCode", currency_code)?;

    w.start_element("ram:SpecifiedTradeSettlementPaymentMeans")?;
    w.text_element("ram:TypeCode", codes::payment_code(invoice.payment_type))?;
    if !invoice.payment_info.is_empty() {
        w.text_element("ram:Information", &invoice.payment_info)?;
    }
    w.end_element("ram:SpecifiedTradeSettlementPaymentMeans")?;

    for tax in &invoice.taxes {
        write_tax(w, tax, t)?;
    }

    if let Some(text) = &invoice.payment_text {
        w.start_element("ram:SpecifiedTradePaymentTerms")?;
        w.text_element("ram:Description", text)?;
        if let Some(due) = &invoice.due_date {
            w.date_element("ram:DueDateDateTime", due)?;
        }
        w.end_element("ram:SpecifiedTradePaymentTerms")?;
    }

    w.start_element(t.monetary_summation)?;
    w.amount_element("ram:LineTotalAmount", invoice.basis_amount, currency, AMOUNT_DIGITS)?;
    // Document level charges and allowances are not modelled.
    w.amount_element("ram:ChargeTotalAmount", Decimal::ZERO, currency, AMOUNT_DIGITS)?;
    w.amount_element("ram:AllowanceTotalAmount", Decimal::ZERO, currency, AMOUNT_DIGITS)?;
    w.amount_element("ram:TaxBasisTotalAmount", invoice.basis_amount, currency, AMOUNT_DIGITS)?;
    w.amount_element(
        "ram:TaxTotalAmount",
        invoice.tax_amount,
        Some(currency_code),
        AMOUNT_DIGITS,
    )?;
    w.amount_element("ram:GrandTotalAmount", invoice.grand_total_amount, currency, AMOUNT_DIGITS)?;
    w.amount_element("ram:TotalPrepaidAmount", invoice.paid_amount, currency, AMOUNT_DIGITS)?;
    w.amount_element("ram:DuePayableAmount", invoice.due_amount, currency, AMOUNT_DIGITS)?;
    w.end_element(t.monetary_summation)?;

    w.end_element(t.settlement)?;
    Ok(())
}
