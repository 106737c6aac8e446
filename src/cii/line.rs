use super::party::non_empty;
use super::version::VersionTable;
use super::xml_utils::{AMOUNT_DIGITS, QUANTITY_DIGITS, XmlWriter, format_amount};
use crate::core::{InvoiceError, LineItem, codes};

/// Write one `ram:IncludedSupplyChainTradeLineItem`. `index` is 1-based.
pub(super) fn write_line(
    w: &mut XmlWriter,
    line: &LineItem,
    index: usize,
    table: &VersionTable,
) -> Result<(), InvoiceError> {
    let currency = table.amount_currency(&line.currency_code);
    let unit = codes::unit_code(line.unit);

    w.start_element("ram:IncludedSupplyChainTradeLineItem")?;

    w.start_element("ram:AssociatedDocumentLineDocument")?;
    w.text_element("ram:LineID", &index.to_string())?;
    w.end_element("ram:AssociatedDocumentLineDocument")?;

    if table.detailed_lines {
        w.start_element("ram:SpecifiedTradeProduct")?;
        w.text_element("ram:Name", &line.name)?;
        if let Some(country) = non_empty(line.origin_country_code.as_deref()) {
            w.start_element("ram:OriginTradeCountry")?;
            w.text_element("ram:ID", country)?;
            w.end_element("ram:OriginTradeCountry")?;
        }
        w.end_element("ram:SpecifiedTradeProduct")?;
    }

    // Prices
    w.start_element(table.line_agreement)?;
    w.start_element("ram:GrossPriceProductTradePrice")?;
    w.amount_element("ram:ChargeAmount", line.gross_amount, currency, QUANTITY_DIGITS)?;
    if let Some(discount) = &line.discount {
        if table.detailed_lines {
            w.quantity_element("ram:BasisQuantity", line.quantity, unit)?;
        }
        w.start_element("ram:AppliedTradeAllowanceCharge")?;
        w.start_element("ram:ChargeIndicator")?;
        w.text_element("udt:Indicator", "false")?;
        w.end_element("ram:ChargeIndicator")?;
        w.amount_element("ram:ActualAmount", discount.amount, currency, AMOUNT_DIGITS)?;
        w.text_element("ram:Reason", &discount.reason)?;
        w.end_element("ram:AppliedTradeAllowanceCharge")?;
    }
    w.end_element("ram:GrossPriceProductTradePrice")?;
    w.start_element("ram:NetPriceProductTradePrice")?;
    w.amount_element("ram:ChargeAmount", line.net_amount, currency, QUANTITY_DIGITS)?;
    if table.detailed_lines {
        w.quantity_element("ram:BasisQuantity", line.quantity, unit)?;
    }
    w.end_element("ram:NetPriceProductTradePrice")?;
    w.end_element(table.line_agreement)?;

    w.start_element(table.line_delivery)?;
    w.quantity_element("ram:BilledQuantity", line.quantity, unit)?;
    w.end_element(table.line_delivery)?;

    w.start_element(table.line_settlement)?;
    w.start_element("ram:ApplicableTradeTax")?;
    w.text_element("ram:TypeCode", "VAT")?;
    w.text_element("ram:CategoryCode", (table.tax_category_code)(line.tax.category))?;
    w.text_element(table.percent, &format_amount(line.tax.percent, AMOUNT_DIGITS))?;
    w.end_element("ram:ApplicableTradeTax")?;
    w.start_element(table.line_monetary_summation)?;
    w.amount_element("ram:LineTotalAmount", line.total_amount, currency, AMOUNT_DIGITS)?;
    w.end_element(table.line_monetary_summation)?;
    w.end_element(table.line_settlement)?;

    if !table.detailed_lines {
        w.start_element("ram:SpecifiedTradeProduct")?;
        w.text_element("ram:Name", &line.name)?;
        w.end_element("ram:SpecifiedTradeProduct")?;
    }

    w.end_element("ram:IncludedSupplyChainTradeLineItem")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cii::DocumentVersion;
    use crate::core::{LineItemBuilder, UnitCode};
    use rust_decimal_macros::dec;

    fn render(line: &LineItem, version: DocumentVersion) -> String {
        let mut w = XmlWriter::new().unwrap();
        write_line(&mut w, line, 3, version.table()).unwrap();
        w.into_string().unwrap()
    }

    fn discounted_line() -> LineItem {
        LineItemBuilder::new("Schrauben", dec!(100), dec!(0.45))
            .unit(UnitCode::Piece)
            .gross_amount(dec!(0.50))
            .discount(dec!(0.05), "Mengenrabatt")
            .origin_country("DE")
            .build()
    }

    #[test]
    fn v2_line_layout() {
        let xml = render(&discounted_line(), DocumentVersion::V2);
        assert!(xml.contains("<ram:LineID>3</ram:LineID>"));
        assert!(xml.contains("<ram:ChargeAmount>0.5000</ram:ChargeAmount>"));
        assert!(xml.contains("<ram:ChargeAmount>0.4500</ram:ChargeAmount>"));
        assert!(xml.contains(r#"<ram:BasisQuantity unitCode="C62">100.0000</ram:BasisQuantity>"#));
        assert!(xml.contains(r#"<ram:BilledQuantity unitCode="C62">100.0000</ram:BilledQuantity>"#));
        assert!(xml.contains("<udt:Indicator>false</udt:Indicator>"));
        assert!(xml.contains("<ram:Reason>Mengenrabatt</ram:Reason>"));
        assert!(xml.contains("<ram:LineTotalAmount>45.00</ram:LineTotalAmount>"));
        assert!(xml.contains("ram:SpecifiedTradeSettlementLineMonetarySummation"));
        assert!(xml.contains("<ram:RateApplicablePercent>19.00</ram:RateApplicablePercent>"));
        // Product first
        assert!(xml.find("ram:SpecifiedTradeProduct").unwrap() < xml.find("ram:SpecifiedLineTradeAgreement").unwrap());
        assert!(xml.contains("<ram:ID>DE</ram:ID>"));
    }

    #[test]
    fn v1_line_layout() {
        let xml = render(&discounted_line(), DocumentVersion::V1);
        assert!(xml.contains(r#"<ram:LineTotalAmount currencyID="EUR">45.00</ram:LineTotalAmount>"#));
        assert!(xml.contains(r#"<ram:ChargeAmount currencyID="EUR">0.4500</ram:ChargeAmount>"#));
        assert!(xml.contains("ram:SpecifiedSupplyChainTradeAgreement"));
        assert!(xml.contains("<ram:ApplicablePercent>19.00</ram:ApplicablePercent>"));
        assert!(!xml.contains("ram:BasisQuantity"));
        assert!(!xml.contains("ram:OriginTradeCountry"));
        // Product last
        assert!(xml.find("ram:SpecifiedTradeProduct").unwrap() > xml.find("ram:SpecifiedSupplyChainTradeSettlement").unwrap());
    }

    #[test]
    fn undiscounted_line_has_no_allowance() {
        let line = LineItemBuilder::new("Beratung", dec!(2), dec!(150)).unit(UnitCode::Hour).build();
        let xml = render(&line, DocumentVersion::V2);
        assert!(!xml.contains("AppliedTradeAllowanceCharge"));
        assert_eq!(xml.matches("ram:BasisQuantity").count(), 2); // open + close, net price only
        assert!(xml.contains(r#"unitCode="HUR""#));
    }
}
