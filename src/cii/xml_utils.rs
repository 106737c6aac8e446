use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Cursor;

use crate::core::InvoiceError;

pub type XmlResult = Result<String, InvoiceError>;

/// Fraction digits for amounts and percentages.
pub const AMOUNT_DIGITS: u32 = 2;

/// Fraction digits for unit prices and quantities.
pub const QUANTITY_DIGITS: u32 = 4;

fn xml_io(e: std::io::Error) -> InvoiceError {
    InvoiceError::Xml(format!("XML write error: {e}"))
}

/// In-memory XML writer producing an indented UTF-8 document.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self, InvoiceError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> XmlResult {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| InvoiceError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, InvoiceError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, InvoiceError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, InvoiceError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, InvoiceError> {
        self.text_element_with_attrs(name, text, &[])
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, InvoiceError> {
        self.start_element_with_attrs(name, attrs)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write an amount, with a `currencyID` attribute when `currency` is set.
    pub fn amount_element(
        &mut self,
        name: &str,
        amount: Decimal,
        currency: Option<&str>,
        digits: u32,
    ) -> Result<&mut Self, InvoiceError> {
        let text = format_amount(amount, digits);
        match currency {
            Some(c) => self.text_element_with_attrs(name, &text, &[("currencyID", c)]),
            None => self.text_element(name, &text),
        }
    }

    /// Write a quantity with a `unitCode` attribute.
    pub fn quantity_element(
        &mut self,
        name: &str,
        qty: Decimal,
        unit: &str,
    ) -> Result<&mut Self, InvoiceError> {
        self.text_element_with_attrs(
            name,
            &format_amount(qty, QUANTITY_DIGITS),
            &[("unitCode", unit)],
        )
    }

    /// Write `<name><udt:DateTimeString format="102">YYYYMMDD</...></name>`.
    pub fn date_element(&mut self, name: &str, date: &NaiveDate) -> Result<&mut Self, InvoiceError> {
        self.start_element(name)?;
        self.text_element_with_attrs(
            "udt:DateTimeString",
            &format_date(date),
            &[("format", "102")],
        )?;
        self.end_element(name)
    }
}

/// Format a Decimal with exactly `digits` fraction digits, rounding half
/// away from zero.
pub fn format_amount(d: Decimal, digits: u32) -> String {
    let mut rounded = d.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(digits);
    rounded.to_string()
}

/// Format a date as `YYYYMMDD` (date format code 102).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
