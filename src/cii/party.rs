use super::xml_utils::XmlWriter;
use crate::core::{InvoiceError, TradeParty};

/// Write a trade party as `element`: name, postal address and, unless
/// `exclude_tax` is set or no VAT id is present, its tax registration.
pub(super) fn write_party(
    w: &mut XmlWriter,
    party: &TradeParty,
    element: &str,
    exclude_tax: bool,
) -> Result<(), InvoiceError> {
    w.start_element(element)?;
    w.text_element("ram:Name", &party.name)?;

    w.start_element("ram:PostalTradeAddress")?;
    w.text_element("ram:PostcodeCode", &party.postal_code)?;
    w.text_element("ram:LineOne", &party.street1)?;
    if let Some(street2) = non_empty(party.street2.as_deref()) {
        w.text_element("ram:LineTwo", street2)?;
    }
    w.text_element("ram:CityName", &party.city)?;
    w.text_element("ram:CountryID", &party.country_code)?;
    w.end_element("ram:PostalTradeAddress")?;

    if !exclude_tax {
        if let Some(vat_id) = non_empty(party.vat_id.as_deref()) {
            w.start_element("ram:SpecifiedTaxRegistration")?;
            w.text_element_with_attrs("ram:ID", vat_id, &[("schemeID", "VA")])?;
            w.end_element("ram:SpecifiedTaxRegistration")?;
        }
    }

    w.end_element(element)?;
    Ok(())
}

pub(super) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(street2: Option<&str>, vat_id: Option<&str>) -> TradeParty {
        TradeParty {
            name: "Kunde AG".into(),
            street1: "Marienplatz 1".into(),
            street2: street2.map(String::from),
            city: "München".into(),
            postal_code: "80331".into(),
            country_code: "DE".into(),
            vat_id: vat_id.map(String::from),
        }
    }

    fn render(party: &TradeParty, exclude_tax: bool) -> String {
        let mut w = XmlWriter::new().unwrap();
        write_party(&mut w, party, "ram:BuyerTradeParty", exclude_tax).unwrap();
        w.into_string().unwrap()
    }

    #[test]
    fn full_party() {
        let xml = render(&party(Some("Hinterhaus"), Some("DE123456789")), false);
        assert!(xml.contains("<ram:Name>Kunde AG</ram:Name>"));
        assert!(xml.contains("<ram:PostcodeCode>80331</ram:PostcodeCode>"));
        assert!(xml.contains("<ram:LineTwo>Hinterhaus</ram:LineTwo>"));
        assert!(xml.contains(r#"<ram:ID schemeID="VA">DE123456789</ram:ID>"#));
    }

    #[test]
    fn empty_optionals_are_skipped() {
        let xml = render(&party(Some(""), Some("")), false);
        assert!(!xml.contains("ram:LineTwo"));
        assert!(!xml.contains("ram:SpecifiedTaxRegistration"));
    }

    #[test]
    fn exclude_tax_suppresses_registration() {
        let xml = render(&party(None, Some("DE123456789")), true);
        assert!(!xml.contains("SpecifiedTaxRegistration"));
        assert!(!xml.contains("DE123456789"));
    }

    #[test]
    fn address_order() {
        let xml = render(&party(None, None), false);
        let pos = |s: &str| xml.find(s).unwrap();
        assert!(pos("ram:PostcodeCode") < pos("ram:LineOne"));
        assert!(pos("ram:LineOne") < pos("ram:CityName"));
        assert!(pos("ram:CityName") < pos("ram:CountryID"));
    }
}
