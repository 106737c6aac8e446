use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zugferd_cii::cii::{self, DocumentVersion};
use zugferd_cii::core::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A domestic invoice with two tax rates
    let invoice = InvoiceBuilder::new("RE-2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .seller(
            TradePartyBuilder::new("ACME GmbH", "Friedrichstraße 123", "Berlin", "10115", "DE")
                .vat_id("DE123456789")
                .build(),
        )
        .buyer(
            TradePartyBuilder::new("Kunde AG", "Marienplatz 1", "München", "80331", "DE")
                .street2("3. OG")
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Softwareentwicklung", dec!(80), dec!(120))
                .unit(UnitCode::Hour)
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Fachbuch", dec!(2), dec!(39.90))
                .tax(TaxCategory::StandardRate, dec!(7))
                .gross_amount(dec!(44.90))
                .discount(dec!(5.00), "Mengenrabatt")
                .origin_country("DE")
                .build(),
        )
        .payment_type(PaymentType::BankTransfer)
        .payment_info("DE89370400440532013000")
        .payment_terms("Zahlbar innerhalb von 30 Tagen ohne Abzug")
        .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        .build()
        .unwrap();

    println!("Invoice: {}", invoice.id);
    println!("Net:     {} {}", invoice.basis_amount, invoice.currency_code);
    for tax in &invoice.taxes {
        println!("  {}% of {} = {}", tax.percent, tax.basis_amount, tax.amount);
    }
    println!("Gross:   {} {}", invoice.grand_total_amount, invoice.currency_code);

    let xml = cii::to_xml(&invoice, DocumentVersion::V2).unwrap();
    println!("\n{xml}");
}
