use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zugferd_cii::cii;
use zugferd_cii::core::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let invoice = InvoiceBuilder::new("GS-2024-007", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .document_type(DocumentType::CreditNote)
        .seller(
            TradePartyBuilder::new("ACME GmbH", "Hauptstr. 1", "Berlin", "10115", "DE")
                .vat_id("DE123456789")
                .build(),
        )
        .buyer(
            TradePartyBuilder::new("Client SARL", "1 Rue de Rivoli", "Paris", "75001", "FR")
                .vat_id("FR12345678901")
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Lizenzgebühr", dec!(1), dec!(500))
                .tax(TaxCategory::IntraCommunity, dec!(0))
                .build(),
        )
        .build()
        .unwrap();

    // The same invoice in both dialects; only placement and names differ.
    for version in [1u8, 2] {
        match cii::render(&invoice, version) {
            Ok(xml) => println!("=== Version {version} ===\n{xml}\n"),
            Err(e) => println!("=== Version {version} ===\n  failed: {e}\n"),
        }
    }
}
