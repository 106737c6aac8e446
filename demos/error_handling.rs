use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zugferd_cii::cii;
use zugferd_cii::core::*;

fn base() -> InvoiceBuilder {
    InvoiceBuilder::new("RE-2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .seller(TradePartyBuilder::new("ACME GmbH", "Hauptstr. 1", "Berlin", "10115", "DE").build())
        .buyer(TradePartyBuilder::new("Kunde AG", "Ring 2", "Hamburg", "20095", "DE").build())
        .add_line(LineItemBuilder::new("Consulting", dec!(10), dec!(150)).build())
}

fn main() {
    // RUST_LOG=zugferd_cii=debug shows the refusal warnings
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // ── 1. Builder error: missing party ───────────────────────────────
    println!("=== Builder Error ===");
    match InvoiceBuilder::new("RE-2024-000", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).build() {
        Ok(_) => println!("  Built (unexpected)"),
        Err(e) => println!("  Build failed: {e}"),
    }

    // ── 2. Grand total deviates ───────────────────────────────────────
    println!("\n=== Grand Total ===");
    let invoice = base().grand_total_amount(dec!(1800.00)).build().unwrap();
    for e in validate(&invoice) {
        println!("  - {e}");
    }
    match cii::render(&invoice, 2) {
        Ok(_) => println!("  Rendered (unexpected)"),
        Err(e) => println!("  Rejected: {e}"),
    }

    // ── 3. Line items do not add up ───────────────────────────────────
    println!("\n=== Basis Amount ===");
    let invoice = base()
        .basis_amount(dec!(1400.00))
        .tax_amount(dec!(266.00))
        .build()
        .unwrap();
    if let Err(e) = cii::render(&invoice, 1) {
        for v in e.validation_errors() {
            println!("  - field {}: {}", v.field, v.message);
        }
    }

    // ── 4. Advisory tax check ─────────────────────────────────────────
    println!("\n=== Tax Amounts (advisory) ===");
    let invoice = base()
        .add_tax(TaxBuilder::new(TaxCategory::StandardRate, dec!(19), dec!(1500)).amount(dec!(290)).build())
        .tax_amount(dec!(290))
        .build()
        .unwrap();
    println!("  valid: {}", is_valid(&invoice));
    for e in check_tax_amounts(&invoice) {
        println!("  - {e}");
    }

    // ── 5. Unknown version ────────────────────────────────────────────
    println!("\n=== Unsupported Version ===");
    let invoice = base().build().unwrap();
    if let Err(e) = cii::render(&invoice, 3) {
        println!("  {e}");
    }
}
