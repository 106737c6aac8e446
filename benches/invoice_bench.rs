use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use zugferd_cii::cii::{self, DocumentVersion};
use zugferd_cii::core::*;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn build_invoice(lines: usize) -> Invoice {
    let mut builder = InvoiceBuilder::new("BENCH-001", test_date())
        .seller(
            TradePartyBuilder::new("Benchmark GmbH", "Hauptstr. 1", "Berlin", "10115", "DE")
                .vat_id("DE123456789")
                .build(),
        )
        .buyer(
            TradePartyBuilder::new("Kunde AG", "Leopoldstr. 42", "München", "80331", "DE")
                .build(),
        )
        .payment_type(PaymentType::BankTransfer)
        .payment_info("DE02120300000000202051");

    for i in 1..=lines {
        let line = if i % 3 == 0 {
            LineItemBuilder::new(format!("Item {i}"), dec!(2), dec!(9.99))
                .unit(UnitCode::Piece)
                .tax(TaxCategory::StandardRate, dec!(7))
                .build()
        } else {
            LineItemBuilder::new(format!("Service item {i}"), dec!(5), dec!(120))
                .unit(UnitCode::Hour)
                .build()
        };
        builder = builder.add_line(line);
    }

    builder.build().unwrap()
}

fn bench_build_invoice(c: &mut Criterion) {
    c.bench_function("build_invoice_10_lines", |b| {
        b.iter(|| black_box(build_invoice(10)));
    });
}

fn bench_validate(c: &mut Criterion) {
    let invoice = build_invoice(1000);
    c.bench_function("validate_1000_lines", |b| {
        b.iter(|| black_box(validate(black_box(&invoice))));
    });
}

fn bench_render(c: &mut Criterion) {
    let small = build_invoice(10);
    let large = build_invoice(1000);

    for version in [DocumentVersion::V1, DocumentVersion::V2] {
        let n = version.number();
        c.bench_function(&format!("render_v{n}_10_lines"), |b| {
            b.iter(|| black_box(cii::to_xml(black_box(&small), version)));
        });
        c.bench_function(&format!("render_v{n}_1000_lines"), |b| {
            b.iter(|| black_box(cii::to_xml(black_box(&large), version)));
        });
    }
}

criterion_group!(benches, bench_build_invoice, bench_validate, bench_render);
criterion_main!(benches);
