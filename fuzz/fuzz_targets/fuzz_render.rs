#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;
use zugferd_cii::cii;
use zugferd_cii::core::*;

fn amount(chunk: &[u8]) -> Decimal {
    let mut raw = [0u8; 4];
    raw[..chunk.len()].copy_from_slice(chunk);
    Decimal::new(i32::from_le_bytes(raw) as i64, (chunk.first().copied().unwrap_or(0) % 5) as u32)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let version = data[0] % 4;
    let text = String::from_utf8_lossy(&data[1..data.len().min(33)]).into_owned();
    let mut amounts = data[1..].chunks(4).map(amount);

    let party = TradeParty {
        name: text.clone(),
        street1: text.clone(),
        street2: None,
        city: "Berlin".into(),
        postal_code: "10115".into(),
        country_code: "DE".into(),
        vat_id: Some(text.clone()),
    };
    let mut builder = InvoiceBuilder::new(text.clone(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .seller(party.clone())
        .buyer(party)
        .payment_info(text.clone());
    while let (Some(qty), Some(net)) = (amounts.next(), amounts.next()) {
        builder = builder.add_line(LineItemBuilder::new(text.clone(), qty, net).build());
    }
    let Ok(mut invoice) = builder.build() else {
        return;
    };
    if let Some(paid) = amounts.next() {
        invoice.grand_total_amount += paid;
    }

    // Errors are fine, panics are bugs.
    let _ = cii::render(&invoice, version);
});
