//! # zugferd-cii
//!
//! Renders electronic invoices as UN/CEFACT Cross Industry Invoice XML in two
//! dialects: the ZUGFeRD 1.0 "comfort" profile (`CrossIndustryDocument`) and
//! the EN 16931 profile of ZUGFeRD 2 / Factur-X (`CrossIndustryInvoice`).
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Before anything is written the invoice totals are checked for exact
//! consistency; an inconsistent invoice produces an error and no XML.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use zugferd_cii::core::*;
//! use zugferd_cii::cii::{self, DocumentVersion};
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("RE-2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .seller(TradePartyBuilder::new("ACME GmbH", "Hauptstr. 1", "Berlin", "10115", "DE")
//!         .vat_id("DE123456789").build())
//!     .buyer(TradePartyBuilder::new("Kunde AG", "Marienplatz 1", "München", "80331", "DE").build())
//!     .add_line(LineItemBuilder::new("Beratung", dec!(1), dec!(100.00)).build())
//!     .payment_type(PaymentType::BankTransfer)
//!     .build()
//!     .unwrap();
//!
//! assert!(validate(&invoice).is_empty());
//! let xml = cii::to_xml(&invoice, DocumentVersion::V2).unwrap();
//! assert!(xml.contains("<ram:GrandTotalAmount>119.00</ram:GrandTotalAmount>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, code tables, builders, validation |
//! | `cii` (default) | Versioned CII XML rendering |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "cii")]
pub mod cii;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
