//! UN/CEFACT Cross Industry Invoice rendering in two dialects.
//!
//! - **V1**: ZUGFeRD 1.0 comfort profile, root `rsm:CrossIndustryDocument`
//! - **V2**: ZUGFeRD 2 / Factur-X EN 16931 profile, root
//!   `rsm:CrossIndustryInvoice`
//!
//! Every name and placement rule that differs between the dialects comes
//! from the [`VersionTable`] of the selected [`DocumentVersion`].
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use zugferd_cii::core::*;
//! use zugferd_cii::cii;
//!
//! let invoice = InvoiceBuilder::new("RE-2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .seller(TradePartyBuilder::new("ACME GmbH", "Hauptstr. 1", "Berlin", "10115", "DE").build())
//!     .buyer(TradePartyBuilder::new("Kunde AG", "Ring 2", "Hamburg", "20095", "DE").build())
//!     .add_line(LineItemBuilder::new("Beratung", dec!(2), dec!(50.00)).build())
//!     .build()
//!     .unwrap();
//!
//! let v1 = cii::render(&invoice, 1).unwrap();
//! let v2 = cii::to_xml(&invoice, cii::DocumentVersion::V2).unwrap();
//! assert!(v1.contains("<rsm:CrossIndustryDocument"));
//! assert!(v2.contains("<rsm:CrossIndustryInvoice"));
//! ```

mod invoice;
mod line;
mod party;
mod tax;
mod version;
pub(crate) mod xml_utils;

pub use invoice::{render, to_xml};
pub use tax::exemption_reason;
pub use version::{DocumentVersion, VersionTable};
pub use xml_utils::{format_amount, format_date};
