//! # bijak
//!
//! Indian GST invoicing library: tax-invoice types, CGST/SGST/IGST
//! computation, amount-in-words conversion, and printable HTML documents.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Tax splitting follows the GST place-of-supply rules: an intra-state supply
//! (buyer and seller in the same state) splits the tax evenly into CGST and
//! SGST, an inter-state supply carries the full rate as IGST.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use bijak::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("INV/24-25/0001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .seller(PartyBuilder::new("Chennai Traders", AddressBuilder::new("Chennai", "600001", "Tamil Nadu").build())
//!         .gstin("33AAACC4563F1Z1").build())
//!     .buyer(PartyBuilder::new("Madurai Mills", AddressBuilder::new("Madurai", "625001", "Tamil Nadu").build()).build())
//!     .add_line(LineItemBuilder::new("1", "Cotton Yarn", dec!(2), "KGS", dec!(100))
//!         .gst_rate(dec!(18)).build())
//!     .build()
//!     .unwrap();
//!
//! let totals = invoice.totals.as_ref().unwrap();
//! assert_eq!(totals.grand_total, dec!(236.00));
//! assert_eq!(totals.cgst, dec!(18.00));
//! assert_eq!(totals.sgst, dec!(18.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, tax computation, rule 46 validation, amount in words, numbering |
//! | `render` | Printable HTML tax-invoice generation |
//! | `client` | Async invoice submission to a REST backend |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
