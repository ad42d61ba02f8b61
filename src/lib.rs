//! # belegdruck
//!
//! Deterministic PDF rendering for German business documents: Rechnung
//! and Angebot layout, pagination, and locale formatting.
//!
//! A [`Document`] plus the issuer's [`CompanyProfile`] go in, the bytes of
//! a finished A4 PDF come out. Rendering is pure and synchronous: no I/O,
//! no clock, no shared state, and the same inputs always produce the
//! identical bytes. All monetary values use [`rust_decimal::Decimal`],
//! never floating point.
//!
//! Rendering runs in two passes. [`layout`](crate::layout::layout) walks
//! the document and produces a [`PageScript`](crate::layout::PageScript),
//! a paginated list of draw commands with every coordinate already
//! decided; [`pdf::emit`](crate::pdf::emit) serializes that script into
//! PDF bytes. Tests inspect the script, callers take the bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use belegdruck::{CompanyProfileBuilder, Customer, DocumentBuilder, DocumentKind, render};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let document = DocumentBuilder::new(
//!     DocumentKind::Invoice,
//!     "RE-2024-001",
//!     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
//! )
//! .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
//! .customer(Customer::new("Kunde AG").email("buchhaltung@kunde.de"))
//! .add_item("Beratung", dec!(10), dec!(150))
//! .build()
//! .unwrap();
//!
//! let profile = CompanyProfileBuilder::new("ACME GmbH")
//!     .address("Musterstraße 1")
//!     .postal_code("10115")
//!     .city("Berlin")
//!     .vat_id("DE123456789")
//!     .build();
//!
//! let bytes = render(&document, &profile).unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

pub mod core;
pub mod font;
pub mod format;
pub mod layout;
pub mod pdf;

// Re-export core types at crate root for convenience
pub use crate::core::*;

/// Render `document` to a complete PDF byte buffer.
///
/// Convenience wrapper over the two passes; equivalent to
/// `pdf::emit(&layout::layout(document, profile))`.
pub fn render(
    document: &Document,
    profile: &CompanyProfile,
) -> Result<Vec<u8>, RenderError> {
    let script = layout::layout(document, profile);
    pdf::emit(&script)
}
