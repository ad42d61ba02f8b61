//! Core document types, builders, and amount reconciliation.
//!
//! This module provides the renderer's input model: a [`Document`]
//! snapshot (Rechnung or Angebot) with its line items and precomputed
//! totals, and the issuing [`CompanyProfile`].

mod builder;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use types::*;
pub use validation::*;
