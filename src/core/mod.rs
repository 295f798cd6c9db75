//! Core invoice types, tax computation, and validation.
//!
//! This module provides the foundational types for GST tax invoices
//! (CGST Rules, rule 46), with place-of-supply tax splitting and
//! rule 46 validation.

mod builder;
mod error;
mod gstin;
mod numbering;
pub mod states;
mod tax;
mod types;
mod validation;
pub mod words;

pub use builder::*;
pub use error::*;
pub use gstin::{validate_gstin, GstinError};
pub use numbering::*;
pub use states::{state_code_for, is_known_state};
pub use tax::*;
pub use types::*;
pub use validation::*;
pub use words::{amount_in_words, number_to_words};
