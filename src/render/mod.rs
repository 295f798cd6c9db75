//! Printable HTML tax-invoice generation.
//!
//! Produces a self-contained static HTML document for browser printing.
//! This is templating only — the windowing side (opening a tab, waiting for
//! images) belongs to the caller; the emitted page triggers the print dialog
//! itself on load.

mod document;

pub use document::{render_html, RenderOptions};
