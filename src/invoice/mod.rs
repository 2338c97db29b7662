//! Invoice document generation.
//!
//! Takes an [`InvoiceDocument`] and produces a paginated A4 PDF: header band,
//! party cards, metadata strip, line-items table, totals with the amount in
//! words, optional payment summary and notes/terms, and a repeated branded
//! footer with page numbers. Layout decisions live in [`layout`] so they stay
//! unit-testable; the drawing itself is in [`renderer`].

pub mod layout;
pub mod models;
pub mod renderer;
pub mod words;

pub use models::{
    round2, FooterBranding, InvoiceDocument, LineItem, Party, PaymentRecord,
};
pub use renderer::{render, GeneratedInvoice};
pub use words::amount_in_words;

use thiserror::Error;

/// Errors surfaced by the renderer. Logo decode failures are not listed:
/// the document is rendered without the logo and the failure is logged.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to assemble PDF document: {0}")]
    Pdf(#[from] printpdf::Error),
}
