//! Client for the external HTML-to-PDF rendering service.
//!
//! pdfgate does not render PDFs itself. This crate turns a [`ConversionRequest`]
//! into the JSON [`GatewayPayload`] the renderer expects, posts it to the
//! configured endpoint, and hands back the PDF bytes with the filename the
//! renderer suggested.
//!
//! Each call is a single attempt: there are no retries, and every failure is
//! reported as one of the [`GatewayError`] categories.

mod client;
mod disposition;
mod error;
mod mode;
mod payload;
mod request;

pub use client::{GatewayClient, PdfDocument};
pub use disposition::{DEFAULT_FILENAME, filename_from_disposition};
pub use error::GatewayError;
pub use mode::ConversionMode;
pub use payload::GatewayPayload;
pub use request::{ConversionRequest, Margin, PaperSize};
