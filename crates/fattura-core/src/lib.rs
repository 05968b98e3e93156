//! Core library for synthetic FatturaElettronica invoices.
//!
//! This crate provides:
//! - Invoice record models (full generation record and reduced extraction record)
//! - Randomised record generation from fixed sample pools
//! - XML encoding and path-based decoding of the invoice document
//! - Path flattening of arbitrary invoice XML and the reverse rebuild
//! - Spreadsheet export (XLSX, CSV, JSON) and XLSX import
//! - Directory batch drivers for generation and extraction

pub mod batch;
pub mod error;
pub mod generator;
pub mod models;
pub mod sheet;
pub mod xml;

pub use error::{DecodeError, FatturaError, Result, SheetError, XmlError};
pub use generator::{InvoiceGenerator, RngSource, SampleSource, SeededSource, SystemSource};
pub use models::config::FatturaConfig;
pub use models::invoice::{ExtractedRecord, InvoiceRecord};
pub use sheet::{SheetFormat, SheetWriter};
pub use xml::{decode, decode_str, encode, XmlElement};
