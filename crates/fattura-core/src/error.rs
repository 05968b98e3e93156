//! Error types for the fattura-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the fattura library.
#[derive(Error, Debug)]
pub enum FatturaError {
    /// XML reading or writing error.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// An invoice document could not be decoded.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// Spreadsheet reading or writing error.
    #[error("spreadsheet error: {0}")]
    Sheet(#[from] SheetError),

    /// Invalid glob pattern for input files.
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while building or reading an XML tree.
#[derive(Error, Debug)]
pub enum XmlError {
    /// The underlying XML reader or writer failed.
    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    /// Writing to the output buffer failed.
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),

    /// Serialised output was not valid UTF-8.
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The document is syntactically readable but not a single well-formed tree.
    #[error("ill-formed document: {0}")]
    IllFormed(String),
}

/// Errors raised while decoding an invoice document into an extracted record.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The root element, a section or a targeted leaf element is absent.
    #[error("malformed document: missing element {path}")]
    MalformedDocument { path: String },

    /// The total amount is not a decimal number.
    #[error("invalid number in ImportoTotaleDocumento: {value:?}")]
    NumberFormat { value: String },

    /// The text is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),
}

/// Errors related to spreadsheet input and output.
#[derive(Error, Debug)]
pub enum SheetError {
    /// XLSX writer error.
    #[error("XLSX write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Workbook reader error.
    #[error("workbook read failed: {0}")]
    Read(#[from] calamine::Error),

    /// CSV writer error.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON writer error.
    #[error("JSON write failed: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook contains no worksheet.
    #[error("workbook {0} has no worksheets")]
    NoSheets(String),
}

/// Result type for the fattura library.
pub type Result<T> = std::result::Result<T, FatturaError>;
