//! Error types for the pdfmagic library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the pdfmagic library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF structure error found after a document was loaded
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A file could not be opened or parsed as a PDF
    #[error("Failed to read PDF {}: {}", .path.display(), .source)]
    Load {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// The output file could not be written
    #[error("Failed to write PDF {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Merge resolved to an empty list of files
    #[error("No input files to merge: {0}")]
    NoInputFiles(String),

    /// A page selection token is neither a page number nor a `lo-hi` range
    #[error("Invalid page specification: {0:?}")]
    InvalidSelection(String),

    /// A range whose lower bound is not below its upper bound
    #[error("Invalid page range {token:?}: the first page ({lo}) must be lower than the second ({hi})")]
    InvalidRange { token: String, lo: u32, hi: u32 },

    /// A selected page does not exist in the source document
    #[error("Page {} is out of range: file {} has only {} pages", .page, .path.display(), .page_count)]
    PageOutOfRange {
        path: PathBuf,
        page: u32,
        page_count: u32,
    },
}
