//! PDF manipulation module

pub mod document;
pub mod extract;
pub mod merge;

// Re-export commonly used items
pub use document::{DocumentBuilder, ImportedDocument, PageRef, SourceDocument};
pub use extract::{extract_pages, ExtractOptions, Extraction};
pub use merge::{merge_pdfs, merge_pdfs_with_progress, MergeOptions};
