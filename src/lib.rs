//! pdfmagic library
//!
//! Simple batch PDF manipulation on top of lopdf:
//! - Merge whole PDFs, from a list of files or every `.pdf` in a directory
//! - Extract a selection of pages (`6`, `1-9`, ...) into a new PDF
//! - Derive default output file names
//!
//! # Example
//!
//! ```no_run
//! use pdfmagic::pdf::{MergeOptions, merge_pdfs};
//! use pdfmagic::InputSpec;
//! use std::path::PathBuf;
//!
//! let inputs = InputSpec::Directory(PathBuf::from("chapters")).resolve().unwrap();
//! let options = MergeOptions {
//!     output_path: pdfmagic::naming::default_merge_output(&inputs),
//!     input_paths: inputs,
//! };
//!
//! merge_pdfs(&options).expect("Failed to merge PDFs");
//! ```

pub mod error;
pub mod input;
pub mod naming;
pub mod pdf;
pub mod selection;

// Re-export commonly used items
pub use error::{Error, Result};
pub use input::InputSpec;
pub use selection::{PageSelection, PageSpec};
