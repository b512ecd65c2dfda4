//! PDF merging using lopdf

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pdf::document::{DocumentBuilder, SourceDocument};

/// Options for merging PDFs
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Input PDF file paths in the order they should be merged
    pub input_paths: Vec<PathBuf>,
    /// Output PDF file path
    pub output_path: PathBuf,
}

/// Merge multiple PDF files into a single PDF
///
/// Every input is read before the output file is touched, so a bad input
/// leaves no output behind. Returns the number of pages written.
///
/// # Example
///
/// ```no_run
/// use pdfmagic::pdf::{MergeOptions, merge_pdfs};
/// use std::path::PathBuf;
///
/// let options = MergeOptions {
///     input_paths: vec![
///         PathBuf::from("1. first.pdf"),
///         PathBuf::from("2. second.pdf"),
///     ],
///     output_path: PathBuf::from("merged.pdf"),
/// };
///
/// merge_pdfs(&options).expect("Failed to merge");
/// ```
pub fn merge_pdfs(options: &MergeOptions) -> Result<usize> {
    merge_pdfs_with_progress(options, |_| {})
}

/// Same as [`merge_pdfs`], calling `on_file` before each input is read
pub fn merge_pdfs_with_progress<F>(options: &MergeOptions, mut on_file: F) -> Result<usize>
where
    F: FnMut(&Path),
{
    if options.input_paths.is_empty() {
        return Err(Error::NoInputFiles("no files given".to_string()));
    }

    // Fail on a missing file before spending time parsing the others
    for path in &options.input_paths {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }

    let mut builder = DocumentBuilder::new();
    for path in &options.input_paths {
        on_file(path);

        let source = SourceDocument::open(path)?;
        let pages = builder.append_document(source)?;
        log::info!("Appended {} page(s) from {}", pages, path.display());
    }

    let total_pages = builder.page_count();
    builder.write(&options.output_path)?;

    Ok(total_pages)
}
