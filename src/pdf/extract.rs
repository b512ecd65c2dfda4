//! Extracting a page selection into a new PDF

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::naming::default_extract_output;
use crate::pdf::document::{DocumentBuilder, SourceDocument};
use crate::selection::PageSelection;

/// Options for extracting pages
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Source PDF file
    pub input_path: PathBuf,
    /// Pages to copy, in output order
    pub selection: PageSelection,
    /// Output PDF file path; `<stem>_<pages>.pdf` next to the source if unset
    pub output_path: Option<PathBuf>,
}

/// A validated extraction, ready to be written
///
/// Building one opens the source and checks the selection against its page
/// count; nothing is written until [`Extraction::write`].
#[derive(Debug)]
pub struct Extraction {
    source: SourceDocument,
    page_count: u32,
    selection: PageSelection,
    output_path: PathBuf,
}

impl Extraction {
    /// Open the source and validate the selection
    ///
    /// The default output name lists every selected page, so it is only
    /// derived once the selection is known to fit the document.
    pub fn plan(options: &ExtractOptions) -> Result<Self> {
        let source = SourceDocument::open(&options.input_path)?;
        let page_count = source.page_count();
        options.selection.validate(source.path(), page_count)?;

        log::debug!(
            "Extracting {} of {} page(s) from {}",
            options.selection.len(),
            page_count,
            source.path().display()
        );

        let output_path = match &options.output_path {
            Some(path) => path.clone(),
            None => default_extract_output(&options.input_path, &options.selection),
        };

        Ok(Self {
            source,
            page_count,
            selection: options.selection.clone(),
            output_path,
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Copy the selected pages and write the output file
    ///
    /// Returns the number of pages written.
    pub fn write(self) -> Result<usize> {
        let indices: Vec<usize> = self
            .selection
            .indices(self.source.path(), self.page_count)?
            .collect();

        let mut builder = DocumentBuilder::new();
        let imported = builder.import(self.source)?;

        for index in indices {
            builder.add_page(imported.page(index)?)?;
        }

        let pages = builder.page_count();
        builder.write(&self.output_path)?;
        Ok(pages)
    }
}

/// Extract pages from a PDF into a new file
///
/// # Example
///
/// ```no_run
/// use pdfmagic::PageSelection;
/// use pdfmagic::pdf::{ExtractOptions, extract_pages};
/// use std::path::PathBuf;
///
/// let options = ExtractOptions {
///     input_path: PathBuf::from("report.pdf"),
///     selection: PageSelection::parse(&["1-3", "7"]).unwrap(),
///     output_path: Some(PathBuf::from("summary.pdf")),
/// };
///
/// extract_pages(&options).expect("Failed to extract");
/// ```
pub fn extract_pages(options: &ExtractOptions) -> Result<usize> {
    Extraction::plan(options)?.write()
}
