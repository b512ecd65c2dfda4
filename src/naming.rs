//! Default output file names

use std::path::{Path, PathBuf};

use crate::selection::PageSelection;

/// Default merge output: input stems joined by spaces plus `_merged.pdf`
///
/// The result is a bare file name, so it lands in the working directory.
pub fn default_merge_output(inputs: &[PathBuf]) -> PathBuf {
    let stems: Vec<String> = inputs.iter().map(|path| file_stem(path)).collect();
    PathBuf::from(format!("{}_merged.pdf", stems.join(" ")))
}

/// Default extract output: `<stem>_<pages>.pdf` next to the source file
pub fn default_extract_output(source: &Path, selection: &PageSelection) -> PathBuf {
    source.with_file_name(format!("{}_{}.pdf", file_stem(source), selection))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
