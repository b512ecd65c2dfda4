//! Merge input resolution

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};

use crate::error::{Error, Result};

/// What the user asked to merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    /// Literal file paths, merged in the order given
    FileList(Vec<PathBuf>),
    /// Every `*.pdf` file directly inside a directory, merged alphabetically
    Directory(PathBuf),
}

impl InputSpec {
    /// Classify command-line inputs
    ///
    /// A single argument naming an existing directory selects the directory
    /// mode; anything else is a list of files.
    pub fn from_args(inputs: Vec<PathBuf>) -> Self {
        if let [single] = inputs.as_slice() {
            if single.is_dir() {
                return InputSpec::Directory(single.clone());
            }
        }
        InputSpec::FileList(inputs)
    }

    /// Resolve to the concrete, ordered list of files to merge
    pub fn resolve(&self) -> Result<Vec<PathBuf>> {
        let files = match self {
            InputSpec::FileList(paths) => paths.clone(),
            InputSpec::Directory(dir) => list_pdf_files(dir)?,
        };

        if files.is_empty() {
            let what = match self {
                InputSpec::FileList(_) => "no files given".to_string(),
                InputSpec::Directory(dir) => {
                    format!("no .pdf files in directory {}", dir.display())
                }
            };
            return Err(Error::NoInputFiles(what));
        }

        log::debug!("Resolved {} input file(s)", files.len());
        Ok(files)
    }
}

/// List `*.pdf` files directly inside `dir`, sorted by path
fn list_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    // Escape the directory so brackets or asterisks in it match literally
    let pattern = Path::new(&Pattern::escape(&dir.to_string_lossy()))
        .join("*.pdf")
        .to_string_lossy()
        .into_owned();
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let entries = glob_with(&pattern, options)
        .map_err(|e| Error::NoInputFiles(format!("invalid directory pattern {}: {}", pattern, e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::Io(e.into()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
