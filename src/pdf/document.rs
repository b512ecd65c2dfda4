//! Reading source PDFs and assembling output PDFs with lopdf
//!
//! A [`SourceDocument`] is a PDF loaded from disk. A [`DocumentBuilder`]
//! accumulates pages from any number of sources and writes them out as a
//! new document with a single flat page tree.
//!
//! Sources are imported into the builder's object space once, with their
//! object ids shifted past everything already in the builder (the approach
//! of the lopdf merge example). Pages are then picked from the import by
//! index, in any order and as often as needed.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Limit on `Parent` links followed, in case of a cyclic page tree
const MAX_TREE_DEPTH: usize = 64;

/// A PDF opened for reading
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: PathBuf,
    doc: Document,
}

impl SourceDocument {
    /// Load a PDF from disk
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let doc = Document::load(path).map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loaded {} (PDF {})", path.display(), doc.version);
        Ok(Self::from_document(path, doc))
    }

    /// Wrap an already loaded document; `path` is only used in messages
    pub fn from_document(path: impl Into<PathBuf>, doc: Document) -> Self {
        Self {
            path: path.into(),
            doc,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of pages reachable through the page tree
    pub fn page_count(&self) -> u32 {
        self.doc.page_iter().count() as u32
    }
}

/// A page inside a [`DocumentBuilder`]'s object space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef(ObjectId);

/// Pages of a source document after it was imported into a builder
#[derive(Debug, Clone)]
pub struct ImportedDocument {
    path: PathBuf,
    pages: Vec<ObjectId>,
}

impl ImportedDocument {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Page at a 0-based index
    pub fn page(&self, index: usize) -> Result<PageRef> {
        self.pages
            .get(index)
            .map(|&id| PageRef(id))
            .ok_or_else(|| Error::PageOutOfRange {
                path: self.path.clone(),
                page: index as u32 + 1,
                page_count: self.page_count(),
            })
    }

    /// All pages in document order
    pub fn pages(&self) -> impl Iterator<Item = PageRef> + '_ {
        self.pages.iter().map(|&id| PageRef(id))
    }
}

/// Accumulates pages and writes them as a new PDF
#[derive(Debug)]
pub struct DocumentBuilder {
    doc: Document,
    kids: Vec<ObjectId>,
    used: HashSet<ObjectId>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::with_version("1.5"),
            kids: Vec::new(),
            used: HashSet::new(),
        }
    }

    /// Number of pages added so far
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Move a source document's objects into the builder
    ///
    /// No pages are added yet; pick them from the returned
    /// [`ImportedDocument`] with [`DocumentBuilder::add_page`]. Objects of
    /// pages that are never added are dropped on write.
    pub fn import(&mut self, source: SourceDocument) -> Result<ImportedDocument> {
        let SourceDocument { path, mut doc } = source;

        materialize_inherited_attributes(&mut doc)?;

        doc.renumber_objects_with(self.doc.max_id + 1);
        let pages: Vec<ObjectId> = doc.page_iter().collect();

        self.doc.max_id = self.doc.max_id.max(doc.max_id);
        self.doc.objects.extend(doc.objects);

        log::debug!(
            "Imported {} page(s) from {}",
            pages.len(),
            path.display()
        );
        Ok(ImportedDocument { path, pages })
    }

    /// Append one page
    ///
    /// A page that was already added is copied, so the output gets a
    /// distinct page object for every occurrence.
    pub fn add_page(&mut self, page: PageRef) -> Result<()> {
        let PageRef(id) = page;

        let id = if self.used.insert(id) {
            id
        } else {
            let copy = self.doc.get_dictionary(id)?.clone();
            self.doc.add_object(Object::Dictionary(copy))
        };

        self.kids.push(id);
        Ok(())
    }

    /// Import a source document and append all of its pages
    ///
    /// Returns the number of pages appended.
    pub fn append_document(&mut self, source: SourceDocument) -> Result<usize> {
        let imported = self.import(source)?;
        for page in imported.pages() {
            self.add_page(page)?;
        }
        Ok(imported.pages.len())
    }

    /// Build the page tree and write the document to `path`
    ///
    /// Creates or truncates the file.
    pub fn write(mut self, path: &Path) -> Result<()> {
        let pages_id = self.doc.new_object_id();

        for &page_id in &self.kids {
            let page = self.doc.get_object_mut(page_id).and_then(Object::as_dict_mut)?;
            page.set("Parent", Object::Reference(pages_id));
        }

        let kids: Vec<Object> = self.kids.iter().map(|&id| Object::Reference(id)).collect();

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Count", Object::Integer(self.kids.len() as i64));
        pages.set("Kids", Object::Array(kids));
        self.doc.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = self.doc.add_object(Object::Dictionary(catalog));

        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        let pruned = self.doc.prune_objects();
        log::debug!("Dropped {} unreferenced object(s)", pruned.len());

        self.doc.compress();

        let write_err = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        self.doc.save_to(&mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        log::info!("Wrote {} page(s) to {}", self.kids.len(), path.display());
        Ok(())
    }
}

/// Copy inherited page attributes onto every page dictionary
///
/// Imported pages are re-parented under a fresh page tree root, so
/// anything they picked up from their old ancestors has to live on the
/// page itself.
fn materialize_inherited_attributes(doc: &mut Document) -> Result<()> {
    let page_ids: Vec<ObjectId> = doc.page_iter().collect();

    for page_id in page_ids {
        let inherited = inherited_attributes(doc, page_id)?;
        if inherited.is_empty() {
            continue;
        }

        let page = doc.get_object_mut(page_id).and_then(Object::as_dict_mut)?;
        for (key, value) in inherited {
            page.set(key, value);
        }
    }

    Ok(())
}

fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Result<Vec<(&'static [u8], Object)>> {
    let page = doc.get_dictionary(page_id)?;

    let mut missing: Vec<&'static [u8]> = INHERITABLE_ATTRIBUTES
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();
    let mut found = Vec::new();

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(node_id) = parent {
        if missing.is_empty() || depth >= MAX_TREE_DEPTH {
            break;
        }
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };

        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((*key, value.clone()));
                false
            }
            Err(_) => true,
        });

        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        depth += 1;
    }

    Ok(found)
}
