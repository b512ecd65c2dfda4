//! Shared helpers for integration tests
//!
//! Fixtures are generated with lopdf instead of being checked in. Every
//! page gets a distinct MediaBox width so tests can tell pages apart after
//! they went through a merge or an extraction.

#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Write a PDF whose pages have the given MediaBox widths
///
/// Resources live on the root Pages node, so pages inherit them.
pub fn write_pdf(path: &Path, widths: &[i64]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::new();
    for (i, &width) in widths.iter().enumerate() {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![20.into(), 400.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("Page {}", i + 1))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => Object::Array(vec![0.into(), 0.into(), width.into(), 842.into()]),
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => widths.len() as i64,
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        },
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("save fixture");
}

/// MediaBox widths of every page, in page order
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("load output");
    doc.page_iter()
        .map(|id| {
            let page = doc.get_dictionary(id).expect("page dictionary");
            let media_box = page.get(b"MediaBox").expect("MediaBox");
            media_box.as_array().expect("MediaBox array")[2]
                .as_i64()
                .expect("integer width")
        })
        .collect()
}

/// Decoded content stream of the page at a 0-based index
pub fn page_content(path: &Path, index: usize) -> String {
    let doc = Document::load(path).expect("load output");
    let page_id = doc.page_iter().nth(index).expect("page exists");
    let content = doc.get_page_content(page_id).expect("page content");
    String::from_utf8_lossy(&content).into_owned()
}
