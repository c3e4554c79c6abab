use log::debug;

use crate::block::{Block, Container, walk};
use crate::docx::{Document, wml};
use crate::error::Error;
use crate::model::{ContentRef, ContentRow, DocumentCollection, ResourceRow};
use crate::{resource, style, table};

/// Style label recorded for non-text placeholder rows.
const RESOURCE_STYLE: &str = "Resource";

/// Walk the document body and assemble the content and resource tables in
/// document order. One forward pass; the returned collection is not
/// mutated afterwards.
pub fn extract(document: &Document) -> Result<DocumentCollection, Error> {
    let tree = roxmltree::Document::parse(document.body_xml())?;
    let body = wml(tree.root_element(), "body")
        .ok_or_else(|| Error::InvalidContainer("document has no w:body".into()))?;

    let mut assembler = Assembler {
        document,
        content: Vec::new(),
        resources: Vec::new(),
        resource_counter: 0,
    };

    for block in walk(Container::Body(body))? {
        match block {
            Block::Text(paragraph) => assembler.text_block(paragraph)?,
            Block::Table(tbl) => assembler.table_block(tbl)?,
        }
    }

    debug!(
        "extracted {} content rows and {} resources from {}",
        assembler.content.len(),
        assembler.resources.len(),
        document.name()
    );

    Ok(DocumentCollection {
        document_name: document.name().to_string(),
        content: assembler.content,
        resources: assembler.resources,
    })
}

struct Assembler<'a> {
    document: &'a Document,
    content: Vec<ContentRow>,
    resources: Vec<ResourceRow>,
    resource_counter: usize,
}

impl Assembler<'_> {
    /// Sole mutation point for the shared image/table counter.
    fn next_index(&mut self) -> usize {
        let index = self.resource_counter;
        self.resource_counter += 1;
        index
    }

    fn text_block(&mut self, paragraph: roxmltree::Node) -> Result<(), Error> {
        let record = style::extract_style(paragraph);
        let highlighted = record.runs.iter().any(|r| r.highlight.is_some());

        // A paragraph that contains a picture is recorded purely as a
        // resource placeholder; any plain text in the same paragraph is
        // discarded in favor of the linkage.
        if let Some(picture) = style::runs(paragraph).find_map(resource::find_picture) {
            let index = self.next_index();
            let row = resource::extract_image(picture, self.document, index)?;
            self.resources.push(row);
            self.content.push(ContentRow {
                document_name: self.document.name().to_string(),
                paragraph_content: None,
                content_reference_id: ContentRef::Resource(index),
                style: RESOURCE_STYLE.to_string(),
                style_extracted: Some(record),
                highlighted_content: Some(highlighted),
            });
            return Ok(());
        }

        let text = style::paragraph_text(paragraph);
        if text.trim().is_empty() {
            debug!("dropping blank paragraph");
            return Ok(());
        }

        let style_name = self.document.style_name(style::style_id(paragraph));
        self.content.push(ContentRow {
            document_name: self.document.name().to_string(),
            paragraph_content: Some(text),
            content_reference_id: ContentRef::Novalue,
            style: style_name.to_string(),
            style_extracted: Some(record),
            highlighted_content: Some(highlighted),
        });
        Ok(())
    }

    fn table_block(&mut self, tbl: roxmltree::Node) -> Result<(), Error> {
        let value = table::extract_table(tbl)?;
        let index = self.next_index();
        self.resources.push(ResourceRow::table(index, value));
        self.content.push(ContentRow {
            document_name: self.document.name().to_string(),
            paragraph_content: None,
            content_reference_id: ContentRef::Resource(index),
            style: RESOURCE_STYLE.to_string(),
            style_extracted: None,
            highlighted_content: None,
        });
        Ok(())
    }
}
