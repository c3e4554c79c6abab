//! Extract structured content from DOCX documents into two aligned tables
//! (content rows and resource rows linked by a reference id) and serialize
//! them to JSON or CSV.

pub mod block;
pub mod config;
pub mod docx;
mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod resource;
pub mod style;
pub mod table;

pub use docx::Document;
pub use error::Error;
pub use export::{OutputFormat, export};
pub use model::DocumentCollection;

use std::path::Path;

/// Open a document and run one extraction pass over its body.
pub fn extract_docx(input: &Path) -> Result<DocumentCollection, Error> {
    let document = Document::open(input)?;
    extract::extract(&document)
}
