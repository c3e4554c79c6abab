use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::model::{ContentRow, DocumentCollection, ResourceRow, TableValue};

/// Supported interchange formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Declarative description of one format: the file extension and the
/// function that serializes a collection part.
pub struct FormatDescriptor {
    pub extension: &'static str,
    serialize: fn(&Part<'_>, &mut dyn Write) -> Result<(), Error>,
}

const JSON: FormatDescriptor = FormatDescriptor {
    extension: ".json",
    serialize: write_json,
};

// No index column is emitted; row order alone carries document order.
const CSV: FormatDescriptor = FormatDescriptor {
    extension: ".csv",
    serialize: write_csv,
};

impl OutputFormat {
    pub fn descriptor(self) -> &'static FormatDescriptor {
        match self {
            OutputFormat::Json => &JSON,
            OutputFormat::Csv => &CSV,
        }
    }
}

/// One named part of a collection, borrowed for serialization.
pub enum Part<'a> {
    Content(&'a [ContentRow]),
    Resources(&'a [ResourceRow]),
}

impl Part<'_> {
    fn name(&self) -> &'static str {
        match self {
            Part::Content(_) => "content",
            Part::Resources(_) => "resources",
        }
    }
}

/// Write one file per collection part, named
/// `<prefix><document-stem>_<part><extension>`.
pub fn export(
    collection: &DocumentCollection,
    format: OutputFormat,
    output_prefix: &str,
) -> Result<(), Error> {
    let descriptor = format.descriptor();
    let parts = [
        Part::Content(&collection.content),
        Part::Resources(&collection.resources),
    ];

    for part in parts {
        let path = output_path(
            output_prefix,
            &collection.document_name,
            part.name(),
            descriptor.extension,
        );
        let file = File::create(&path)
            .map_err(|e| Error::ExportTargetUnwritable(path.clone(), e))?;
        let mut writer = BufWriter::new(file);
        (descriptor.serialize)(&part, &mut writer)?;
        writer.flush()?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn output_path(prefix: &str, document_name: &str, part: &str, extension: &str) -> PathBuf {
    let stem = Path::new(document_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(document_name);
    PathBuf::from(format!("{prefix}{stem}_{part}{extension}"))
}

fn write_json(part: &Part<'_>, writer: &mut dyn Write) -> Result<(), Error> {
    match part {
        Part::Content(rows) => serde_json::to_writer(&mut *writer, rows)?,
        Part::Resources(rows) => serde_json::to_writer(&mut *writer, rows)?,
    }
    Ok(())
}

fn write_csv(part: &Part<'_>, writer: &mut dyn Write) -> Result<(), Error> {
    let mut csv = csv::Writer::from_writer(writer);
    match part {
        Part::Content(rows) => {
            csv.write_record([
                "document_name",
                "paragraph_content",
                "content_reference_id",
                "style",
                "style_extracted",
                "highlighted_content",
            ])?;
            for row in *rows {
                csv.write_record([
                    row.document_name.clone(),
                    row.paragraph_content.clone().unwrap_or_default(),
                    row.content_reference_id.to_string(),
                    row.style.clone(),
                    json_cell(&row.style_extracted)?,
                    row.highlighted_content
                        .map(|b| b.to_string())
                        .unwrap_or_default(),
                ])?;
            }
        }
        Part::Resources(rows) => {
            csv.write_record([
                "resource_index",
                "image_rID",
                "image_filename",
                "image_base64_string",
                "resource_type",
                "text_content",
            ])?;
            for row in *rows {
                csv.write_record([
                    row.resource_index.to_string(),
                    row.image_r_id.clone().unwrap_or_default(),
                    row.image_filename.clone().unwrap_or_default(),
                    row.image_base64_string.clone().unwrap_or_default(),
                    row.resource_type.to_string(),
                    table_cell(&row.text_content)?,
                ])?;
            }
        }
    }
    csv.flush()?;
    Ok(())
}

// Nested values are embedded in their CSV cell as JSON text.
fn json_cell<T: serde::Serialize>(value: &Option<T>) -> Result<String, Error> {
    match value {
        Some(v) => Ok(serde_json::to_string(v)?),
        None => Ok(String::new()),
    }
}

fn table_cell(value: &Option<TableValue>) -> Result<String, Error> {
    match value {
        Some(TableValue::Scalar(text)) => Ok(text.clone()),
        Some(grid @ TableValue::Grid(_)) => Ok(serde_json::to_string(grid)?),
        None => Ok(String::new()),
    }
}
