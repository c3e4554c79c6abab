use serde::{Serialize, Serializer};

/// Paragraph alignment as declared by `w:jc`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Per-run character formatting. Every field is optional: an unset value
/// means the run inherits it from its style chain, and we record it as
/// absent rather than resolving the inheritance.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RunStyle {
    pub font_name: Option<String>,
    pub font_size: Option<f32>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub color: Option<String>,
    pub highlight: Option<String>,
}

/// Paragraph-level formatting plus the ordered run styles.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StyleRecord {
    pub alignment: Option<Alignment>,
    pub spacing_before: Option<f32>,
    pub spacing_after: Option<f32>,
    pub runs: Vec<RunStyle>,
}

/// Link from a content row to the resource table. Text paragraphs carry the
/// `Novalue` sentinel; resource placeholders carry the backing row's index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContentRef {
    Novalue,
    Resource(usize),
}

impl Serialize for ContentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ContentRef::Novalue => serializer.serialize_str("Novalue"),
            ContentRef::Resource(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

impl std::fmt::Display for ContentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentRef::Novalue => write!(f, "Novalue"),
            ContentRef::Resource(index) => write!(f, "{index}"),
        }
    }
}

/// One row of the content table, in document order. Field order is the
/// exported column order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContentRow {
    pub document_name: String,
    pub paragraph_content: Option<String>,
    pub content_reference_id: ContentRef,
    pub style: String,
    pub style_extracted: Option<StyleRecord>,
    pub highlighted_content: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Image,
    Table,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Image => write!(f, "image"),
            ResourceKind::Table => write!(f, "table"),
        }
    }
}

/// Serialized table payload. A single-column table collapses to the bare
/// text of its first cell; anything wider stays a row-major grid.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableValue {
    Scalar(String),
    Grid(Vec<Vec<String>>),
}

/// One row of the resource table. Field order is the exported column order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResourceRow {
    pub resource_index: usize,
    #[serde(rename = "image_rID")]
    pub image_r_id: Option<String>,
    pub image_filename: Option<String>,
    pub image_base64_string: Option<String>,
    pub resource_type: ResourceKind,
    pub text_content: Option<TableValue>,
}

impl ResourceRow {
    pub fn image(index: usize, r_id: String, filename: String, base64: String) -> Self {
        Self {
            resource_index: index,
            image_r_id: Some(r_id),
            image_filename: Some(filename),
            image_base64_string: Some(base64),
            resource_type: ResourceKind::Image,
            text_content: None,
        }
    }

    pub fn table(index: usize, value: TableValue) -> Self {
        Self {
            resource_index: index,
            image_r_id: None,
            image_filename: None,
            image_base64_string: None,
            resource_type: ResourceKind::Table,
            text_content: Some(value),
        }
    }
}

/// The paired output of one extraction pass. Immutable once produced; the
/// exporter only reads it, so a failed export can be retried elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentCollection {
    pub document_name: String,
    pub content: Vec<ContentRow>,
    pub resources: Vec<ResourceRow>,
}
