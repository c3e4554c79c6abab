use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::Error;

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const PIC_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
pub const DML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const DOC_REL_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

pub(crate) fn twips_to_pts(twips: f32) -> f32 {
    twips / 20.0
}

pub(crate) fn wml<'a>(
    node: roxmltree::Node<'a, 'a>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

pub(crate) fn wml_attr<'a>(node: roxmltree::Node<'a, 'a>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| n.attribute((WML_NS, "val")))
}

pub(crate) fn twips_attr(node: roxmltree::Node, attr: &str) -> Option<f32> {
    node.attribute((WML_NS, attr))
        .and_then(|v| v.parse::<f32>().ok())
        .map(twips_to_pts)
}

pub(crate) fn pic<'a>(
    node: roxmltree::Node<'a, 'a>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(PIC_NS))
}

/// The parsed input container. Owns the main body XML, the relationship
/// table mapping rIds to binary parts, and the style-id to style-name map
/// from `word/styles.xml`. Read-only for the duration of an extraction pass.
pub struct Document {
    name: String,
    body_xml: String,
    relationships: HashMap<String, String>,
    parts: HashMap<String, Vec<u8>>,
    style_names: HashMap<String, String>,
    default_style: String,
}

impl Document {
    pub fn open(path: &Path) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::DocumentNotFound(path.to_path_buf()));
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.docx")
            .to_string();

        let file = std::fs::File::open(path)
            .map_err(|_| Error::DocumentNotFound(path.to_path_buf()))?;
        let mut zip = zip::ZipArchive::new(file)?;

        let mut body_xml = String::new();
        zip.by_name("word/document.xml")?
            .read_to_string(&mut body_xml)?;

        let relationships = parse_relationships(&mut zip);
        let parts = load_parts(&mut zip, &relationships);
        let (style_names, default_style) = parse_style_names(&mut zip);

        Ok(Self {
            name,
            body_xml,
            relationships,
            parts,
            style_names,
            default_style,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body_xml(&self) -> &str {
        &self.body_xml
    }

    /// Resolve a relationship id to its binary payload.
    pub fn part(&self, r_id: &str) -> Result<&[u8], Error> {
        self.relationships
            .get(r_id)
            .and_then(|target| self.parts.get(target))
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnresolvedRelationship(r_id.to_string()))
    }

    /// Human-readable style name for a `w:pStyle` id. Paragraphs without an
    /// explicit style, and ids not present in styles.xml, fall back to the
    /// document default.
    pub fn style_name(&self, style_id: Option<&str>) -> &str {
        style_id
            .and_then(|id| self.style_names.get(id))
            .map(String::as_str)
            .unwrap_or(&self.default_style)
    }
}

fn parse_relationships(zip: &mut zip::ZipArchive<std::fs::File>) -> HashMap<String, String> {
    let mut relationships = HashMap::new();

    let mut xml_content = String::new();
    let Ok(mut file) = zip.by_name("word/_rels/document.xml.rels") else {
        return relationships;
    };
    if file.read_to_string(&mut xml_content).is_err() {
        return relationships;
    }
    let Ok(xml) = roxmltree::Document::parse(&xml_content) else {
        return relationships;
    };

    for node in xml.root_element().children() {
        if node.tag_name().name() != "Relationship"
            || node.tag_name().namespace() != Some(PKG_REL_NS)
        {
            continue;
        }
        if node.attribute("TargetMode") == Some("External") {
            continue;
        }
        let (Some(id), Some(target)) = (node.attribute("Id"), node.attribute("Target")) else {
            continue;
        };
        // Targets are relative to word/; absolute targets name a package path.
        let zip_path = match target.strip_prefix('/') {
            Some(absolute) => absolute.to_string(),
            None => format!("word/{target}"),
        };
        relationships.insert(id.to_string(), zip_path);
    }

    relationships
}

fn load_parts(
    zip: &mut zip::ZipArchive<std::fs::File>,
    relationships: &HashMap<String, String>,
) -> HashMap<String, Vec<u8>> {
    let mut parts = HashMap::new();
    for target in relationships.values() {
        let Ok(mut file) = zip.by_name(target) else {
            continue;
        };
        let mut data = Vec::new();
        if file.read_to_end(&mut data).is_ok() {
            parts.insert(target.clone(), data);
        }
    }
    parts
}

fn parse_style_names(
    zip: &mut zip::ZipArchive<std::fs::File>,
) -> (HashMap<String, String>, String) {
    let mut style_names = HashMap::new();
    let mut default_style = String::from("Normal");

    let mut xml_content = String::new();
    let Ok(mut file) = zip.by_name("word/styles.xml") else {
        return (style_names, default_style);
    };
    if file.read_to_string(&mut xml_content).is_err() {
        return (style_names, default_style);
    }
    let Ok(xml) = roxmltree::Document::parse(&xml_content) else {
        return (style_names, default_style);
    };

    for style_node in xml.root_element().children() {
        if style_node.tag_name().name() != "style"
            || style_node.tag_name().namespace() != Some(WML_NS)
        {
            continue;
        }
        if style_node.attribute((WML_NS, "type")) != Some("paragraph") {
            continue;
        }
        let Some(style_id) = style_node.attribute((WML_NS, "styleId")) else {
            continue;
        };
        let Some(name) = wml_attr(style_node, "name") else {
            continue;
        };
        if style_node.attribute((WML_NS, "default")) == Some("1") {
            default_style = name.to_string();
        }
        style_names.insert(style_id.to_string(), name.to_string());
    }

    (style_names, default_style)
}
