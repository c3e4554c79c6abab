use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::docx::{DML_NS, DOC_REL_NS, Document, PIC_NS, pic};
use crate::error::Error;
use crate::model::ResourceRow;

/// Find the embedded picture inside a run's drawing markup, if any.
pub fn find_picture<'a>(run: roxmltree::Node<'a, 'a>) -> Option<roxmltree::Node<'a, 'a>> {
    run.descendants()
        .find(|n| n.tag_name().name() == "pic" && n.tag_name().namespace() == Some(PIC_NS))
}

/// Resolve an embedded picture to a resource row at the given index: read
/// the picture's display name and relationship id, look up the binary part,
/// and base64-encode it. The caller owns the counter and the row sequence.
pub fn extract_image(
    picture: roxmltree::Node,
    document: &Document,
    index: usize,
) -> Result<ResourceRow, Error> {
    let name = pic(picture, "nvPicPr")
        .and_then(|n| pic(n, "cNvPr"))
        .and_then(|n| n.attribute("name"))
        .ok_or_else(|| {
            Error::MalformedResourceReference("picture has no pic:cNvPr name".into())
        })?;

    let r_id = pic(picture, "blipFill")
        .and_then(|n| {
            n.children().find(|c| {
                c.tag_name().name() == "blip" && c.tag_name().namespace() == Some(DML_NS)
            })
        })
        .and_then(|blip| blip.attribute((DOC_REL_NS, "embed")))
        .ok_or_else(|| {
            Error::MalformedResourceReference("picture has no a:blip r:embed id".into())
        })?;

    let payload = document.part(r_id)?;

    Ok(ResourceRow::image(
        index,
        r_id.to_string(),
        name.to_string(),
        STANDARD.encode(payload),
    ))
}
