use crate::docx::WML_NS;
use crate::error::Error;

/// A body child classified by its structural kind.
#[derive(Clone, Copy, Debug)]
pub enum Block<'a> {
    Text(roxmltree::Node<'a, 'a>),
    Table(roxmltree::Node<'a, 'a>),
}

/// What the walker may iterate: the document body, or one table cell.
/// Both expose a mixed sequence of paragraph and table children.
#[derive(Clone, Copy, Debug)]
pub enum Container<'a> {
    Body(roxmltree::Node<'a, 'a>),
    Cell(roxmltree::Node<'a, 'a>),
}

/// Yield each paragraph and table child of the container, in document
/// order. Single forward pass; children that are neither paragraphs nor
/// tables (section properties, bookmarks) are not blocks and are skipped.
pub fn walk<'a>(container: Container<'a>) -> Result<impl Iterator<Item = Block<'a>>, Error> {
    let element = match container {
        Container::Body(node) if is_wml(node, "body") => node,
        Container::Cell(node) if is_wml(node, "tc") => node,
        Container::Body(node) | Container::Cell(node) => {
            return Err(Error::InvalidContainer(format!(
                "<{}>",
                node.tag_name().name()
            )));
        }
    };

    Ok(element.children().filter_map(|child| {
        if child.tag_name().namespace() != Some(WML_NS) {
            return None;
        }
        match child.tag_name().name() {
            "p" => Some(Block::Text(child)),
            "tbl" => Some(Block::Table(child)),
            _ => None,
        }
    }))
}

fn is_wml(node: roxmltree::Node, name: &str) -> bool {
    node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}
