use crate::docx::WML_NS;
use crate::error::Error;
use crate::model::TableValue;

/// Serialize a table's cell grid row by row. Cells are read as flattened
/// plain text only; their internal structure is not walked for styling or
/// resources. Every row must have the same cell count.
///
/// A single-column table collapses to the bare text of its first cell
/// instead of a grid. Documented quirk carried over from the reference
/// output format.
pub fn extract_table(table: roxmltree::Node) -> Result<TableValue, Error> {
    let mut grid: Vec<Vec<String>> = Vec::new();

    for row in children(table, "tr") {
        let cells: Vec<String> = children(row, "tc").map(cell_text).collect();
        if let Some(first) = grid.first()
            && first.len() != cells.len()
        {
            return Err(Error::MalformedTable(format!(
                "row {} has {} cells, expected {}",
                grid.len() + 1,
                cells.len(),
                first.len()
            )));
        }
        grid.push(cells);
    }

    if grid.first().is_some_and(|row| row.len() == 1) {
        let mut first = grid.swap_remove(0);
        return Ok(TableValue::Scalar(first.swap_remove(0)));
    }
    Ok(TableValue::Grid(grid))
}

fn children<'a>(
    node: roxmltree::Node<'a, 'a>,
    name: &'a str,
) -> impl Iterator<Item = roxmltree::Node<'a, 'a>> {
    node.children()
        .filter(move |n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

fn cell_text(cell: roxmltree::Node) -> String {
    let mut text: String = cell
        .descendants()
        .filter(|n| n.tag_name().name() == "t" && n.tag_name().namespace() == Some(WML_NS))
        .filter_map(|n| n.text())
        .collect();
    text.retain(|c| c != '\n' && c != '\r');
    text
}
