use crate::docx::{WML_NS, twips_attr, wml, wml_attr};
use crate::model::{Alignment, RunStyle, StyleRecord};

/// Collect the paragraph's formatting and the style of each run, in run
/// order. Anything the paragraph does not set explicitly stays `None`.
pub fn extract_style(paragraph: roxmltree::Node) -> StyleRecord {
    let ppr = wml(paragraph, "pPr");
    let spacing = ppr.and_then(|n| wml(n, "spacing"));

    StyleRecord {
        alignment: ppr.and_then(|n| wml_attr(n, "jc")).map(parse_alignment),
        spacing_before: spacing.and_then(|n| twips_attr(n, "before")),
        spacing_after: spacing.and_then(|n| twips_attr(n, "after")),
        runs: runs(paragraph).map(run_style).collect(),
    }
}

/// The paragraph's style id from `w:pStyle`, if declared.
pub fn style_id<'a>(paragraph: roxmltree::Node<'a, 'a>) -> Option<&'a str> {
    wml(paragraph, "pPr").and_then(|ppr| wml_attr(ppr, "pStyle"))
}

/// Plain text of the paragraph with carriage returns and line feeds
/// stripped. No trimming or case folding.
pub fn paragraph_text(paragraph: roxmltree::Node) -> String {
    let mut text = String::new();
    for run in runs(paragraph) {
        for child in run.children() {
            if child.tag_name().namespace() != Some(WML_NS) {
                continue;
            }
            match child.tag_name().name() {
                "t" => text.push_str(child.text().unwrap_or("")),
                "tab" => text.push('\t'),
                _ => {}
            }
        }
    }
    text.retain(|c| c != '\n' && c != '\r');
    text
}

pub(crate) fn runs<'a>(
    paragraph: roxmltree::Node<'a, 'a>,
) -> impl Iterator<Item = roxmltree::Node<'a, 'a>> {
    paragraph
        .children()
        .filter(|n| n.tag_name().name() == "r" && n.tag_name().namespace() == Some(WML_NS))
}

fn run_style(run: roxmltree::Node) -> RunStyle {
    let rpr = wml(run, "rPr");

    RunStyle {
        font_name: rpr
            .and_then(|n| wml(n, "rFonts"))
            .and_then(|n| n.attribute((WML_NS, "ascii")))
            .map(str::to_string),
        font_size: rpr
            .and_then(|n| wml_attr(n, "sz"))
            .and_then(|v| v.parse::<f32>().ok())
            .map(|half_points| half_points / 2.0),
        bold: rpr.and_then(|n| wml(n, "b")).map(toggle_value),
        italic: rpr.and_then(|n| wml(n, "i")).map(toggle_value),
        underline: rpr
            .and_then(|n| wml(n, "u"))
            .map(|n| n.attribute((WML_NS, "val")).is_none_or(|v| v != "none")),
        color: rpr
            .and_then(|n| wml_attr(n, "color"))
            .filter(|v| *v != "auto")
            .map(str::to_string),
        highlight: rpr
            .and_then(|n| wml_attr(n, "highlight"))
            .filter(|v| *v != "none")
            .map(str::to_string),
    }
}

// Toggle properties are on when present unless explicitly negated.
fn toggle_value(node: roxmltree::Node) -> bool {
    !matches!(node.attribute((WML_NS, "val")), Some("false") | Some("0"))
}

fn parse_alignment(val: &str) -> Alignment {
    match val {
        "center" => Alignment::Center,
        "right" | "end" => Alignment::Right,
        "both" | "justify" => Alignment::Justify,
        _ => Alignment::Left,
    }
}
