//! Text accumulation over element subtrees.

use scraper::{ElementRef, Node};

/// Concatenated text of every text node below `element`.
pub fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Concatenated text below `element`, skipping the subtrees of elements
/// whose tag name is listed in `excluded`.
pub fn inner_text_excluding(element: ElementRef<'_>, excluded: &[&str]) -> String {
    let mut text = String::new();
    push_text_excluding(element, excluded, &mut text);
    text
}

fn push_text_excluding(element: ElementRef<'_>, excluded: &[&str], out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(e) if !excluded.contains(&e.name()) => {
                if let Some(child) = ElementRef::wrap(child) {
                    push_text_excluding(child, excluded, out);
                }
            }
            _ => {}
        }
    }
}

/// Every text node below `element` in document order, each trimmed.
///
/// Nodes that trim to nothing are kept as empty strings.
pub(crate) fn trimmed_text_nodes(element: ElementRef<'_>, values: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => values.push(text.text.trim().to_string()),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    trimmed_text_nodes(child, values);
                }
            }
            _ => {}
        }
    }
}
