//! Markdown rendering for extracted objects.

use crate::model::{DefinitionListObject, ExtractedObject, ListObject, Table};

/// Bullet used for list values
const LIST_MARKER: char = '-';

/// Convert objects to one Markdown document, one `##` section per object.
pub fn to_markdown(objects: &[ExtractedObject<'_>]) -> String {
    let mut output = String::new();

    for object in objects {
        output.push_str("## ");
        output.push_str(&escape_markdown(object.name()));
        output.push_str("\n\n");
        output.push_str(&render_object(object));
    }

    output
}

/// Render the body of a single object, without a heading.
pub fn render_object(object: &ExtractedObject<'_>) -> String {
    let mut output = String::new();
    match object {
        ExtractedObject::Table(table) => render_table(&mut output, table),
        ExtractedObject::List(list) => render_list(&mut output, list),
        ExtractedObject::DefinitionList(dl) => render_definition_list(&mut output, dl),
    }
    output
}

fn render_table(output: &mut String, table: &Table<'_>) {
    if table.column_count() == 0 {
        return;
    }

    for (i, row) in table.rows.iter().enumerate() {
        output.push('|');
        for cell in &row.cells {
            output.push_str(&format!(" {} |", escape_cell(cell.text())));
        }
        output.push('\n');

        // Separator after the first row
        if i == 0 {
            output.push('|');
            for _ in &row.cells {
                output.push_str(" --- |");
            }
            output.push('\n');
        }
    }

    output.push('\n');
}

fn render_list(output: &mut String, list: &ListObject<'_>) {
    render_values(output, &list.values);
    output.push('\n');
}

fn render_definition_list(output: &mut String, dl: &DefinitionListObject<'_>) {
    for group in &dl.definitions {
        output.push_str(&format!("**{}**\n\n", escape_markdown(&group.name)));
        if !group.values.is_empty() {
            render_values(output, &group.values);
            output.push('\n');
        }
    }
}

fn render_values(output: &mut String, values: &[String]) {
    for value in values {
        output.push(LIST_MARKER);
        output.push(' ');
        output.push_str(&escape_markdown(value));
        output.push('\n');
    }
}

/// Escape table cell content; cells never span lines.
fn escape_cell(text: &str) -> String {
    escape_markdown(&text.replace('\n', " "))
}

/// Escape Markdown special characters.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{scan, ScanOptions};
    use scraper::Html;

    fn render(html: &str) -> String {
        let html = Html::parse_document(html);
        to_markdown(&scan(&html, &ScanOptions::default()))
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("a|b"), "a\\|b");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("1. plain"), "1. plain");
    }

    #[test]
    fn test_render_table() {
        let result = render(
            "<table id=\"Sizes\"><tr><th>Size</th><th>Price</th></tr>\
             <tr><td>S</td><td>1|2</td></tr></table>",
        );

        assert_eq!(
            result,
            "## Sizes\n\n| Size | Price |\n| --- | --- |\n| S | 1\\|2 |\n\n"
        );
    }

    #[test]
    fn test_render_spanned_table_keeps_blank_cells() {
        let result = render(
            "<table><tr><td colspan=\"2\">Wide</td></tr><tr><td>a</td><td>b</td></tr>\
             <tr><td>c</td></tr></table>",
        );
        assert!(result.contains("| Wide | Wide |"));
        assert!(result.contains("| c |  |"));
    }

    #[test]
    fn test_render_list() {
        let result = render("<ul id=\"Steps\"><li>Boil</li><li>Pour</li></ul>");
        assert_eq!(result, "## Steps\n\n- Boil\n- Pour\n\n");
    }

    #[test]
    fn test_render_definition_list() {
        let html = Html::parse_document(
            "<dl><dt>Tea</dt><dd>A drink</dd><dt>Cake</dt><dd>A food</dd><dd>Sweet</dd></dl>",
        );
        let objects = scan(&html, &ScanOptions::default());
        let result = render_object(&objects[0]);

        assert_eq!(
            result,
            "**Tea**\n\n- A drink\n\n**Cake**\n\n- A food\n- Sweet\n\n"
        );
    }
}
