//! Reconstruction of `<table>` markup into a dense rectangular grid.
//!
//! Rows are the `<tr>` elements of the table (not those of nested tables),
//! columns are counted from the widest row, and `rowspan`/`colspan` cells
//! are copied into every slot they cover. A cell whose column is already
//! claimed by a span from a higher row moves right to the next free slot.

use scraper::ElementRef;

use super::naming::{resolve_name, NameGenerator};
use super::text::inner_text_excluding;
use super::ScanMode;
use crate::infer::{HeaderClassifier, InferenceContext};
use crate::model::{Cell, Row, Table};

/// Minimum number of rows: one header candidate plus one data row
const MIN_ROWS: usize = 2;

/// Subtrees whose text does not belong to the enclosing cell
const EXCLUDED_CELL_CONTENT: [&str; 5] = ["table", "ul", "ol", "sup", "sub"];

/// Builds [`Table`] objects from `<table>` elements.
pub struct TableGridBuilder<'c> {
    mode: ScanMode<'c>,
    include_layout_tables: bool,
}

impl TableGridBuilder<'static> {
    /// Create a builder for runtime extraction (no header inference).
    pub fn new(include_layout_tables: bool) -> Self {
        Self {
            mode: ScanMode::Runtime,
            include_layout_tables,
        }
    }
}

impl<'c> TableGridBuilder<'c> {
    /// Create a builder that attaches inferred header information to
    /// every table it builds.
    pub fn with_inference(include_layout_tables: bool, context: &'c InferenceContext) -> Self {
        Self {
            mode: ScanMode::DesignTime(context),
            include_layout_tables,
        }
    }

    pub(crate) fn with_mode(include_layout_tables: bool, mode: ScanMode<'c>) -> Self {
        Self {
            mode,
            include_layout_tables,
        }
    }

    /// Build a named table from `element`.
    ///
    /// `index` is the table's zero-based position among scanned tables and
    /// only feeds the default name. Returns `None` when the element does not
    /// qualify as a data table.
    pub fn build<'a>(
        &self,
        element: ElementRef<'a>,
        ancestors: &[ElementRef<'a>],
        index: usize,
        names: &mut NameGenerator,
    ) -> Option<Table<'a>> {
        let rows = self.build_grid(element)?;

        let schema = match self.mode {
            ScanMode::Runtime => None,
            ScanMode::DesignTime(context) => Some(HeaderClassifier::new(context).classify(&rows)),
        };

        let default_name = format!("Table{}", index + 1);
        let name = names.unique(&resolve_name(element, ancestors, &default_name));
        log::debug!(
            "TableGridBuilder: '{}' is {}x{}",
            name,
            rows.len(),
            rows.first().map(Row::len).unwrap_or(0)
        );

        Some(Table {
            name,
            rows,
            schema,
            source: element,
        })
    }

    /// Build the cell grid of `element` without naming it.
    pub fn build_grid<'a>(&self, element: ElementRef<'a>) -> Option<Vec<Row<'a>>> {
        let mut rows = Vec::new();
        collect_rows(element, &mut rows);
        if rows.len() < MIN_ROWS {
            log::debug!("TableGridBuilder: skipping table with {} rows", rows.len());
            return None;
        }

        let cells_by_row: Vec<Vec<ElementRef<'a>>> = rows.iter().map(|&tr| row_cells(tr)).collect();
        let column_count = cells_by_row.iter().map(Vec::len).max().unwrap_or(0);
        if !self.include_layout_tables && column_count < 1 {
            log::debug!("TableGridBuilder: skipping table without cells");
            return None;
        }

        let mut grid: Vec<Row<'a>> = rows
            .iter()
            .map(|&tr| Row::empty(column_count, tr))
            .collect();
        let row_count = grid.len();

        for (r, cells) in cells_by_row.iter().enumerate() {
            for (c, &cell) in cells.iter().enumerate() {
                // The first free slot at or after the source position is the
                // cell's anchor; slots to its left may hold spans from above.
                let Some(anchor) = (c..column_count).find(|&j| grid[r].cells[j].is_empty()) else {
                    continue;
                };

                let content = cell_content(cell);
                let last_row = r.saturating_add(span(cell, "rowspan")).min(row_count);
                let last_column = anchor
                    .saturating_add(span(cell, "colspan"))
                    .min(column_count);

                for row in &mut grid[r..last_row] {
                    for slot in &mut row.cells[anchor..last_column] {
                        *slot = content.clone();
                    }
                }
            }
        }

        Some(grid)
    }
}

/// `<tr>` elements below `element`, without entering nested tables.
fn collect_rows<'a>(element: ElementRef<'a>, rows: &mut Vec<ElementRef<'a>>) {
    for child in element.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "table" => {}
            "tr" => rows.push(child),
            _ => collect_rows(child, rows),
        }
    }
}

/// Direct `<td>`/`<th>` children of a row.
fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| matches!(e.value().name(), "td" | "th"))
        .collect()
}

/// Span attribute value; missing, malformed, and non-positive values are 1.
fn span(cell: ElementRef<'_>, attribute: &str) -> usize {
    cell.value()
        .attr(attribute)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(1)
}

fn cell_content(cell: ElementRef<'_>) -> Cell {
    let text = inner_text_excluding(cell, &EXCLUDED_CELL_CONTENT)
        .replace(['\r', '\n'], "")
        .trim()
        .to_string();

    if cell.value().name() == "th" {
        Cell::Header(text)
    } else {
        Cell::Data(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn grid_texts(html: &str, include_layout_tables: bool) -> Option<Vec<Vec<String>>> {
        let html = Html::parse_document(html);
        let selector = Selector::parse("table").unwrap();
        let table = html.select(&selector).next().unwrap();
        TableGridBuilder::new(include_layout_tables)
            .build_grid(table)
            .map(|rows| rows.iter().map(Row::texts).collect())
    }

    fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_simple_grid() {
        let grid = grid_texts(
            "<table><tr><th>X</th><th>Y</th></tr><tr><td>1</td><td>2</td></tr></table>",
            false,
        );
        assert_eq!(grid, Some(strings(&[&["X", "Y"], &["1", "2"]])));
    }

    #[test]
    fn test_single_row_is_skipped() {
        assert_eq!(grid_texts("<table><tr><td>1</td><td>2</td></tr></table>", false), None);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let html = Html::parse_document(
            "<table><tr><td>a</td><td>b</td><td>c</td></tr><tr><td>d</td></tr></table>",
        );
        let selector = Selector::parse("table").unwrap();
        let table = html.select(&selector).next().unwrap();
        let rows = TableGridBuilder::new(false).build_grid(table).unwrap();

        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[1].cells[0], Cell::Data("d".into()));
        assert_eq!(rows[1].cells[1], Cell::Empty);
        assert_eq!(rows[1].cells[2], Cell::Empty);
    }

    #[test]
    fn test_rowspan_and_colspan_fill_block() {
        let grid = grid_texts(
            "<table>\
             <tr><td rowspan=\"2\" colspan=\"2\">A</td><td>B</td><td>C</td></tr>\
             <tr><td>D</td><td>E</td></tr>\
             <tr><td>F</td><td>G</td><td>H</td></tr>\
             </table>",
            false,
        );
        // Three source cells in the widest row, so three columns; "C" is
        // pushed off the grid by the colspan.
        assert_eq!(
            grid,
            Some(strings(&[&["A", "A", "B"], &["A", "A", "D"], &["F", "G", "H"]]))
        );
    }

    #[test]
    fn test_cell_shifts_past_vertical_span() {
        let grid = grid_texts(
            "<table>\
             <tr><td rowspan=\"2\">A</td><td>B</td></tr>\
             <tr><td>C</td></tr>\
             </table>",
            false,
        );
        assert_eq!(grid, Some(strings(&[&["A", "B"], &["A", "C"]])));
    }

    #[test]
    fn test_spans_are_clipped_at_grid_edges() {
        let grid = grid_texts(
            "<table>\
             <tr><td rowspan=\"9\" colspan=\"9\">A</td><td>B</td></tr>\
             <tr><td>C</td><td>D</td></tr>\
             </table>",
            false,
        );
        assert_eq!(grid, Some(strings(&[&["A", "A"], &["A", "A"]])));
    }

    #[test]
    fn test_invalid_spans_clamp_to_one() {
        let grid = grid_texts(
            "<table>\
             <tr><td rowspan=\"0\" colspan=\"-3\">A</td><td colspan=\"x\">B</td></tr>\
             <tr><td>C</td><td>D</td></tr>\
             </table>",
            false,
        );
        assert_eq!(grid, Some(strings(&[&["A", "B"], &["C", "D"]])));
    }

    #[test]
    fn test_nested_table_rows_are_not_collected() {
        let grid = grid_texts(
            "<table>\
             <tr><td>Outer<table><tr><td>in1</td></tr><tr><td>in2</td></tr></table></td></tr>\
             <tr><td>Second</td></tr>\
             </table>",
            false,
        );
        assert_eq!(grid, Some(strings(&[&["Outer"], &["Second"]])));
    }

    #[test]
    fn test_cell_text_cleanup() {
        let grid = grid_texts(
            "<table>\
             <tr><th> Population<sup>[1]</sup>\n </th><th>Notes<ul><li>x</li></ul></th></tr>\
             <tr><td>1,000\r\n</td><td>n<sub>2</sub></td></tr>\
             </table>",
            false,
        );
        assert_eq!(grid, Some(strings(&[&["Population", "Notes"], &["1,000", "n"]])));
    }

    #[test]
    fn test_rows_without_cells() {
        let html = "<table><tr></tr><tr></tr></table>";
        assert_eq!(grid_texts(html, false), None);
        assert_eq!(grid_texts(html, true), Some(vec![vec![], vec![]]));
    }

    #[test]
    fn test_header_cells_are_classified() {
        let html = Html::parse_document(
            "<table><tr><th>X</th><td>Y</td></tr><tr><td>1</td><td>2</td></tr></table>",
        );
        let selector = Selector::parse("table").unwrap();
        let table = html.select(&selector).next().unwrap();
        let rows = TableGridBuilder::new(false).build_grid(table).unwrap();

        assert!(rows[0].cells[0].is_header());
        assert!(!rows[0].cells[1].is_header());
        assert!(!rows[0].is_header_row());
    }

    #[test]
    fn test_build_names_table() {
        let html = Html::parse_document(
            "<table><tr><th>X</th></tr><tr><td>1</td></tr></table>\
             <table id=\"Revenue\"><tr><th>X</th></tr><tr><td>1</td></tr></table>",
        );
        let selector = Selector::parse("table").unwrap();
        let builder = TableGridBuilder::new(false);
        let mut names = NameGenerator::new();

        let built: Vec<_> = html
            .select(&selector)
            .enumerate()
            .filter_map(|(i, table)| {
                let ancestors: Vec<_> = table.ancestors().filter_map(ElementRef::wrap).collect();
                builder.build(table, &ancestors, i, &mut names)
            })
            .collect();

        assert_eq!(built[0].name, "Table1");
        assert_eq!(built[1].name, "Revenue");
        assert!(built[0].schema.is_none());
    }
}
