//! Table types.

use scraper::ElementRef;
use serde::{Serialize, Serializer};

use super::Cell;
use crate::infer::{InferredProperty, Unit};

/// A table reconstructed into a dense rectangular grid.
#[derive(Debug, Clone, Serialize)]
pub struct Table<'a> {
    /// Resolved, document-unique name
    pub name: String,

    /// Grid rows; every row has the same number of cells
    pub rows: Vec<Row<'a>>,

    /// Header and type information, present only when the table was
    /// extracted with inference enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TableSchema>,

    /// The `<table>` element this grid was built from
    #[serde(skip)]
    pub source: ElementRef<'a>,
}

impl<'a> Table<'a> {
    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Get a cell by grid position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    /// Check whether the first row consists of header cells only.
    pub fn has_header_row(&self) -> bool {
        self.rows.first().is_some_and(Row::is_header_row)
    }

    /// Grid as rows of cell texts.
    pub fn texts(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(Row::texts).collect()
    }

    /// Whether the first row holds headers, as decided by inference.
    pub fn has_headers(&self) -> Option<bool> {
        self.schema.as_ref().map(|s| s.has_headers)
    }

    /// Column names with optional units, as decided by inference.
    pub fn header_names_and_units(&self) -> Option<&[(String, Option<Unit>)]> {
        self.schema
            .as_ref()
            .map(|s| s.header_names_and_units.as_slice())
    }

    /// Per-column inferred types, when the inference engine produced them.
    pub fn inferred_properties(&self) -> Option<&[InferredProperty]> {
        self.schema
            .as_ref()
            .and_then(|s| s.inferred_properties.as_deref())
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.texts().join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A grid row together with the `<tr>` element it came from.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    /// Cells in the row
    pub cells: Vec<Cell>,

    /// Source `<tr>` element
    pub source: ElementRef<'a>,
}

impl<'a> Row<'a> {
    /// Create a row of `width` placeholder cells.
    pub fn empty(width: usize, source: ElementRef<'a>) -> Self {
        Self {
            cells: vec![Cell::Empty; width],
            source,
        }
    }

    /// Check if every cell is a header.
    pub fn is_header_row(&self) -> bool {
        self.cells.iter().all(Cell::is_header)
    }

    /// Cell texts in column order.
    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.text().to_string()).collect()
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cells.serialize(serializer)
    }
}

/// Design-time header information for a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSchema {
    /// Whether row 0 is a header row
    pub has_headers: bool,

    /// One entry per column
    pub header_names_and_units: Vec<(String, Option<Unit>)>,

    /// Per-column types, absent when row 0 was already a `<th>` row
    pub inferred_properties: Option<Vec<InferredProperty>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn make_table<'a>(source: ElementRef<'a>, rows: &[&[Cell]]) -> Table<'a> {
        Table {
            name: "Table1".to_string(),
            rows: rows
                .iter()
                .map(|cells| Row {
                    cells: cells.to_vec(),
                    source,
                })
                .collect(),
            schema: None,
            source,
        }
    }

    #[test]
    fn test_table_dimensions() {
        let html = Html::parse_fragment("<table></table>");
        let table = make_table(
            html.root_element(),
            &[
                &[Cell::Header("X".into()), Cell::Header("Y".into())],
                &[Cell::Data("1".into()), Cell::Data("2".into())],
            ],
        );

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert!(table.has_header_row());
        assert_eq!(table.cell(1, 1), Some(&Cell::Data("2".into())));
        assert_eq!(table.cell(2, 0), None);
        assert_eq!(table.plain_text(), "X\tY\n1\t2");
    }

    #[test]
    fn test_runtime_table_has_no_schema() {
        let html = Html::parse_fragment("<table></table>");
        let table = make_table(html.root_element(), &[&[Cell::Data("a".into())]]);

        assert_eq!(table.has_headers(), None);
        assert!(table.header_names_and_units().is_none());
        assert!(table.inferred_properties().is_none());
        assert!(!table.has_header_row());
    }

    #[test]
    fn test_row_serializes_as_cells() {
        let html = Html::parse_fragment("<table></table>");
        let row = Row {
            cells: vec![Cell::Header("A".into()), Cell::Empty],
            source: html.root_element(),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[{"type":"header","text":"A"},{"type":"empty"}]"#);
    }
}
